use chrono::Utc;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_submit_contact::{ContactRequest, ContactResponse, SubmitContact};
use uuid::Uuid;

/// Executor для UseCase приёма заявки с формы обратной связи.
///
/// Заявка проверяется и пишется в лог; доставки почтой нет.
#[derive(Debug, Clone, Default)]
pub struct ContactExecutor;

impl ContactExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, request: ContactRequest) -> UseCaseResult<ContactResponse> {
        let errors = request.validate();
        if !errors.is_empty() {
            tracing::info!(
                "{}: rejected submission, invalid fields: {}",
                SubmitContact::full_name(),
                errors
                    .iter()
                    .map(|e| e.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return Err(UseCaseError::validation(errors));
        }

        let request = request.normalized();
        let response = ContactResponse {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        };

        tracing::info!(
            id = %response.id,
            name = %request.name,
            email = %request.email,
            phone = request.phone.as_deref().unwrap_or("-"),
            message_chars = request.message.chars().count(),
            "{}: accepted submission",
            SubmitContact::full_name()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: " Jane Doe ".into(),
            email: "jane@example.com".into(),
            phone: Some("".into()),
            message: "We would like a pergola for our garden.".into(),
        }
    }

    #[test]
    fn test_valid_submission_is_accepted() {
        let before = Utc::now();
        let response = ContactExecutor::new().submit(request()).unwrap();
        assert!(response.received_at >= before);
        assert!(!response.id.is_nil());
    }

    #[test]
    fn test_invalid_submission_reports_fields() {
        let mut req = request();
        req.email = "not-an-email".into();
        req.message = "   ".into();

        let err = ContactExecutor::new().submit(req).unwrap_err();
        assert!(err.is_validation());
        assert!(err.field_message("email").is_some());
        assert!(err.field_message("message").is_some());
        assert!(err.field_message("name").is_none());
    }
}
