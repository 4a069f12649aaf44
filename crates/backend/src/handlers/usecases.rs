use axum::{http::StatusCode, Json};
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_submit_contact::{ContactRequest, ContactResponse};
use once_cell::sync::Lazy;

use crate::usecases;

// ============================================================================
// UseCase u501: Submit contact form
// ============================================================================

static CONTACT_EXECUTOR: Lazy<usecases::u501_submit_contact::ContactExecutor> =
    Lazy::new(usecases::u501_submit_contact::ContactExecutor::new);

/// POST /api/contact
pub async fn u501_submit_contact(
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<UseCaseError>)> {
    match CONTACT_EXECUTOR.submit(request) {
        Ok(response) => Ok(Json(response)),
        Err(e) if e.is_validation() => Err((StatusCode::UNPROCESSABLE_ENTITY, Json(e))),
        Err(e) => {
            tracing::error!("Failed to accept contact submission: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_payload_is_unprocessable() {
        let request = ContactRequest {
            name: String::new(),
            email: "jane@example.com".into(),
            phone: None,
            message: "Hello".into(),
        };
        let (status, Json(error)) = u501_submit_contact(Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.field_errors.len(), 1);
        assert_eq!(error.field_errors[0].field, "name");
    }

    #[tokio::test]
    async fn test_valid_payload_returns_receipt() {
        let request = ContactRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: Some("+1 (555) 010-2030".into()),
            message: "Hello".into(),
        };
        assert!(u501_submit_contact(Json(request)).await.is_ok());
    }
}
