use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_submit_contact::{ContactRequest, ContactResponse};

use crate::shared::api_utils::{post_json, ApiError};

pub const SUBMIT_URL: &str = "/api/contact";

/// API клиент для UseCase u501: отказ сервера приходит как `UseCaseError`
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactResponse, UseCaseError> {
    let response = post_json(SUBMIT_URL, request)
        .await
        .map_err(|e| transport_error(&e))?;

    match response.status() {
        200..=299 => response
            .json::<ContactResponse>()
            .await
            .map_err(|e| transport_error(&ApiError::from(e))),
        400 | 422 => Err(response
            .json::<UseCaseError>()
            .await
            .unwrap_or_else(|e| transport_error(&ApiError::from(e)))),
        status => Err(transport_error(&ApiError::Http(status))),
    }
}

fn transport_error(error: &ApiError) -> UseCaseError {
    log::error!("Contact submission failed: {}", error);
    UseCaseError::new(
        "SUBMIT_FAILED",
        "We could not send your message. Please try again or call us directly.",
    )
}
