use thiserror::Error;

/// Ошибки чтения из хранилища контента
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content store is not initialized")]
    NotInitialized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to content store timed out")]
    Timeout,

    #[error("Content store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode content store response: {0}")]
    Decode(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ContentError::Timeout
        } else if e.is_decode() {
            ContentError::Decode(e.to_string())
        } else {
            ContentError::Network(e.to_string())
        }
    }
}

impl From<sea_orm::DbErr> for ContentError {
    fn from(e: sea_orm::DbErr) -> Self {
        ContentError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Decode(e.to_string())
    }
}
