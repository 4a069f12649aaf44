//! Helpers for talking to the backend.
//!
//! The backend serves the app itself, so every URL is same-origin (`/api/...`).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::AbortSignal;

/// Why an API call did not produce a value
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 404 from the backend: the record does not exist
    NotFound,
    /// Any other non-success status
    Http(u16),
    Network(String),
    Decode(String),
    /// The request was aborted (unmount, navigation or timeout)
    Aborted,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Http(status) => write!(f, "Server responded with HTTP {}", status),
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Decode(e) => write!(f, "Unexpected response: {}", e),
            ApiError::Aborted => write!(f, "Request timed out or was cancelled"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::GlooError(e) => ApiError::Network(e),
        }
    }
}

impl ApiError {
    /// Map a status code to an error, `None` for 2xx
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(ApiError::NotFound),
            other => Some(ApiError::Http(other)),
        }
    }
}

/// `NotFound` becomes `Ok(None)`, everything else stays an error
pub fn found<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if let Some(error) = ApiError::from_status(response.status()) {
        return Err(error);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET returning JSON
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await?;
    read_json(response).await
}

/// POST with a JSON body; the raw response is returned so callers can read
/// error payloads (e.g. 422 field errors).
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .json(body)?
        .send()
        .await?;
    Ok(response)
}

/// Percent-encode a path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(404), Some(ApiError::NotFound));
        assert_eq!(ApiError::from_status(504), Some(ApiError::Http(504)));
    }

    #[test]
    fn test_found_splits_not_found_from_errors() {
        assert_eq!(found::<u8>(Ok(1)), Ok(Some(1)));
        assert_eq!(found::<u8>(Err(ApiError::NotFound)), Ok(None));
        assert_eq!(found::<u8>(Err(ApiError::Http(502))), Err(ApiError::Http(502)));
    }
}
