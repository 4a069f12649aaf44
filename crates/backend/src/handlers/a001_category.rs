use axum::{http::StatusCode, Json};
use contracts::domain::a001_category::Category;

use super::{content_error_status, store};
use crate::domain::a001_category;

/// GET /api/categories
pub async fn list_all() -> Result<Json<Vec<Category>>, StatusCode> {
    match a001_category::service::list_all(store()?).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(content_error_status("Failed to list categories", &e)),
    }
}
