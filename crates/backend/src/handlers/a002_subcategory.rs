use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_subcategory::{Subcategory, SubcategoryPage};

use super::{content_error_status, parse_category, parse_slug, store};
use crate::domain::a002_subcategory;

/// GET /api/categories/:category/subcategories
pub async fn list_for_category(
    Path(category): Path<String>,
) -> Result<Json<Vec<Subcategory>>, StatusCode> {
    let category = parse_category(&category)?;
    match a002_subcategory::service::list_for_category(store()?, category).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(content_error_status("Failed to list subcategories", &e)),
    }
}

/// GET /api/categories/:category/subcategories/:subcategory
pub async fn get_page(
    Path((category, subcategory)): Path<(String, String)>,
) -> Result<Json<SubcategoryPage>, StatusCode> {
    let category = parse_category(&category)?;
    let slug = parse_slug(&subcategory)?;
    match a002_subcategory::service::get_page(store()?, category, &slug).await {
        Ok(Some(page)) => Ok(Json(page)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(content_error_status(
            &format!("Failed to load subcategory {}", slug),
            &e,
        )),
    }
}
