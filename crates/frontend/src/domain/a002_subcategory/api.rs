use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::SubcategoryPage;
use contracts::domain::common::Slug;
use web_sys::AbortSignal;

use crate::domain::a001_category::api::subcategories_url;
use crate::shared::api_utils::{get_json, segment, ApiError};

pub fn page_url(category: CategoryKind, subcategory: &Slug) -> String {
    format!("{}/{}", subcategories_url(category), segment(subcategory.as_str()))
}

/// Subcategory with its projects, featured first
pub async fn fetch_page(
    category: CategoryKind,
    subcategory: Slug,
    signal: Option<AbortSignal>,
) -> Result<SubcategoryPage, ApiError> {
    get_json(&page_url(category, &subcategory), signal.as_ref()).await
}
