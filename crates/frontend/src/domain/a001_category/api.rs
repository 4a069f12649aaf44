use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::Subcategory;
use web_sys::AbortSignal;

use crate::shared::api_utils::{get_json, ApiError};

pub fn subcategories_url(category: CategoryKind) -> String {
    format!("/api/categories/{}/subcategories", category.route_segment())
}

pub async fn fetch_subcategories(
    category: CategoryKind,
    signal: Option<AbortSignal>,
) -> Result<Vec<Subcategory>, ApiError> {
    get_json(&subcategories_url(category), signal.as_ref()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategories_url() {
        assert_eq!(
            subcategories_url(CategoryKind::Indoor),
            "/api/categories/indoor-design/subcategories"
        );
    }
}
