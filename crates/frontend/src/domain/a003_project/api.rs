use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a003_project::{FeaturedProject, Project};
use contracts::domain::common::Slug;
use web_sys::AbortSignal;

use crate::domain::a002_subcategory::api::page_url;
use crate::shared::api_utils::{get_json, segment, ApiError};

pub fn project_url(category: CategoryKind, subcategory: &Slug, project: &Slug) -> String {
    format!(
        "{}/projects/{}",
        page_url(category, subcategory),
        segment(project.as_str())
    )
}

pub async fn fetch_project(
    category: CategoryKind,
    subcategory: Slug,
    project: Slug,
    signal: Option<AbortSignal>,
) -> Result<Project, ApiError> {
    get_json(&project_url(category, &subcategory, &project), signal.as_ref()).await
}

/// Featured projects across both categories for the home showcase
pub async fn fetch_featured(
    limit: usize,
    signal: Option<AbortSignal>,
) -> Result<Vec<FeaturedProject>, ApiError> {
    get_json(
        &format!("/api/projects/featured?limit={}", limit),
        signal.as_ref(),
    )
    .await
}
