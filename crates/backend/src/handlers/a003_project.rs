use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_project::{FeaturedProject, Project, ProjectCard};
use serde::Deserialize;

use super::{content_error_status, parse_category, parse_slug, store};
use crate::domain::a003_project;

/// GET /api/categories/:category/subcategories/:subcategory/projects
pub async fn list_for_subcategory(
    Path((category, subcategory)): Path<(String, String)>,
) -> Result<Json<Vec<ProjectCard>>, StatusCode> {
    let category = parse_category(&category)?;
    let subcategory = parse_slug(&subcategory)?;
    match a003_project::service::list_for_subcategory(store()?, category, &subcategory).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(content_error_status("Failed to list projects", &e)),
    }
}

/// GET /api/categories/:category/subcategories/:subcategory/projects/:project
pub async fn get_by_slug(
    Path((category, subcategory, project)): Path<(String, String, String)>,
) -> Result<Json<Project>, StatusCode> {
    let category = parse_category(&category)?;
    let subcategory = parse_slug(&subcategory)?;
    let project = parse_slug(&project)?;
    match a003_project::service::get_by_slug(store()?, category, &subcategory, &project).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(content_error_status(
            &format!("Failed to load project {}", project),
            &e,
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<usize>,
}

/// GET /api/projects/featured?limit=n
pub async fn list_featured(
    Query(query): Query<FeaturedQuery>,
) -> Result<Json<Vec<FeaturedProject>>, StatusCode> {
    match a003_project::service::list_featured(store()?, query.limit).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(content_error_status("Failed to list featured projects", &e)),
    }
}
