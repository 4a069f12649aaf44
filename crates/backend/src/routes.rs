use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов API
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CONTENT (read-only)
        // ========================================
        // A001 Category handlers
        .route("/api/categories", get(handlers::a001_category::list_all))
        // A002 Subcategory handlers
        .route(
            "/api/categories/:category/subcategories",
            get(handlers::a002_subcategory::list_for_category),
        )
        .route(
            "/api/categories/:category/subcategories/:subcategory",
            get(handlers::a002_subcategory::get_page),
        )
        // A003 Project handlers
        .route(
            "/api/categories/:category/subcategories/:subcategory/projects",
            get(handlers::a003_project::list_for_subcategory),
        )
        .route(
            "/api/categories/:category/subcategories/:subcategory/projects/:project",
            get(handlers::a003_project::get_by_slug),
        )
        .route(
            "/api/projects/featured",
            get(handlers::a003_project::list_featured),
        )
        // Images: redirect to the store's URL for the requested size
        .route("/api/images/:asset_ref", get(handlers::images::redirect))
        // ========================================
        // USECASES
        // ========================================
        // UseCase u501: Submit contact form
        .route(
            "/api/contact",
            post(handlers::usecases::u501_submit_contact),
        )
}
