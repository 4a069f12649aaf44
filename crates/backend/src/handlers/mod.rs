pub mod a001_category;
pub mod a002_subcategory;
pub mod a003_project;
pub mod images;
pub mod usecases;

use axum::http::StatusCode;
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::common::Slug;

use crate::shared::content::{get_store, ContentError, ContentStore};

/// Код ответа для ошибки хранилища; причина остаётся в логе
pub(crate) fn content_error_status(context: &str, error: &ContentError) -> StatusCode {
    tracing::error!("{}: {}", context, error);
    match error {
        ContentError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ContentError::NotInitialized => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn store() -> Result<&'static dyn ContentStore, StatusCode> {
    get_store().map_err(|e| content_error_status("Content store unavailable", &e))
}

/// Сегмент категории из URL; неизвестный сегмент = 404
pub(crate) fn parse_category(segment: &str) -> Result<CategoryKind, StatusCode> {
    CategoryKind::from_route_segment(segment)
        .or_else(|| CategoryKind::from_title(segment))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Пустой сегмент или `..` не может совпасть ни с одной записью, поэтому 404
pub(crate) fn parse_slug(value: &str) -> Result<Slug, StatusCode> {
    Slug::parse(value).ok_or(StatusCode::NOT_FOUND)
}
