use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Redirect,
};
use contracts::domain::common::{Hotspot, ImageAsset};
use contracts::shared::image_slot::clamp_dimension;
use serde::Deserialize;

use super::store;
use crate::shared::content::ContentStore;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub w: Option<u32>,
    pub h: Option<u32>,
    /// Точка фокуса (0..1)
    pub fx: Option<f64>,
    pub fy: Option<f64>,
}

/// GET /api/images/:asset_ref?w=&h=&fx=&fy=
///
/// Перенаправляет (307) на URL изображения нужного размера в хранилище.
pub async fn redirect(
    Path(asset_ref): Path<String>,
    Query(query): Query<ImageQuery>,
) -> Result<Redirect, StatusCode> {
    let url = resolve_image_url(store()?, &asset_ref, &query)?;
    Ok(Redirect::temporary(&url))
}

/// Без размеров берётся исходный размер ассета
pub fn resolve_image_url(
    store: &dyn ContentStore,
    asset_ref: &str,
    query: &ImageQuery,
) -> Result<String, StatusCode> {
    let Some(asset) = ImageAsset::parse(asset_ref) else {
        tracing::warn!("Rejected image asset reference '{}'", asset_ref);
        return Err(StatusCode::BAD_REQUEST);
    };
    let width = clamp_dimension(query.w.unwrap_or(asset.width));
    let height = clamp_dimension(query.h.unwrap_or(asset.height));
    let focus = Hotspot::from_parts(query.fx, query.fy);
    Ok(store.image_url(&asset, width, height, focus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::memory::MemoryContentStore;

    fn query(w: Option<u32>, h: Option<u32>) -> ImageQuery {
        ImageQuery {
            w,
            h,
            fx: None,
            fy: None,
        }
    }

    #[test]
    fn test_resolve_uses_requested_size() {
        let store = MemoryContentStore::default();
        let url =
            resolve_image_url(&store, "image-abc123-2000x1333-jpg", &query(Some(800), Some(600)))
                .unwrap();
        assert_eq!(url, "memory://abc123-2000x1333.jpg?w=800&h=600");
    }

    #[test]
    fn test_resolve_clamps_and_defaults() {
        let store = MemoryContentStore::default();
        let url =
            resolve_image_url(&store, "image-abc123-2000x1333-jpg", &query(Some(0), None))
                .unwrap();
        assert_eq!(url, "memory://abc123-2000x1333.jpg?w=1&h=1333");

        let url =
            resolve_image_url(&store, "image-abc123-2000x1333-jpg", &query(Some(90000), Some(400)))
                .unwrap();
        assert!(url.contains("w=4000&h=400"));
    }

    #[test]
    fn test_resolve_passes_focal_point() {
        let store = MemoryContentStore::default();
        let mut q = query(Some(800), Some(600));
        q.fx = Some(0.25);
        q.fy = Some(2.0);
        let url = resolve_image_url(&store, "image-abc123-2000x1333-jpg", &q).unwrap();
        assert_eq!(url, "memory://abc123-2000x1333.jpg?w=800&h=600&fx=0.25&fy=1");

        q.fy = None;
        let url = resolve_image_url(&store, "image-abc123-2000x1333-jpg", &q).unwrap();
        assert_eq!(url, "memory://abc123-2000x1333.jpg?w=800&h=600");
    }

    #[test]
    fn test_resolve_rejects_bad_ref() {
        let store = MemoryContentStore::default();
        assert_eq!(
            resolve_image_url(&store, "../../etc/passwd", &query(None, None)),
            Err(StatusCode::BAD_REQUEST)
        );
    }
}
