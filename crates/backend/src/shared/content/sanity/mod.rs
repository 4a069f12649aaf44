pub mod client;
pub mod models;
pub mod queries;

use async_trait::async_trait;
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_project::{FeaturedProject, Project, ProjectCard};
use contracts::domain::common::{Hotspot, ImageAsset, Slug};
use serde_json::json;
use std::time::Duration;

use self::client::SanityClient;
use self::models::{RawProject, RawSubcategory};
use super::{ContentError, ContentStore};
use crate::shared::config::SanityConfig;

/// Хранилище контента поверх CMS
pub struct SanityContentStore {
    client: SanityClient,
    project_id: String,
    dataset: String,
}

impl SanityContentStore {
    pub fn new(config: &SanityConfig, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: SanityClient::new(config, timeout)?,
            project_id: config.project_id.clone(),
            dataset: config.dataset.clone(),
        })
    }
}

#[async_trait]
impl ContentStore for SanityContentStore {
    fn store_name(&self) -> &str {
        "sanity"
    }

    async fn list_subcategories(
        &self,
        category: CategoryKind,
    ) -> Result<Vec<Subcategory>, ContentError> {
        let raw: Vec<RawSubcategory> = self
            .client
            .fetch(
                queries::SUBCATEGORIES_BY_CATEGORY,
                &[("category", json!(category.title()))],
            )
            .await?;
        Ok(raw
            .into_iter()
            .filter_map(RawSubcategory::into_subcategory)
            .collect())
    }

    async fn find_subcategory(
        &self,
        category: CategoryKind,
        slug: &Slug,
    ) -> Result<Option<Subcategory>, ContentError> {
        let raw: Option<RawSubcategory> = self
            .client
            .fetch(
                queries::SUBCATEGORY_BY_SLUG,
                &[
                    ("category", json!(category.title())),
                    ("slug", json!(slug.as_str())),
                ],
            )
            .await?;
        Ok(raw.and_then(RawSubcategory::into_subcategory))
    }

    async fn list_projects(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
    ) -> Result<Vec<ProjectCard>, ContentError> {
        let raw: Vec<RawProject> = self
            .client
            .fetch(
                queries::PROJECTS_BY_SUBCATEGORY,
                &[
                    ("category", json!(category.title())),
                    ("subcategorySlug", json!(subcategory.as_str())),
                ],
            )
            .await?;
        Ok(raw.into_iter().filter_map(RawProject::into_card).collect())
    }

    async fn find_project(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
        project: &Slug,
    ) -> Result<Option<Project>, ContentError> {
        let raw: Option<RawProject> = self
            .client
            .fetch(
                queries::PROJECT_BY_SLUG,
                &[
                    ("category", json!(category.title())),
                    ("subcategorySlug", json!(subcategory.as_str())),
                    ("projectSlug", json!(project.as_str())),
                ],
            )
            .await?;
        Ok(raw.and_then(RawProject::into_project))
    }

    async fn list_featured(&self, limit: usize) -> Result<Vec<FeaturedProject>, ContentError> {
        let raw: Vec<RawProject> = self
            .client
            .fetch(&queries::featured_projects(limit), &[])
            .await?;
        Ok(raw
            .into_iter()
            .filter_map(RawProject::into_featured)
            .take(limit)
            .collect())
    }

    fn image_url(
        &self,
        asset: &ImageAsset,
        width: u32,
        height: u32,
        focus: Option<Hotspot>,
    ) -> String {
        cdn_image_url(&self.project_id, &self.dataset, asset, width, height, focus)
    }
}

/// URL изображения на CDN с обрезкой под размер
pub fn cdn_image_url(
    project_id: &str,
    dataset: &str,
    asset: &ImageAsset,
    width: u32,
    height: u32,
    focus: Option<Hotspot>,
) -> String {
    let mut url = format!(
        "https://cdn.sanity.io/images/{}/{}/{}?w={}&h={}&fit=crop&auto=format",
        project_id,
        dataset,
        asset.file_name(),
        width,
        height
    );
    if let Some(Hotspot { x, y }) = focus {
        url.push_str(&format!("&crop=focalpoint&fp-x={:.3}&fp-y={:.3}", x, y));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdn_image_url() {
        let asset = ImageAsset::parse("image-abc123-2000x1333-jpg").unwrap();
        assert_eq!(
            cdn_image_url("proj", "production", &asset, 800, 600, None),
            "https://cdn.sanity.io/images/proj/production/abc123-2000x1333.jpg?w=800&h=600&fit=crop&auto=format"
        );
    }

    #[test]
    fn test_cdn_image_url_with_focal_point() {
        let asset = ImageAsset::parse("image-abc123-2000x1333-jpg").unwrap();
        let url = cdn_image_url(
            "proj",
            "production",
            &asset,
            800,
            600,
            Some(Hotspot { x: 0.2, y: 0.65 }),
        );
        assert!(url.ends_with("&fit=crop&auto=format&crop=focalpoint&fp-x=0.200&fp-y=0.650"));
    }
}
