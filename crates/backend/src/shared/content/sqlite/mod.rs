pub mod entities;
pub mod seed;

use async_trait::async_trait;
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::{Subcategory, SubcategoryRef};
use contracts::domain::a003_project::{
    FeaturedProject, Project, ProjectCard, ProjectDetails,
};
use contracts::domain::common::{ContentId, Hotspot, ImageAsset, ImageRef, Slug};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use self::entities::{category, project, project_image, subcategory};
use super::{ContentError, ContentStore};

/// Хранилище контента в локальной SQLite базе
pub struct SqliteContentStore {
    conn: DatabaseConnection,
}

impl SqliteContentStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn category_id(&self, kind: CategoryKind) -> Result<Option<String>, ContentError> {
        let model = category::Entity::find()
            .filter(category::Column::Title.eq(kind.title()))
            .one(&self.conn)
            .await?;
        Ok(model.map(|m| m.id))
    }

    async fn subcategory_model(
        &self,
        category_id: &str,
        slug: &Slug,
    ) -> Result<Option<subcategory::Model>, ContentError> {
        let model = subcategory::Entity::find()
            .filter(subcategory::Column::CategoryId.eq(category_id))
            .filter(subcategory::Column::Slug.eq(slug.as_str()))
            .one(&self.conn)
            .await?;
        Ok(model)
    }
}

fn to_subcategory(model: subcategory::Model, category: CategoryKind) -> Option<Subcategory> {
    let Some(slug) = Slug::parse(&model.slug) else {
        tracing::warn!("Skipping subcategory {} with invalid slug '{}'", model.id, model.slug);
        return None;
    };
    Some(Subcategory {
        id: ContentId::new(model.id),
        title: model.title,
        slug,
        category,
    })
}

fn to_card(model: &project::Model) -> Option<ProjectCard> {
    let slug = Slug::parse(&model.slug);
    let main_image = model.main_image_ref.as_ref().map(|asset_ref| ImageRef {
        asset_ref: asset_ref.clone(),
        alt: model.main_image_alt.clone(),
        hotspot: None,
    });
    match (slug, main_image) {
        (Some(slug), Some(main_image)) => Some(ProjectCard {
            id: ContentId::new(model.id.clone()),
            title: model.title.clone(),
            description: model.description.clone(),
            slug,
            main_image,
            featured: model.featured,
            created_at: model.created_at,
        }),
        _ => {
            tracing::warn!("Skipping incomplete project {}", model.id);
            None
        }
    }
}

fn to_details(model: &project::Model) -> Option<ProjectDetails> {
    let materials = match model.materials.as_deref() {
        Some(json) => serde_json::from_str::<Vec<String>>(json).unwrap_or_else(|e| {
            tracing::warn!("Invalid materials list for project {}: {}", model.id, e);
            Vec::new()
        }),
        None => Vec::new(),
    };
    let details = ProjectDetails {
        location: model.location.clone(),
        year: model.year,
        materials,
        dimensions: model.dimensions.clone(),
    };
    if details.is_empty() {
        None
    } else {
        Some(details)
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    fn store_name(&self) -> &str {
        "sqlite"
    }

    async fn list_subcategories(
        &self,
        category: CategoryKind,
    ) -> Result<Vec<Subcategory>, ContentError> {
        let Some(category_id) = self.category_id(category).await? else {
            return Ok(Vec::new());
        };
        let models = subcategory::Entity::find()
            .filter(subcategory::Column::CategoryId.eq(category_id))
            .order_by_asc(subcategory::Column::Title)
            .all(&self.conn)
            .await?;
        Ok(models
            .into_iter()
            .filter_map(|m| to_subcategory(m, category))
            .collect())
    }

    async fn find_subcategory(
        &self,
        category: CategoryKind,
        slug: &Slug,
    ) -> Result<Option<Subcategory>, ContentError> {
        let Some(category_id) = self.category_id(category).await? else {
            return Ok(None);
        };
        let model = self.subcategory_model(&category_id, slug).await?;
        Ok(model.and_then(|m| to_subcategory(m, category)))
    }

    async fn list_projects(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
    ) -> Result<Vec<ProjectCard>, ContentError> {
        let Some(category_id) = self.category_id(category).await? else {
            return Ok(Vec::new());
        };
        let Some(sub) = self.subcategory_model(&category_id, subcategory).await? else {
            return Ok(Vec::new());
        };
        let models = project::Entity::find()
            .filter(project::Column::CategoryId.eq(category_id))
            .filter(project::Column::SubcategoryId.eq(sub.id))
            .order_by_desc(project::Column::Featured)
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.conn)
            .await?;
        Ok(models.iter().filter_map(to_card).collect())
    }

    async fn find_project(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
        project: &Slug,
    ) -> Result<Option<Project>, ContentError> {
        let Some(category_id) = self.category_id(category).await? else {
            return Ok(None);
        };
        let Some(sub) = self.subcategory_model(&category_id, subcategory).await? else {
            return Ok(None);
        };
        let Some(model) = project::Entity::find()
            .filter(project::Column::CategoryId.eq(category_id))
            .filter(project::Column::SubcategoryId.eq(sub.id.clone()))
            .filter(project::Column::Slug.eq(project.as_str()))
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let Some(sub_slug) = Slug::parse(&sub.slug) else {
            return Ok(None);
        };
        let Some(card) = to_card(&model) else {
            return Ok(None);
        };

        let gallery = project_image::Entity::find()
            .filter(project_image::Column::ProjectId.eq(model.id.clone()))
            .order_by_asc(project_image::Column::Position)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|img| ImageRef {
                asset_ref: img.asset_ref,
                alt: img.alt,
                hotspot: None,
            })
            .collect();

        Ok(Some(Project {
            id: card.id,
            title: card.title,
            description: card.description,
            slug: card.slug,
            category,
            subcategory: Some(SubcategoryRef {
                title: sub.title,
                slug: sub_slug,
            }),
            main_image: card.main_image,
            gallery,
            featured: card.featured,
            details: to_details(&model),
            created_at: card.created_at,
        }))
    }

    async fn list_featured(&self, limit: usize) -> Result<Vec<FeaturedProject>, ContentError> {
        let categories: HashMap<String, CategoryKind> = category::Entity::find()
            .all(&self.conn)
            .await?
            .into_iter()
            .filter_map(|m| CategoryKind::from_title(&m.title).map(|kind| (m.id, kind)))
            .collect();
        let subcategories: HashMap<String, subcategory::Model> = subcategory::Entity::find()
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        let models = project::Entity::find()
            .filter(project::Column::Featured.eq(true))
            .order_by_desc(project::Column::CreatedAt)
            .all(&self.conn)
            .await?;

        // лимит после фильтра битых ссылок
        let mut result = Vec::with_capacity(limit.min(models.len()));
        for model in &models {
            if result.len() == limit {
                break;
            }
            let category = model
                .category_id
                .as_ref()
                .and_then(|id| categories.get(id))
                .copied();
            let sub = model
                .subcategory_id
                .as_ref()
                .and_then(|id| subcategories.get(id))
                .filter(|sub| sub.category_id == model.category_id)
                .and_then(|sub| {
                    Slug::parse(&sub.slug).map(|slug| SubcategoryRef {
                        title: sub.title.clone(),
                        slug,
                    })
                });
            match (category, sub, to_card(model)) {
                (Some(category), Some(subcategory), Some(card)) => result.push(FeaturedProject {
                    card,
                    category,
                    subcategory,
                }),
                _ => tracing::warn!("Featured project {} has dangling references", model.id),
            }
        }
        Ok(result)
    }

    fn image_url(
        &self,
        asset: &ImageAsset,
        _width: u32,
        _height: u32,
        _focus: Option<Hotspot>,
    ) -> String {
        format!("/media/{}", asset.file_name())
    }
}
