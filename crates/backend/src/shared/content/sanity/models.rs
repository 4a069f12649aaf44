//! Документы CMS в том виде, в каком их возвращают GROQ-запросы.
//!
//! Все ссылочные поля необязательны: битая ссылка (`category->title` = null)
//! превращает запись в «не найдено», а не в ошибку декодирования.

use chrono::{DateTime, Utc};
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::{Subcategory, SubcategoryRef};
use contracts::domain::a003_project::{FeaturedProject, Project, ProjectCard, ProjectDetails};
use contracts::domain::common::{ContentId, Hotspot, ImageRef, Slug};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
}

impl RawSubcategory {
    pub fn into_subcategory(self) -> Option<Subcategory> {
        let category = self.category.as_deref().and_then(CategoryKind::from_title);
        let slug = self.slug.as_deref().and_then(Slug::parse);
        match (self.title, slug, category) {
            (Some(title), Some(slug), Some(category)) => Some(Subcategory {
                id: ContentId::new(self.id),
                title,
                slug,
                category,
            }),
            _ => {
                tracing::warn!("Skipping incomplete subcategory document {}", self.id);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSubcategoryRef {
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl RawSubcategoryRef {
    fn into_ref(self) -> Option<SubcategoryRef> {
        Some(SubcategoryRef {
            title: self.title?,
            slug: Slug::parse(self.slug.as_deref()?)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub asset: Option<RawAssetRef>,
    pub alt: Option<String>,
    pub hotspot: Option<Hotspot>,
}

impl RawImage {
    fn into_image(self) -> Option<ImageRef> {
        Some(ImageRef {
            asset_ref: self.asset?.reference,
            alt: self.alt,
            hotspot: self.hotspot,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProjectDetails {
    pub location: Option<String>,
    pub year: Option<i32>,
    pub materials: Option<Vec<String>>,
    pub dimensions: Option<String>,
}

impl From<RawProjectDetails> for ProjectDetails {
    fn from(raw: RawProjectDetails) -> Self {
        ProjectDetails {
            location: raw.location,
            year: raw.year,
            materials: raw.materials.unwrap_or_default(),
            dimensions: raw.dimensions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<RawSubcategoryRef>,
    pub main_image: Option<RawImage>,
    #[serde(default)]
    pub gallery: Option<Vec<RawImage>>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub project_details: Option<RawProjectDetails>,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
}

impl RawProject {
    /// Карточка для списка; `None`, если нет обязательных полей
    pub fn into_card(self) -> Option<ProjectCard> {
        let slug = self.slug.as_deref().and_then(Slug::parse);
        let main_image = self.main_image.and_then(RawImage::into_image);
        match (self.title, slug, main_image) {
            (Some(title), Some(slug), Some(main_image)) => Some(ProjectCard {
                id: ContentId::new(self.id),
                title,
                description: self.description.unwrap_or_default(),
                slug,
                main_image,
                featured: self.featured.unwrap_or(false),
                created_at: self.created_at,
            }),
            _ => {
                tracing::warn!("Skipping incomplete project document {}", self.id);
                None
            }
        }
    }

    /// Полный проект; `None` при битых ссылках на категорию/подкатегорию
    pub fn into_project(self) -> Option<Project> {
        let id = self.id.clone();
        let category = self.category.as_deref().and_then(CategoryKind::from_title);
        let Some(category) = category else {
            tracing::warn!("Project {} has a dangling category reference", id);
            return None;
        };
        let subcategory = match self.subcategory.clone() {
            Some(raw) => match raw.into_ref() {
                Some(sub) => Some(sub),
                None => {
                    tracing::warn!("Project {} has a dangling subcategory reference", id);
                    return None;
                }
            },
            None => None,
        };
        let gallery: Vec<ImageRef> = self
            .gallery
            .clone()
            .unwrap_or_default()
            .into_iter()
            .filter_map(RawImage::into_image)
            .collect();
        let details = self.project_details.clone().map(ProjectDetails::from);

        let card = self.into_card()?;
        Some(Project {
            id: card.id,
            title: card.title,
            description: card.description,
            slug: card.slug,
            category,
            subcategory,
            main_image: card.main_image,
            gallery,
            featured: card.featured,
            details,
            created_at: card.created_at,
        })
    }

    /// Элемент витрины; требует валидных ссылок на категорию и подкатегорию
    pub fn into_featured(self) -> Option<FeaturedProject> {
        let category = self.category.as_deref().and_then(CategoryKind::from_title)?;
        let subcategory = self.subcategory.clone().and_then(RawSubcategoryRef::into_ref)?;
        let card = self.into_card()?;
        Some(FeaturedProject {
            card,
            category,
            subcategory,
        })
    }
}
