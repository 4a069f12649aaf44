use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryKind;
use crate::domain::a002_subcategory::SubcategoryRef;
use crate::domain::common::{ContentId, ImageRef, Slug};
use crate::shared::site_route::SiteRoute;

/// Проект портфолио (страница деталей)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub slug: Slug,
    pub category: CategoryKind,
    pub subcategory: Option<SubcategoryRef>,
    pub main_image: ImageRef,
    #[serde(default)]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub details: Option<ProjectDetails>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Alt-текст для изображения галереи с номером `index` (с нуля)
    pub fn gallery_alt(&self, index: usize) -> String {
        match self.gallery.get(index) {
            Some(image) => image.alt_or(&format!("{} - Image {}", self.title, index + 1)),
            None => format!("{} - Image {}", self.title, index + 1),
        }
    }

    /// Детали, если в них есть хоть одно заполненное поле
    pub fn visible_details(&self) -> Option<&ProjectDetails> {
        self.details.as_ref().filter(|d| !d.is_empty())
    }
}

/// Необязательные структурированные сведения о проекте
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
}

impl ProjectDetails {
    pub fn is_empty(&self) -> bool {
        self.location.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.year.is_none()
            && self.materials.iter().all(|m| m.trim().is_empty())
            && self.dimensions.as_deref().map_or(true, |s| s.trim().is_empty())
    }

    /// Материалы через запятую, пустые значения пропускаются
    pub fn materials_line(&self) -> Option<String> {
        let items: Vec<&str> = self
            .materials
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();
        if items.is_empty() {
            None
        } else {
            Some(items.join(", "))
        }
    }
}

/// Элемент списка проектов подкатегории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub slug: Slug,
    pub main_image: ImageRef,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Project> for ProjectCard {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            slug: p.slug.clone(),
            main_image: p.main_image.clone(),
            featured: p.featured,
            created_at: p.created_at,
        }
    }
}

/// Избранный проект для витрины на главной странице.
///
/// Содержит полный маршрут (категория и подкатегория), чтобы карточка
/// могла вести на страницу проекта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedProject {
    pub card: ProjectCard,
    pub category: CategoryKind,
    pub subcategory: SubcategoryRef,
}

impl FeaturedProject {
    /// Путь страницы проекта
    pub fn path(&self) -> String {
        SiteRoute::Project {
            category: self.category,
            subcategory: self.subcategory.slug.clone(),
            project: self.card.slug.clone(),
        }
        .to_path()
    }
}
