use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryKind;
use crate::domain::a003_project::ProjectCard;
use crate::domain::common::{ContentId, Slug};

/// Подкатегория (например, "Pergolas") внутри категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: ContentId,
    pub title: String,
    pub slug: Slug,
    pub category: CategoryKind,
}

impl Subcategory {
    pub fn to_ref(&self) -> SubcategoryRef {
        SubcategoryRef {
            title: self.title.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Краткая ссылка на подкатегорию внутри проекта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryRef {
    pub title: String,
    pub slug: Slug,
}

/// Данные страницы подкатегории: сама подкатегория и её проекты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryPage {
    pub subcategory: Subcategory,
    pub projects: Vec<ProjectCard>,
}
