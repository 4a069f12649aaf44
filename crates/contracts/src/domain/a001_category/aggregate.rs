use serde::{Deserialize, Serialize};

use crate::domain::common::ContentId;

/// Категория портфолио.
///
/// В хранилище категория — отдельный документ с заголовком "Indoor"/"Outdoor";
/// маршруты используют фиксированные сегменты `indoor-design`/`outdoor-design`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Outdoor,
    Indoor,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Outdoor, CategoryKind::Indoor];

    /// Заголовок документа категории в хранилище
    pub fn title(&self) -> &'static str {
        match self {
            CategoryKind::Outdoor => "Outdoor",
            CategoryKind::Indoor => "Indoor",
        }
    }

    /// Сегмент маршрута
    pub fn route_segment(&self) -> &'static str {
        match self {
            CategoryKind::Outdoor => "outdoor-design",
            CategoryKind::Indoor => "indoor-design",
        }
    }

    /// Отображаемое имя для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKind::Outdoor => "Outdoor Design",
            CategoryKind::Indoor => "Indoor Design",
        }
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == segment)
    }

    /// Сопоставление по заголовку документа (без учёта регистра)
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(title))
    }
}

/// Категория вместе со своими подкатегориями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<ContentId>,
    pub kind: CategoryKind,
    pub title: String,
    pub subcategories: Vec<crate::domain::a002_subcategory::Subcategory>,
}
