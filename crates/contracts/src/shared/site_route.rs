//! Маршруты сайта: разбор пути, обратная сборка и хлебные крошки.
//!
//! ```text
//! /                                         Home
//! /about                                    About
//! /contact                                  Contact
//! /{category}                               Category
//! /{category}/{subcategory-slug}            Subcategory
//! /{category}/{subcategory-slug}/{project}  Project
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryKind;
use crate::domain::common::Slug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteRoute {
    Home,
    About,
    Contact,
    Category(CategoryKind),
    Subcategory {
        category: CategoryKind,
        subcategory: Slug,
    },
    Project {
        category: CategoryKind,
        subcategory: Slug,
        project: Slug,
    },
    NotFound,
}

impl SiteRoute {
    /// Разобрать путь (query и fragment игнорируются).
    ///
    /// Любой неизвестный или невалидный сегмент даёт `NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return SiteRoute::Home;
        }

        let decoded: Result<Vec<_>, _> = path.split('/').map(urlencoding::decode).collect();
        let Ok(decoded) = decoded else {
            return SiteRoute::NotFound;
        };
        if decoded.iter().any(|s| s.is_empty()) {
            return SiteRoute::NotFound;
        }
        let segments: Vec<&str> = decoded.iter().map(|s| s.as_ref()).collect();

        match segments.as_slice() {
            ["about"] => SiteRoute::About,
            ["contact"] => SiteRoute::Contact,
            [category] => CategoryKind::from_route_segment(category)
                .map(SiteRoute::Category)
                .unwrap_or(SiteRoute::NotFound),
            [category, subcategory] => {
                match (
                    CategoryKind::from_route_segment(category),
                    Slug::parse(subcategory),
                ) {
                    (Some(category), Some(subcategory)) => SiteRoute::Subcategory {
                        category,
                        subcategory,
                    },
                    _ => SiteRoute::NotFound,
                }
            }
            [category, subcategory, project] => {
                match (
                    CategoryKind::from_route_segment(category),
                    Slug::parse(subcategory),
                    Slug::parse(project),
                ) {
                    (Some(category), Some(subcategory), Some(project)) => SiteRoute::Project {
                        category,
                        subcategory,
                        project,
                    },
                    _ => SiteRoute::NotFound,
                }
            }
            _ => SiteRoute::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            SiteRoute::Home => "/".to_string(),
            SiteRoute::About => "/about".to_string(),
            SiteRoute::Contact => "/contact".to_string(),
            SiteRoute::Category(category) => format!("/{}", category.route_segment()),
            SiteRoute::Subcategory {
                category,
                subcategory,
            } => format!(
                "/{}/{}",
                category.route_segment(),
                urlencoding::encode(subcategory.as_str())
            ),
            SiteRoute::Project {
                category,
                subcategory,
                project,
            } => format!(
                "/{}/{}/{}",
                category.route_segment(),
                urlencoding::encode(subcategory.as_str()),
                urlencoding::encode(project.as_str())
            ),
            SiteRoute::NotFound => "/404".to_string(),
        }
    }

    /// Категория, к которой относится маршрут
    pub fn category(&self) -> Option<CategoryKind> {
        match self {
            SiteRoute::Category(category)
            | SiteRoute::Subcategory { category, .. }
            | SiteRoute::Project { category, .. } => Some(*category),
            _ => None,
        }
    }
}

/// Элемент хлебных крошек; последний элемент без ссылки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Home / Outdoor Design / Pergolas
pub fn subcategory_breadcrumbs(category: CategoryKind, subcategory_title: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Home", SiteRoute::Home.to_path()),
        Breadcrumb::link(
            category.display_name(),
            SiteRoute::Category(category).to_path(),
        ),
        Breadcrumb::current(subcategory_title),
    ]
}

/// Home / Outdoor Design / Pergolas / Garden Retreat
pub fn project_breadcrumbs(
    category: CategoryKind,
    subcategory_title: &str,
    subcategory: &Slug,
    project_title: &str,
) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Home", SiteRoute::Home.to_path()),
        Breadcrumb::link(
            category.display_name(),
            SiteRoute::Category(category).to_path(),
        ),
        Breadcrumb::link(
            subcategory_title,
            SiteRoute::Subcategory {
                category,
                subcategory: subcategory.clone(),
            }
            .to_path(),
        ),
        Breadcrumb::current(project_title),
    ]
}
