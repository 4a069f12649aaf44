//! Хранилище в памяти для тестов сервисов и хендлеров.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_project::{FeaturedProject, Project, ProjectCard};
use contracts::domain::common::{ContentId, Hotspot, ImageAsset, ImageRef, Slug};

use super::{ContentError, ContentStore};

#[derive(Default)]
pub struct MemoryContentStore {
    pub subcategories: Vec<Subcategory>,
    pub projects: Vec<Project>,
    /// Все запросы завершаются этой ошибкой
    pub fail_with: Option<fn() -> ContentError>,
    /// `find_project` ищет только по slug проекта
    pub loose_scope: bool,
}

impl MemoryContentStore {
    pub fn failing(error: fn() -> ContentError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ContentError> {
        match self.fail_with {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }

    fn in_scope<'a>(
        &'a self,
        category: CategoryKind,
        subcategory: &'a Slug,
    ) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects.iter().filter(move |p| {
            p.category == category
                && p.subcategory.as_ref().map(|s| &s.slug) == Some(subcategory)
        })
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    fn store_name(&self) -> &str {
        "memory"
    }

    async fn list_subcategories(
        &self,
        category: CategoryKind,
    ) -> Result<Vec<Subcategory>, ContentError> {
        self.check()?;
        Ok(self
            .subcategories
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect())
    }

    async fn find_subcategory(
        &self,
        category: CategoryKind,
        slug: &Slug,
    ) -> Result<Option<Subcategory>, ContentError> {
        self.check()?;
        Ok(self
            .subcategories
            .iter()
            .find(|s| s.category == category && &s.slug == slug)
            .cloned())
    }

    async fn list_projects(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
    ) -> Result<Vec<ProjectCard>, ContentError> {
        self.check()?;
        // Порядок вставки, сортирует сервис
        Ok(self
            .in_scope(category, subcategory)
            .map(ProjectCard::from)
            .collect())
    }

    async fn find_project(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
        project: &Slug,
    ) -> Result<Option<Project>, ContentError> {
        self.check()?;
        if self.loose_scope {
            return Ok(self.projects.iter().find(|p| &p.slug == project).cloned());
        }
        Ok(self
            .in_scope(category, subcategory)
            .find(|p| &p.slug == project)
            .cloned())
    }

    async fn list_featured(&self, limit: usize) -> Result<Vec<FeaturedProject>, ContentError> {
        self.check()?;
        Ok(self
            .projects
            .iter()
            .filter(|p| p.featured)
            .filter_map(|p| {
                Some(FeaturedProject {
                    card: ProjectCard::from(p),
                    category: p.category,
                    subcategory: p.subcategory.clone()?,
                })
            })
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
        let url = format!("memory://{}?w={}&h={}", asset.file_name(), width, height);
        match focus {
            Some(Hotspot { x, y }) => format!("{}&fx={}&fy={}", url, x, y),
            None => url,
        }
    }
}

pub fn subcategory(category: CategoryKind, title: &str, slug: &str) -> Subcategory {
    Subcategory {
        id: ContentId::new(format!("sub-{}", slug)),
        title: title.to_string(),
        slug: Slug::parse(slug).expect("valid slug"),
        category,
    }
}

/// Проект с минимальным набором полей; `day` задаёт дату создания в январе 2024
pub fn project(
    category: CategoryKind,
    subcategory: &Subcategory,
    title: &str,
    slug: &str,
    featured: bool,
    day: u32,
) -> Project {
    Project {
        id: ContentId::new(format!("proj-{}", slug)),
        title: title.to_string(),
        description: format!("{} description", title),
        slug: Slug::parse(slug).expect("valid slug"),
        category,
        subcategory: Some(subcategory.to_ref()),
        main_image: ImageRef::new(format!("image-{}-800x600-jpg", slug.replace('-', ""))),
        gallery: Vec::new(),
        featured,
        details: None,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, day, 0, 0, 0)
            .single()
            .expect("valid date"),
    }
}
