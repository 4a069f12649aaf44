//! Доступ к хранилищу контента (только чтение).
//!
//! Две реализации [`ContentStore`]:
//! - [`sanity::SanityContentStore`] — headless CMS через HTTP (GROQ)
//! - [`sqlite::SqliteContentStore`] — локальная копия схемы через sea-orm

pub mod error;
pub mod sanity;
pub mod sqlite;

#[cfg(test)]
pub mod memory;

pub use error::ContentError;

use async_trait::async_trait;
use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_project::{FeaturedProject, Project, ProjectCard};
use contracts::domain::common::{Hotspot, ImageAsset, Slug};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use crate::shared::config::{resolve_path, Config, ContentSource};

/// Контракт чтения контента. Все методы возвращают `Ok(None)`/пустой список,
/// если запись не найдена или ссылки на родителя битые.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Имя источника для логов
    fn store_name(&self) -> &str;

    /// Подкатегории категории, по заголовку
    async fn list_subcategories(
        &self,
        category: CategoryKind,
    ) -> Result<Vec<Subcategory>, ContentError>;

    async fn find_subcategory(
        &self,
        category: CategoryKind,
        slug: &Slug,
    ) -> Result<Option<Subcategory>, ContentError>;

    /// Проекты подкатегории: `featured` desc, затем `created_at` desc
    async fn list_projects(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
    ) -> Result<Vec<ProjectCard>, ContentError>;

    async fn find_project(
        &self,
        category: CategoryKind,
        subcategory: &Slug,
        project: &Slug,
    ) -> Result<Option<Project>, ContentError>;

    /// Избранные проекты всех категорий для главной страницы
    async fn list_featured(&self, limit: usize) -> Result<Vec<FeaturedProject>, ContentError>;

    /// Конечный URL изображения заданного размера; `focus` задаёт центр обрезки
    fn image_url(
        &self,
        asset: &ImageAsset,
        width: u32,
        height: u32,
        focus: Option<Hotspot>,
    ) -> String;
}

static CONTENT_STORE: OnceCell<Arc<dyn ContentStore>> = OnceCell::new();

/// Создать хранилище по конфигурации и сохранить его глобально
pub async fn initialize_store(config: &Config) -> anyhow::Result<()> {
    let timeout = Duration::from_secs(config.content.request_timeout_secs);

    let store: Arc<dyn ContentStore> = match config.content.source {
        ContentSource::Sanity => {
            let sanity = config
                .sanity
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("[sanity] section is missing"))?;
            Arc::new(sanity::SanityContentStore::new(sanity, timeout)?)
        }
        ContentSource::Sqlite => {
            let db_path = resolve_path(&config.database.path);
            let conn = crate::shared::data::db::initialize_database(&db_path).await?;
            if config.content.seed_demo {
                sqlite::seed::seed_demo_content(&conn).await?;
            }
            Arc::new(sqlite::SqliteContentStore::new(conn))
        }
    };

    tracing::info!("Content store initialized: {}", store.store_name());

    CONTENT_STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("Content store is already initialized"))?;
    Ok(())
}

/// Глобальное хранилище контента
pub fn get_store() -> Result<&'static dyn ContentStore, ContentError> {
    CONTENT_STORE
        .get()
        .map(|store| store.as_ref())
        .ok_or(ContentError::NotInitialized)
}
