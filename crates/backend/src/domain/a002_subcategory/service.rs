use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::{Subcategory, SubcategoryPage};
use contracts::domain::common::Slug;

use crate::domain::a003_project;
use crate::shared::content::{ContentError, ContentStore};

pub async fn list_for_category(
    store: &dyn ContentStore,
    category: CategoryKind,
) -> Result<Vec<Subcategory>, ContentError> {
    store.list_subcategories(category).await
}

/// Подкатегория и её проекты (два запроса к хранилищу).
/// `None`, если подкатегории с таким slug в категории нет.
pub async fn get_page(
    store: &dyn ContentStore,
    category: CategoryKind,
    slug: &Slug,
) -> Result<Option<SubcategoryPage>, ContentError> {
    let Some(subcategory) = store.find_subcategory(category, slug).await? else {
        return Ok(None);
    };
    let projects = a003_project::service::list_for_subcategory(store, category, slug).await?;
    Ok(Some(SubcategoryPage {
        subcategory,
        projects,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::memory::{project, subcategory, MemoryContentStore};
    use contracts::shared::page_state::PageState;

    fn slug(value: &str) -> Slug {
        Slug::parse(value).unwrap()
    }

    fn store() -> MemoryContentStore {
        let pergolas = subcategory(CategoryKind::Outdoor, "Pergolas", "pergolas");
        MemoryContentStore {
            projects: vec![
                project(CategoryKind::Outdoor, &pergolas, "Older", "older", false, 1),
                project(CategoryKind::Outdoor, &pergolas, "Newer", "newer", false, 20),
                project(CategoryKind::Outdoor, &pergolas, "Star", "star", true, 5),
            ],
            subcategories: vec![pergolas],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_page_lists_projects_featured_first() {
        let page = get_page(&store(), CategoryKind::Outdoor, &slug("pergolas"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(page.subcategory.title, "Pergolas");
        let slugs: Vec<&str> = page.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["star", "newer", "older"]);
    }

    #[tokio::test]
    async fn test_unknown_subcategory_is_not_found() {
        let state = PageState::from_result(
            get_page(&store(), CategoryKind::Outdoor, &slug("kitchens")).await,
        );
        assert!(state.is_not_found());
    }

    #[tokio::test]
    async fn test_subcategory_in_other_category_is_not_found() {
        let state = PageState::from_result(
            get_page(&store(), CategoryKind::Indoor, &slug("pergolas")).await,
        );
        assert!(state.is_not_found());
    }

    #[tokio::test]
    async fn test_store_failure_settles_error() {
        let store = MemoryContentStore::failing(|| ContentError::Network("refused".into()));
        let state = PageState::from_result(
            get_page(&store, CategoryKind::Outdoor, &slug("pergolas")).await,
        );
        assert!(matches!(state, PageState::Error(_)));
    }
}
