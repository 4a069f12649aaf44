use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a003_project::{sort_for_listing, FeaturedProject, Project, ProjectCard};
use contracts::domain::common::Slug;

use crate::shared::content::{ContentError, ContentStore};

pub const DEFAULT_FEATURED_LIMIT: usize = 12;
pub const MAX_FEATURED_LIMIT: usize = 50;

/// Проекты подкатегории: сначала избранные, затем новые
pub async fn list_for_subcategory(
    store: &dyn ContentStore,
    category: CategoryKind,
    subcategory: &Slug,
) -> Result<Vec<ProjectCard>, ContentError> {
    let mut projects = store.list_projects(category, subcategory).await?;
    sort_for_listing(&mut projects);
    Ok(projects)
}

/// Проект по тройке (категория, подкатегория, slug).
///
/// Запись, которую хранилище вернуло вне запрошенной области, считается
/// ненайденной.
pub async fn get_by_slug(
    store: &dyn ContentStore,
    category: CategoryKind,
    subcategory: &Slug,
    slug: &Slug,
) -> Result<Option<Project>, ContentError> {
    let Some(project) = store.find_project(category, subcategory, slug).await? else {
        return Ok(None);
    };

    let in_scope = project.category == category
        && &project.slug == slug
        && project
            .subcategory
            .as_ref()
            .is_some_and(|sub| &sub.slug == subcategory);
    if !in_scope {
        tracing::warn!(
            "Project {} is outside /{}/{}, treating as not found",
            project.id,
            category.route_segment(),
            subcategory
        );
        return Ok(None);
    }
    Ok(Some(project))
}

/// Избранные проекты для витрины; лимит ограничен [`MAX_FEATURED_LIMIT`]
pub async fn list_featured(
    store: &dyn ContentStore,
    limit: Option<usize>,
) -> Result<Vec<FeaturedProject>, ContentError> {
    let limit = limit
        .unwrap_or(DEFAULT_FEATURED_LIMIT)
        .clamp(1, MAX_FEATURED_LIMIT);
    let mut projects = store.list_featured(limit).await?;
    sort_for_listing(&mut projects);
    projects.truncate(limit);
    Ok(projects)
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
        let kitchens = subcategory(CategoryKind::Indoor, "Kitchens", "kitchens");
        let mut garden = project(
            CategoryKind::Outdoor,
            &pergolas,
            "Garden Pergola Retreat",
            "garden-retreat",
            false,
            3,
        );
        garden.description = "Natural wood finish with climbing plant integration".into();
        MemoryContentStore {
            projects: vec![
                garden,
                project(CategoryKind::Outdoor, &pergolas, "Paradise", "paradise", true, 2),
                project(CategoryKind::Indoor, &kitchens, "Chef", "chef", true, 9),
            ],
            subcategories: vec![pergolas, kitchens],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_matching_project_is_ready_with_fields() {
        let state = PageState::from_result(
            get_by_slug(
                &store(),
                CategoryKind::Outdoor,
                &slug("pergolas"),
                &slug("garden-retreat"),
            )
            .await,
        );
        let project = state.ready().unwrap();
        assert_eq!(project.title, "Garden Pergola Retreat");
        assert_eq!(
            project.description,
            "Natural wood finish with climbing plant integration"
        );
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let state = PageState::from_result(
            get_by_slug(
                &store(),
                CategoryKind::Outdoor,
                &slug("pergolas"),
                &slug("no-such-project"),
            )
            .await,
        );
        assert!(state.is_not_found());
    }

    #[tokio::test]
    async fn test_project_in_wrong_category_is_not_found() {
        let state = PageState::from_result(
            get_by_slug(
                &store(),
                CategoryKind::Indoor,
                &slug("pergolas"),
                &slug("garden-retreat"),
            )
            .await,
        );
        assert!(state.is_not_found());
    }

    #[tokio::test]
    async fn test_out_of_scope_store_result_is_rejected() {
        let mut store = store();
        store.loose_scope = true;

        let wrong_subcategory = get_by_slug(
            &store,
            CategoryKind::Outdoor,
            &slug("pool-areas"),
            &slug("garden-retreat"),
        )
        .await
        .unwrap();
        assert!(wrong_subcategory.is_none());

        let wrong_category = get_by_slug(
            &store,
            CategoryKind::Indoor,
            &slug("pergolas"),
            &slug("garden-retreat"),
        )
        .await
        .unwrap();
        assert!(wrong_category.is_none());
    }

    #[tokio::test]
    async fn test_failure_is_error_not_loading() {
        let store = MemoryContentStore::failing(|| ContentError::Timeout);
        let state = PageState::from_result(
            get_by_slug(&store, CategoryKind::Outdoor, &slug("pergolas"), &slug("x")).await,
        );
        assert!(state.is_terminal());
        assert!(matches!(state, PageState::Error(_)));
    }

    #[tokio::test]
    async fn test_list_featured_orders_and_clamps() {
        let featured = list_featured(&store(), Some(500)).await.unwrap();
        let slugs: Vec<&str> = featured.iter().map(|f| f.card.slug.as_str()).collect();
        assert_eq!(slugs, vec!["chef", "paradise"]);

        let one = list_featured(&store(), Some(1)).await.unwrap();
        assert_eq!(one.len(), 1);
    }
}
