use contracts::domain::a001_category::{Category, CategoryKind};

use crate::shared::content::{ContentError, ContentStore};

/// Категория вместе с её подкатегориями
pub async fn get(store: &dyn ContentStore, kind: CategoryKind) -> Result<Category, ContentError> {
    let subcategories = store.list_subcategories(kind).await?;
    Ok(Category {
        id: None,
        kind,
        title: kind.title().to_string(),
        subcategories,
    })
}

/// Обе категории в порядке навигации
pub async fn list_all(store: &dyn ContentStore) -> Result<Vec<Category>, ContentError> {
    let mut categories = Vec::with_capacity(CategoryKind::ALL.len());
    for kind in CategoryKind::ALL {
        categories.push(get(store, kind).await?);
    }
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content::memory::{subcategory, MemoryContentStore};

    #[tokio::test]
    async fn test_list_all_groups_subcategories() {
        let store = MemoryContentStore {
            subcategories: vec![
                subcategory(CategoryKind::Outdoor, "Pergolas", "pergolas"),
                subcategory(CategoryKind::Indoor, "Kitchens", "kitchens"),
                subcategory(CategoryKind::Outdoor, "Pool Areas", "pool-areas"),
            ],
            ..Default::default()
        };

        let categories = list_all(&store).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].kind, CategoryKind::Outdoor);
        assert_eq!(categories[0].title, "Outdoor");
        assert_eq!(categories[0].subcategories.len(), 2);
        assert_eq!(categories[1].subcategories[0].slug.as_str(), "kitchens");
    }

    #[tokio::test]
    async fn test_list_all_propagates_store_error() {
        let store = MemoryContentStore::failing(|| ContentError::Timeout);
        assert!(matches!(list_all(&store).await, Err(ContentError::Timeout)));
    }
}
