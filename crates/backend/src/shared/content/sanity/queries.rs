//! GROQ-запросы к CMS. Параметры передаются отдельно (`$category`, `$slug`, ...).

use contracts::domain::a001_category::CategoryKind;

/// Подкатегории категории
pub const SUBCATEGORIES_BY_CATEGORY: &str = r#"*[_type == "subcategory" && category->title == $category] | order(title asc) {
  _id,
  title,
  "slug": slug.current,
  "category": category->title
}"#;

/// Подкатегория по slug в пределах категории
pub const SUBCATEGORY_BY_SLUG: &str = r#"*[_type == "subcategory" && slug.current == $slug && category->title == $category][0] {
  _id,
  title,
  "slug": slug.current,
  "category": category->title
}"#;

/// Проекты подкатегории: сначала избранные, затем новые
pub const PROJECTS_BY_SUBCATEGORY: &str = r#"*[_type == "project" && subcategory->slug.current == $subcategorySlug && category->title == $category] | order(featured desc, _createdAt desc) {
  _id,
  title,
  description,
  "slug": slug.current,
  mainImage,
  featured,
  _createdAt
}"#;

/// Один проект по slug проекта, slug подкатегории и категории
pub const PROJECT_BY_SLUG: &str = r#"*[_type == "project" && slug.current == $projectSlug && subcategory->slug.current == $subcategorySlug && category->title == $category][0] {
  _id,
  title,
  description,
  "slug": slug.current,
  "category": category->title,
  "subcategory": subcategory->{
    title,
    "slug": slug.current
  },
  mainImage,
  gallery,
  featured,
  projectDetails,
  _createdAt
}"#;

/// Избранные проекты всех категорий. Лимит подставляется в срез.
///
/// Срез применяется после фильтра, поэтому фильтр отсекает всё, что
/// `RawProject::into_featured` всё равно отбросит.
pub fn featured_projects(limit: usize) -> String {
    let categories = CategoryKind::ALL
        .iter()
        .map(|kind| format!("\"{}\"", kind.title().to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"*[_type == "project" && featured == true && defined(title) && defined(slug.current) && defined(mainImage.asset) && lower(category->title) in [{}] && defined(subcategory->title) && defined(subcategory->slug.current)] | order(_createdAt desc) [0...{}] {{
  _id,
  title,
  description,
  "slug": slug.current,
  "category": category->title,
  "subcategory": subcategory->{{
    title,
    "slug": slug.current
  }},
  mainImage,
  featured,
  _createdAt
}}"#,
        categories, limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_queries_filter_by_category() {
        for query in [
            SUBCATEGORIES_BY_CATEGORY,
            SUBCATEGORY_BY_SLUG,
            PROJECTS_BY_SUBCATEGORY,
            PROJECT_BY_SLUG,
        ] {
            assert!(query.contains("category->title == $category"));
        }
    }

    #[test]
    fn test_project_list_order() {
        assert!(PROJECTS_BY_SUBCATEGORY.contains("order(featured desc, _createdAt desc)"));
    }

    #[test]
    fn test_featured_limit() {
        let query = featured_projects(12);
        assert!(query.contains("[0...12]"));
        assert!(query.contains("featured == true"));
        assert!(query.contains("\"slug\": slug.current\n  }"));
    }

    #[test]
    fn test_featured_filter_precedes_slice() {
        let query = featured_projects(1);
        let (filter, _) = query.split_once("[0...1]").unwrap();
        assert!(filter.contains("lower(category->title) in [\"outdoor\", \"indoor\"]"));
        assert!(filter.contains("defined(subcategory->slug.current)"));
        assert!(filter.contains("defined(mainImage.asset)"));
    }
}
