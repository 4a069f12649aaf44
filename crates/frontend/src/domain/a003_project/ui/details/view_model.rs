use contracts::domain::a003_project::{Project, ProjectDetails};
use contracts::domain::common::Slug;
use leptos_router::params::ParamsMap;

/// (subcategory, project) из параметров маршрута
pub fn project_key(params: &ParamsMap) -> Option<(Slug, Slug)> {
    let subcategory = params.get("subcategory").and_then(|s| Slug::parse(&s))?;
    let project = params.get("project").and_then(|s| Slug::parse(&s))?;
    Some((subcategory, project))
}

/// "Outdoor • Pergolas"
pub fn kicker(project: &Project) -> String {
    match &project.subcategory {
        Some(sub) => format!("{} • {}", project.category.title(), sub.title),
        None => project.category.title().to_string(),
    }
}

/// Filled detail fields in display order
pub fn detail_rows(details: &ProjectDetails) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(location) = &details.location {
        rows.push(("Location", location.clone()));
    }
    if let Some(year) = details.year {
        rows.push(("Year", year.to_string()));
    }
    if let Some(dimensions) = &details.dimensions {
        rows.push(("Dimensions", dimensions.clone()));
    }
    if let Some(materials) = details.materials_line() {
        rows.push(("Materials", materials));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a001_category::CategoryKind;
    use contracts::domain::a002_subcategory::SubcategoryRef;
    use contracts::domain::common::{ContentId, ImageRef};

    fn project(subcategory: Option<&str>) -> Project {
        Project {
            id: ContentId::new("p1"),
            title: "Garden Retreat".into(),
            description: "Cedar pergola".into(),
            slug: Slug::parse("garden-retreat").unwrap(),
            category: CategoryKind::Outdoor,
            subcategory: subcategory.map(|title| SubcategoryRef {
                title: title.into(),
                slug: Slug::parse("pergolas").unwrap(),
            }),
            main_image: ImageRef::new("image-abc-1200x800-jpg"),
            gallery: vec![],
            featured: false,
            details: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_project_key_requires_both_slugs() {
        let mut params = ParamsMap::new();
        params.insert("subcategory", "pergolas".to_string());
        assert_eq!(project_key(&params), None);

        params.insert("project", "garden-retreat".to_string());
        let (sub, proj) = project_key(&params).unwrap();
        assert_eq!(sub.as_str(), "pergolas");
        assert_eq!(proj.as_str(), "garden-retreat");
    }

    #[test]
    fn test_kicker() {
        assert_eq!(kicker(&project(Some("Pergolas"))), "Outdoor • Pergolas");
        assert_eq!(kicker(&project(None)), "Outdoor");
    }

    #[test]
    fn test_detail_rows_skip_empty_fields() {
        let details = ProjectDetails {
            location: Some("Austin, TX".into()),
            year: None,
            materials: vec!["Cedar".into(), "Steel".into()],
            dimensions: None,
        };
        assert_eq!(
            detail_rows(&details),
            vec![
                ("Location", "Austin, TX".to_string()),
                ("Materials", "Cedar, Steel".to_string()),
            ]
        );
    }
}
