use contracts::domain::a001_category::CategoryKind;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::domain::a001_category::ui::landing::CategoryLanding;
use crate::domain::a002_subcategory::ui::details::SubcategoryDetails;
use crate::domain::a003_project::ui::details::ProjectPage;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

// Сегменты категорий совпадают с CategoryKind::route_segment (см. тест ниже)

#[component]
#[allow(non_snake_case)]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/contact") view=ContactPage />

            // ============================================================
            // Outdoor Design
            // ============================================================
            <Route
                path=path!("/outdoor-design")
                view=|| view! { <CategoryLanding category=CategoryKind::Outdoor /> }
            />
            <Route
                path=path!("/outdoor-design/:subcategory")
                view=|| view! { <SubcategoryDetails category=CategoryKind::Outdoor /> }
            />
            <Route
                path=path!("/outdoor-design/:subcategory/:project")
                view=|| view! { <ProjectPage category=CategoryKind::Outdoor /> }
            />

            // ============================================================
            // Indoor Design
            // ============================================================
            <Route
                path=path!("/indoor-design")
                view=|| view! { <CategoryLanding category=CategoryKind::Indoor /> }
            />
            <Route
                path=path!("/indoor-design/:subcategory")
                view=|| view! { <SubcategoryDetails category=CategoryKind::Indoor /> }
            />
            <Route
                path=path!("/indoor-design/:subcategory/:project")
                view=|| view! { <ProjectPage category=CategoryKind::Indoor /> }
            />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments_match_categories() {
        assert_eq!(CategoryKind::Outdoor.route_segment(), "outdoor-design");
        assert_eq!(CategoryKind::Indoor.route_segment(), "indoor-design");
    }
}
