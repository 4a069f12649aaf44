use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::SubcategoryPage;
use contracts::shared::page_state::PageState;
use contracts::shared::site_route::{subcategory_breadcrumbs, SiteRoute};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::route_key::subcategory_key;
use crate::domain::a002_subcategory::api::fetch_page;
use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::{Footer, FooterVariant};
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::project_card::ProjectCardView;
use crate::shared::components::status::{ErrorView, LoadingView, NotFoundView};
use crate::shared::content_page::use_content_page;
use crate::shared::document::set_title;

#[component]
#[allow(non_snake_case)]
pub fn SubcategoryDetails(category: CategoryKind) -> impl IntoView {
    let params = use_params_map();
    let state = use_content_page(
        move || params.with(subcategory_key),
        move |slug, signal| fetch_page(category, slug, signal),
    );

    // Заголовок документа по мере загрузки
    Effect::new(move |_| match state.get() {
        PageState::Ready(page) => set_title(Some(&page.subcategory.title)),
        PageState::NotFound => set_title(Some("Not Found")),
        _ => {}
    });

    let back_href = SiteRoute::Category(category).to_path();
    let back_label = format!("Back to {}", category.display_name());

    view! {
        <AuroraBackground plain=true>
            {move || match state.get() {
                PageState::Loading => view! { <LoadingView /> }.into_any(),
                PageState::Error(e) => view! { <ErrorView message=e /> }.into_any(),
                PageState::NotFound => view! {
                    <NotFoundView
                        what="Subcategory"
                        back_href=back_href.clone()
                        back_label=back_label.clone()
                    />
                }
                .into_any(),
                PageState::Ready(page) => view! { <Listing category page /> }.into_any(),
            }}
            <Footer variant=FooterVariant::for_category(category) />
        </AuroraBackground>
    }
}

#[component]
#[allow(non_snake_case)]
fn Listing(category: CategoryKind, page: SubcategoryPage) -> impl IntoView {
    let SubcategoryPage { subcategory, projects } = page;
    let crumbs = subcategory_breadcrumbs(category, &subcategory.title);

    view! {
        <section class="page-hero page-hero--compact">
            <Breadcrumbs items=crumbs />
            <div class="page-hero__eyebrow">{category.display_name()}</div>
            <h1 class="page-hero__title">{subcategory.title.clone()}</h1>
        </section>

        {if projects.is_empty() {
            view! {
                <p class="empty">"No projects in this collection yet. Check back soon."</p>
            }
            .into_any()
        } else {
            let slug = subcategory.slug.clone();
            view! {
                <section class="project-grid">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| {
                            let href = SiteRoute::Project {
                                category,
                                subcategory: slug.clone(),
                                project: card.slug.clone(),
                            }
                            .to_path();
                            view! { <ProjectCardView card href index /> }
                        })
                        .collect_view()}
                </section>
            }
            .into_any()
        }}
    }
}
