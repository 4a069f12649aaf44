//! Лендинг категории: заголовок портфолио и список подкатегорий из хранилища.

use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::shared::page_state::PageState;
use contracts::shared::site_route::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a001_category::api::fetch_subcategories;
use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::{Footer, FooterVariant};
use crate::shared::components::card_animated::{stagger_delay_ms, CardAnimated};
use crate::shared::components::status::{ErrorView, LoadingView};
use crate::shared::content_page::use_content_page;
use crate::shared::document::set_title;

/// Hero copy: eyebrow, heading, lead
pub fn hero_copy(category: CategoryKind) -> (&'static str, &'static str, &'static str) {
    match category {
        CategoryKind::Outdoor => (
            "Outdoor Design Portfolio",
            "Outdoor Excellence",
            "Transforming outdoor spaces with premium pergolas, shade solutions, and complete outdoor living experiences.",
        ),
        CategoryKind::Indoor => (
            "Indoor Design Portfolio",
            "Indoor Elegance",
            "Sophisticated interiors with custom architectural elements, bespoke millwork, and refined living spaces.",
        ),
    }
}

fn subcategory_href(subcategory: &Subcategory) -> String {
    SiteRoute::Subcategory {
        category: subcategory.category,
        subcategory: subcategory.slug.clone(),
    }
    .to_path()
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryLanding(category: CategoryKind) -> impl IntoView {
    let (eyebrow, heading, lead) = hero_copy(category);
    let state = use_content_page(move || Some(category), fetch_subcategories);

    Effect::new(move |_| set_title(Some(category.display_name())));

    view! {
        <AuroraBackground plain=true>
            <section class="page-hero">
                <div class="page-hero__eyebrow">{eyebrow}</div>
                <h1 class="page-hero__title">{heading}</h1>
                <p class="page-hero__lead">{lead}</p>
                <A href="/" attr:class="button button--ghost">"← Back to Home"</A>
            </section>

            <section class="subcategory-grid">
                {move || match state.get() {
                    PageState::Loading => view! { <LoadingView /> }.into_any(),
                    PageState::Error(e) => view! { <ErrorView message=e /> }.into_any(),
                    // Категория есть всегда; пустой список рендерится как Ready(vec![])
                    PageState::NotFound => view! { <p class="empty">"Projects coming soon."</p> }.into_any(),
                    PageState::Ready(items) if items.is_empty() => {
                        view! { <p class="empty">"Projects coming soon."</p> }.into_any()
                    }
                    PageState::Ready(items) => items
                        .into_iter()
                        .enumerate()
                        .map(|(i, sub)| {
                            let href = subcategory_href(&sub);
                            view! {
                                <A href=href attr:class="subcategory-card">
                                    <CardAnimated delay_ms=stagger_delay_ms(i)>
                                        <span class="subcategory-card__kicker">{category.display_name()}</span>
                                        <h3 class="subcategory-card__title">{sub.title}</h3>
                                        <span class="subcategory-card__more">"View projects →"</span>
                                    </CardAnimated>
                                </A>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </section>

            <Footer variant=FooterVariant::for_category(category) />
        </AuroraBackground>
    }
}
