use contracts::domain::a003_project::FeaturedProject;
use contracts::shared::image_slot::ImageSlot;
use contracts::shared::page_state::PageState;
use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;

use super::parallax::{
    scroll_progress, split_rows, ParallaxProfile, ParallaxTransform, ROW_SIZE, SHOWCASE_LIMIT,
};
use crate::domain::a003_project::api::fetch_featured;
use crate::shared::components::project_card::{ProjectCardView, ProjectCardViewProps};
use crate::shared::components::status::LoadingView;
use crate::shared::content_page::use_content_page;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

#[component]
#[allow(non_snake_case)]
pub fn FeaturedShowcase() -> impl IntoView {
    let state = use_content_page(
        || Some(SHOWCASE_LIMIT),
        |limit, signal| fetch_featured(limit, signal),
    );

    let section = NodeRef::<Section>::new();
    let progress = RwSignal::new(0.0_f64);
    let profile = RwSignal::new(ParallaxProfile::for_width(viewport_width()));

    let measure = move || {
        if let Some(el) = section.get_untracked() {
            let rect = el.get_bounding_client_rect();
            progress.set(scroll_progress(rect.top(), rect.height()));
        }
    };
    let on_scroll = window_event_listener(ev::scroll, move |_| measure());
    let on_resize = window_event_listener(ev::resize, move |_| {
        profile.set(ParallaxProfile::for_width(viewport_width()));
        measure();
    });
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    let transform = Memo::new(move |_| profile.get().at(progress.get()));

    let rows = move || match state.get() {
        PageState::Loading => view! { <LoadingView /> }.into_any(),
        PageState::Ready(items) if !items.is_empty() => split_rows(&items)
            .into_iter()
            .enumerate()
            .map(|(row, items)| view! { <ShowcaseRow row items transform /> })
            .collect_view()
            .into_any(),
        // Пустой список или ошибка: витрина остаётся с заголовком
        _ => view! { <p class="showcase__empty">"New projects are on their way."</p> }.into_any(),
    };

    view! {
        <section class="showcase" node_ref=section>
            <div
                class="showcase__stage"
                style=move || transform.with(|t| t.container_style())
                data-parallax-section
            >
                <div class="showcase__header">
                    <h2>"Crafted " <span class="accent">"Excellence"</span></h2>
                    <div class="showcase__rule"></div>
                    <p>"Every pergola tells a story of precision and passion"</p>
                </div>
                {rows}
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
fn ShowcaseRow(
    row: usize,
    items: Vec<FeaturedProject>,
    transform: Memo<ParallaxTransform>,
) -> impl IntoView {
    let reverse = row == 1;
    view! {
        <div
            class="showcase__row"
            class:showcase__row--reverse=reverse
            style=move || transform.with(|t| t.row_style(reverse))
        >
            {items
                .into_iter()
                .enumerate()
                .map(|(i, featured)| {
                    let href = featured.path();
                    // `slot` is reserved by the view! macro, so pass props via the builder
                    ProjectCardView(
                        ProjectCardViewProps::builder()
                            .card(featured.card)
                            .href(href)
                            .index(row * ROW_SIZE + i)
                            .slot(ImageSlot::ShowcaseCard)
                            .build(),
                    )
                })
                .collect_view()}
        </div>
    }
}
