use contracts::domain::a001_category::CategoryKind;
use contracts::domain::a003_project::Project;
use contracts::domain::common::Slug;
use contracts::shared::image_slot::{image_src, ImageSlot};
use contracts::shared::page_state::PageState;
use contracts::shared::site_route::{project_breadcrumbs, SiteRoute};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::view_model::{detail_rows, kicker, project_key};
use crate::domain::a003_project::api::fetch_project;
use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::{Footer, FooterVariant};
use crate::layout::transition::use_transition;
use crate::shared::components::breadcrumbs::Breadcrumbs;
use crate::shared::components::status::{ErrorView, LoadingView, NotFoundView};
use crate::shared::content_page::use_content_page;
use crate::shared::document::set_title;

#[component]
#[allow(non_snake_case)]
pub fn ProjectPage(category: CategoryKind) -> impl IntoView {
    let params = use_params_map();
    let transition = use_transition();
    let state = use_content_page(
        move || params.with(project_key),
        move |(subcategory, project), signal| fetch_project(category, subcategory, project, signal),
    );

    // Оверлей перехода держится, пока страница не получила итоговое состояние
    Effect::new(move |_| {
        let current = state.get();
        if current.is_terminal() {
            transition.end();
        }
        match current {
            PageState::Ready(project) => set_title(Some(&project.title)),
            PageState::NotFound => set_title(Some("Project Not Found")),
            _ => {}
        }
    });

    let route_subcategory = move || params.with(|p| p.get("subcategory"));

    view! {
        <AuroraBackground plain=true>
            {move || match state.get() {
                PageState::Loading => view! { <LoadingView /> }.into_any(),
                PageState::Error(e) => view! { <ErrorView message=e /> }.into_any(),
                PageState::NotFound => {
                    // Назад в подкатегорию, если её сегмент валиден
                    let back_href = route_subcategory()
                        .and_then(|s| Slug::parse(&s))
                        .map(|subcategory| SiteRoute::Subcategory { category, subcategory }.to_path())
                        .unwrap_or_else(|| SiteRoute::Category(category).to_path());
                    view! {
                        <NotFoundView what="Project" back_href back_label="Back to Projects" />
                    }
                    .into_any()
                }
                PageState::Ready(project) => view! { <Details project /> }.into_any(),
            }}
            <Footer variant=FooterVariant::for_category(category) />
        </AuroraBackground>
    }
}

#[component]
#[allow(non_snake_case)]
fn Details(project: Project) -> impl IntoView {
    let crumbs = project.subcategory.as_ref().map(|sub| {
        project_breadcrumbs(project.category, &sub.title, &sub.slug, &project.title)
    });
    let (hero_w, hero_h) = ImageSlot::Hero.dimensions();
    let (tile_w, tile_h) = ImageSlot::GalleryTile.dimensions();
    let rows = project.visible_details().map(detail_rows).unwrap_or_default();

    let gallery = project
        .gallery
        .iter()
        .enumerate()
        .map(|(i, image)| {
            view! {
                <figure class="project-gallery__tile">
                    <img
                        src=image_src(image, ImageSlot::GalleryTile)
                        alt=project.gallery_alt(i)
                        width=tile_w.to_string()
                        height=tile_h.to_string()
                        loading="lazy"
                    />
                </figure>
            }
        })
        .collect_view();

    view! {
        <article class="project">
            {crumbs.map(|items| view! { <Breadcrumbs items /> })}

            <header class="project__header">
                <div class="project__kicker">{kicker(&project)}</div>
                <h1 class="project__title">{project.title.clone()}</h1>
                <p class="project__description">{project.description.clone()}</p>
            </header>

            <div class="project__hero">
                <img
                    src=image_src(&project.main_image, ImageSlot::Hero)
                    alt=project.main_image.alt_or(&project.title)
                    width=hero_w.to_string()
                    height=hero_h.to_string()
                />
            </div>

            {(!rows.is_empty()).then(|| view! {
                <dl class="project__details">
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="project__detail">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            })}

            {(!project.gallery.is_empty()).then(|| view! {
                <section class="project-gallery">
                    <h2>"Project Gallery"</h2>
                    <div class="project-gallery__grid">{gallery}</div>
                </section>
            })}
        </article>
    }
}
