use contracts::domain::a003_project::ProjectCard;
use contracts::shared::image_slot::{image_src, ImageSlot};
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use super::card_animated::{stagger_delay_ms, CardAnimated};
use crate::layout::transition::{use_transition, CardRect, TRANSITION_MS};

/// Portfolio card; a plain click plays the card transition before navigating
#[component]
pub fn ProjectCardView(
    card: ProjectCard,
    #[prop(into)] href: String,
    #[prop(optional)] index: usize,
    #[prop(optional)] slot: Option<ImageSlot>,
) -> impl IntoView {
    let transition = use_transition();
    let navigate = use_navigate();
    let node = NodeRef::<Div>::new();

    let slot = slot.unwrap_or(ImageSlot::Thumbnail);
    let (width, height) = slot.dimensions();
    let thumbnail = image_src(&card.main_image, slot);
    let hero = image_src(&card.main_image, ImageSlot::Hero);
    let alt = card.main_image.alt_or(&card.title);
    let title = card.title.clone();

    let target = href.clone();
    let on_click = move |ev: MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();

        let Some(el) = node.get() else {
            navigate(&target, NavigateOptions::default());
            return;
        };
        let rect = el.get_bounding_client_rect();
        transition.start(CardRect::from(&rect), hero.clone(), title.clone());

        let navigate = navigate.clone();
        let target = target.clone();
        Timeout::new(TRANSITION_MS, move || {
            navigate(&target, NavigateOptions::default());
        })
        .forget();
    };

    view! {
        <a class="project-card" href=href on:click=on_click>
            <CardAnimated delay_ms=stagger_delay_ms(index)>
                <div class="project-card__media" node_ref=node>
                    <img
                        src=thumbnail
                        alt=alt
                        width=width.to_string()
                        height=height.to_string()
                        loading="lazy"
                    />
                    {card.featured.then(|| view! {
                        <span class="project-card__badge">
                            <Badge appearance=BadgeAppearance::Filled>"Featured"</Badge>
                        </span>
                    })}
                </div>
                <div class="project-card__body">
                    <h3 class="project-card__title">{card.title.clone()}</h3>
                    <p class="project-card__description">{card.description.clone()}</p>
                </div>
            </CardAnimated>
        </a>
    }
}
