use contracts::domain::a001_category::CategoryKind;
use contracts::shared::site_route::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a003_project::ui::showcase::FeaturedShowcase;
use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::{Footer, FooterVariant};
use crate::shared::components::card_animated::{stagger_delay_ms, CardAnimated};
use crate::shared::document::set_title;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Custom Design",
        description: "Bespoke pergola designs tailored to your space, style, and vision. Every project is unique and crafted with precision.",
    },
    Service {
        title: "Premium Materials",
        description: "Only the finest materials are used in our constructions. Weather-resistant, durable, and built to last generations.",
    },
    Service {
        title: "Expert Installation",
        description: "Professional installation by certified craftsmen with years of experience in outdoor construction and design.",
    },
    Service {
        title: "Lifetime Support",
        description: "Comprehensive warranty and ongoing support. We stand behind our work with dedicated customer service for life.",
    },
];

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    Effect::new(move |_| set_title(None));

    view! {
        <AuroraBackground>
            <section class="home-hero">
                <h1 class="home-hero__title">
                    <span>"pergolas crafted"</span>
                    <span>"to " <span class="aurora-text">"perfection"</span></span>
                </h1>
                <div class="home-hero__rule"></div>
                <p class="home-hero__lead">
                    "Transform your outdoor space with bespoke pergolas designed with precision, built with passion, and crafted to stand the test of time."
                </p>
                <div class="home-hero__choices">
                    {CategoryKind::ALL
                        .iter()
                        .map(|category| view! {
                            <A href=SiteRoute::Category(*category).to_path() attr:class="choice-card">
                                <span class="choice-card__label">{category.display_name()}</span>
                                <span class="choice-card__more">"Explore →"</span>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>

            <FeaturedShowcase />

            <section class="services">
                <h2>"Our " <span class="accent">"Services"</span></h2>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| view! {
                            <CardAnimated delay_ms=stagger_delay_ms(i)>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
                <A href="/contact" attr:class="button button--primary">"Start Your Project"</A>
            </section>

            <Footer variant=FooterVariant::Home />
        </AuroraBackground>
    }
}
