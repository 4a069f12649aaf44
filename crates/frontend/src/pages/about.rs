use leptos::prelude::*;

use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::Footer;
use crate::shared::components::card_animated::{stagger_delay_ms, CardAnimated};
use crate::shared::document::set_title;

const VALUES: [(&str, &str); 3] = [
    (
        "Quality Craftsmanship",
        "Every project is executed with meticulous attention to detail and premium materials.",
    ),
    (
        "Innovation",
        "We continuously push boundaries to create unique, cutting-edge design solutions.",
    ),
    (
        "Client Partnership",
        "Your vision guides our process, ensuring results that exceed your expectations.",
    ),
];

const STATS: [(&str, &str); 2] = [("15+", "Years Experience"), ("500+", "Projects Completed")];

#[component]
#[allow(non_snake_case)]
pub fn AboutPage() -> impl IntoView {
    Effect::new(move |_| set_title(Some("About")));

    view! {
        <AuroraBackground plain=true>
            <section class="page-hero">
                <h1 class="page-hero__title">"About " <span class="accent">"Sivory Design"</span></h1>
                <p class="page-hero__lead">
                    "Crafting exceptional outdoor and indoor spaces with passion, precision, and years of expertise that transforms visions into reality."
                </p>
            </section>

            <section class="about-story">
                <h2>"Our Story"</h2>
                <p>
                    "With over a decade of experience in architectural design and construction, Sivory Design has become synonymous with excellence in creating beautiful, functional outdoor and indoor spaces that exceed expectations."
                </p>
                <p>
                    "Our team of skilled craftsmen and designers work tirelessly to bring your vision to life, ensuring every project meets our high standards of quality, innovation, and aesthetic appeal."
                </p>
                <div class="about-stats">
                    {STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="about-stats__item">
                                <h3>{*value}</h3>
                                <p>{*label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <blockquote>
                    "Excellence is not a skill, it's an attitude that we bring to every project, every detail, every moment."
                    <footer>"— Sivory Design Team"</footer>
                </blockquote>
            </section>

            <section class="about-values">
                <h2>"Our Values"</h2>
                <div class="about-values__grid">
                    {VALUES
                        .iter()
                        .enumerate()
                        .map(|(i, (title, description))| view! {
                            <CardAnimated delay_ms=stagger_delay_ms(i)>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </CardAnimated>
                        })
                        .collect_view()}
                </div>
            </section>

            <Footer />
        </AuroraBackground>
    }
}
