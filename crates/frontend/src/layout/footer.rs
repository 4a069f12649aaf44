use contracts::domain::a001_category::CategoryKind;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::navbar::NAV_ITEMS;

/// Which page the footer closes; drives the call-to-action copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterVariant {
    Home,
    Outdoor,
    Indoor,
}

impl FooterVariant {
    pub fn for_category(category: CategoryKind) -> Self {
        match category {
            CategoryKind::Outdoor => FooterVariant::Outdoor,
            CategoryKind::Indoor => FooterVariant::Indoor,
        }
    }

    pub fn space_label(&self) -> &'static str {
        match self {
            FooterVariant::Home => "Your",
            FooterVariant::Outdoor => "Your Outdoor",
            FooterVariant::Indoor => "Your Indoor",
        }
    }

    pub fn pitch(&self) -> &'static str {
        match self {
            FooterVariant::Home => {
                "From the first sketch to the final bolt, we design and build spaces that last."
            }
            FooterVariant::Outdoor => {
                "Let's create your perfect outdoor living experience with our premium pergola designs and complete outdoor solutions."
            }
            FooterVariant::Indoor => {
                "Let's create sophisticated indoor environments with our custom architectural elements and premium design solutions."
            }
        }
    }
}

#[component]
pub fn Footer(#[prop(optional)] variant: Option<FooterVariant>) -> impl IntoView {
    let variant = variant.unwrap_or(FooterVariant::Home);

    view! {
        <footer class="footer" data-variant=format!("{:?}", variant).to_lowercase()>
            <section class="footer__cta">
                <span class="footer__eyebrow">"Ready to Get Started?"</span>
                <h2 class="footer__heading">
                    "Transform " {variant.space_label()} " Space"
                </h2>
                <p class="footer__pitch">{variant.pitch()}</p>
                <div class="footer__actions">
                    <A href="/contact" attr:class="button button--primary">"Get Your Free Quote"</A>
                    <a href="tel:+15551234567" class="button button--ghost">"Call Now"</a>
                </div>
            </section>

            <div class="footer__grid">
                <div class="footer__brand">
                    <h3>"Sivory Design"</h3>
                    <p>"Pergolas and architectural elements crafted to perfection."</p>
                </div>
                <nav class="footer__links" aria-label="Quick links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| view! { <li><A href=item.link>{item.name}</A></li> })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="footer__contact">
                    <h4>"Get In Touch"</h4>
                    <p>"Phone: +1 (555) 123-4567"</p>
                    <p>"Email: info@sivorydesign.com"</p>
                </div>
            </div>

            <div class="footer__bottom">
                "© 2024 Sivory Design. All rights reserved. Crafted with precision and passion."
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_for_category() {
        assert_eq!(FooterVariant::for_category(CategoryKind::Outdoor), FooterVariant::Outdoor);
        assert_eq!(FooterVariant::for_category(CategoryKind::Indoor), FooterVariant::Indoor);
        assert!(FooterVariant::Outdoor.pitch().contains("outdoor living"));
        assert_eq!(FooterVariant::Indoor.space_label(), "Your Indoor");
    }
}
