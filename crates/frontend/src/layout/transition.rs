//! Card-to-page transition overlay.
//!
//! A card calls [`TransitionContext::start`] with its on-screen rectangle; the
//! overlay grows from that rectangle to the full viewport while the router
//! navigates, and the destination page calls [`TransitionContext::end`] once
//! it has mounted.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Overlay growth duration
pub const TRANSITION_MS: u32 = 800;

/// Card position at the moment the transition started (viewport px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&web_sys::DomRect> for CardRect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionData {
    pub card_rect: CardRect,
    pub background_image: String,
    pub title: String,
}

#[derive(Clone, Copy)]
pub struct TransitionContext {
    data: RwSignal<Option<TransitionData>>,
    /// `false` while the overlay still sits on the card rectangle
    expanded: RwSignal<bool>,
}

impl TransitionContext {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            expanded: RwSignal::new(false),
        }
    }

    pub fn start(&self, card_rect: CardRect, background_image: String, title: String) {
        self.expanded.set(false);
        self.data.set(Some(TransitionData {
            card_rect,
            background_image,
            title,
        }));
        // Next tick: let the browser paint the start rectangle first
        let expanded = self.expanded;
        Timeout::new(16, move || {
            expanded.try_set(true);
        })
        .forget();
    }

    pub fn end(&self) {
        self.data.set(None);
        self.expanded.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.data.with(Option::is_some)
    }
}

impl Default for TransitionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_transition() -> TransitionContext {
    use_context::<TransitionContext>().expect("TransitionContext context not found")
}

/// Inline style for the growing card
pub fn overlay_style(data: &TransitionData, expanded: bool) -> String {
    let geometry = if expanded {
        "left: 0px; top: 0px; width: 100vw; height: 100vh; border-radius: 0;".to_string()
    } else {
        let r = data.card_rect;
        format!(
            "left: {:.0}px; top: {:.0}px; width: {:.0}px; height: {:.0}px; border-radius: 1rem;",
            r.left, r.top, r.width, r.height
        )
    };
    format!(
        "{} background-image: url('{}'); transition: all {}ms cubic-bezier(0.25, 0.46, 0.45, 0.94);",
        geometry, data.background_image, TRANSITION_MS
    )
}

#[component]
pub fn TransitionOverlay() -> impl IntoView {
    let ctx = use_transition();

    move || {
        ctx.data.get().map(|data| {
            let title = data.title.clone();
            view! {
                <div class="transition-overlay" aria-hidden="true">
                    <div
                        class="transition-overlay__card"
                        style=move || overlay_style(&data, ctx.expanded.get())
                    >
                        <div class="transition-overlay__content">
                            <h1 class="transition-overlay__title">{title}</h1>
                            <div class="transition-overlay__divider"></div>
                            <div class="transition-overlay__spinner"></div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> TransitionData {
        TransitionData {
            card_rect: CardRect {
                left: 120.4,
                top: 80.0,
                width: 600.0,
                height: 400.0,
            },
            background_image: "/api/images/x?w=1200&h=600".into(),
            title: "Garden Pergola Retreat".into(),
        }
    }

    #[test]
    fn test_overlay_starts_on_card() {
        let style = overlay_style(&data(), false);
        assert!(style.starts_with("left: 120px; top: 80px; width: 600px; height: 400px;"));
        assert!(style.contains("transition: all 800ms"));
    }

    #[test]
    fn test_overlay_expands_to_viewport() {
        let style = overlay_style(&data(), true);
        assert!(style.contains("width: 100vw; height: 100vh"));
        assert!(style.contains("url('/api/images/x?w=1200&h=600')"));
    }
}
