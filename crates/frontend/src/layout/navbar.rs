//! Fixed top navigation that condenses as the page scrolls.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Scroll stage of the navbar, driven by the vertical scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScrollStage {
    /// < 50px: fully transparent
    Top = 0,
    /// < 150px
    Translucent = 1,
    /// < 300px: gold glow appears
    Solid = 2,
    /// >= 300px: compact padding
    Compact = 3,
}

impl ScrollStage {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y < 50.0 {
            ScrollStage::Top
        } else if scroll_y < 150.0 {
            ScrollStage::Translucent
        } else if scroll_y < 300.0 {
            ScrollStage::Solid
        } else {
            ScrollStage::Compact
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != ScrollStage::Top
    }

    pub fn blur_px(&self) -> u32 {
        match self {
            ScrollStage::Top => 0,
            ScrollStage::Translucent => 8,
            ScrollStage::Solid => 12,
            ScrollStage::Compact => 16,
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ScrollStage::Top => "rgba(0, 0, 0, 0)",
            ScrollStage::Translucent => "rgba(0, 0, 0, 0.3)",
            ScrollStage::Solid => "rgba(0, 0, 0, 0.6)",
            ScrollStage::Compact => "rgba(0, 0, 0, 0.8)",
        }
    }

    pub fn has_glow(&self) -> bool {
        *self >= ScrollStage::Solid
    }

    pub fn padding_top_px(&self) -> u32 {
        if *self == ScrollStage::Compact {
            8
        } else {
            24
        }
    }

    /// Inline style of the navbar body
    pub fn body_style(&self) -> String {
        let blur = match self.blur_px() {
            0 => "none".to_string(),
            px => format!("blur({}px)", px),
        };
        let shadow = match (self.is_visible(), self.has_glow()) {
            (false, _) => "none".to_string(),
            (true, false) => "0 8px 32px rgba(0, 0, 0, 0.3)".to_string(),
            (true, true) => "0 8px 32px rgba(0, 0, 0, 0.3), 0 0 20px rgba(207, 145, 96, 0.2)"
                .to_string(),
        };
        format!(
            "background: {}; backdrop-filter: {}; box-shadow: {};",
            self.background(),
            blur,
            shadow
        )
    }
}

pub struct NavItem {
    pub name: &'static str,
    pub link: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", link: "/" },
    NavItem { name: "Outdoor Design", link: "/outdoor-design" },
    NavItem { name: "Indoor Design", link: "/indoor-design" },
    NavItem { name: "About", link: "/about" },
    NavItem { name: "Contact", link: "/contact" },
];

/// Section links stay highlighted on their nested pages
pub fn is_active_link(pathname: &str, link: &str) -> bool {
    if link == "/" {
        return pathname == "/";
    }
    pathname == link || pathname.starts_with(&format!("{}/", link))
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let stage = RwSignal::new(ScrollStage::from_offset(current_scroll_y()));
    let menu_open = RwSignal::new(false);
    let location = use_location();

    let handle = window_event_listener(ev::scroll, move |_| {
        let next = ScrollStage::from_offset(current_scroll_y());
        if stage.get_untracked() != next {
            stage.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    // Close the mobile menu after navigation
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    view! {
        <div
            class="navbar"
            style=move || format!("padding-top: {}px;", stage.get().padding_top_px())
        >
            <nav
                class="navbar__body"
                class:navbar__body--compact=move || stage.get() == ScrollStage::Compact
                style=move || stage.get().body_style()
                aria-label="Main navigation"
            >
                <A href="/" attr:class="navbar__logo">"Sivory Design"</A>
                <div class="navbar__items" class:navbar__items--open=move || menu_open.get()>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let link = item.link;
                            view! {
                                <A
                                    href=link
                                    attr:class=move || {
                                        if is_active_link(&location.pathname.get(), link) {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                >
                                    {item.name}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_thresholds() {
        assert_eq!(ScrollStage::from_offset(0.0), ScrollStage::Top);
        assert_eq!(ScrollStage::from_offset(49.9), ScrollStage::Top);
        assert_eq!(ScrollStage::from_offset(50.0), ScrollStage::Translucent);
        assert_eq!(ScrollStage::from_offset(149.0), ScrollStage::Translucent);
        assert_eq!(ScrollStage::from_offset(150.0), ScrollStage::Solid);
        assert_eq!(ScrollStage::from_offset(299.0), ScrollStage::Solid);
        assert_eq!(ScrollStage::from_offset(300.0), ScrollStage::Compact);
        assert_eq!(ScrollStage::from_offset(5000.0), ScrollStage::Compact);
    }

    #[test]
    fn test_stage_styles() {
        assert_eq!(ScrollStage::Translucent.blur_px(), 8);
        assert_eq!(ScrollStage::Compact.background(), "rgba(0, 0, 0, 0.8)");
        assert!(!ScrollStage::Translucent.has_glow());
        assert!(ScrollStage::Solid.has_glow());
        assert_eq!(ScrollStage::Compact.padding_top_px(), 8);
        assert_eq!(ScrollStage::Solid.padding_top_px(), 24);
        assert!(ScrollStage::Top.body_style().contains("backdrop-filter: none"));
    }

    #[test]
    fn test_active_link() {
        assert!(is_active_link("/", "/"));
        assert!(!is_active_link("/about", "/"));
        assert!(is_active_link("/outdoor-design/pergolas", "/outdoor-design"));
        assert!(!is_active_link("/outdoor-designer", "/outdoor-design"));
    }
}
