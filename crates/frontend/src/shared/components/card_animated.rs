//! CardAnimated: thaw `Card` that fades in on mount.
//!
//! Cards in a grid pass an increasing `delay_ms` (see [`stagger_delay_ms`]) so
//! they appear one after another. The `card-appear` keyframes live in `styles/main.css`.

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards
pub const STAGGER_STEP_MS: u32 = 80;
/// Cards past this index appear together
pub const STAGGER_MAX_STEPS: usize = 8;

pub fn stagger_delay_ms(index: usize) -> u32 {
    index.min(STAGGER_MAX_STEPS) as u32 * STAGGER_STEP_MS
}

#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.4s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(2), 160);
        assert_eq!(stagger_delay_ms(50), STAGGER_MAX_STEPS as u32 * STAGGER_STEP_MS);
    }
}
