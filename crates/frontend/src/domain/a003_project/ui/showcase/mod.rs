//! Home page showcase: featured projects in three parallax rows.

mod parallax;
mod view;

pub use parallax::{ParallaxProfile, ParallaxTransform, SHOWCASE_LIMIT};
pub use view::FeaturedShowcase;
