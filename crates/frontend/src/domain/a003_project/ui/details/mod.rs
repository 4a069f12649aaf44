//! Project details page.
//!
//! - `view_model.rs`: route key and presentation helpers (pure, tested natively)
//! - `view.rs`: Leptos component

mod view;
mod view_model;

pub use view::ProjectPage;
pub use view_model::{detail_rows, kicker, project_key};
