//! Subcategory page: breadcrumbs and the project grid (featured first).
//!
//! - `view.rs`: Leptos component
//! - `route_key.rs`: route params → store key

mod route_key;
mod view;

pub use route_key::subcategory_key;
pub use view::SubcategoryDetails;
