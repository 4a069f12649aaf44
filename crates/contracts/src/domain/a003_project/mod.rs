pub mod aggregate;
pub mod ordering;

pub use aggregate::{FeaturedProject, Project, ProjectCard, ProjectDetails};
pub use ordering::{listing_order, sort_for_listing, Listed};
