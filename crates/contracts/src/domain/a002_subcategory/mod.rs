pub mod aggregate;

pub use aggregate::{Subcategory, SubcategoryPage, SubcategoryRef};
