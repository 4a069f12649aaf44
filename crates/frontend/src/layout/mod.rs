pub mod aurora;
pub mod footer;
pub mod navbar;
pub mod transition;
