pub mod api_utils;
pub mod components;
pub mod content_page;
pub mod document;
