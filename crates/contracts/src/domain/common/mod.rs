//! Common types shared by all content entities

pub mod content_id;
pub mod image_ref;
pub mod slug;

// Re-exports
pub use content_id::ContentId;
pub use image_ref::{Hotspot, ImageAsset, ImageRef};
pub use slug::{is_canonical_slug, is_valid_slug, slugify, Slug, SLUG_MAX_LEN};
