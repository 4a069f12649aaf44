pub mod breadcrumbs;
pub mod card_animated;
pub mod project_card;
pub mod status;
