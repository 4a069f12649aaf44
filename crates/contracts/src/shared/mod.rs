pub mod image_slot;
pub mod page_state;
pub mod site_route;
