pub mod details;
pub mod showcase;
