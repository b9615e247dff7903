pub mod details;
pub mod section;
