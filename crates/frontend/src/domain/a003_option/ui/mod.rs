pub mod card;
pub mod details;
