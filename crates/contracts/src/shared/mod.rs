pub mod api;
pub mod configuration;
pub mod currency;
