pub mod auth;
pub mod embed;
