pub mod api;
pub mod apply;
pub mod ui;
