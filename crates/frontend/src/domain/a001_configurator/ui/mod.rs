pub mod list;
pub mod page;
pub mod panel;
pub mod share;
pub mod summary;
pub mod title;
