//! Category create/edit dialog
//!
//! - view_model.rs: form state, attribute template rows
//! - view.rs: the form

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
