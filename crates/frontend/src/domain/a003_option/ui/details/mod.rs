//! Option create/edit dialog
//!
//! - view_model.rs: form state, price and attribute parsing, compatibility picks
//! - view.rs: the form, compatibility picker and image upload

mod view;
mod view_model;

pub use view::OptionDetails;
pub use view_model::OptionDetailsViewModel;
