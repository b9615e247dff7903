//! Configurator page
//!
//! - view_model.rs: selection state, loading and catalogue mutations
//! - view.rs: screens (loading, errors, configurator) and admin dialogs

mod view;
mod view_model;

pub use view::ConfiguratorPage;
pub use view_model::{ConfiguratorPageViewModel, LoadStatus};
