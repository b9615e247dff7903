//! Viewer preferences kept in local storage (display currency)

pub mod context;
pub mod storage;
pub mod view;

pub use context::{use_settings, SettingsContext};
