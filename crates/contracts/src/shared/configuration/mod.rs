//! Selection engine of the configurator.
//!
//! Pure state and rules: which options may be combined, what happens to
//! other selections when one changes, and which options are picked
//! automatically. The frontend owns a [`ConfigState`] and turns the returned
//! [`ConfigNotice`]s into toasts.

pub mod attributes;
pub mod auto_select;
pub mod compatibility;
pub mod notice;
pub mod selected_config;
pub mod state;
pub mod summary;
pub mod validation;

pub use auto_select::{auto_select, initial_selection, pick_auto_option};
pub use compatibility::{are_incompatible, is_option_incompatible_with_selection};
pub use notice::ConfigNotice;
pub use selected_config::SelectedConfig;
pub use state::{ConfigAction, ConfigState, SelectOutcome};
pub use summary::{calculate_total, summary_items, SummaryItem};
