//! Labelled form fields bound straight to view model signals

pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::FormCheckbox;
pub use input::FormInput;
pub use select::FormSelect;
pub use textarea::FormTextarea;
