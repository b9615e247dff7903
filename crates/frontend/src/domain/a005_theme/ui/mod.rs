mod dialog;

pub use dialog::ThemeDialog;
