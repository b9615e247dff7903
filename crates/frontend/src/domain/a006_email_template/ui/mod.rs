mod dialog;

pub use dialog::EmailTemplatesDialog;
