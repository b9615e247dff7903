mod account;

pub use account::AccountDialog;
