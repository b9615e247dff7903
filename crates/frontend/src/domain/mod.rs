pub mod a001_configurator;
pub mod a002_category;
pub mod a003_option;
pub mod a004_quote;
pub mod a005_theme;
pub mod a006_email_template;
pub mod a007_file;
pub mod a008_client;
