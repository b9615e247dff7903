pub mod api_client;
pub mod api_utils;
pub mod billing_limit;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod dom;
pub mod embed_origin;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod toast;
