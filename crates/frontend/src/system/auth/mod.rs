//! Admin and public access to the configurator.
//!
//! `context` resolves the session once on startup, `storage` keeps the
//! credentials in session storage, `url_params` reads them from the address
//! bar and scrubs the secrets afterwards.

pub mod api;
pub mod context;
pub mod guard;
pub mod storage;
pub mod url_params;
