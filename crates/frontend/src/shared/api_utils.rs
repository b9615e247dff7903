//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL baked in at build time, e.g. `https://api.konfigra.app`
const API_BASE_OVERRIDE: Option<&str> = option_env!("KONFIGRA_API_BASE_URL");

/// Get the base URL for API requests
///
/// Uses `KONFIGRA_API_BASE_URL` when the bundle was built with it, otherwise
/// constructs the URL from the current window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&endpoints::category::list(&configurator_id));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
