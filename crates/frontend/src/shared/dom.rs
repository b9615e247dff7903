//! Small browser helpers

/// `window.confirm`; false when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

/// Full page navigation
pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::warn!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}
