//! Origin of the page embedding the configurator iframe.
//!
//! The host script posts `{ type: "KONFIGRA_PARENT_ORIGIN", origin }` once the
//! iframe loads. The value is kept for the lifetime of the page and sent as
//! `X-Embed-Origin` so the API can check it against the allowed domains.

use std::cell::RefCell;

use contracts::system::embed::{EmbedMessage, DEV_ORIGIN};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static PARENT_ORIGIN: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Register the `message` listener. Called once from the entry point.
pub fn listen_for_parent_origin() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let handler = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |event: web_sys::MessageEvent| {
        let Ok(message) = serde_wasm_bindgen::from_value::<EmbedMessage>(event.data()) else {
            return;
        };
        if let Some(origin) = message.parent_origin() {
            log::info!("Parent origin received: {}", origin);
            PARENT_ORIGIN.with(|cell| *cell.borrow_mut() = Some(origin.to_string()));
        }
    });

    if window
        .add_event_listener_with_callback("message", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Failed to register message listener for parent origin");
    }
    // listener lives as long as the page
    handler.forget();
}

/// Origin reported by the parent page; debug builds always report the dev site
pub fn parent_origin() -> Option<String> {
    if cfg!(debug_assertions) {
        return Some(DEV_ORIGIN.to_string());
    }
    PARENT_ORIGIN.with(|cell| cell.borrow().clone())
}
