//! Copy text through the async Clipboard API

use wasm_bindgen_futures::spawn_local;

/// Copy `text`; `on_done` receives whether the browser accepted it
pub fn copy_to_clipboard<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_done(false);
            return;
        };
        let clipboard = window.navigator().clipboard();
        let copied = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .is_ok();
        if !copied {
            log::warn!("Clipboard write was rejected");
        }
        on_done(copied);
    });
}
