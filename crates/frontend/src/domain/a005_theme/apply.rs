use contracts::domain::a005_theme::aggregate::Theme;
use wasm_bindgen::JsCast;

/// Write the theme's custom properties onto `<html>`
pub fn apply_theme(theme: &Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let style = root.style();
    for (name, value) in theme.css_variables() {
        if let Err(e) = style.set_property(name, &value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
    log::debug!("Applied theme {}", theme.name);
}
