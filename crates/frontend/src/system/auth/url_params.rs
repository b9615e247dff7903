use contracts::system::auth::{strip_sensitive_params, UrlParams};
use wasm_bindgen::JsValue;

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Auth parameters of the current page URL
pub fn read_url_params() -> UrlParams {
    let search = current_search();
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return UrlParams::default();
    }

    match serde_qs::from_str::<UrlParams>(query) {
        Ok(params) => params,
        Err(e) => {
            // repeated keys are rejected by serde_qs; fall back to first-wins
            log::warn!("Failed to parse query string with serde_qs: {}", e);
            let pairs: Vec<(String, String)> = query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .map(|(k, v)| {
                    let value = urlencoding::decode(&v.replace('+', " "))
                        .map(|d| d.into_owned())
                        .unwrap_or_else(|_| v.to_string());
                    (k.to_string(), value)
                })
                .collect();
            UrlParams::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        }
    }
}

/// Replace the address bar entry with one that carries no token or public key
pub fn strip_sensitive_from_address_bar() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(remaining) = strip_sensitive_params(&current_search()) else {
        return;
    };

    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let url = if remaining.is_empty() {
        format!("{}{}", path, hash)
    } else {
        format!("{}?{}{}", path, remaining, hash)
    };

    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("Failed to replace history state: {:?}", e);
            }
        }
        Err(e) => log::warn!("History API unavailable: {:?}", e),
    }
}
