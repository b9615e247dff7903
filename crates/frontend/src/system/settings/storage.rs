use contracts::shared::currency::Currency;
use serde::{Deserialize, Serialize};
use web_sys::window;

const SETTINGS_KEY: &str = "konfigra_settings";

/// Persisted preferences; `None` means the viewer never picked one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl StoredSettings {
    /// Unreadable or outdated entries fall back to defaults
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_settings() -> StoredSettings {
    get_local_storage()
        .and_then(|s| s.get_item(SETTINGS_KEY).ok().flatten())
        .map(|raw| StoredSettings::parse(&raw))
        .unwrap_or_default()
}

pub fn save_settings(settings: &StoredSettings) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(json) => {
            let _ = storage.set_item(SETTINGS_KEY, &json);
        }
        Err(e) => log::error!("Failed to serialize settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        assert_eq!(
            StoredSettings::parse(r#"{"currency":"EUR"}"#).currency,
            Some(Currency::Eur)
        );
        assert_eq!(StoredSettings::parse(r#"{"currency":"XXX"}"#), StoredSettings::default());
        assert_eq!(StoredSettings::parse("not json"), StoredSettings::default());
        assert_eq!(StoredSettings::parse("{}").currency, None);
    }
}
