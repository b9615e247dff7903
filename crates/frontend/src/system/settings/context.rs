use contracts::shared::currency::Currency;
use leptos::prelude::*;

use super::storage::{load_settings, save_settings, StoredSettings};

#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub currency: RwSignal<Currency>,
    /// Set once the viewer picked a currency; the configurator default no longer applies
    chosen: RwSignal<bool>,
}

impl Default for SettingsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsContext {
    pub fn new() -> Self {
        let stored = load_settings();
        Self {
            currency: RwSignal::new(stored.currency.unwrap_or_default()),
            chosen: RwSignal::new(stored.currency.is_some()),
        }
    }

    /// Use the configurator's currency unless the viewer already chose one
    pub fn apply_configurator_currency(&self, code: &str) {
        if self.chosen.get_untracked() {
            return;
        }
        if let Some(currency) = Currency::from_code(code) {
            self.currency.set(currency);
        }
    }

    pub fn set_currency(&self, currency: Currency) {
        self.currency.set(currency);
        self.chosen.set(true);
        save_settings(&StoredSettings {
            currency: Some(currency),
        });
    }

    pub fn format_price(&self, amount: f64) -> String {
        self.currency.get().format(amount)
    }
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found in component tree")
}
