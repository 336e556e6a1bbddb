//! Display preferences kept in the browser.

use finanzas_core::format::{currency_symbol_for, format_money};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::storage::{load_local, save_local};

const SETTINGS_KEY: &str = "settings";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
    pub currency_symbol: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
        }
    }
}

impl AppSettings {
    pub fn with_currency(code: &str) -> Self {
        Self {
            currency_code: code.to_string(),
            currency_symbol: currency_symbol_for(code).to_string(),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        format_money(amount, &self.currency_symbol)
    }
}

pub fn load_settings() -> AppSettings {
    load_local(SETTINGS_KEY)
        .and_then(|raw| serde_json::from_str::<AppSettings>(&raw).ok())
        .unwrap_or_default()
}

pub fn save_settings(settings: &AppSettings) {
    if let Ok(raw) = serde_json::to_string(settings) {
        save_local(SETTINGS_KEY, &raw);
    }
}

/// Current preferences, or the defaults outside the provider.
#[hook]
pub fn use_settings() -> AppSettings {
    use_context::<UseStateHandle<AppSettings>>()
        .map(|handle| (*handle).clone())
        .unwrap_or_default()
}
