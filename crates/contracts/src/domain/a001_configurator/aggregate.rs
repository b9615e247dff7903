use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::ConfigCategory;
use crate::domain::a005_theme::aggregate::Theme;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::EntityMetadata;

/// Configurator as returned by `GET /api/configurator/{publicId}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configurator {
    pub id: String,
    #[serde(default)]
    pub public_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_quotes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_total: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<ConfigCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Configurator {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Product Configurator"
        } else {
            &self.name
        }
    }

    /// Quote requests are allowed unless explicitly disabled
    pub fn quotes_enabled(&self) -> bool {
        self.allow_quotes.unwrap_or(true)
    }

    pub fn total_visible(&self) -> bool {
        self.show_total.unwrap_or(true)
    }
}

/// Edit token returned by `generate-edit-token`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditToken {
    pub token: String,
}

/// Result of `verify-edit-token`: a valid token resolves to public credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenVerification {
    pub valid: bool,
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEditTokenRequest {
    pub configurator_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEditTokenRequest {
    pub token: String,
}

/// Payload for `POST /api/configurator/create`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfiguratorInput {
    pub token: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
}

/// Payload for `PUT /api/configurator/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfiguratorInput {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_quotes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_total: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl UpdateConfiguratorInput {
    pub fn rename(token: &str, id: &str, name: &str) -> Self {
        Self {
            token: token.to_string(),
            id: Some(id.to_string()),
            name: Some(name.trim().to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateConfiguratorRequest {
    pub token: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configurator_defaults() {
        let json = r#"{"id":"cfg1","name":"","categories":null}"#;
        let cfg: Configurator = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.currency, "USD");
        assert_eq!(cfg.display_name(), "Product Configurator");
        assert!(cfg.categories.is_empty());
        assert!(cfg.quotes_enabled());
    }

    #[test]
    fn test_rename_payload_only_carries_name() {
        let input = UpdateConfiguratorInput::rename("tok", "cfg1", "  Desk  ");
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["name"], "Desk");
        assert_eq!(value["id"], "cfg1");
        assert!(value.get("isPublished").is_none());
    }
}
