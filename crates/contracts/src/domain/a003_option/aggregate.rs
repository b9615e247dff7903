use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::serde_helpers::{lenient_price, null_as_default};
use crate::domain::common::EntityMetadata;

// ============================================================================
// Incompatibility
// ============================================================================

/// Short description of the option on the other side of an incompatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompatibleOptionSummary {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub category_id: String,
}

/// One stored incompatibility edge.
///
/// Only one side needs to be recorded; see
/// [`crate::shared::configuration::compatibility::are_incompatible`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompatibilityRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub option_id: String,
    pub incompatible_option_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incompatible_option: Option<IncompatibleOptionSummary>,
}

impl IncompatibilityRecord {
    /// Draft record created by the admin form; the API assigns the id
    pub fn draft(option_id: impl Into<String>, incompatible_option_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            option_id: option_id.into(),
            incompatible_option_id: incompatible_option_id.into(),
            severity: None,
            message: None,
            incompatible_option: None,
        }
    }
}

// ============================================================================
// Type specific fields
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "cm".to_string()
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            unit: default_unit(),
        }
    }
}

// ============================================================================
// Option
// ============================================================================

/// One concrete choice within a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOption {
    pub id: String,
    #[serde(default)]
    pub category_id: String,
    pub label: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub order_index: i32,

    // Values keyed by the parent category's attribute template
    #[serde(default, deserialize_with = "null_as_default")]
    pub attribute_values: BTreeMap<String, serde_json::Value>,

    // Type specific fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub incompatible_with: Vec<IncompatibilityRecord>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_true() -> bool {
    true
}

impl ConfigOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price,
            is_active: true,
            in_stock: true,
            ..Default::default()
        }
    }

    /// Record (one-sided) that this option cannot be combined with `other_id`
    pub fn with_incompatibility(mut self, other_id: impl Into<String>) -> Self {
        let record = IncompatibilityRecord::draft(self.id.clone(), other_id);
        self.incompatible_with.push(record);
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Whether this option itself lists `other_id`
    pub fn lists_incompatibility_with(&self, other_id: &str) -> bool {
        self.incompatible_with
            .iter()
            .any(|r| r.incompatible_option_id == other_id)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Type specific fields as sent by the admin forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wattage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl TypeFields {
    pub fn of(option: &ConfigOption) -> Self {
        Self {
            hex_color: option.hex_color.clone(),
            voltage: option.voltage.clone(),
            wattage: option.wattage.clone(),
            material_type: option.material_type.clone(),
            finish_type: option.finish_type.clone(),
            text_value: option.text_value.clone(),
            max_characters: option.max_characters,
            dimensions: option.dimensions.clone(),
        }
    }
}

/// Payload for `POST /api/option/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptionInput {
    pub token: String,
    pub category_id: String,
    pub label: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_default: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_values: BTreeMap<String, serde_json::Value>,
    pub incompatible_with: Vec<IncompatibilityRecord>,
    #[serde(flatten)]
    pub type_fields: TypeFields,
}

impl CreateOptionInput {
    pub fn from_option(token: &str, category_id: &str, option: &ConfigOption) -> Self {
        Self {
            token: token.to_string(),
            category_id: category_id.to_string(),
            label: option.label.clone(),
            price: option.price,
            description: option.description.clone(),
            sku: option.sku.clone(),
            image_url: option.image_url.clone(),
            is_default: option.is_default,
            attribute_values: option.attribute_values.clone(),
            incompatible_with: option.incompatible_with.clone(),
            type_fields: TypeFields::of(option),
        }
    }
}

/// Payload for `PUT /api/option/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionInput {
    pub token: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_values: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incompatible_with: Option<Vec<IncompatibilityRecord>>,
    #[serde(flatten)]
    pub type_fields: TypeFields,
}

impl UpdateOptionInput {
    pub fn from_option(token: &str, option: &ConfigOption) -> Self {
        Self {
            token: token.to_string(),
            id: option.id.clone(),
            label: Some(option.label.clone()),
            description: option.description.clone(),
            price: Some(option.price),
            sku: option.sku.clone(),
            image_url: option.image_url.clone(),
            is_default: Some(option.is_default),
            order_index: None,
            in_stock: Some(option.in_stock),
            attribute_values: Some(option.attribute_values.clone()),
            incompatible_with: Some(option.incompatible_with.clone()),
            type_fields: TypeFields::of(option),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_option() {
        let json = r#"{"id":"o1","label":"Red","price":"12.50","incompatibleWith":null}"#;
        let option: ConfigOption = serde_json::from_str(json).unwrap();
        assert_eq!(option.id, "o1");
        assert_eq!(option.price, 12.5);
        assert!(option.is_active);
        assert!(option.incompatible_with.is_empty());
        assert!(option.attribute_values.is_empty());
    }

    #[test]
    fn test_deserialize_incompatibility_records() {
        let json = r#"{
            "id": "red",
            "label": "Red",
            "price": 0,
            "incompatibleWith": [
                {"id": "i1", "optionId": "red", "incompatibleOptionId": "matte"}
            ]
        }"#;
        let option: ConfigOption = serde_json::from_str(json).unwrap();
        assert!(option.lists_incompatibility_with("matte"));
        assert!(!option.lists_incompatibility_with("gloss"));
        assert!(option.is_free());
    }

    #[test]
    fn test_create_input_is_camel_case() {
        let option = ConfigOption::new("", "Matte", 5.0).with_incompatibility("red");
        let input = CreateOptionInput::from_option("tok", "finish", &option);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["categoryId"], "finish");
        assert_eq!(value["isDefault"], false);
        assert_eq!(value["incompatibleWith"][0]["incompatibleOptionId"], "red");
        assert!(value.get("attributeValues").is_none());
    }

    #[test]
    fn test_update_input_flattens_type_fields() {
        let mut option = ConfigOption::new("o1", "Warm white", 12.0);
        option.wattage = Some("60".to_string());
        option.dimensions = Some(Dimensions {
            width: 10.0,
            height: 20.0,
            ..Default::default()
        });
        let value = serde_json::to_value(UpdateOptionInput::from_option("tok", &option)).unwrap();
        assert_eq!(value["wattage"], "60");
        assert_eq!(value["dimensions"]["unit"], "cm");
        assert!(value.get("hexColor").is_none());
        assert_eq!(value["inStock"], true);
    }
}
