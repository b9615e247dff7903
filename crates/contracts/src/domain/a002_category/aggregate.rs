use serde::{Deserialize, Serialize};

use crate::domain::a003_option::aggregate::ConfigOption;
use crate::domain::common::serde_helpers::null_as_default;
use crate::domain::common::EntityMetadata;
use crate::enums::{AttributeType, CategoryType};

// ============================================================================
// Attribute template
// ============================================================================

/// Typed attribute that every option of a category is expected to carry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub attribute_type: AttributeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Allowed values for `select`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AttributeDefinition {
    pub fn new(key: impl Into<String>, label: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            attribute_type,
            ..Default::default()
        }
    }

    /// Derive a template key from a label: "Max Power (W)" -> "max_power_w"
    pub fn key_from_label(label: &str) -> String {
        let mut key = String::with_capacity(label.len());
        let mut pending_sep = false;
        for c in label.trim().chars() {
            if c.is_ascii_alphanumeric() {
                if pending_sep && !key.is_empty() {
                    key.push('_');
                }
                pending_sep = false;
                key.push(c.to_ascii_lowercase());
            } else {
                pending_sep = true;
            }
        }
        key
    }
}

// ============================================================================
// Category
// ============================================================================

/// A configurable axis of the product (e.g. Color)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigCategory {
    pub id: String,
    #[serde(default)]
    pub configurator_id: String,
    pub name: String,
    #[serde(default)]
    pub category_type: CategoryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_primary: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_required: bool,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_option_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<ConfigOption>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes_template: Vec<AttributeDefinition>,
    /// Categories that may hold incompatibilities with this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_categories: Vec<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ConfigCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_options(mut self, options: Vec<ConfigOption>) -> Self {
        self.options = options;
        self
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn find_option(&self, option_id: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Primary and required categories must always hold a selection
    pub fn must_select(&self) -> bool {
        self.is_primary || self.is_required
    }

    /// Whether `other` is in scope for incompatibility authoring.
    ///
    /// An empty related set means every other category is in scope.
    pub fn relates_to(&self, other_id: &str) -> bool {
        other_id != self.id
            && (self.related_categories.is_empty()
                || self.related_categories.iter().any(|id| id == other_id))
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Payload for `POST /api/category/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub token: String,
    pub configurator_id: String,
    pub name: String,
    pub category_type: CategoryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_primary: bool,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes_template: Vec<AttributeDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_categories: Vec<String>,
}

impl CreateCategoryInput {
    pub fn from_category(token: &str, category: &ConfigCategory) -> Self {
        Self {
            token: token.to_string(),
            configurator_id: category.configurator_id.clone(),
            name: category.name.trim().to_string(),
            category_type: category.category_type,
            description: category.description.clone(),
            is_primary: category.is_primary,
            is_required: category.is_required,
            attributes_template: category.attributes_template.clone(),
            related_categories: category.related_categories.clone(),
        }
    }
}

/// Payload for `PUT /api/category/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    pub token: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CategoryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_template: Option<Vec<AttributeDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_categories: Option<Vec<String>>,
}

impl UpdateCategoryInput {
    pub fn from_category(token: &str, category: &ConfigCategory) -> Self {
        Self {
            token: token.to_string(),
            id: category.id.clone(),
            name: Some(category.name.trim().to_string()),
            category_type: Some(category.category_type),
            description: category.description.clone(),
            order_index: None,
            is_primary: Some(category.is_primary),
            is_required: Some(category.is_required),
            default_option_id: category.default_option_id.clone(),
            attributes_template: Some(category.attributes_template.clone()),
            related_categories: Some(category.related_categories.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_options_become_empty() {
        let json = r#"{"id":"c1","name":"Color","categoryType":"COLOR","options":null,"isPrimary":null}"#;
        let category: ConfigCategory = serde_json::from_str(json).unwrap();
        assert!(category.options.is_empty());
        assert!(!category.is_primary);
        assert_eq!(category.category_type, CategoryType::Color);
    }

    #[test]
    fn test_attribute_template_type_field() {
        let json = r#"{
            "id": "c1",
            "name": "Power",
            "attributesTemplate": [{"key":"watts","label":"Watts","type":"number","min":0,"max":2000}]
        }"#;
        let category: ConfigCategory = serde_json::from_str(json).unwrap();
        let attr = &category.attributes_template[0];
        assert_eq!(attr.attribute_type, AttributeType::Number);
        assert_eq!(attr.max, Some(2000.0));
    }

    #[test]
    fn test_relates_to() {
        let mut category = ConfigCategory::new("color", "Color");
        assert!(category.relates_to("finish"));
        assert!(!category.relates_to("color"));

        category.related_categories = vec!["finish".to_string()];
        assert!(category.relates_to("finish"));
        assert!(!category.relates_to("size"));
    }

    #[test]
    fn test_key_from_label() {
        assert_eq!(AttributeDefinition::key_from_label("Max Power (W)"), "max_power_w");
        assert_eq!(AttributeDefinition::key_from_label("  Width "), "width");
        assert_eq!(AttributeDefinition::key_from_label("---"), "");
    }
}
