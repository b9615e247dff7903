use contracts::domain::a002_category::aggregate::{AttributeDefinition, ConfigCategory};
use contracts::domain::a003_option::aggregate::{ConfigOption, Dimensions, IncompatibilityRecord};
use contracts::enums::{AttributeType, CategoryType};
use contracts::shared::api::ApiClientError;
use contracts::shared::configuration::attributes::validate_attribute_values;
use contracts::shared::configuration::compatibility::{compatibility_candidates, incompatible_option_ids};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;

/// Which type specific inputs the form shows for a category type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeFieldSet {
    pub color: bool,
    pub power: bool,
    pub material: bool,
    pub finish: bool,
    pub text: bool,
    pub dimensions: bool,
}

impl TypeFieldSet {
    pub fn for_type(category_type: CategoryType) -> Self {
        let mut set = Self::default();
        match category_type {
            CategoryType::Color => set.color = true,
            CategoryType::Power => set.power = true,
            CategoryType::Material => set.material = true,
            CategoryType::Finish => set.finish = true,
            CategoryType::Text => set.text = true,
            CategoryType::Dimension => set.dimensions = true,
            _ => {}
        }
        set
    }
}

/// Price input: a non-negative number, blank means free
pub fn parse_price(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        Ok(_) => Err("Price must be zero or more".to_string()),
        Err(_) => Err("Price must be a number".to_string()),
    }
}

/// Raw form text to the JSON value stored for an attribute.
///
/// Unparseable numbers stay strings so validation reports them.
pub fn attribute_value_from_input(def: &AttributeDefinition, raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let value = match def.attribute_type {
        AttributeType::Number => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        AttributeType::Boolean => Value::Bool(raw == "true"),
        _ => Value::String(raw.to_string()),
    };
    Some(value)
}

fn attribute_value_to_input(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn optional_text(signal: RwSignal<String>) -> Option<String> {
    Some(signal.get_untracked().trim().to_string()).filter(|s| !s.is_empty())
}

/// Options of one category offered by the compatibility picker
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateView {
    pub category_id: String,
    pub category_name: String,
    pub options: Vec<(String, String)>,
}

#[derive(Clone)]
pub struct OptionDetailsViewModel {
    pub page: ConfiguratorPageViewModel,
    pub category: ConfigCategory,
    pub existing: Option<ConfigOption>,

    pub label: RwSignal<String>,
    pub price: RwSignal<String>,
    pub description: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub is_default: RwSignal<bool>,
    pub in_stock: RwSignal<bool>,

    pub hex_color: RwSignal<String>,
    pub voltage: RwSignal<String>,
    pub wattage: RwSignal<String>,
    pub material_type: RwSignal<String>,
    pub finish_type: RwSignal<String>,
    pub text_value: RwSignal<String>,
    pub max_characters: RwSignal<String>,
    pub width: RwSignal<String>,
    pub height: RwSignal<String>,
    pub dimension_unit: RwSignal<String>,

    /// Raw inputs keyed by attribute key
    pub attribute_inputs: RwSignal<BTreeMap<String, String>>,
    /// Option ids picked as incompatible
    pub incompatible: RwSignal<BTreeSet<String>>,
    pub search: RwSignal<String>,
    pub show_all: RwSignal<bool>,

    pub uploading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl OptionDetailsViewModel {
    pub fn new(page: ConfiguratorPageViewModel, category: ConfigCategory, existing: Option<ConfigOption>) -> Self {
        let base = existing.clone().unwrap_or_else(|| ConfigOption::new("", "", 0.0));
        let text = |v: &Option<String>| RwSignal::new(v.clone().unwrap_or_default());
        let dims = base.dimensions.clone();

        let attribute_inputs = base
            .attribute_values
            .iter()
            .map(|(k, v)| (k.clone(), attribute_value_to_input(v)))
            .collect();
        let incompatible = incompatible_option_ids(&base).into_iter().collect();

        Self {
            label: RwSignal::new(base.label.clone()),
            price: RwSignal::new(if existing.is_some() { base.price.to_string() } else { String::new() }),
            description: text(&base.description),
            sku: text(&base.sku),
            image_url: text(&base.image_url),
            is_default: RwSignal::new(base.is_default),
            in_stock: RwSignal::new(base.in_stock),
            hex_color: text(&base.hex_color),
            voltage: text(&base.voltage),
            wattage: text(&base.wattage),
            material_type: text(&base.material_type),
            finish_type: text(&base.finish_type),
            text_value: text(&base.text_value),
            max_characters: RwSignal::new(base.max_characters.map(|n| n.to_string()).unwrap_or_default()),
            width: RwSignal::new(dims.as_ref().map(|d| d.width.to_string()).unwrap_or_default()),
            height: RwSignal::new(dims.as_ref().map(|d| d.height.to_string()).unwrap_or_default()),
            dimension_unit: RwSignal::new(dims.map(|d| d.unit).unwrap_or_else(|| Dimensions::default().unit)),
            attribute_inputs: RwSignal::new(attribute_inputs),
            incompatible: RwSignal::new(incompatible),
            search: RwSignal::new(String::new()),
            show_all: RwSignal::new(false),
            uploading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            page,
            category,
            existing,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.is_some()
    }

    pub fn type_fields(&self) -> TypeFieldSet {
        TypeFieldSet::for_type(self.category.category_type)
    }

    pub fn attribute_input(&self, key: &str) -> String {
        self.attribute_inputs.with(|m| m.get(key).cloned().unwrap_or_default())
    }

    pub fn set_attribute_input(&self, key: &str, raw: String) {
        self.attribute_inputs.update(|m| {
            m.insert(key.to_string(), raw);
        });
    }

    pub fn toggle_incompatible(&self, option_id: &str) {
        self.incompatible.update(|ids| {
            if !ids.remove(option_id) {
                ids.insert(option_id.to_string());
            }
        });
    }

    /// Candidate options grouped by category, filtered by search and related set
    pub fn candidates(&self) -> Signal<Vec<CandidateView>> {
        let state = self.page.state;
        let category_id = self.category.id.clone();
        let search = self.search;
        let show_all = self.show_all;
        Signal::derive(move || {
            let search = search.get();
            let show_all = show_all.get();
            state.with(|s| {
                compatibility_candidates(&s.categories, &category_id, show_all, &search)
                    .into_iter()
                    .map(|group| CandidateView {
                        category_id: group.category.id.clone(),
                        category_name: group.category.name.clone(),
                        options: group
                            .options
                            .iter()
                            .map(|o| (o.id.clone(), o.label.clone()))
                            .collect(),
                    })
                    .collect()
            })
        })
    }

    fn build(&self) -> Result<ConfigOption, String> {
        let label = self.label.get_untracked().trim().to_string();
        if label.is_empty() {
            return Err("Option label is required".to_string());
        }
        let price = parse_price(&self.price.get_untracked())?;

        let inputs = self.attribute_inputs.get_untracked();
        let attribute_values: BTreeMap<String, Value> = self
            .category
            .attributes_template
            .iter()
            .filter_map(|def| {
                let raw = inputs.get(&def.key)?;
                attribute_value_from_input(def, raw).map(|v| (def.key.clone(), v))
            })
            .collect();
        let errors = validate_attribute_values(&self.category.attributes_template, &attribute_values);
        if !errors.is_empty() {
            return Err(errors.join("; "));
        }

        let mut option = self
            .existing
            .clone()
            .unwrap_or_else(|| ConfigOption::new("", "", 0.0));
        option.category_id = self.category.id.clone();
        option.label = label;
        option.price = price;
        option.description = optional_text(self.description);
        option.sku = optional_text(self.sku);
        option.image_url = optional_text(self.image_url);
        option.is_default = self.is_default.get_untracked();
        option.in_stock = self.in_stock.get_untracked();
        option.attribute_values = attribute_values;

        let fields = self.type_fields();
        if fields.color {
            option.hex_color = optional_text(self.hex_color);
        }
        if fields.power {
            option.voltage = optional_text(self.voltage);
            option.wattage = optional_text(self.wattage);
        }
        if fields.material {
            option.material_type = optional_text(self.material_type);
        }
        if fields.finish {
            option.finish_type = optional_text(self.finish_type);
        }
        if fields.text {
            option.text_value = optional_text(self.text_value);
            option.max_characters = self.max_characters.get_untracked().trim().parse().ok();
        }
        if fields.dimensions {
            let width = self.width.get_untracked().trim().parse::<f64>().ok();
            let height = self.height.get_untracked().trim().parse::<f64>().ok();
            option.dimensions = match (width, height) {
                (Some(width), Some(height)) => Some(Dimensions {
                    width,
                    height,
                    unit: self.dimension_unit.get_untracked().trim().to_string(),
                }),
                _ => None,
            };
        }

        // keep stored records (with their ids) for picks that survived
        let picked = self.incompatible.get_untracked();
        let mut records: Vec<IncompatibilityRecord> = option
            .incompatible_with
            .iter()
            .filter(|r| picked.contains(&r.incompatible_option_id))
            .cloned()
            .collect();
        for id in &picked {
            if !records.iter().any(|r| &r.incompatible_option_id == id) {
                records.push(IncompatibilityRecord::draft(option.id.clone(), id.clone()));
            }
        }
        option.incompatible_with = records;

        Ok(option)
    }

    /// Save; a plan limit error goes to `on_limit` instead of the form
    pub fn save_command(&self, on_saved: Callback<ConfigOption>, on_limit: Callback<()>) {
        let option = match self.build() {
            Ok(o) => o,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let page = self.page;
        let category_id = self.category.id.clone();
        let is_new = !self.is_edit_mode();
        let saving = self.saving;
        let error = self.error;
        spawn_local(async move {
            let result: Result<ConfigOption, ApiClientError> = if is_new {
                page.add_option(category_id, option).await
            } else {
                page.update_option(category_id, option).await
            };
            saving.set(false);
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) if is_new && e.is_limit_error() => on_limit.run(()),
                Err(e) => error.set(Some(e.message)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(""), Ok(0.0));
        assert_eq!(parse_price(" 12.50 "), Ok(12.5));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("ten").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_attribute_value_from_input() {
        let watts = AttributeDefinition::new("watts", "Watts", AttributeType::Number);
        let dimmable = AttributeDefinition::new("dimmable", "Dimmable", AttributeType::Boolean);
        let finish = AttributeDefinition::new("finish", "Finish", AttributeType::Text);

        assert_eq!(attribute_value_from_input(&watts, "60"), Some(serde_json::json!(60.0)));
        assert_eq!(attribute_value_from_input(&watts, "sixty"), Some(serde_json::json!("sixty")));
        assert_eq!(attribute_value_from_input(&dimmable, "true"), Some(Value::Bool(true)));
        assert_eq!(attribute_value_from_input(&dimmable, "false"), Some(Value::Bool(false)));
        assert_eq!(attribute_value_from_input(&finish, "  "), None);
    }

    #[test]
    fn test_type_field_set() {
        assert!(TypeFieldSet::for_type(CategoryType::Color).color);
        assert!(TypeFieldSet::for_type(CategoryType::Power).power);
        assert_eq!(TypeFieldSet::for_type(CategoryType::Generic), TypeFieldSet::default());
    }
}
