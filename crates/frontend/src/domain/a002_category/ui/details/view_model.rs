use contracts::domain::a002_category::aggregate::{AttributeDefinition, ConfigCategory};
use contracts::enums::{AttributeType, CategoryType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;

/// One editable row of the attribute template
#[derive(Clone)]
pub struct AttributeRow {
    pub row_id: u64,
    /// Kept from the loaded definition so renaming a label does not orphan values
    pub key: String,
    pub label: RwSignal<String>,
    pub attribute_type: RwSignal<String>,
    pub unit: RwSignal<String>,
    /// Comma separated allowed values for `select`
    pub options: RwSignal<String>,
    pub min: RwSignal<String>,
    pub max: RwSignal<String>,
}

impl AttributeRow {
    fn from_definition(row_id: u64, def: &AttributeDefinition) -> Self {
        let fmt_num = |n: Option<f64>| n.map(|v| v.to_string()).unwrap_or_default();
        Self {
            row_id,
            key: def.key.clone(),
            label: RwSignal::new(def.label.clone()),
            attribute_type: RwSignal::new(def.attribute_type.code().to_string()),
            unit: RwSignal::new(def.unit.clone().unwrap_or_default()),
            options: RwSignal::new(def.options.as_deref().map(|o| o.join(", ")).unwrap_or_default()),
            min: RwSignal::new(fmt_num(def.min)),
            max: RwSignal::new(fmt_num(def.max)),
        }
    }

    fn to_definition(&self) -> Option<AttributeDefinition> {
        let label = self.label.get_untracked().trim().to_string();
        if label.is_empty() {
            return None;
        }
        let attribute_type = AttributeType::from_code(&self.attribute_type.get_untracked()).unwrap_or_default();
        let key = if self.key.is_empty() {
            AttributeDefinition::key_from_label(&label)
        } else {
            self.key.clone()
        };

        let mut def = AttributeDefinition::new(key, label, attribute_type);
        def.unit = Some(self.unit.get_untracked().trim().to_string()).filter(|u| !u.is_empty());
        if attribute_type == AttributeType::Select {
            def.options = Some(split_list(&self.options.get_untracked()));
        }
        if attribute_type == AttributeType::Number {
            def.min = parse_number(&self.min.get_untracked());
            def.max = parse_number(&self.max.get_untracked());
        }
        Some(def)
    }
}

/// "a, b,,c " -> ["a", "b", "c"]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Template problems that block saving
pub fn template_errors(template: &[AttributeDefinition]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = std::collections::BTreeSet::new();
    for def in template {
        if def.key.is_empty() {
            errors.push(format!("\"{}\" needs a letter or digit in its label", def.label));
        } else if !seen.insert(def.key.as_str()) {
            errors.push(format!("Duplicate attribute \"{}\"", def.label));
        }
        if def.attribute_type == AttributeType::Select && def.options.as_ref().map_or(true, Vec::is_empty) {
            errors.push(format!("\"{}\" needs at least one allowed value", def.label));
        }
        if let (Some(min), Some(max)) = (def.min, def.max) {
            if min > max {
                errors.push(format!("\"{}\": min is greater than max", def.label));
            }
        }
    }
    errors
}

#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub page: ConfiguratorPageViewModel,
    pub existing: Option<ConfigCategory>,
    pub name: RwSignal<String>,
    pub category_type: RwSignal<String>,
    pub description: RwSignal<String>,
    pub is_primary: RwSignal<bool>,
    pub is_required: RwSignal<bool>,
    pub related_categories: RwSignal<Vec<String>>,
    pub attributes: RwSignal<Vec<AttributeRow>>,
    next_row_id: RwSignal<u64>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    pub fn new(page: ConfiguratorPageViewModel, existing: Option<ConfigCategory>) -> Self {
        let base = existing.clone().unwrap_or_default();
        let rows: Vec<AttributeRow> = base
            .attributes_template
            .iter()
            .enumerate()
            .map(|(i, def)| AttributeRow::from_definition(i as u64, def))
            .collect();

        Self {
            page,
            name: RwSignal::new(base.name.clone()),
            category_type: RwSignal::new(base.category_type.code().to_string()),
            description: RwSignal::new(base.description.clone().unwrap_or_default()),
            is_primary: RwSignal::new(base.is_primary),
            is_required: RwSignal::new(base.is_required),
            related_categories: RwSignal::new(base.related_categories.clone()),
            next_row_id: RwSignal::new(rows.len() as u64),
            attributes: RwSignal::new(rows),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            existing,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.existing.is_some()
    }

    /// Type changes would invalidate the options' type specific fields
    pub fn type_locked(&self) -> bool {
        self.existing.as_ref().is_some_and(ConfigCategory::has_options)
    }

    /// Another category already holds the primary flag
    pub fn primary_taken(&self) -> Signal<bool> {
        let own_id = self.existing.as_ref().map(|c| c.id.clone());
        let state = self.page.state;
        Signal::derive(move || {
            state.with(|s| {
                s.categories
                    .iter()
                    .any(|c| c.is_primary && Some(&c.id) != own_id.as_ref())
            })
        })
    }

    /// Other categories, for the related-categories picker
    pub fn other_categories(&self) -> Signal<Vec<(String, String)>> {
        let own_id = self.existing.as_ref().map(|c| c.id.clone()).unwrap_or_default();
        let state = self.page.state;
        Signal::derive(move || {
            state.with(|s| {
                s.categories
                    .iter()
                    .filter(|c| c.id != own_id)
                    .map(|c| (c.id.clone(), c.name.clone()))
                    .collect()
            })
        })
    }

    pub fn category_type_options() -> Vec<(String, String)> {
        CategoryType::all()
            .into_iter()
            .map(|t| (t.code().to_string(), t.display_name().to_string()))
            .collect()
    }

    pub fn toggle_related(&self, category_id: &str) {
        self.related_categories.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| id == category_id) {
                ids.remove(pos);
            } else {
                ids.push(category_id.to_string());
            }
        });
    }

    pub fn add_attribute(&self) {
        let row_id = self.next_row_id.get_untracked();
        self.next_row_id.set(row_id + 1);
        let row = AttributeRow::from_definition(row_id, &AttributeDefinition::default());
        self.attributes.update(|rows| rows.push(row));
    }

    pub fn remove_attribute(&self, row_id: u64) {
        self.attributes.update(|rows| rows.retain(|r| r.row_id != row_id));
    }

    fn build(&self) -> Result<ConfigCategory, String> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Category name is required".to_string());
        }

        let template: Vec<AttributeDefinition> = self
            .attributes
            .get_untracked()
            .iter()
            .filter_map(AttributeRow::to_definition)
            .collect();
        let errors = template_errors(&template);
        if !errors.is_empty() {
            return Err(errors.join("; "));
        }

        let mut category = self.existing.clone().unwrap_or_default();
        category.name = name;
        if !self.type_locked() {
            category.category_type =
                CategoryType::from_code(&self.category_type.get_untracked()).unwrap_or_default();
        }
        category.description = Some(self.description.get_untracked().trim().to_string()).filter(|d| !d.is_empty());
        category.is_primary = self.is_primary.get_untracked() && !self.primary_taken().get_untracked();
        category.is_required = self.is_required.get_untracked();
        category.related_categories = self.related_categories.get_untracked();
        category.attributes_template = template;
        if category.configurator_id.is_empty() {
            category.configurator_id = self.page.configurator_id().unwrap_or_default();
        }
        if !self.is_edit_mode() {
            category.order_index = self.page.state.with_untracked(|s| s.categories.len() as i32);
        }
        Ok(category)
    }

    /// Save; `on_saved` gets the stored category and whether it was new
    pub fn save_command(&self, on_saved: Callback<(ConfigCategory, bool)>) {
        let category = match self.build() {
            Ok(c) => c,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let page = self.page;
        let is_new = !self.is_edit_mode();
        let saving = self.saving;
        let error = self.error;
        spawn_local(async move {
            let result = if is_new {
                page.add_category(category).await
            } else {
                page.update_category(category).await
            };
            saving.set(false);
            match result {
                Ok(saved) => on_saved.run((saved, is_new)),
                Err(e) => error.set(Some(e.message)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_template_errors() {
        let mut grade = AttributeDefinition::new("grade", "Grade", AttributeType::Select);
        let mut watts = AttributeDefinition::new("watts", "Watts", AttributeType::Number);
        watts.min = Some(10.0);
        watts.max = Some(5.0);
        let dup = AttributeDefinition::new("watts", "Watts (again)", AttributeType::Text);
        let errors = template_errors(&[grade.clone(), watts.clone(), dup]);
        assert_eq!(errors.len(), 3);

        grade.options = Some(vec!["A".to_string()]);
        watts.max = None;
        assert!(template_errors(&[grade, watts]).is_empty());
    }
}
