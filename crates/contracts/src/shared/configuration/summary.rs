use serde::{Deserialize, Serialize};

use super::state::ConfigState;

/// One selected line of the summary panel
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub category_id: String,
    pub category_name: String,
    pub option_id: String,
    pub option_label: String,
    pub sku: Option<String>,
    pub price: f64,
}

/// Line item carried in a quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub sku: String,
    pub label: String,
    pub price: f64,
}

impl From<&SummaryItem> for QuoteItem {
    fn from(item: &SummaryItem) -> Self {
        Self {
            sku: item.sku.clone().unwrap_or_else(|| item.option_id.clone()),
            label: item.option_label.clone(),
            price: item.price,
        }
    }
}

/// Selected options in category order
pub fn summary_items(state: &ConfigState) -> Vec<SummaryItem> {
    state
        .categories
        .iter()
        .filter_map(|category| {
            let option = state.selected_option(&category.id)?;
            Some(SummaryItem {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                option_id: option.id.clone(),
                option_label: option.label.clone(),
                sku: option.sku.clone().filter(|s| !s.trim().is_empty()),
                price: option.price,
            })
        })
        .collect()
}

/// Sum of selected option prices
pub fn calculate_total(state: &ConfigState) -> f64 {
    summary_items(state).iter().map(|i| i.price).sum()
}

pub fn quote_items(state: &ConfigState) -> Vec<QuoteItem> {
    summary_items(state).iter().map(QuoteItem::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_category::aggregate::ConfigCategory;
    use crate::domain::a003_option::aggregate::ConfigOption;

    fn state() -> ConfigState {
        let mut desk = ConfigOption::new("oak", "Oak top", 120.0);
        desk.sku = Some("TOP-OAK".to_string());
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("top", "Top").with_options(vec![desk]),
            ConfigCategory::new("legs", "Legs").with_options(vec![ConfigOption::new("steel", "Steel", 45.5)]),
            ConfigCategory::new("extras", "Extras").with_options(vec![ConfigOption::new("lamp", "Lamp", 30.0)]),
        ]);
        state.selected.set("legs", "steel");
        state.selected.set("top", "oak");
        state.selected.set("extras", "");
        state
    }

    #[test]
    fn test_total_ignores_empty() {
        assert_eq!(calculate_total(&state()), 165.5);
        assert_eq!(calculate_total(&ConfigState::default()), 0.0);
    }

    #[test]
    fn test_items_follow_category_order() {
        let items = summary_items(&state());
        let labels: Vec<&str> = items.iter().map(|i| i.option_label.as_str()).collect();
        assert_eq!(labels, vec!["Oak top", "Steel"]);
    }

    #[test]
    fn test_quote_item_sku_fallback() {
        let items = quote_items(&state());
        assert_eq!(items[0].sku, "TOP-OAK");
        assert_eq!(items[1].sku, "steel");
    }
}
