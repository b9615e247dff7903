use super::compatibility::conflicting_option_ids;
use super::notice::ConfigNotice;
use super::selected_config::SelectedConfig;
use super::state::ConfigState;
use crate::domain::a002_category::aggregate::ConfigCategory;
use crate::domain::a003_option::aggregate::ConfigOption;

/// Option a primary/required category falls back to.
///
/// Priority: the default option, then the cheapest (first one on ties),
/// then the first option.
pub fn pick_auto_option(category: &ConfigCategory) -> Option<&ConfigOption> {
    let default_option = category.options.iter().find(|o| {
        o.is_default || category.default_option_id.as_deref() == Some(o.id.as_str())
    });

    default_option
        .or_else(|| {
            category.options.iter().fold(None, |best: Option<&ConfigOption>, o| match best {
                Some(b) if b.price.total_cmp(&o.price).is_le() => Some(b),
                _ => Some(o),
            })
        })
        .or_else(|| category.options.first())
}

/// Whether auto-selecting `option` would empty another primary/required category
fn displaces_required(state: &ConfigState, category_id: &str, option: &ConfigOption) -> bool {
    let conflicting = conflicting_option_ids(option, &state.categories);
    state
        .selected
        .iter_selected()
        .filter(|(cat_id, _)| *cat_id != category_id)
        .filter(|(_, opt_id)| conflicting.contains(*opt_id))
        .any(|(cat_id, _)| state.category(cat_id).map_or(false, |c| c.must_select()))
}

/// Fill every empty primary/required category.
///
/// Each pick goes through [`ConfigState::select_option`], so its cascade
/// applies to optional categories. A pick that would empty another
/// primary/required category is skipped, which keeps mutually exclusive
/// required categories stable across calls. Each notice is reported once.
pub fn auto_select(state: &mut ConfigState) -> Vec<ConfigNotice> {
    let mut notices: Vec<ConfigNotice> = Vec::new();
    let max_passes = state.categories.len() + 1;

    for _ in 0..max_passes {
        let pending: Vec<(String, String)> = state
            .categories
            .iter()
            .filter(|c| c.must_select() && c.has_options() && state.selected.get(&c.id).is_none())
            .filter_map(|c| pick_auto_option(c).map(|o| (c.id.clone(), o.clone())))
            .filter(|(category_id, option)| !displaces_required(state, category_id, option))
            .map(|(category_id, option)| (category_id, option.id))
            .collect();

        if pending.is_empty() {
            break;
        }

        let mut progressed = false;
        for (category_id, option_id) in pending {
            // an earlier pick in this pass may have filled it or made it conflict
            if state.selected.get(&category_id).is_some() {
                continue;
            }
            let Some(option) = state
                .category(&category_id)
                .and_then(|c| c.find_option(&option_id))
                .cloned()
            else {
                continue;
            };
            if displaces_required(state, &category_id, &option) {
                continue;
            }
            if let Some(notice) = state.select_option(&category_id, &option_id).notice() {
                if !notices.contains(notice) {
                    notices.push(notice.clone());
                }
            }
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    notices
}

/// Selection applied when a configurator is first loaded.
///
/// The primary category gets its default or first option; every other
/// category gets its first free option, or nothing.
pub fn initial_selection(categories: &[ConfigCategory]) -> SelectedConfig {
    categories
        .iter()
        .map(|category| {
            let option = if category.is_primary {
                category
                    .options
                    .iter()
                    .find(|o| o.is_default)
                    .or_else(|| category.options.first())
            } else {
                category.options.iter().find(|o| o.is_free())
            };
            (
                category.id.clone(),
                option.map(|o| o.id.clone()).unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_picks_lowest_price() {
        let category = ConfigCategory::new("base", "Base")
            .primary()
            .with_options(vec![ConfigOption::new("p1", "P1", 0.0), ConfigOption::new("p2", "P2", 5.0)]);
        assert_eq!(pick_auto_option(&category).unwrap().id, "p1");

        let mut state = ConfigState::new(vec![category]);
        auto_select(&mut state);
        assert_eq!(state.selected.get("base"), Some("p1"));
    }

    #[test]
    fn test_default_wins_over_price() {
        let category = ConfigCategory::new("base", "Base").required().with_options(vec![
            ConfigOption::new("cheap", "Cheap", 1.0),
            ConfigOption::new("pro", "Pro", 50.0).as_default(),
        ]);
        assert_eq!(pick_auto_option(&category).unwrap().id, "pro");

        let mut by_field = ConfigCategory::new("base", "Base").with_options(vec![
            ConfigOption::new("cheap", "Cheap", 1.0),
            ConfigOption::new("pro", "Pro", 50.0),
        ]);
        by_field.default_option_id = Some("pro".to_string());
        assert_eq!(pick_auto_option(&by_field).unwrap().id, "pro");
    }

    #[test]
    fn test_price_tie_keeps_first() {
        let category = ConfigCategory::new("c", "C").with_options(vec![
            ConfigOption::new("b", "B", 3.0),
            ConfigOption::new("a", "A", 3.0),
            ConfigOption::new("z", "Z", 9.0),
        ]);
        assert_eq!(pick_auto_option(&category).unwrap().id, "b");
        assert!(pick_auto_option(&ConfigCategory::new("empty", "Empty")).is_none());
    }

    #[test]
    fn test_optional_and_filled_categories_untouched() {
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("extras", "Extras").with_options(vec![ConfigOption::new("x", "X", 0.0)]),
            ConfigCategory::new("base", "Base")
                .required()
                .with_options(vec![ConfigOption::new("a", "A", 0.0), ConfigOption::new("b", "B", 1.0)]),
        ]);
        state.selected.set("base", "b");

        let notices = auto_select(&mut state);
        assert!(notices.is_empty());
        assert_eq!(state.selected.get("extras"), None);
        assert_eq!(state.selected.get("base"), Some("b"));
    }

    #[test]
    fn test_auto_select_cascades() {
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("finish", "Finish")
                .with_options(vec![ConfigOption::new("matte", "Matte", 0.0)]),
            ConfigCategory::new("color", "Color")
                .primary()
                .with_options(vec![ConfigOption::new("red", "Red", 0.0).with_incompatibility("matte")]),
        ]);
        state.selected.set("finish", "matte");

        let notices = auto_select(&mut state);
        assert_eq!(state.selected.get("color"), Some("red"));
        assert_eq!(state.selected.get("finish"), None);
        assert_eq!(notices, vec![ConfigNotice::selections_cleared("Red")]);
    }

    #[test]
    fn test_mutually_exclusive_required_terminates() {
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("a", "A")
                .required()
                .with_options(vec![ConfigOption::new("a1", "A1", 0.0).with_incompatibility("b1")]),
            ConfigCategory::new("b", "B")
                .required()
                .with_options(vec![ConfigOption::new("b1", "B1", 0.0)]),
        ]);

        let notices = auto_select(&mut state);
        assert_eq!(state.selected.selected_count(), 1);
        assert_eq!(state.selected.get("a"), Some("a1"));
        assert!(notices.is_empty());

        // later runs leave the pair alone
        for _ in 0..3 {
            assert!(auto_select(&mut state).is_empty());
            assert_eq!(state.selected.get("a"), Some("a1"));
            assert_eq!(state.selected.get("b"), None);
        }
    }

    #[test]
    fn test_repeated_notice_reported_once() {
        let mut state = ConfigState::new(vec![
            ConfigCategory::new("extras", "Extras").with_options(vec![ConfigOption::new("x", "X", 0.0)]),
            ConfigCategory::new("trim", "Trim").with_options(vec![ConfigOption::new("t", "T", 0.0)]),
            ConfigCategory::new("base", "Base").required().with_options(vec![
                ConfigOption::new("std", "Standard", 0.0).with_incompatibility("x"),
            ]),
            ConfigCategory::new("frame", "Frame").required().with_options(vec![
                ConfigOption::new("std2", "Standard", 0.0).with_incompatibility("t"),
            ]),
        ]);
        state.selected.set("extras", "x");
        state.selected.set("trim", "t");

        let notices = auto_select(&mut state);
        assert_eq!(notices, vec![ConfigNotice::selections_cleared("Standard")]);
        assert_eq!(state.selected.get("extras"), None);
        assert_eq!(state.selected.get("trim"), None);
    }

    #[test]
    fn test_bad_prices_do_not_beat_cheapest() {
        let json = r#"{
            "id": "base",
            "name": "Base",
            "categoryType": "GENERIC",
            "isPrimary": true,
            "options": [
                {"id": "p1", "label": "P1", "price": 0},
                {"id": "pn", "label": "PN", "price": "NaN"},
                {"id": "neg", "label": "Neg", "price": "-3"},
                {"id": "p2", "label": "P2", "price": 5}
            ]
        }"#;
        let category: ConfigCategory = serde_json::from_str(json).unwrap();
        assert_eq!(pick_auto_option(&category).unwrap().id, "p1");

        let mut state = ConfigState::new(vec![category]);
        auto_select(&mut state);
        assert_eq!(state.selected.get("base"), Some("p1"));
    }

    #[test]
    fn test_initial_selection() {
        let categories = vec![
            ConfigCategory::new("base", "Base")
                .primary()
                .with_options(vec![ConfigOption::new("p1", "P1", 10.0), ConfigOption::new("p2", "P2", 0.0)]),
            ConfigCategory::new("color", "Color")
                .with_options(vec![ConfigOption::new("red", "Red", 5.0), ConfigOption::new("white", "White", 0.0)]),
            ConfigCategory::new("extras", "Extras").with_options(vec![ConfigOption::new("x", "X", 9.0)]),
        ];
        let selected = initial_selection(&categories);
        assert_eq!(selected.get("base"), Some("p1"));
        assert_eq!(selected.get("color"), Some("white"));
        assert_eq!(selected.get("extras"), None);
        assert!(selected.as_map().contains_key("extras"));
    }
}
