use super::compatibility::are_incompatible;
use super::selected_config::SelectedConfig;
use crate::domain::a002_category::aggregate::ConfigCategory;

/// Clear every selection that conflicts with another category's selection.
///
/// Runs after an option is added or edited. All checks read the selection
/// as it was before the pass, so both sides of a conflict are cleared.
/// Returns true if anything was cleared.
pub fn validate_and_adjust(categories: &[ConfigCategory], selected: &mut SelectedConfig) -> bool {
    let snapshot = selected.clone();
    let mut to_clear = Vec::new();

    for category in categories {
        let Some(option) = snapshot
            .get(&category.id)
            .and_then(|id| category.find_option(id))
        else {
            continue;
        };

        let conflict = snapshot
            .iter_selected()
            .filter(|(other_id, _)| *other_id != category.id)
            .filter_map(|(other_id, other_option_id)| {
                categories
                    .iter()
                    .find(|c| c.id == other_id)?
                    .find_option(other_option_id)
            })
            .any(|other| are_incompatible(option, other));

        if conflict {
            to_clear.push(category.id.clone());
        }
    }

    for category_id in &to_clear {
        selected.clear(category_id);
    }
    !to_clear.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_option::aggregate::ConfigOption;

    fn categories() -> Vec<ConfigCategory> {
        vec![
            ConfigCategory::new("color", "Color").with_options(vec![
                ConfigOption::new("red", "Red", 0.0),
                ConfigOption::new("blue", "Blue", 0.0),
            ]),
            ConfigCategory::new("finish", "Finish")
                .with_options(vec![ConfigOption::new("matte", "Matte", 0.0).with_incompatibility("red")]),
            ConfigCategory::new("size", "Size").with_options(vec![ConfigOption::new("s", "Small", 0.0)]),
        ]
    }

    #[test]
    fn test_both_sides_cleared() {
        let cats = categories();
        let mut selected: SelectedConfig = [("color", "red"), ("finish", "matte"), ("size", "s")]
            .into_iter()
            .collect();

        assert!(validate_and_adjust(&cats, &mut selected));
        assert_eq!(selected.get("color"), None);
        assert_eq!(selected.get("finish"), None);
        assert_eq!(selected.get("size"), Some("s"));
    }

    #[test]
    fn test_nothing_to_adjust() {
        let cats = categories();
        let mut selected: SelectedConfig = [("color", "blue"), ("finish", "matte")].into_iter().collect();
        let before = selected.clone();

        assert!(!validate_and_adjust(&cats, &mut selected));
        assert_eq!(selected, before);
    }

    #[test]
    fn test_option_must_belong_to_its_category() {
        let cats = categories();
        // "red" recorded under the wrong category is not looked up elsewhere
        let mut selected: SelectedConfig = [("size", "red"), ("finish", "matte")].into_iter().collect();
        assert!(!validate_and_adjust(&cats, &mut selected));
    }
}
