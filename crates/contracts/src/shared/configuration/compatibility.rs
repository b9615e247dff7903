//! Option compatibility rules.
//!
//! An incompatibility only has to be stored on one of the two options; every
//! check here treats the relation as symmetric.

use std::collections::BTreeSet;

use super::selected_config::SelectedConfig;
use crate::domain::a002_category::aggregate::ConfigCategory;
use crate::domain::a003_option::aggregate::ConfigOption;

/// True if either option lists the other
pub fn are_incompatible(a: &ConfigOption, b: &ConfigOption) -> bool {
    a.lists_incompatibility_with(&b.id) || b.lists_incompatibility_with(&a.id)
}

/// Ids the option itself lists as incompatible
pub fn incompatible_option_ids(option: &ConfigOption) -> Vec<String> {
    option
        .incompatible_with
        .iter()
        .map(|r| r.incompatible_option_id.clone())
        .collect()
}

/// Every option id that conflicts with `option`, whichever side holds the record
pub fn conflicting_option_ids(option: &ConfigOption, categories: &[ConfigCategory]) -> BTreeSet<String> {
    let mut ids: BTreeSet<String> = incompatible_option_ids(option).into_iter().collect();
    for other in categories.iter().flat_map(|c| c.options.iter()) {
        if other.id != option.id && other.lists_incompatibility_with(&option.id) {
            ids.insert(other.id.clone());
        }
    }
    ids
}

/// Find an option anywhere in the catalogue
pub fn find_option<'a>(categories: &'a [ConfigCategory], option_id: &str) -> Option<&'a ConfigOption> {
    categories.iter().find_map(|c| c.find_option(option_id))
}

/// Whether `option` conflicts with anything currently selected.
///
/// Used to render options as disabled. Empty selections are ignored, and a
/// selected id that no longer exists in the catalogue never conflicts.
pub fn is_option_incompatible_with_selection(
    option: &ConfigOption,
    selected: &SelectedConfig,
    categories: &[ConfigCategory],
) -> bool {
    selected
        .iter_selected()
        .filter_map(|(_, option_id)| find_option(categories, option_id))
        .any(|selected_option| are_incompatible(option, selected_option))
}

/// Options of one category offered in the compatibility picker
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateGroup<'a> {
    pub category: &'a ConfigCategory,
    pub options: Vec<&'a ConfigOption>,
}

/// Options an admin may mark as incompatible with an option of `current_category_id`.
///
/// Without `show_all` only categories in the current category's related set
/// are offered (all other categories when that set is empty). `search`
/// matches option labels or category names, case-insensitively.
pub fn compatibility_candidates<'a>(
    categories: &'a [ConfigCategory],
    current_category_id: &str,
    show_all: bool,
    search: &str,
) -> Vec<CandidateGroup<'a>> {
    let current = categories.iter().find(|c| c.id == current_category_id);
    let needle = search.trim().to_lowercase();

    categories
        .iter()
        .filter(|c| c.id != current_category_id)
        .filter(|c| show_all || current.map_or(true, |cur| cur.relates_to(&c.id)))
        .filter_map(|category| {
            let category_matches = needle.is_empty() || category.name.to_lowercase().contains(&needle);
            let options: Vec<&ConfigOption> = category
                .options
                .iter()
                .filter(|o| category_matches || o.label.to_lowercase().contains(&needle))
                .collect();
            if options.is_empty() {
                None
            } else {
                Some(CandidateGroup { category, options })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<ConfigCategory> {
        vec![
            ConfigCategory::new("color", "Color").with_options(vec![
                ConfigOption::new("red", "Red", 0.0).with_incompatibility("matte"),
                ConfigOption::new("blue", "Blue", 10.0),
            ]),
            ConfigCategory::new("finish", "Finish").with_options(vec![
                ConfigOption::new("matte", "Matte", 5.0),
                ConfigOption::new("gloss", "Gloss", 0.0),
            ]),
            ConfigCategory::new("size", "Size").with_options(vec![ConfigOption::new("xl", "XL", 20.0)]),
        ]
    }

    #[test]
    fn test_are_incompatible_is_symmetric() {
        let cats = catalogue();
        let red = find_option(&cats, "red").unwrap();
        let matte = find_option(&cats, "matte").unwrap();
        let gloss = find_option(&cats, "gloss").unwrap();

        assert!(are_incompatible(red, matte));
        assert!(are_incompatible(matte, red));
        assert!(!are_incompatible(red, gloss));
        assert!(!are_incompatible(gloss, red));
    }

    #[test]
    fn test_incompatible_ids_and_conflicts() {
        let cats = catalogue();
        let red = find_option(&cats, "red").unwrap();
        let matte = find_option(&cats, "matte").unwrap();

        assert_eq!(incompatible_option_ids(red), vec!["matte".to_string()]);
        assert!(incompatible_option_ids(matte).is_empty());
        // matte stores nothing, yet red is found through the reverse edge
        assert!(conflicting_option_ids(matte, &cats).contains("red"));
    }

    #[test]
    fn test_incompatible_with_selection() {
        let cats = catalogue();
        let matte = find_option(&cats, "matte").unwrap();
        let gloss = find_option(&cats, "gloss").unwrap();

        let mut selected = SelectedConfig::new();
        selected.set("color", "red");
        selected.set("size", "");
        assert!(is_option_incompatible_with_selection(matte, &selected, &cats));
        assert!(!is_option_incompatible_with_selection(gloss, &selected, &cats));

        selected.set("color", "");
        assert!(!is_option_incompatible_with_selection(matte, &selected, &cats));

        selected.set("color", "deleted-option");
        assert!(!is_option_incompatible_with_selection(matte, &selected, &cats));
    }

    #[test]
    fn test_candidates_respect_related_set() {
        let mut cats = catalogue();
        cats[0].related_categories = vec!["finish".to_string()];

        let groups = compatibility_candidates(&cats, "color", false, "");
        let ids: Vec<&str> = groups.iter().map(|g| g.category.id.as_str()).collect();
        assert_eq!(ids, vec!["finish"]);

        let groups = compatibility_candidates(&cats, "color", true, "");
        let ids: Vec<&str> = groups.iter().map(|g| g.category.id.as_str()).collect();
        assert_eq!(ids, vec!["finish", "size"]);
    }

    #[test]
    fn test_candidates_search() {
        let cats = catalogue();
        let groups = compatibility_candidates(&cats, "color", false, "GLO");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].options.len(), 1);
        assert_eq!(groups[0].options[0].id, "gloss");

        // category name match keeps all its options
        let groups = compatibility_candidates(&cats, "color", false, "fin");
        assert_eq!(groups[0].options.len(), 2);
    }
}
