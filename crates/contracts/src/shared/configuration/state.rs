use super::compatibility::{conflicting_option_ids, is_option_incompatible_with_selection};
use super::notice::ConfigNotice;
use super::selected_config::SelectedConfig;
use super::validation::validate_and_adjust;
use crate::domain::a002_category::aggregate::ConfigCategory;
use crate::domain::a003_option::aggregate::ConfigOption;

/// Client-side configurator state, mirrored from the API and mutated locally
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigState {
    pub categories: Vec<ConfigCategory>,
    pub selected: SelectedConfig,
    pub is_admin_mode: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    SelectOption { category_id: String, option_id: String },
    ToggleAdmin,
    SetCategories(Vec<ConfigCategory>),
    AddCategory(ConfigCategory),
    UpdateCategory(ConfigCategory),
    DeleteCategory(String),
    AddOption { category_id: String, option: ConfigOption },
    UpdateOption { category_id: String, option: ConfigOption },
    DeleteOption { category_id: String, option_id: String },
    RestoreConfig(SelectedConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Nothing changed
    Ignored,
    /// Selection recorded; `cleared` lists categories emptied by the cascade
    Selected {
        cleared: Vec<String>,
        notice: Option<ConfigNotice>,
    },
}

impl SelectOutcome {
    pub fn notice(&self) -> Option<&ConfigNotice> {
        match self {
            SelectOutcome::Selected { notice, .. } => notice.as_ref(),
            SelectOutcome::Ignored => None,
        }
    }
}

impl ConfigState {
    pub fn new(categories: Vec<ConfigCategory>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&ConfigCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut ConfigCategory> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    pub fn primary_category(&self) -> Option<&ConfigCategory> {
        self.categories.iter().find(|c| c.is_primary)
    }

    /// Option as currently selected in `category_id`
    pub fn selected_option(&self, category_id: &str) -> Option<&ConfigOption> {
        let option_id = self.selected.get(category_id)?;
        self.category(category_id)?.find_option(option_id)
    }

    /// Rendered as disabled: conflicts with the current selection
    pub fn is_option_disabled(&self, category_id: &str, option_id: &str) -> bool {
        self.category(category_id)
            .and_then(|c| c.find_option(option_id))
            .map(|option| is_option_incompatible_with_selection(option, &self.selected, &self.categories))
            .unwrap_or(false)
    }

    /// Record `option_id` for `category_id` and clear conflicting selections.
    ///
    /// Every other category whose selection conflicts with the new option
    /// (from either side of the record) is emptied, and one notice is
    /// produced for the whole batch. Primary categories are not exempt.
    pub fn select_option(&mut self, category_id: &str, option_id: &str) -> SelectOutcome {
        self.selected.set(category_id, option_id);

        let Some(option) = self
            .category(category_id)
            .and_then(|c| c.find_option(option_id))
        else {
            return SelectOutcome::Selected {
                cleared: Vec::new(),
                notice: None,
            };
        };

        let conflicting = conflicting_option_ids(option, &self.categories);
        let label = option.label.clone();

        let cleared: Vec<String> = self
            .selected
            .iter_selected()
            .filter(|(cat_id, opt_id)| *cat_id != category_id && conflicting.contains(*opt_id))
            .map(|(cat_id, _)| cat_id.to_string())
            .collect();

        for cat_id in &cleared {
            self.selected.clear(cat_id);
        }

        let notice = (!cleared.is_empty()).then(|| ConfigNotice::selections_cleared(&label));
        SelectOutcome::Selected { cleared, notice }
    }

    /// A user click on an option card.
    ///
    /// Disabled options and the already selected option of the primary
    /// category are ignored; anything else goes through [`select_option`](Self::select_option).
    pub fn click_option(&mut self, category_id: &str, option_id: &str) -> SelectOutcome {
        if self.is_option_disabled(category_id, option_id) {
            return SelectOutcome::Ignored;
        }
        let is_primary = self.category(category_id).map_or(false, |c| c.is_primary);
        if is_primary && self.selected.is_selected(category_id, option_id) {
            return SelectOutcome::Ignored;
        }
        self.select_option(category_id, option_id)
    }

    /// Apply one action; returns the notice the action produced, if any
    pub fn dispatch(&mut self, action: ConfigAction) -> Option<ConfigNotice> {
        match action {
            ConfigAction::SelectOption {
                category_id,
                option_id,
            } => self.select_option(&category_id, &option_id).notice().cloned(),
            ConfigAction::ToggleAdmin => {
                self.is_admin_mode = !self.is_admin_mode;
                None
            }
            ConfigAction::SetCategories(categories) => {
                self.categories = categories;
                None
            }
            ConfigAction::AddCategory(category) => {
                self.categories.push(category);
                None
            }
            ConfigAction::UpdateCategory(mut category) => {
                if let Some(existing) = self.category_mut(&category.id) {
                    // update responses come back without their options
                    if category.options.is_empty() {
                        category.options = std::mem::take(&mut existing.options);
                    }
                    *existing = category;
                }
                None
            }
            ConfigAction::DeleteCategory(category_id) => {
                self.categories.retain(|c| c.id != category_id);
                self.selected.remove(&category_id);
                None
            }
            ConfigAction::AddOption {
                category_id,
                option,
            } => {
                let category = self.category_mut(&category_id)?;
                category.options.push(option);
                self.revalidate()
            }
            ConfigAction::UpdateOption {
                category_id,
                option,
            } => {
                let category = self.category_mut(&category_id)?;
                if let Some(existing) = category.options.iter_mut().find(|o| o.id == option.id) {
                    *existing = option;
                }
                self.revalidate()
            }
            ConfigAction::DeleteOption {
                category_id,
                option_id,
            } => {
                if let Some(category) = self.category_mut(&category_id) {
                    category.options.retain(|o| o.id != option_id);
                }
                if self.selected.is_selected(&category_id, &option_id) {
                    self.selected.clear(&category_id);
                }
                None
            }
            ConfigAction::RestoreConfig(selected) => {
                self.selected = selected;
                None
            }
        }
    }

    fn revalidate(&mut self) -> Option<ConfigNotice> {
        validate_and_adjust(&self.categories, &mut self.selected).then(ConfigNotice::selections_adjusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_finish() -> ConfigState {
        ConfigState::new(vec![
            ConfigCategory::new("color", "Color").with_options(vec![
                ConfigOption::new("red", "Red", 0.0).with_incompatibility("matte"),
                ConfigOption::new("blue", "Blue", 10.0),
            ]),
            ConfigCategory::new("finish", "Finish").with_options(vec![
                ConfigOption::new("matte", "Matte", 5.0),
                ConfigOption::new("gloss", "Gloss", 0.0),
            ]),
            ConfigCategory::new("size", "Size").with_options(vec![
                ConfigOption::new("s", "Small", 0.0),
                ConfigOption::new("l", "Large", 15.0),
            ]),
        ])
    }

    #[test]
    fn test_red_then_matte() {
        let mut state = color_finish();
        state.select_option("color", "red");
        let outcome = state.select_option("finish", "matte");

        assert_eq!(state.selected.get("finish"), Some("matte"));
        assert_eq!(state.selected.get("color"), None);
        match outcome {
            SelectOutcome::Selected { cleared, notice } => {
                assert_eq!(cleared, vec!["color".to_string()]);
                let notice = notice.unwrap();
                assert_eq!(notice.title, "Incompatible selections cleared");
                assert!(notice.description.contains("\"Matte\""));
            }
            SelectOutcome::Ignored => panic!("selection ignored"),
        }
    }

    #[test]
    fn test_matte_then_red() {
        let mut state = color_finish();
        state.select_option("finish", "matte");
        let outcome = state.select_option("color", "red");

        assert_eq!(state.selected.get("color"), Some("red"));
        assert_eq!(state.selected.get("finish"), None);
        assert!(outcome.notice().is_some());
    }

    #[test]
    fn test_cascade_clears_only_intersecting() {
        let mut state = color_finish();
        state.select_option("finish", "matte");
        state.select_option("size", "l");

        let outcome = state.select_option("color", "red");
        assert_eq!(state.selected.get("finish"), None);
        assert_eq!(state.selected.get("size"), Some("l"));
        assert_eq!(
            outcome,
            SelectOutcome::Selected {
                cleared: vec!["finish".to_string()],
                notice: Some(ConfigNotice::selections_cleared("Red")),
            }
        );
    }

    #[test]
    fn test_one_notice_for_several_clears() {
        let mut state = color_finish();
        state.categories[0].options[1] = ConfigOption::new("blue", "Blue", 10.0)
            .with_incompatibility("gloss")
            .with_incompatibility("l");
        state.select_option("finish", "gloss");
        state.select_option("size", "l");

        let outcome = state.select_option("color", "blue");
        match outcome {
            SelectOutcome::Selected { cleared, notice } => {
                assert_eq!(cleared.len(), 2);
                assert!(notice.is_some());
            }
            SelectOutcome::Ignored => panic!("selection ignored"),
        }
    }

    #[test]
    fn test_no_conflict_no_notice() {
        let mut state = color_finish();
        state.select_option("finish", "gloss");
        let outcome = state.select_option("color", "red");
        assert_eq!(outcome.notice(), None);
        assert_eq!(state.selected.get("finish"), Some("gloss"));
    }

    #[test]
    fn test_primary_reclick_is_noop() {
        let mut state = color_finish();
        state.categories[0].is_primary = true;
        state.select_option("color", "red");
        state.select_option("finish", "gloss");
        let before = state.clone();

        assert_eq!(state.click_option("color", "red"), SelectOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_non_primary_reclick_keeps_selection() {
        let mut state = color_finish();
        state.select_option("size", "s");
        let outcome = state.click_option("size", "s");
        assert!(matches!(outcome, SelectOutcome::Selected { .. }));
        assert_eq!(state.selected.get("size"), Some("s"));
    }

    #[test]
    fn test_cascade_can_clear_primary() {
        let mut state = color_finish();
        state.categories[0].is_primary = true;
        state.select_option("color", "red");

        state.select_option("finish", "matte");
        assert_eq!(state.selected.get("color"), None);
    }

    #[test]
    fn test_disabled_click_is_noop() {
        let mut state = color_finish();
        state.select_option("color", "red");
        assert!(state.is_option_disabled("finish", "matte"));
        assert!(!state.is_option_disabled("finish", "gloss"));

        assert_eq!(state.click_option("finish", "matte"), SelectOutcome::Ignored);
        assert_eq!(state.selected.get("finish"), None);
        assert_eq!(state.selected.get("color"), Some("red"));
    }

    #[test]
    fn test_delete_category_drops_selection() {
        let mut state = color_finish();
        state.select_option("size", "s");
        state.dispatch(ConfigAction::DeleteCategory("size".to_string()));
        assert!(state.category("size").is_none());
        assert!(!state.selected.as_map().contains_key("size"));
    }

    #[test]
    fn test_delete_selected_option_clears() {
        let mut state = color_finish();
        state.select_option("size", "l");
        state.dispatch(ConfigAction::DeleteOption {
            category_id: "size".to_string(),
            option_id: "l".to_string(),
        });
        assert_eq!(state.selected.get("size"), None);
        assert_eq!(state.category("size").unwrap().options.len(), 1);
    }

    #[test]
    fn test_update_category_keeps_options() {
        let mut state = color_finish();
        let mut renamed = ConfigCategory::new("color", "Colour");
        renamed.is_required = true;
        state.dispatch(ConfigAction::UpdateCategory(renamed));

        let category = state.category("color").unwrap();
        assert_eq!(category.name, "Colour");
        assert!(category.is_required);
        assert_eq!(category.options.len(), 2);
    }

    #[test]
    fn test_add_option_revalidates() {
        let mut state = color_finish();
        state.select_option("color", "blue");
        state.select_option("size", "s");

        let notice = state.dispatch(ConfigAction::UpdateOption {
            category_id: "color".to_string(),
            option: ConfigOption::new("blue", "Blue", 10.0).with_incompatibility("s"),
        });
        assert_eq!(notice, Some(ConfigNotice::selections_adjusted()));
        assert_eq!(state.selected.get("color"), None);
        assert_eq!(state.selected.get("size"), None);

        let notice = state.dispatch(ConfigAction::AddOption {
            category_id: "size".to_string(),
            option: ConfigOption::new("m", "Medium", 5.0),
        });
        assert_eq!(notice, None);
        assert_eq!(state.category("size").unwrap().options.len(), 3);
    }

    #[test]
    fn test_add_conflicting_option_adjusts() {
        let mut state = color_finish();
        state.select_option("color", "blue");
        // restored selection that points at an option not loaded yet
        state.selected.set("size", "m");

        let notice = state.dispatch(ConfigAction::AddOption {
            category_id: "size".to_string(),
            option: ConfigOption::new("m", "Medium", 5.0).with_incompatibility("blue"),
        });
        assert_eq!(notice, Some(ConfigNotice::selections_adjusted()));
        assert_eq!(state.selected.get("color"), None);
        assert_eq!(state.selected.get("size"), None);
        assert_eq!(state.category("size").unwrap().options.len(), 3);
    }

    #[test]
    fn test_toggle_admin_and_restore() {
        let mut state = color_finish();
        state.dispatch(ConfigAction::ToggleAdmin);
        assert!(state.is_admin_mode);

        let restored: SelectedConfig = [("color", "blue")].into_iter().collect();
        state.dispatch(ConfigAction::RestoreConfig(restored.clone()));
        assert_eq!(state.selected, restored);
        assert_eq!(state.selected_option("color").unwrap().label, "Blue");
    }
}
