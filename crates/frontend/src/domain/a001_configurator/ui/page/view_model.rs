use contracts::domain::a001_configurator::aggregate::Configurator;
use contracts::domain::a002_category::aggregate::{ConfigCategory, CreateCategoryInput, UpdateCategoryInput};
use contracts::domain::a003_option::aggregate::{ConfigOption, CreateOptionInput, UpdateOptionInput};
use contracts::shared::api::{ApiClientError, ApiErrorCode};
use contracts::shared::configuration::{
    auto_select, calculate_total, initial_selection, summary_items, ConfigAction, ConfigNotice, ConfigState,
    SummaryItem,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_configurator::api as configurator_api;
use crate::domain::a002_category::api as category_api;
use crate::domain::a003_option::api as option_api;
use crate::domain::a005_theme::apply::apply_theme;
use crate::shared::toast::ToastService;
use crate::system::auth::context::{ActiveCredentials, AuthState};
use crate::system::settings::SettingsContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    NotFound,
}

/// Page state: the selection engine plus the loaded configurator
#[derive(Clone, Copy)]
pub struct ConfiguratorPageViewModel {
    pub state: RwSignal<ConfigState>,
    pub configurator: RwSignal<Option<Configurator>>,
    pub load_status: RwSignal<LoadStatus>,
    auth: ReadSignal<AuthState>,
    toasts: ToastService,
    settings: SettingsContext,
}

impl ConfiguratorPageViewModel {
    pub fn new(auth: ReadSignal<AuthState>, toasts: ToastService, settings: SettingsContext) -> Self {
        Self {
            state: RwSignal::new(ConfigState::default()),
            configurator: RwSignal::new(None),
            load_status: RwSignal::new(LoadStatus::Idle),
            auth,
            toasts,
            settings,
        }
    }

    pub fn is_admin(&self) -> Signal<bool> {
        let auth = self.auth;
        Signal::derive(move || auth.get().is_admin())
    }

    pub fn total(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || state.with(calculate_total))
    }

    pub fn summary(&self) -> Signal<Vec<SummaryItem>> {
        let state = self.state;
        Signal::derive(move || state.with(summary_items))
    }

    pub fn configurator_id(&self) -> Option<String> {
        self.configurator.with_untracked(|c| c.as_ref().map(|c| c.id.clone()))
    }

    fn token(&self) -> Result<String, ApiClientError> {
        self.auth.get_untracked().token().ok_or_else(|| {
            ApiClientError::new(
                "No authentication token available",
                ApiErrorCode::Unauthorized,
                None,
            )
        })
    }

    /// Mutate the state, then fill required categories again; every notice becomes a toast
    fn apply<F>(&self, f: F)
    where
        F: FnOnce(&mut ConfigState) -> Option<ConfigNotice>,
    {
        let mut notices: Vec<ConfigNotice> = Vec::new();
        self.state.update(|state| {
            notices.extend(f(state));
            for notice in auto_select(state) {
                if !notices.contains(&notice) {
                    notices.push(notice);
                }
            }
        });
        for notice in &notices {
            self.toasts.notice(notice);
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub fn load(&self, credentials: ActiveCredentials) {
        let this = *self;
        this.load_status.set(LoadStatus::Loading);

        spawn_local(async move {
            match configurator_api::fetch_by_public_id(&credentials.public_id, &credentials.public_key).await {
                Ok(configurator) => {
                    log::info!(
                        "Loaded configurator {} with {} categories",
                        configurator.id,
                        configurator.categories.len()
                    );
                    this.settings.apply_configurator_currency(&configurator.currency);
                    if let Some(theme) = &configurator.theme {
                        apply_theme(theme);
                    }

                    let categories = configurator.categories.clone();
                    let is_admin_mode = this.auth.get_untracked().is_admin();
                    this.apply(move |state| {
                        state.selected = initial_selection(&categories);
                        state.categories = categories;
                        state.is_admin_mode = is_admin_mode;
                        None
                    });
                    this.configurator.set(Some(configurator));
                    this.load_status.set(LoadStatus::Loaded);
                }
                Err(e) => {
                    log::error!("Failed to load configurator {}: {}", credentials.public_id, e);
                    this.load_status.set(LoadStatus::NotFound);
                }
            }
        });
    }

    /// Keep the reducer's admin flag in line with the verified session
    pub fn sync_admin_mode(&self, is_admin: bool) {
        if self.state.with_untracked(|s| s.is_admin_mode) != is_admin {
            self.state.update(|s| {
                s.dispatch(ConfigAction::ToggleAdmin);
            });
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn click_option(&self, category_id: &str, option_id: &str) {
        self.apply(|state| state.click_option(category_id, option_id).notice().cloned());
    }

    /// Summary panel "remove": empties the category; required ones are refilled
    pub fn clear_selection(&self, category_id: &str) {
        let action = ConfigAction::SelectOption {
            category_id: category_id.to_string(),
            option_id: String::new(),
        };
        self.apply(|state| state.dispatch(action));
    }

    /// Back to the defaults the page opened with
    pub fn reset_selection(&self) {
        self.apply(|state| {
            let initial = initial_selection(&state.categories);
            state.dispatch(ConfigAction::RestoreConfig(initial))
        });
    }

    /// Reload the catalogue from the API, keeping the current selection
    pub fn refresh_categories(&self) {
        let this = *self;
        let Some(configurator_id) = self.configurator_id() else {
            return;
        };

        spawn_local(async move {
            let mut categories = match category_api::fetch_list(&configurator_id).await {
                Ok(categories) => categories,
                Err(e) => {
                    this.toasts.api_error(&e);
                    return;
                }
            };
            for category in categories.iter_mut().filter(|c| c.options.is_empty()) {
                match option_api::fetch_list(&category.id).await {
                    Ok(options) => category.options = options,
                    Err(e) => log::warn!("Failed to load options of {}: {}", category.id, e),
                }
            }
            categories.sort_by_key(|c| c.order_index);
            log::info!("Refreshed {} categories", categories.len());
            this.apply(|state| state.dispatch(ConfigAction::SetCategories(categories)));
        });
    }

    pub fn rename(&self, name: String) {
        self.configurator.update(|c| {
            if let Some(c) = c {
                c.name = name;
            }
        });
    }

    // ------------------------------------------------------------------
    // Catalogue mutations (admin)
    // ------------------------------------------------------------------

    pub async fn add_category(self, mut category: ConfigCategory) -> Result<ConfigCategory, ApiClientError> {
        let result = async {
            let token = self.token()?;
            if category.configurator_id.is_empty() {
                category.configurator_id = self.configurator_id().unwrap_or_default();
            }
            category_api::create(&CreateCategoryInput::from_category(&token, &category)).await
        }
        .await;

        match result {
            Ok(created) => {
                self.apply(|state| state.dispatch(ConfigAction::AddCategory(created.clone())));
                self.toasts.success("Category added", format!("\"{}\" created successfully.", created.name));
                Ok(created)
            }
            Err(e) => {
                self.toasts.error("Error", e.message.clone());
                Err(e)
            }
        }
    }

    pub async fn update_category(self, category: ConfigCategory) -> Result<ConfigCategory, ApiClientError> {
        let result = async {
            let token = self.token()?;
            category_api::update(&UpdateCategoryInput::from_category(&token, &category)).await
        }
        .await;

        match result {
            Ok(updated) => {
                self.apply(|state| state.dispatch(ConfigAction::UpdateCategory(updated.clone())));
                self.toasts.success("Category updated", format!("\"{}\" updated successfully.", updated.name));
                Ok(updated)
            }
            Err(e) => {
                self.toasts.error("Error", e.message.clone());
                Err(e)
            }
        }
    }

    pub fn delete_category(&self, category_id: String) {
        let this = *self;
        let name = self
            .state
            .with_untracked(|s| s.category(&category_id).map(|c| c.name.clone()))
            .unwrap_or_else(|| "Category".to_string());

        spawn_local(async move {
            let result = async {
                let token = this.token()?;
                category_api::delete(&category_id, &token).await
            }
            .await;

            match result {
                Ok(()) => {
                    this.apply(|state| state.dispatch(ConfigAction::DeleteCategory(category_id)));
                    this.toasts.success("Category deleted", format!("\"{}\" deleted.", name));
                }
                Err(e) => this.toasts.error("Error", e.message),
            }
        });
    }

    /// Limit errors are returned without a toast; the caller shows the upgrade prompt
    pub async fn add_option(self, category_id: String, option: ConfigOption) -> Result<ConfigOption, ApiClientError> {
        let result = async {
            let token = self.token()?;
            option_api::create(&CreateOptionInput::from_option(&token, &category_id, &option)).await
        }
        .await;

        match result {
            Ok(created) => {
                let label = created.label.clone();
                self.apply(|state| {
                    state.dispatch(ConfigAction::AddOption {
                        category_id,
                        option: created.clone(),
                    })
                });
                self.toasts.success("Option added", format!("\"{}\" created successfully.", label));
                Ok(created)
            }
            Err(e) => {
                if !e.is_limit_error() {
                    self.toasts.error("Error", e.message.clone());
                }
                Err(e)
            }
        }
    }

    pub async fn update_option(self, category_id: String, option: ConfigOption) -> Result<ConfigOption, ApiClientError> {
        let result = async {
            let token = self.token()?;
            option_api::update(&UpdateOptionInput::from_option(&token, &option)).await
        }
        .await;

        match result {
            Ok(updated) => {
                let label = updated.label.clone();
                self.apply(|state| {
                    state.dispatch(ConfigAction::UpdateOption {
                        category_id,
                        option: updated.clone(),
                    })
                });
                self.toasts.success("Option updated", format!("\"{}\" updated successfully.", label));
                Ok(updated)
            }
            Err(e) => {
                self.toasts.error("Error", e.message.clone());
                Err(e)
            }
        }
    }

    pub fn delete_option(&self, category_id: String, option_id: String) {
        let this = *self;
        let label = self
            .state
            .with_untracked(|s| {
                s.category(&category_id)
                    .and_then(|c| c.find_option(&option_id))
                    .map(|o| o.label.clone())
            })
            .unwrap_or_else(|| "Option".to_string());

        spawn_local(async move {
            let result = async {
                let token = this.token()?;
                option_api::delete(&option_id, &token).await
            }
            .await;

            match result {
                Ok(()) => {
                    this.apply(|state| {
                        state.dispatch(ConfigAction::DeleteOption {
                            category_id,
                            option_id,
                        })
                    });
                    this.toasts.success("Option deleted", format!("\"{}\" deleted.", label));
                }
                Err(e) => this.toasts.error("Error", e.message),
            }
        });
    }
}
