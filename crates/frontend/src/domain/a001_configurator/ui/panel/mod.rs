use contracts::domain::a002_category::aggregate::ConfigCategory;
use contracts::domain::a003_option::aggregate::ConfigOption;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a002_category::ui::section::CategorySection;
use crate::shared::icons::icon;

/// Admin entry points the panel hands down to sections and cards
#[derive(Clone, Copy)]
pub struct AdminActions {
    /// `None` opens the empty form
    pub edit_category: Callback<Option<ConfigCategory>>,
    pub add_option: Callback<String>,
    /// `(category_id, option)`
    pub edit_option: Callback<(String, ConfigOption)>,
}

/// Categories in order, each with its option grid
#[component]
pub fn ConfiguratorPanel(page: ConfiguratorPageViewModel, actions: AdminActions) -> impl IntoView {
    let is_admin = page.is_admin();
    let category_keys = move || {
        page.state.with(|s| {
            s.categories
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="configurator-panel">
            <For
                each=category_keys
                key=|id| id.clone()
                children=move |category_id| {
                    view! { <CategorySection page=page category_id=category_id actions=actions /> }
                }
            />

            <Show when=move || is_admin.get()>
                <div class="configurator-panel__admin">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| actions.edit_category.run(None)
                    >
                        {icon("plus")}
                        "Add Category"
                    </Button>
                </div>
            </Show>
        </section>
    }
}
