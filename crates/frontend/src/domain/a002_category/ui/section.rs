use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a001_configurator::ui::panel::AdminActions;
use crate::domain::a003_option::ui::card::OptionCard;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;

/// One category: header, description and option grid
#[component]
pub fn CategorySection(
    page: ConfiguratorPageViewModel,
    category_id: String,
    actions: AdminActions,
) -> impl IntoView {
    let is_admin = page.is_admin();
    let expanded = RwSignal::new(true);
    let category = {
        let category_id = category_id.clone();
        Memo::new(move |_| page.state.with(|s| s.category(&category_id).cloned()))
    };

    let on_edit = move |_| {
        if let Some(c) = category.get_untracked() {
            actions.edit_category.run(Some(c));
        }
    };
    let on_delete = move |_| {
        let Some(c) = category.get_untracked() else {
            return;
        };
        let message = format!(
            "This will permanently delete the category \"{}\". All options in this category will also be deleted. This action cannot be undone.",
            c.name
        );
        if confirm(&message) {
            page.delete_category(c.id);
        }
    };
    let on_add_option = move |_| {
        if let Some(c) = category.get_untracked() {
            actions.add_option.run(c.id);
        }
    };

    let option_ids = move || {
        category.with(|c| {
            c.as_ref()
                .map(|c| c.options.iter().map(|o| o.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        {move || category.get().map(|c| {
            let category_id = c.id.clone();
            let type_name = c.category_type.display_name();
            view! {
                <div class="category-section">
                    <div class="category-section__header">
                        <button
                            class="category-section__toggle"
                            on:click=move |_| expanded.update(|e| *e = !*e)
                        >
                            <h2 class="category-section__title">{c.name}</h2>
                            {move || if expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                        </button>
                        {c.is_primary.then(|| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Primary"</Badge>
                        })}
                        {c.is_required.then(|| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Required"</Badge>
                        })}
                        <Show when=move || is_admin.get()>
                            <span class="category-section__type">{type_name}</span>
                            <div class="category-section__actions">
                                <Button appearance=ButtonAppearance::Subtle on_click=on_edit>
                                    {icon("edit")}
                                </Button>
                                <Button appearance=ButtonAppearance::Subtle on_click=on_delete>
                                    {icon("trash")}
                                </Button>
                            </div>
                        </Show>
                    </div>
                    {c.description.map(|d| view! { <p class="category-section__description">{d}</p> })}

                    <Show when=move || expanded.get()>
                        <div class="option-grid">
                            <For
                                each=option_ids
                                key=|id| id.clone()
                                children={
                                    let category_id = category_id.clone();
                                    move |option_id| {
                                        view! {
                                            <OptionCard
                                                page=page
                                                category_id=category_id.clone()
                                                option_id=option_id
                                                actions=actions
                                            />
                                        }
                                    }
                                }
                            />
                            <Show when=move || is_admin.get()>
                                <button class="option-grid__add" on:click=on_add_option>
                                    {icon("plus")}
                                    <span>"Add Option"</span>
                                </button>
                            </Show>
                        </div>
                    </Show>
                    <Show when=move || !is_admin.get() && option_ids().is_empty()>
                        <p class="category-section__empty">"No options available."</p>
                    </Show>
                </div>
            }
        })}
    }
}
