use contracts::domain::a002_category::aggregate::ConfigCategory;
use contracts::enums::AttributeType;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{AttributeRow, CategoryDetailsViewModel};
use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::shared::components::ui::{FormCheckbox, FormInput, FormSelect, FormTextarea};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;

#[component]
pub fn CategoryDetails(
    page: ConfiguratorPageViewModel,
    existing: Option<ConfigCategory>,
    handle: ModalHandle,
    /// Called after a successful save with `(category, was_created)`
    on_saved: Callback<(ConfigCategory, bool)>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(page, existing);
    let title = if vm.is_edit_mode() { "Edit Category" } else { "Add Category" };
    let type_locked = vm.type_locked();
    let primary_taken = vm.primary_taken();
    let other_categories = vm.other_categories();

    let on_save = {
        let vm = vm.clone();
        move |_| {
            vm.save_command(Callback::new(move |saved: (ConfigCategory, bool)| {
                handle.close();
                on_saved.run(saved);
            }));
        }
    };
    let saving = vm.saving;

    view! {
        <div class="dialog category-details">
            <div class="dialog__header">
                <h2 class="dialog__title">{title}</h2>
            </div>

            {
                let error = vm.error;
                move || error.get().map(|e| view! { <div class="dialog__error">{e}</div> })
            }

            <div class="dialog__body">
                <FormInput label="Name" value=vm.name required=true placeholder="e.g. Color" />
                <FormSelect
                    label="Type"
                    value=vm.category_type
                    options=Signal::derive(CategoryDetailsViewModel::category_type_options)
                    disabled=type_locked
                    hint=type_locked
                        .then(|| "The type cannot change while the category has options.".to_string())
                />
                <FormTextarea label="Description" value=vm.description rows=2 />
                <FormCheckbox
                    label="Primary category"
                    checked=vm.is_primary
                    disabled=primary_taken
                    hint=Signal::derive(move || {
                        primary_taken.get().then(|| "Another category is already primary.".to_string())
                    })
                />
                <FormCheckbox label="Required" checked=vm.is_required />

                {
                let vm = vm.clone();
                view! {
                <Show when=move || !other_categories.with(Vec::is_empty)>
                    <div class="form__group">
                        <label class="form__label">"Related categories"</label>
                        <div class="form__hint">
                            "Incompatibilities can be set against these. None selected means all."
                        </div>
                        <For
                            each=move || other_categories.get()
                            key=|(id, name)| (id.clone(), name.clone())
                            children={
                                let vm = vm.clone();
                                move |(id, name)| {
                                    let checked = {
                                        let related = vm.related_categories;
                                        let id = id.clone();
                                        move || related.with(|ids| ids.contains(&id))
                                    };
                                    let vm = vm.clone();
                                    view! {
                                        <label class="form__checkbox-wrapper">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| vm.toggle_related(&id)
                                            />
                                            <span>{name}</span>
                                        </label>
                                    }
                                }
                            }
                        />
                    </div>
                </Show>
                }
                }

                <AttributeTemplateEditor vm=vm.clone() />
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=on_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn AttributeTemplateEditor(vm: CategoryDetailsViewModel) -> impl IntoView {
    let type_options: Vec<(String, String)> = AttributeType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let rows = vm.attributes;

    view! {
        <div class="attribute-template">
            <div class="attribute-template__header">
                <span class="form__label">"Attributes"</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click={
                        let vm = vm.clone();
                        move |_| vm.add_attribute()
                    }
                >
                    {icon("plus")}
                    "Add attribute"
                </Button>
            </div>
            <For
                each=move || rows.get()
                key=|row| row.row_id
                children=move |row: AttributeRow| {
                    let vm = vm.clone();
                    let row_id = row.row_id;
                    let kind = row.attribute_type;
                    view! {
                        <div class="attribute-template__row">
                            <FormInput label="Label" value=row.label placeholder="e.g. Max Power" />
                            <FormSelect
                                label="Type"
                                value=row.attribute_type
                                options=Signal::stored(type_options.clone())
                            />
                            <FormInput label="Unit" value=row.unit placeholder="W" />
                            <Show when=move || kind.get() == AttributeType::Select.code()>
                                <FormInput
                                    label="Allowed values"
                                    value=row.options
                                    placeholder="Comma separated"
                                />
                            </Show>
                            <Show when=move || kind.get() == AttributeType::Number.code()>
                                <FormInput label="Min" value=row.min input_type="number" />
                                <FormInput label="Max" value=row.max input_type="number" />
                            </Show>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| vm.remove_attribute(row_id)
                            >
                                {icon("trash")}
                            </Button>
                        </div>
                    }
                }
            />
        </div>
    }
}
