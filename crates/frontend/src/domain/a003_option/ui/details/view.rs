use contracts::domain::a002_category::aggregate::{AttributeDefinition, ConfigCategory};
use contracts::domain::a003_option::aggregate::ConfigOption;
use contracts::domain::a007_file::aggregate::{FileType, FileUpload};
use contracts::enums::AttributeType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::view_model::{CandidateView, OptionDetailsViewModel};
use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a007_file::api as file_api;
use crate::shared::components::ui::{FormCheckbox, FormInput, FormTextarea};
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

#[component]
pub fn OptionDetails(
    page: ConfiguratorPageViewModel,
    category: ConfigCategory,
    existing: Option<ConfigOption>,
    handle: ModalHandle,
    /// Plan limit reached while creating
    on_limit: Callback<()>,
) -> impl IntoView {
    let vm = OptionDetailsViewModel::new(page, category, existing);
    let title = if vm.is_edit_mode() {
        "Edit Option".to_string()
    } else {
        format!("Add Option to {}", vm.category.name)
    };
    let fields = vm.type_fields();
    let template = vm.category.attributes_template.clone();
    let saving = vm.saving;

    let on_save = {
        let vm = vm.clone();
        move |_| {
            vm.save_command(
                Callback::new(move |_: ConfigOption| handle.close()),
                on_limit,
            );
        }
    };

    view! {
        <div class="dialog option-details">
            <div class="dialog__header">
                <h2 class="dialog__title">{title}</h2>
            </div>

            {
                let error = vm.error;
                move || error.get().map(|e| view! { <div class="dialog__error">{e}</div> })
            }

            <div class="dialog__body">
                <FormInput label="Label" value=vm.label required=true placeholder="e.g. Matte Black" />
                <FormInput label="Price" value=vm.price input_type="number" placeholder="0.00" />
                <FormTextarea label="Description" value=vm.description rows=2 />
                <FormInput label="SKU" value=vm.sku placeholder="Optional" />

                <ImageField vm=vm.clone() />

                <FormCheckbox label="Default option" checked=vm.is_default />
                <FormCheckbox label="In stock" checked=vm.in_stock />

                {fields.color.then(|| view! {
                    <FormInput label="Hex color" value=vm.hex_color placeholder="#000000" />
                })}
                {fields.power.then(|| view! {
                    <FormInput label="Voltage" value=vm.voltage placeholder="230V" />
                    <FormInput label="Wattage" value=vm.wattage placeholder="60W" />
                })}
                {fields.material.then(|| view! {
                    <FormInput label="Material" value=vm.material_type placeholder="Oak" />
                })}
                {fields.finish.then(|| view! {
                    <FormInput label="Finish" value=vm.finish_type placeholder="Matte" />
                })}
                {fields.text.then(|| view! {
                    <FormInput label="Text" value=vm.text_value />
                    <FormInput label="Max characters" value=vm.max_characters input_type="number" />
                })}
                {fields.dimensions.then(|| view! {
                    <div class="form__row">
                        <FormInput label="Width" value=vm.width input_type="number" />
                        <FormInput label="Height" value=vm.height input_type="number" />
                        <FormInput label="Unit" value=vm.dimension_unit />
                    </div>
                })}

                {(!template.is_empty()).then(|| {
                    let vm = vm.clone();
                    view! {
                        <div class="option-details__attributes">
                            <h3 class="dialog__section-title">"Attributes"</h3>
                            {template
                                .into_iter()
                                .map(|def| view! { <AttributeField vm=vm.clone() def=def /> })
                                .collect_view()}
                        </div>
                    }
                })}

                <CompatibilityPicker vm=vm.clone() />
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
fn AttributeField(vm: OptionDetailsViewModel, def: AttributeDefinition) -> impl IntoView {
    let key = def.key.clone();
    let label = match def.unit.as_deref().filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} ({})", def.label, unit),
        None => def.label.clone(),
    };
    let current = {
        let vm = vm.clone();
        let key = key.clone();
        move || vm.attribute_input(&key)
    };
    let on_input = {
        let vm = vm.clone();
        let key = key.clone();
        move |ev: leptos::ev::Event| vm.set_attribute_input(&key, event_target_value(&ev))
    };

    let control = match def.attribute_type {
        AttributeType::Select => {
            let allowed = def.options.clone().unwrap_or_default();
            view! {
                <select class="form__select" on:change=on_input>
                    <option value="" selected={
                        let current = current.clone();
                        move || current().is_empty()
                    }>"Select..."</option>
                    {allowed
                        .into_iter()
                        .map(|value| {
                            let is_selected = {
                                let current = current.clone();
                                let value = value.clone();
                                move || current() == value
                            };
                            view! { <option value=value.clone() selected=is_selected>{value.clone()}</option> }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        AttributeType::Boolean => {
            let on_change = {
                let vm = vm.clone();
                let key = key.clone();
                move |ev: leptos::ev::Event| {
                    let checked = event_target_checked(&ev);
                    vm.set_attribute_input(&key, checked.to_string());
                }
            };
            view! {
                <input type="checkbox" prop:checked=move || current() == "true" on:change=on_change />
            }
            .into_any()
        }
        AttributeType::Color => view! {
            <input class="form__input" type="color" prop:value=current on:input=on_input />
        }
        .into_any(),
        AttributeType::Number => {
            let min = def.min.map(|n| n.to_string()).unwrap_or_default();
            let max = def.max.map(|n| n.to_string()).unwrap_or_default();
            view! {
                <input
                    class="form__input"
                    type="number"
                    min=min
                    max=max
                    prop:value=current
                    on:input=on_input
                />
            }
            .into_any()
        }
        AttributeType::Text | AttributeType::Dimension => view! {
            <input class="form__input" type="text" prop:value=current on:input=on_input />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {control}
        </div>
    }
}

#[component]
fn ImageField(vm: OptionDetailsViewModel) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let image_url = vm.image_url;
    let uploading = vm.uploading;

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        if FileType::from_mime(&file.type_()) != FileType::Image {
            toasts.error("Upload failed", "Please choose an image file.");
            return;
        }
        let token = auth.get_untracked().token().unwrap_or_default();
        uploading.set(true);
        spawn_local(async move {
            match file_api::upload(&file, &token).await {
                Ok(upload) => {
                    log::info!("Uploaded {} ({} bytes)", upload.original_name, upload.size);
                    image_url.set(upload.url);
                }
                Err(e) => toasts.error("Upload failed", e.message),
            }
            uploading.set(false);
        });
    };

    // Images uploaded earlier, loaded on demand
    let library = RwSignal::new(None::<Vec<FileUpload>>);
    let open_library = move |_| {
        let token = auth.get_untracked().token().unwrap_or_default();
        spawn_local(async move {
            match file_api::fetch_list(&token, Some(FileType::Image)).await {
                Ok(files) => library.set(Some(files)),
                Err(e) => toasts.api_error(&e),
            }
        });
    };
    let remove_file = move |file: FileUpload| {
        if !confirm(&format!("Delete \"{}\" from your uploads?", file.original_name)) {
            return;
        }
        let token = auth.get_untracked().token().unwrap_or_default();
        spawn_local(async move {
            match file_api::delete(&file.id, &token).await {
                Ok(()) => {
                    if image_url.get_untracked() == file.url {
                        image_url.set(String::new());
                    }
                    library.update(|files| {
                        if let Some(files) = files {
                            files.retain(|f| f.id != file.id);
                        }
                    });
                }
                Err(e) => toasts.api_error(&e),
            }
        });
    };

    view! {
        <div class="form__group option-details__image">
            <FormInput label="Image URL" value=image_url placeholder="https://..." />
            <div class="option-details__upload">
                <input type="file" accept="image/*" on:change=on_file disabled=move || uploading.get() />
                <Show when=move || uploading.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
                <Button appearance=ButtonAppearance::Subtle on_click=open_library>
                    "Choose from uploads"
                </Button>
            </div>
            {move || library.get().map(|files| {
                if files.is_empty() {
                    return view! { <p class="form__hint">"No uploaded images yet."</p> }.into_any();
                }
                view! {
                    <div class="file-library">
                        {files.into_iter().map(|file| {
                            let url = file.url.clone();
                            let src = file.url.clone();
                            let name = file.original_name.clone();
                            view! {
                                <div class="file-library__item">
                                    <img
                                        class="file-library__thumb"
                                        src=src
                                        alt=name
                                        on:click=move |_| image_url.set(url.clone())
                                    />
                                    <button
                                        class="file-library__remove"
                                        title="Delete"
                                        on:click=move |_| remove_file(file.clone())
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            })}
            <Show when=move || !image_url.get().trim().is_empty()>
                <img class="option-details__preview" src=move || image_url.get() alt="Preview" />
            </Show>
        </div>
    }
}

#[component]
fn CompatibilityPicker(vm: OptionDetailsViewModel) -> impl IntoView {
    let candidates = vm.candidates();
    let incompatible = vm.incompatible;
    let picked_count = move || incompatible.with(|ids| ids.len());

    view! {
        <div class="compatibility-picker">
            <h3 class="dialog__section-title">
                "Incompatible with"
                <span class="compatibility-picker__count">{move || format!(" ({})", picked_count())}</span>
            </h3>
            <div class="compatibility-picker__controls">
                <input
                    class="form__input"
                    type="search"
                    placeholder="Search options or categories"
                    prop:value=move || vm.search.get()
                    on:input={
                        let search = vm.search;
                        move |ev| search.set(event_target_value(&ev))
                    }
                />
                <FormCheckbox label="Show all categories" checked=vm.show_all />
            </div>
            <Show
                when=move || !candidates.with(Vec::is_empty)
                fallback=|| view! { <p class="form__hint">"No other options to pick from."</p> }
            >
                <For
                    each=move || candidates.get()
                    key=|group: &CandidateView| (group.category_id.clone(), group.options.clone())
                    children={
                        let vm = vm.clone();
                        move |group: CandidateView| {
                            let vm = vm.clone();
                            view! {
                                <div class="compatibility-picker__group">
                                    <div class="compatibility-picker__category">{group.category_name}</div>
                                    {group
                                        .options
                                        .into_iter()
                                        .map(|(id, label)| {
                                            let vm = vm.clone();
                                            let checked = {
                                                let id = id.clone();
                                                move || incompatible.with(|ids| ids.contains(&id))
                                            };
                                            view! {
                                                <label class="form__checkbox-wrapper">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=checked
                                                        on:change=move |_| vm.toggle_incompatible(&id)
                                                    />
                                                    <span>{label}</span>
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        }
                    }
                />
            </Show>
        </div>
    }
}
