use contracts::domain::a001_configurator::aggregate::UpdateConfiguratorInput;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_configurator::api;
use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

/// Configurator name; admins edit it inline (Enter saves, Escape cancels)
#[component]
pub fn EditableTitle(page: ConfiguratorPageViewModel) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let is_admin = page.is_admin();

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let name = move || {
        page.configurator
            .with(|c| c.as_ref().map(|c| c.display_name().to_string()))
            .unwrap_or_default()
    };

    let start = move |_| {
        draft.set(page.configurator.with_untracked(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default()));
        editing.set(true);
    };
    let cancel = move || editing.set(false);

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let new_name = draft.get_untracked().trim().to_string();
        if new_name.is_empty() {
            toasts.error("Error", "Title cannot be empty");
            return;
        }
        let Some(token) = auth.get_untracked().token() else {
            toasts.error("Error", "No authentication token available");
            return;
        };
        let Some(id) = page.configurator_id() else {
            return;
        };

        saving.set(true);
        spawn_local(async move {
            match api::update(&UpdateConfiguratorInput::rename(&token, &id, &new_name)).await {
                Ok(_) => {
                    page.rename(new_name);
                    editing.set(false);
                    toasts.success("Success", "Configurator name updated successfully");
                }
                Err(e) => {
                    log::error!("Failed to rename configurator {}: {}", id, e);
                    toasts.error("Error", e.message);
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Show
            when=move || is_admin.get() && editing.get()
            fallback=move || view! {
                <div class="editable-title">
                    <h1 class="editable-title__text">{name}</h1>
                    <Show when=move || is_admin.get()>
                        <Button appearance=ButtonAppearance::Subtle on_click=start>
                            {icon("edit")}
                        </Button>
                    </Show>
                </div>
            }
        >
            <div class="editable-title editable-title--editing">
                <input
                    class="form__input editable-title__input"
                    prop:value=move || draft.get()
                    disabled=move || saving.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => save(),
                        "Escape" => cancel(),
                        _ => {}
                    }
                    autofocus=true
                />
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| save()>
                    {icon("check")}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| cancel()>
                    {icon("x")}
                </Button>
            </div>
        </Show>
    }
}
