use contracts::domain::a005_theme::aggregate::{pick_active_theme, CreateThemeInput, Theme, UpdateThemeInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_theme::api;
use crate::domain::a005_theme::apply::apply_theme;
use crate::shared::components::ui::FormInput;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

/// Theme list of the account: apply, make default, create, delete
#[component]
pub fn ThemeDialog(handle: ModalHandle) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let token = move || auth.get_untracked().token().unwrap_or_default();

    let themes = RwSignal::new(Vec::<Theme>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let new_name = RwSignal::new(String::new());
    let new_primary = RwSignal::new("222 47% 11%".to_string());
    let new_secondary = RwSignal::new(String::new());
    let new_accent = RwSignal::new(String::new());

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(&token()).await {
                Ok(list) => themes.set(list),
                Err(e) => toasts.api_error(&e),
            }
            loading.set(false);
        });
    };
    reload();

    let make_default = move |theme: Theme| {
        apply_theme(&theme);
        spawn_local(async move {
            let input = UpdateThemeInput {
                token: token(),
                id: theme.id.clone(),
                is_default: Some(true),
                ..Default::default()
            };
            match api::update(&input).await {
                Ok(_) => {
                    toasts.success("Theme updated", "Your theme has been saved successfully.");
                    reload();
                }
                Err(e) => toasts.api_error(&e),
            }
        });
    };

    let remove = move |theme: Theme| {
        if !confirm(&format!("Delete theme \"{}\"?", theme.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete(&theme.id, &token()).await {
                Ok(()) => {
                    toasts.success("Theme deleted", format!("\"{}\" deleted.", theme.name));
                    themes.update(|list| list.retain(|t| t.id != theme.id));
                }
                Err(e) => toasts.api_error(&e),
            }
        });
    };

    let create = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            toasts.error("Validation error", "Theme name is required.");
            return;
        }
        let optional = |s: String| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        let input = CreateThemeInput {
            token: token(),
            name,
            primary_color: new_primary.get_untracked().trim().to_string(),
            secondary_color: optional(new_secondary.get_untracked()),
            accent_color: optional(new_accent.get_untracked()),
            ..Default::default()
        };
        saving.set(true);
        spawn_local(async move {
            match api::create(&input).await {
                Ok(theme) => {
                    toasts.success("Theme created", format!("\"{}\" created successfully.", theme.name));
                    new_name.set(String::new());
                    themes.update(|list| list.push(theme));
                }
                Err(e) => toasts.api_error(&e),
            }
            saving.set(false);
        });
    };

    let active_id = move || themes.with(|list| pick_active_theme(list).map(|t| t.id.clone()));

    view! {
        <div class="dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("palette")} "Themes"</h2>
            </div>
            <div class="dialog__body">
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !themes.with(Vec::is_empty)
                        fallback=|| view! { <p class="dialog__empty">"No themes yet."</p> }
                    >
                        <ul class="theme-list">
                            <For
                                each=move || themes.get()
                                key=|t| (t.id.clone(), t.is_default, t.name.clone())
                                children=move |theme| {
                                    let swatch = format!("background: hsl({})", theme.primary_color);
                                    let is_active = {
                                        let id = theme.id.clone();
                                        move || active_id().as_deref() == Some(id.as_str())
                                    };
                                    let for_default = theme.clone();
                                    let for_delete = theme.clone();
                                    view! {
                                        <li class="theme-list__item">
                                            <span class="theme-list__swatch" style=swatch></span>
                                            <span class="theme-list__name">{theme.name.clone()}</span>
                                            <Show when=is_active>
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Active"</Badge>
                                            </Show>
                                            {theme.is_default.then(|| view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Default"</Badge> })}
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| make_default(for_default.clone())
                                            >
                                                "Apply"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| remove(for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Show>

                <h3 class="dialog__section-title">"New theme"</h3>
                <FormInput label="Name" value=new_name required=true placeholder="Brand dark" />
                <FormInput
                    label="Primary color"
                    value=new_primary
                    required=true
                    placeholder="222 47% 11%"
                />
                <FormInput label="Secondary color" value=new_secondary placeholder="210 40% 96%" />
                <FormInput label="Accent color" value=new_accent placeholder="210 40% 90%" />
            </div>
            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>"Close"</Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=create
                >
                    {icon("plus")}
                    "Create theme"
                </Button>
            </div>
        </div>
    }
}
