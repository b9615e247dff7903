use contracts::domain::a001_configurator::aggregate::{Configurator, CreateConfiguratorInput};
use contracts::shared::currency::Currency;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_configurator::api;
use crate::shared::components::ui::{FormInput, FormSelect};
use crate::shared::date_utils::format_date;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

fn create_input(token: String, name: &str, description: &str, currency: Option<Currency>) -> CreateConfiguratorInput {
    let description = description.trim();
    CreateConfiguratorInput {
        token,
        name: name.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        currency: currency.map(|c| c.code().to_string()),
        currency_symbol: currency.map(|c| c.symbol().to_string()),
        theme_id: None,
    }
}

/// Configurators of the account
#[component]
pub fn ConfiguratorsDialog(
    handle: ModalHandle,
    /// Highlighted as the one being edited
    current_id: Option<String>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let token = move || auth.get_untracked().token().unwrap_or_default();

    let configurators = RwSignal::new(Vec::<Configurator>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let new_currency = RwSignal::new(Currency::default().code().to_string());

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(&token()).await {
                Ok(list) => configurators.set(list),
                Err(e) => toasts.api_error(&e),
            }
            loading.set(false);
        });
    };
    reload();

    let create = move |_| {
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            toasts.error("Error", "Name cannot be empty");
            return;
        }
        let input = create_input(
            token(),
            &name,
            &new_description.get_untracked(),
            Currency::from_code(&new_currency.get_untracked()),
        );
        busy.set(true);
        spawn_local(async move {
            match api::create(&input).await {
                Ok(created) => {
                    toasts.success("Configurator created", format!("\"{}\" has been created.", created.name));
                    new_name.set(String::new());
                    new_description.set(String::new());
                    configurators.update(|list| list.push(created));
                }
                Err(e) => toasts.api_error(&e),
            }
            busy.set(false);
        });
    };

    let duplicate = move |id: String| {
        busy.set(true);
        spawn_local(async move {
            match api::duplicate(&token(), &id).await {
                Ok(copy) => {
                    toasts.success("Configurator duplicated", format!("\"{}\" has been created.", copy.name));
                    configurators.update(|list| list.push(copy));
                }
                Err(e) => toasts.api_error(&e),
            }
            busy.set(false);
        });
    };

    let remove = move |id: String, name: String| {
        if !confirm(&format!(
            "This will permanently delete the configurator \"{}\" with all its categories and options. This action cannot be undone.",
            name
        )) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match api::delete(&id, &token()).await {
                Ok(()) => {
                    toasts.success("Configurator deleted", format!("\"{}\" has been removed.", name));
                    configurators.update(|list| list.retain(|c| c.id != id));
                }
                Err(e) => toasts.api_error(&e),
            }
            busy.set(false);
        });
    };

    let currency_options = Signal::stored(
        Currency::all()
            .iter()
            .map(|c| (c.code().to_string(), format!("{} ({})", c.display_name(), c.symbol())))
            .collect::<Vec<_>>(),
    );
    let current_id = StoredValue::new(current_id);

    view! {
        <div class="dialog configurators-dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("layers")} "Configurators"</h2>
            </div>

            <div class="dialog__body">
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !configurators.with(Vec::is_empty)
                        fallback=|| view! { <p class="dialog__empty">"No configurators yet."</p> }
                    >
                        <div class="configurators-dialog__list">
                            <For
                                each=move || configurators.get()
                                key=|c| (c.id.clone(), c.name.clone())
                                children=move |cfg| {
                                    let id = cfg.id.clone();
                                    let name = cfg.display_name().to_string();
                                    let is_current = current_id.with_value(|c| c.as_deref() == Some(id.as_str()));
                                    let created = cfg.metadata.created_at.as_ref().map(format_date);
                                    let dup_id = id.clone();
                                    let del_name = name.clone();
                                    view! {
                                        <div class="configurator-row" class:configurator-row--current=is_current>
                                            <div class="configurator-row__info">
                                                <span class="configurator-row__name">{name}</span>
                                                {is_current.then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                                        "Current"
                                                    </Badge>
                                                })}
                                                {cfg.is_published.then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                        "Published"
                                                    </Badge>
                                                })}
                                                <span class="configurator-row__meta">
                                                    {format!("{} categories", cfg.categories.len())}
                                                    {created.map(|d| format!(" | created {}", d))}
                                                </span>
                                            </div>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=move |_| duplicate(dup_id.clone())
                                            >
                                                {icon("copy")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || busy.get() || is_current)
                                                on_click=move |_| remove(id.clone(), del_name.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>

                <h3 class="dialog__section-title">"New configurator"</h3>
                <Flex vertical=true gap=FlexGap::Small>
                    <FormInput label="Name" value=new_name required=true placeholder="e.g. Custom Desk" />
                    <FormInput label="Description" value=new_description />
                    <FormSelect label="Currency" value=new_currency options=currency_options />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || busy.get())
                        on_click=create
                    >
                        {icon("plus")} "Create"
                    </Button>
                </Flex>
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Close"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_input() {
        let input = create_input("tok".to_string(), "  Desk ", " ", Some(Currency::Eur));
        assert_eq!(input.name, "Desk");
        assert_eq!(input.description, None);
        assert_eq!(input.currency.as_deref(), Some("EUR"));
        assert_eq!(input.currency_symbol.as_deref(), Some("€"));
    }
}
