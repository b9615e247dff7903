use contracts::domain::a004_quote::aggregate::{Quote, QuoteListFilter, QuoteStatus, UpdateQuoteInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_quote::api;
use crate::shared::components::ui::{FormCheckbox, FormSelect};
use crate::shared::date_utils::{format_date, format_datetime, parse_date_input, to_date_input};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::context::use_auth;
use crate::system::settings::use_settings;

const STATUSES: [QuoteStatus; 4] = [
    QuoteStatus::Pending,
    QuoteStatus::Sent,
    QuoteStatus::Accepted,
    QuoteStatus::Rejected,
];

fn status_from_code(code: &str) -> Option<QuoteStatus> {
    STATUSES.into_iter().find(|s| s.code() == code)
}

fn status_badge_color(status: QuoteStatus) -> BadgeColor {
    match status {
        QuoteStatus::Pending => BadgeColor::Warning,
        QuoteStatus::Sent => BadgeColor::Brand,
        QuoteStatus::Accepted => BadgeColor::Success,
        QuoteStatus::Rejected => BadgeColor::Danger,
    }
}

/// Quote requests received for the account, with status follow-up
#[component]
pub fn QuotesDialog(
    handle: ModalHandle,
    /// Current configurator, offered as a filter
    configurator_id: Option<String>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let token = move || auth.get_untracked().token().unwrap_or_default();

    let quotes = RwSignal::new(Vec::<Quote>::new());
    let loading = RwSignal::new(false);
    let status_filter = RwSignal::new(String::new());
    let only_current = RwSignal::new(configurator_id.is_some());
    let code_lookup = RwSignal::new(String::new());

    let has_configurator = configurator_id.is_some();
    let load = move |configurator_id: Option<String>| {
        let filter = QuoteListFilter {
            status: status_from_code(&status_filter.get_untracked()),
            configurator_id: configurator_id.filter(|_| only_current.get_untracked()),
        };
        loading.set(true);
        spawn_local(async move {
            match api::fetch_list(&token(), &filter).await {
                Ok(list) => quotes.set(list),
                Err(e) => toasts.api_error(&e),
            }
            loading.set(false);
        });
    };

    // Reload whenever a filter changes
    {
        let configurator_id = configurator_id.clone();
        Effect::new(move |_| {
            status_filter.track();
            only_current.track();
            load(configurator_id.clone());
        });
    }

    let find_by_code = move |_| {
        let code = code_lookup.get_untracked().trim().to_string();
        if code.is_empty() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::fetch_by_code(&code).await {
                Ok(quote) => quotes.set(vec![quote]),
                Err(e) if e.status == Some(404) => {
                    toasts.error("Not found", format!("No quote with code {}.", code));
                }
                Err(e) => toasts.api_error(&e),
            }
            loading.set(false);
        });
    };

    let status_options = Signal::stored(
        std::iter::once((String::new(), "All statuses".to_string()))
            .chain(STATUSES.iter().map(|s| (s.code().to_string(), s.display_name().to_string())))
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="dialog quotes-dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("file-text")} "Quote Requests"</h2>
            </div>

            <div class="dialog__body">
                <Flex gap=FlexGap::Medium style="flex-wrap: wrap; align-items: flex-end;">
                    <FormSelect label="Status" value=status_filter options=status_options />
                    {has_configurator.then(|| view! {
                        <FormCheckbox label="This configurator only" checked=only_current />
                    })}
                    <div class="form__group">
                        <label class="form__label">"Quote code"</label>
                        <input
                            class="form__input"
                            placeholder="Q-..."
                            prop:value=move || code_lookup.get()
                            on:input=move |ev| code_lookup.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=find_by_code>
                        "Find"
                    </Button>
                </Flex>

                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !quotes.with(Vec::is_empty)
                        fallback=|| view! { <p class="dialog__empty">"No quote requests."</p> }
                    >
                        <div class="quotes-dialog__list">
                            <For
                                each=move || quotes.get()
                                key=|q| (q.id.clone(), q.status, q.internal_notes.clone(), q.valid_until)
                                children=move |quote| view! { <QuoteRow quote=quote quotes=quotes toasts=toasts /> }
                            />
                        </div>
                    </Show>
                </Show>
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Close"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn QuoteRow(quote: Quote, quotes: RwSignal<Vec<Quote>>, toasts: ToastService) -> impl IntoView {
    let (auth, _) = use_auth();
    let settings = use_settings();
    let expanded = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let status = RwSignal::new(quote.status.code().to_string());
    let notes = RwSignal::new(quote.internal_notes.clone().unwrap_or_default());
    let valid_until = RwSignal::new(quote.valid_until.as_ref().map(to_date_input).unwrap_or_default());

    let quote_id = quote.id.clone();
    let on_save = move |_| {
        let input = UpdateQuoteInput {
            token: auth.get_untracked().token().unwrap_or_default(),
            id: quote_id.clone(),
            status: status_from_code(&status.get_untracked()),
            internal_notes: Some(notes.get_untracked().trim().to_string()),
            valid_until: parse_date_input(&valid_until.get_untracked()),
        };
        saving.set(true);
        spawn_local(async move {
            match api::update(&input).await {
                Ok(updated) => {
                    toasts.success("Quote updated", format!("{} is now {}.", updated.quote_code, updated.status.display_name()));
                    quotes.update(|list| {
                        if let Some(q) = list.iter_mut().find(|q| q.id == updated.id) {
                            *q = updated;
                        }
                    });
                }
                Err(e) => toasts.api_error(&e),
            }
            saving.set(false);
        });
    };

    let status_options = Signal::stored(
        STATUSES
            .iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>(),
    );
    let customer = match &quote.customer_name {
        Some(name) if !name.trim().is_empty() => format!("{} <{}>", name, quote.customer_email),
        _ => quote.customer_email.clone(),
    };
    let created = quote.metadata.created_at.as_ref().map(format_datetime).unwrap_or_default();
    let total = quote.total_price;
    let code = quote.quote_code.clone();
    let current_status = quote.status;
    let phone = quote.customer_phone.clone();
    let valid_until_label = quote.valid_until.as_ref().map(format_date);

    view! {
        <div class="quote-row">
            <button class="quote-row__summary" on:click=move |_| expanded.update(|e| *e = !*e)>
                <span class="quote-row__code">{code}</span>
                <span class="quote-row__customer">{customer}</span>
                <span class="quote-row__total">{move || settings.format_price(total)}</span>
                <Badge appearance=BadgeAppearance::Tint color=status_badge_color(current_status)>
                    {current_status.display_name()}
                </Badge>
                <span class="quote-row__date">{created}</span>
            </button>
            <Show when=move || expanded.get()>
                <div class="quote-row__details">
                    {phone.clone().map(|p| view! { <div>"Phone: "{p}</div> })}
                    {valid_until_label.clone().map(|d| view! { <div>"Valid until: "{d}</div> })}
                    <FormSelect label="Status" value=status options=status_options />
                    <div class="form__group">
                        <label class="form__label">"Valid until"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || valid_until.get()
                            on:input=move |ev| valid_until.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Internal notes"</label>
                        <textarea
                            class="form__textarea"
                            rows=3
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=on_save.clone()
                    >
                        "Save"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(status_from_code("ACCEPTED"), Some(QuoteStatus::Accepted));
        assert_eq!(status_from_code(""), None);
        assert_eq!(status_from_code("accepted"), None);
    }
}
