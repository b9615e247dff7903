use chrono::Utc;
use contracts::domain::a004_quote::aggregate::{CreateQuoteInput, QuoteCustomer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a004_quote::api;
use crate::shared::components::ui::{FormInput, FormTextarea};
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::toast::use_toasts;
use crate::system::settings::use_settings;

/// Contact form that snapshots the current selection into a quote request
#[component]
pub fn QuoteRequestDialog(
    page: ConfiguratorPageViewModel,
    handle: ModalHandle,
    /// Owned by the opener so the stack keeps the dialog open while sending
    submitting: RwSignal<bool>,
) -> impl IntoView {
    let toasts = use_toasts();
    let settings = use_settings();
    let total = page.total();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |_| {
        let customer = QuoteCustomer {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            company: company.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = customer.validate() {
            toasts.error(e.title(), e.description());
            return;
        }
        let Some(configurator_id) = page.configurator_id() else {
            return;
        };
        let input = page
            .state
            .with_untracked(|state| CreateQuoteInput::from_selection(&configurator_id, state, &customer, Utc::now()));

        submitting.set(true);
        spawn_local(async move {
            match api::create(&input).await {
                Ok(quote) => {
                    log::info!("Quote {} submitted", quote.quote_code);
                    toasts.success(
                        "Quote request sent!",
                        "Your quote request has been submitted successfully. We'll get back to you within 24 hours.",
                    );
                    handle.close();
                }
                Err(e) if e.status.is_some() => {
                    log::error!("Quote submission failed: {}", e);
                    toasts.error("Submission failed", e.message);
                }
                Err(e) => {
                    log::error!("Quote submission failed: {}", e);
                    toasts.error("Something went wrong", e.message);
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="dialog quote-request">
            <div class="dialog__header">
                <h2 class="dialog__title">"Request a Quote"</h2>
            </div>

            <div class="quote-request__total">
                <span>"Total Configuration Price:"</span>
                <span class="quote-request__amount">{move || settings.format_price(total.get())}</span>
            </div>

            <div class="dialog__body">
                <FormInput label="Name" value=name required=true placeholder="Enter your full name" id="name" />
                <FormInput
                    label="Email"
                    value=email
                    required=true
                    input_type="email"
                    placeholder="your.email@example.com"
                    id="email"
                />
                <FormInput label="Phone" value=phone input_type="tel" placeholder="+1-555-0123" id="phone" />
                <FormInput label="Company" value=company placeholder="Your company name (optional)" id="company" />
                <FormTextarea
                    label="Message"
                    value=message
                    rows=4
                    placeholder="Any additional requirements or questions..."
                    id="message"
                />
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || submitting.get())
                    on_click=on_submit
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                </Button>
            </div>
        </div>
    }
}

/// Open the quote dialog on top of the stack; it cannot be dismissed mid-submit
pub fn open_quote_request(modals: ModalStackService, page: ConfiguratorPageViewModel) {
    let submitting = RwSignal::new(false);
    modals.push_guarded(
        "modal--narrow",
        move || !submitting.get_untracked(),
        move |handle| view! { <QuoteRequestDialog page=page handle=handle submitting=submitting /> }.into_any(),
    );
}
