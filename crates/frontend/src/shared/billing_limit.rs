//! Prompt shown when the plan does not allow more options

use leptos::prelude::*;
use thaw::*;

use crate::shared::dom::open_in_new_tab;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};

pub const BILLING_URL: &str = "https://konfigra.vercel.app/dashboard/billing";

#[component]
pub fn BillingLimitDialog(handle: ModalHandle) -> impl IntoView {
    let on_upgrade = move |_| {
        open_in_new_tab(BILLING_URL);
        handle.close();
    };

    view! {
        <div class="dialog billing-limit">
            <div class="dialog__header">
                <h2 class="dialog__title billing-limit__title">{icon("alert")} "Limit Reached"</h2>
                <p class="dialog__description">
                    "You've reached the maximum number of options allowed for your current plan. "
                    "Upgrade your plan to add more options to your configurator."
                </p>
            </div>
            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Primary on_click=on_upgrade>
                    "Increase Your Limit"
                </Button>
            </div>
        </div>
    }
}

pub fn open_billing_limit(modals: ModalStackService) {
    log::warn!("Plan option limit reached");
    modals.push(|handle| view! { <BillingLimitDialog handle=handle /> }.into_any());
}
