use contracts::shared::currency::Currency;
use leptos::prelude::*;
use thaw::*;

use super::context::use_settings;
use crate::shared::modal_stack::ModalHandle;

/// Settings dialog: display currency
#[component]
pub fn SettingsDialog(handle: ModalHandle) -> impl IntoView {
    let settings = use_settings();
    let selected = RwSignal::new(settings.currency.get_untracked().code().to_string());

    let on_save = move |_| {
        if let Some(currency) = Currency::from_code(&selected.get()) {
            settings.set_currency(currency);
        }
        handle.close();
    };

    view! {
        <div class="dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">"Settings"</h2>
                <p class="dialog__description">"Choose the currency prices are shown in."</p>
            </div>

            <div class="dialog__body">
                <Flex vertical=true gap=FlexGap::Small>
                    {Currency::all()
                        .into_iter()
                        .map(|currency| {
                            let code = currency.code().to_string();
                            let is_selected = {
                                let code = code.clone();
                                move || selected.get() == code
                            };
                            view! {
                                <button
                                    class="currency-option"
                                    class:currency-option--selected=is_selected
                                    on:click=move |_| selected.set(code.clone())
                                >
                                    <span class="currency-option__symbol">{currency.symbol()}</span>
                                    <span class="currency-option__name">{currency.display_name()}</span>
                                    <span class="currency-option__example">{currency.format(1234.5)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </Flex>
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    "Save"
                </Button>
            </div>
        </div>
    }
}
