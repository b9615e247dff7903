use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a003_option::ui::card::attribute_lines;
use crate::shared::icons::icon;
use crate::system::settings::use_settings;

#[derive(Clone, PartialEq)]
struct SummaryLine {
    category_id: String,
    category_name: String,
    is_primary: bool,
    label: String,
    description: Option<String>,
    price: f64,
    attributes: Vec<(String, String)>,
}

/// "Selected Configuration": one card per selection, total and quote button
#[component]
pub fn SummaryPanel(
    page: ConfiguratorPageViewModel,
    /// Opens the quote dialog; hidden when quotes are disabled
    on_request_quote: Callback<()>,
) -> impl IntoView {
    let settings = use_settings();
    let total = page.total();
    let summary = page.summary();
    let configurator = page.configurator;

    let lines = Memo::new(move |_| {
        let items = summary.get();
        page.state.with(|s| {
            items
                .into_iter()
                .filter_map(|item| {
                    let category = s.category(&item.category_id)?;
                    let option = category.find_option(&item.option_id)?;
                    Some(SummaryLine {
                        category_id: item.category_id,
                        category_name: item.category_name,
                        is_primary: category.is_primary,
                        label: item.option_label,
                        description: option.description.clone(),
                        price: item.price,
                        attributes: attribute_lines(&category.attributes_template, option),
                    })
                })
                .collect::<Vec<_>>()
        })
    });

    let show_total = move || configurator.with(|c| c.as_ref().map_or(true, |c| c.total_visible()));
    let quotes_enabled = move || configurator.with(|c| c.as_ref().map_or(false, |c| c.quotes_enabled()));

    view! {
        <aside class="summary-panel">
            <h2 class="summary-panel__title">"Selected Configuration"</h2>

            <Show
                when=move || !lines.with(Vec::is_empty)
                fallback=|| view! { <p class="summary-panel__empty">"No options selected yet."</p> }
            >
                <For
                    each=move || lines.get()
                    key=|line| (line.category_id.clone(), line.label.clone(), line.price.to_bits())
                    children=move |line: SummaryLine| {
                        let category_id = line.category_id.clone();
                        view! {
                            <Card class="summary-panel__item">
                                <div class="summary-panel__item-header">
                                    <span class="summary-panel__category">
                                        {line.category_name.clone()}
                                        {line.is_primary.then(|| view! { <span class="summary-panel__primary">"PRIMARY"</span> })}
                                    </span>
                                    <span class="summary-panel__price">{move || settings.format_price(line.price)}</span>
                                    {(!line.is_primary).then(|| view! {
                                        <button
                                            class="summary-panel__remove"
                                            title="Remove option"
                                            on:click=move |_| page.clear_selection(&category_id)
                                        >
                                            {icon("x")}
                                        </button>
                                    })}
                                </div>
                                <h3 class="summary-panel__label">{line.label.clone()}</h3>
                                {line.description.clone().map(|d| view! { <p class="summary-panel__description">{d}</p> })}
                                {(!line.attributes.is_empty()).then(|| view! {
                                    <dl class="summary-panel__attributes">
                                        {line
                                            .attributes
                                            .iter()
                                            .map(|(label, text)| view! {
                                                <dt>{format!("{}:", label)}</dt>
                                                <dd>{text.clone()}</dd>
                                            })
                                            .collect_view()}
                                    </dl>
                                })}
                            </Card>
                        }
                    }
                />
            </Show>

            <Show when=show_total>
                <div class="summary-panel__total">
                    <span>"Total"</span>
                    <span class="summary-panel__total-amount">{move || settings.format_price(total.get())}</span>
                </div>
            </Show>

            <Flex vertical=true gap=FlexGap::Small>
                <Show when=quotes_enabled>
                    <Button
                        appearance=ButtonAppearance::Primary
                        block=true
                        disabled=Signal::derive(move || lines.with(Vec::is_empty))
                        on_click=move |_| on_request_quote.run(())
                    >
                        {icon("file-text")}
                        "Request Quote"
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Subtle block=true on_click=move |_| page.reset_selection()>
                    "Reset to defaults"
                </Button>
            </Flex>
        </aside>
    }
}
