use contracts::domain::a002_category::aggregate::AttributeDefinition;
use contracts::domain::a003_option::aggregate::ConfigOption;
use contracts::shared::configuration::attributes::display_attribute_value;
use leptos::prelude::*;

use crate::domain::a001_configurator::ui::page::ConfiguratorPageViewModel;
use crate::domain::a001_configurator::ui::panel::AdminActions;
use crate::shared::dom::confirm;
use crate::shared::icons::icon;
use crate::system::settings::use_settings;

/// `(label, text)` lines shown under an option, in template order
pub fn attribute_lines(template: &[AttributeDefinition], option: &ConfigOption) -> Vec<(String, String)> {
    template
        .iter()
        .filter_map(|def| {
            let value = option.attribute_values.get(&def.key)?;
            display_attribute_value(def, value).map(|text| (def.label.clone(), text))
        })
        .collect()
}

#[derive(Clone, PartialEq)]
struct CardState {
    option: ConfigOption,
    lines: Vec<(String, String)>,
    selected: bool,
    disabled: bool,
}

#[component]
pub fn OptionCard(
    page: ConfiguratorPageViewModel,
    category_id: String,
    option_id: String,
    actions: AdminActions,
) -> impl IntoView {
    let settings = use_settings();
    let is_admin = page.is_admin();

    let card = {
        let category_id = category_id.clone();
        let option_id = option_id.clone();
        Memo::new(move |_| {
            page.state.with(|s| {
                let category = s.category(&category_id)?;
                let option = category.find_option(&option_id)?;
                Some(CardState {
                    lines: attribute_lines(&category.attributes_template, option),
                    selected: s.selected.is_selected(&category_id, &option_id),
                    disabled: s.is_option_disabled(&category_id, &option_id),
                    option: option.clone(),
                })
            })
        })
    };

    let on_select = {
        let category_id = category_id.clone();
        let option_id = option_id.clone();
        move |_| page.click_option(&category_id, &option_id)
    };
    let on_edit = {
        let category_id = category_id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if let Some(state) = card.get_untracked() {
                actions.edit_option.run((category_id.clone(), state.option));
            }
        }
    };
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let Some(state) = card.get_untracked() else {
            return;
        };
        let message = format!(
            "This will permanently delete the option \"{}\". This action cannot be undone.",
            state.option.label
        );
        if confirm(&message) {
            page.delete_option(category_id.clone(), state.option.id);
        }
    };

    move || {
        card.get().map(|state| {
            let CardState {
                option,
                lines,
                selected,
                disabled,
            } = state;
            let class = if selected {
                "option-card option-card--selected"
            } else if disabled {
                "option-card option-card--disabled"
            } else {
                "option-card"
            };
            let price_class = if option.is_free() {
                "option-card__price option-card__price--free"
            } else {
                "option-card__price"
            };
            let price = settings.format_price(option.price);
            let on_select = on_select.clone();
            let on_edit = on_edit.clone();
            let on_delete = on_delete.clone();

            view! {
                <div
                    class=class
                    role="button"
                    aria-disabled=disabled.to_string()
                    on:click=on_select
                >
                    {option.image_url.clone().map(|src| view! {
                        <img class="option-card__image" src=src alt=option.label.clone() />
                    })}
                    <div class="option-card__header">
                        {option.hex_color.clone().map(|hex| view! {
                            <span class="option-card__swatch" style=format!("background: {}", hex)></span>
                        })}
                        <span class="option-card__label">{option.label.clone()}</span>
                        <Show when=move || is_admin.get()>
                            <span class="option-card__admin">
                                <span class="option-card__icon" title="Edit option" on:click=on_edit.clone()>
                                    {icon("edit")}
                                </span>
                                <span class="option-card__icon" title="Delete option" on:click=on_delete.clone()>
                                    {icon("trash")}
                                </span>
                            </span>
                        </Show>
                        <span class=price_class>{price}</span>
                    </div>
                    {option.description.clone().map(|d| view! { <p class="option-card__description">{d}</p> })}
                    {(!lines.is_empty()).then(|| view! {
                        <div class="option-card__attributes">
                            {lines
                                .into_iter()
                                .map(|(label, text)| view! {
                                    <div class="option-card__attribute">
                                        <span class="option-card__attribute-label">{label}":"</span>
                                        " "
                                        {text}
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    })}
                    {option.sku.clone().map(|sku| view! { <span class="option-card__sku">{sku}</span> })}
                    {(!option.in_stock).then(|| view! { <span class="option-card__stock">"Out of stock"</span> })}
                    {disabled.then(|| view! {
                        <p class="option-card__incompatible">"Incompatible with current selection"</p>
                    })}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::AttributeType;
    use serde_json::json;

    #[test]
    fn test_attribute_lines_follow_template_order() {
        let mut watts = AttributeDefinition::new("watts", "Watts", AttributeType::Number);
        watts.unit = Some("W".to_string());
        let template = vec![
            AttributeDefinition::new("dimmable", "Dimmable", AttributeType::Boolean),
            watts,
            AttributeDefinition::new("finish", "Finish", AttributeType::Text),
        ];

        let mut option = ConfigOption::new("o1", "Bulb", 5.0);
        option.attribute_values.insert("watts".to_string(), json!(60));
        option.attribute_values.insert("dimmable".to_string(), json!(true));
        option.attribute_values.insert("finish".to_string(), json!(""));
        option.attribute_values.insert("legacy".to_string(), json!("x"));

        assert_eq!(
            attribute_lines(&template, &option),
            vec![
                ("Dimmable".to_string(), "Yes".to_string()),
                ("Watts".to_string(), "60 W".to_string()),
            ]
        );
    }
}
