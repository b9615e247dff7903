use leptos::prelude::*;

/// Native select; `options` are `(value, label)` pairs
#[component]
pub fn FormSelect(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {label}
            </label>
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == current>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}
