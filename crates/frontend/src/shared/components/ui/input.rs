use leptos::prelude::*;

/// Text input with label and optional inline error
#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    /// Two-way bound value
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "email", "tel", "number", "url"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Adds the `*` marker; validation lives in the view model
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=input_id
                class=input_class
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
