use leptos::prelude::*;

/// Checkbox with label and an optional hint line under it
#[component]
pub fn FormCheckbox(
    #[prop(into)]
    label: String,
    checked: RwSignal<bool>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shown under the label, e.g. why the box is disabled
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = move || {
        if disabled.get().unwrap_or(false) {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
            {move || hint.get().map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}
