use leptos::prelude::*;

#[component]
pub fn FormTextarea(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=textarea_id>
                {label}
            </label>
            <textarea
                id=textarea_id
                class="form__textarea"
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
