use contracts::domain::a006_email_template::aggregate::{
    EmailPreviewInput, EmailTemplate, EmailTemplateType, SendEmailInput,
};
use contracts::domain::a004_quote::aggregate::is_valid_email;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use thaw::*;

use crate::domain::a006_email_template::api;
use crate::shared::components::ui::{FormInput, FormSelect};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

const TEMPLATE_TYPES: [EmailTemplateType; 3] = [
    EmailTemplateType::Quote,
    EmailTemplateType::Confirmation,
    EmailTemplateType::Custom,
];

fn type_from_code(code: &str) -> Option<EmailTemplateType> {
    TEMPLATE_TYPES.into_iter().find(|t| t.code() == code)
}

fn type_label(template_type: EmailTemplateType) -> &'static str {
    match template_type {
        EmailTemplateType::Quote => "Quote",
        EmailTemplateType::Confirmation => "Confirmation",
        EmailTemplateType::Custom => "Custom",
    }
}

/// Placeholder values substituted into `{{variable}}` slots of a preview
fn sample_variables(configurator_name: &str, total: &str) -> BTreeMap<String, String> {
    [
        ("customerName", "John Doe"),
        ("customerEmail", "john@example.com"),
        ("quoteCode", "Q-SAMPLE"),
        ("configuratorName", configurator_name),
        ("totalPrice", total),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Email templates of the account: browse by type, preview, send a test
#[component]
pub fn EmailTemplatesDialog(
    handle: ModalHandle,
    /// Used for the sample variables of the preview
    #[prop(into)]
    configurator_name: String,
    /// Formatted current total, used for the sample variables
    #[prop(into)]
    total: String,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();
    let token = move || auth.get_untracked().token().unwrap_or_default();

    let templates = RwSignal::new(Vec::<EmailTemplate>::new());
    let loading = RwSignal::new(false);
    let type_filter = RwSignal::new(String::new());

    let selected_id = RwSignal::new(None::<String>);
    let preview_subject = RwSignal::new(String::new());
    let preview_html = RwSignal::new(String::new());
    let previewing = RwSignal::new(false);

    let test_recipient = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let variables = StoredValue::new(sample_variables(&configurator_name, &total));

    Effect::new(move |_| {
        let filter = type_from_code(&type_filter.get());
        loading.set(true);
        spawn_local(async move {
            match api::fetch_templates(&token(), filter).await {
                Ok(list) => templates.set(list),
                Err(e) => toasts.api_error(&e),
            }
            loading.set(false);
        });
    });

    let show_preview = move |template_id: String| {
        selected_id.set(Some(template_id.clone()));
        previewing.set(true);
        let input = EmailPreviewInput {
            token: token(),
            template_id: Some(template_id),
            variables: variables.get_value(),
            ..Default::default()
        };
        spawn_local(async move {
            match api::preview(&input).await {
                Ok(preview) => {
                    preview_subject.set(preview.subject);
                    preview_html.set(preview.html);
                }
                Err(e) => {
                    preview_html.set(String::new());
                    toasts.api_error(&e);
                }
            }
            previewing.set(false);
        });
    };

    let send_test = move |_| {
        let Some(template_id) = selected_id.get_untracked() else {
            return;
        };
        let to = test_recipient.get_untracked().trim().to_string();
        if !is_valid_email(&to) {
            toasts.error("Invalid email", "Please enter a valid email address.");
            return;
        }
        let input = SendEmailInput {
            token: token(),
            to: to.clone(),
            template_id: Some(template_id),
            variables: Some(variables.get_value()),
            ..Default::default()
        };
        sending.set(true);
        spawn_local(async move {
            match api::send(&input).await {
                Ok(response) if response.sent => {
                    toasts.success("Email sent", format!("Test email sent to {}.", to));
                }
                Ok(_) => toasts.error("Email not sent", "The email service did not accept the message."),
                Err(e) => toasts.api_error(&e),
            }
            sending.set(false);
        });
    };

    let type_options = Signal::stored(
        std::iter::once((String::new(), "All types".to_string()))
            .chain(TEMPLATE_TYPES.iter().map(|t| (t.code().to_string(), type_label(*t).to_string())))
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="dialog email-dialog">
            <div class="dialog__header">
                <h2 class="dialog__title">{icon("mail")} "Email Templates"</h2>
                <p class="dialog__description">"Templates used for quotes and confirmations"</p>
            </div>

            <div class="dialog__body email-dialog__body">
                <div class="email-dialog__list">
                    <FormSelect label="Type" value=type_filter options=type_options />
                    <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                        <Show
                            when=move || !templates.with(Vec::is_empty)
                            fallback=|| view! { <p class="dialog__empty">"No email templates."</p> }
                        >
                            <For
                                each=move || templates.get()
                                key=|t| t.id.clone()
                                children=move |template| {
                                    let id = template.id.clone();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected_id.get().as_deref() == Some(id.as_str())
                                    };
                                    view! {
                                        <button
                                            class="email-template"
                                            class:email-template--selected=is_selected
                                            on:click=move |_| show_preview(id.clone())
                                        >
                                            <div class="email-template__name">
                                                {template.name.clone()}
                                                {template.is_default.then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                                        "Default"
                                                    </Badge>
                                                })}
                                                {(!template.is_active).then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                        "Inactive"
                                                    </Badge>
                                                })}
                                            </div>
                                            <div class="email-template__subject">{template.subject.clone()}</div>
                                            <div class="email-template__type">{type_label(template.template_type)}</div>
                                        </button>
                                    }
                                }
                            />
                        </Show>
                    </Show>
                </div>

                <div class="email-dialog__preview">
                    <Show
                        when=move || selected_id.with(Option::is_some)
                        fallback=|| view! { <p class="dialog__empty">"Select a template to preview it."</p> }
                    >
                        <Show when=move || !previewing.get() fallback=|| view! { <Spinner /> }>
                            <div class="email-preview__subject">
                                <strong>"Subject: "</strong>
                                {move || preview_subject.get()}
                            </div>
                            <iframe
                                class="email-preview__frame"
                                sandbox=""
                                srcdoc=move || preview_html.get()
                            ></iframe>
                        </Show>
                        <Flex gap=FlexGap::Small style="align-items: flex-end;">
                            <FormInput
                                label="Send a test to"
                                value=test_recipient
                                input_type="email"
                                placeholder="you@example.com"
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || sending.get())
                                on_click=send_test
                            >
                                {move || if sending.get() { "Sending..." } else { "Send test" }}
                            </Button>
                        </Flex>
                    </Show>
                </div>
            </div>

            <div class="dialog__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Close"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_code() {
        assert_eq!(type_from_code("confirmation"), Some(EmailTemplateType::Confirmation));
        assert_eq!(type_from_code(""), None);
    }

    #[test]
    fn test_sample_variables() {
        let vars = sample_variables("Desk Builder", "$120.00");
        assert_eq!(vars["configuratorName"], "Desk Builder");
        assert_eq!(vars["totalPrice"], "$120.00");
        assert_eq!(vars.len(), 5);
    }
}
