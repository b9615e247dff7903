use contracts::domain::a006_email_template::aggregate::{
    EmailPreviewInput, EmailPreviewResponse, EmailTemplate, EmailTemplateType, SendEmailInput,
    SendEmailResponse,
};
use contracts::shared::api::endpoints::email;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

pub async fn fetch_templates(
    token: &str,
    template_type: Option<EmailTemplateType>,
) -> Result<Vec<EmailTemplate>, ApiClientError> {
    api_client::get(&email::templates(token, template_type.map(|t| t.code()))).await
}

pub async fn preview(input: &EmailPreviewInput) -> Result<EmailPreviewResponse, ApiClientError> {
    api_client::post(email::PREVIEW, input).await
}

pub async fn send(input: &SendEmailInput) -> Result<SendEmailResponse, ApiClientError> {
    api_client::post(email::SEND, input).await
}
