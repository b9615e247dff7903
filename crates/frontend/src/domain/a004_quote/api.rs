use contracts::domain::a004_quote::aggregate::{CreateQuoteInput, Quote, QuoteListFilter, UpdateQuoteInput};
use contracts::shared::api::endpoints::quote;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

/// Public submission; the client adds `X-Public-Key` and `X-Embed-Origin`
pub async fn create(input: &CreateQuoteInput) -> Result<Quote, ApiClientError> {
    api_client::post(quote::CREATE, input).await
}

pub async fn fetch_list(token: &str, filter: &QuoteListFilter) -> Result<Vec<Quote>, ApiClientError> {
    let status = filter.status.map(|s| s.code());
    api_client::get(&quote::list(token, status, filter.configurator_id.as_deref())).await
}

pub async fn fetch_by_code(quote_code: &str) -> Result<Quote, ApiClientError> {
    api_client::get(&quote::by_code(quote_code)).await
}

pub async fn update(input: &UpdateQuoteInput) -> Result<Quote, ApiClientError> {
    api_client::put(quote::UPDATE, input).await
}
