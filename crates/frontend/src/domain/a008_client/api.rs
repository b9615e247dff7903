use contracts::domain::a008_client::aggregate::{AllowedDomains, Client, UpdateClientInput, UpdateDomainsInput};
use contracts::shared::api::endpoints::client;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

pub async fn fetch_profile(token: &str) -> Result<Client, ApiClientError> {
    api_client::get(&client::me(token)).await
}

pub async fn update_profile(input: &UpdateClientInput) -> Result<Client, ApiClientError> {
    api_client::put(client::UPDATE, input).await
}

pub async fn fetch_domains(token: &str) -> Result<AllowedDomains, ApiClientError> {
    api_client::get(&client::domains(token)).await
}

pub async fn update_domains(input: &UpdateDomainsInput) -> Result<AllowedDomains, ApiClientError> {
    api_client::put(client::DOMAINS, input).await
}
