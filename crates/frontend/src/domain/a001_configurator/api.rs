use contracts::domain::a001_configurator::aggregate::{
    Configurator, CreateConfiguratorInput, DuplicateConfiguratorRequest, UpdateConfiguratorInput,
};
use contracts::shared::api::endpoints::configurator;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

/// Configurator with its categories and options, as the public viewer sees it
pub async fn fetch_by_public_id(public_id: &str, public_key: &str) -> Result<Configurator, ApiClientError> {
    api_client::get(&configurator::by_public_id(public_id, public_key)).await
}

/// All configurators of the account owning `token`
pub async fn fetch_list(token: &str) -> Result<Vec<Configurator>, ApiClientError> {
    api_client::get(&configurator::list(token)).await
}

pub async fn create(input: &CreateConfiguratorInput) -> Result<Configurator, ApiClientError> {
    api_client::post(configurator::CREATE, input).await
}

pub async fn update(input: &UpdateConfiguratorInput) -> Result<Configurator, ApiClientError> {
    api_client::put(configurator::UPDATE, input).await
}

pub async fn duplicate(token: &str, id: &str) -> Result<Configurator, ApiClientError> {
    let request = DuplicateConfiguratorRequest {
        token: token.to_string(),
        id: id.to_string(),
    };
    api_client::post(configurator::DUPLICATE, &request).await
}

pub async fn delete(id: &str, token: &str) -> Result<(), ApiClientError> {
    api_client::delete(&configurator::delete(id, token)).await
}
