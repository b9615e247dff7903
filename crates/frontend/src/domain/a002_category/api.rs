use contracts::domain::a002_category::aggregate::{ConfigCategory, CreateCategoryInput, UpdateCategoryInput};
use contracts::shared::api::endpoints::category;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

pub async fn fetch_list(configurator_id: &str) -> Result<Vec<ConfigCategory>, ApiClientError> {
    api_client::get(&category::list(configurator_id)).await
}

pub async fn create(input: &CreateCategoryInput) -> Result<ConfigCategory, ApiClientError> {
    api_client::post(category::CREATE, input).await
}

pub async fn update(input: &UpdateCategoryInput) -> Result<ConfigCategory, ApiClientError> {
    api_client::put(category::UPDATE, input).await
}

pub async fn delete(id: &str, token: &str) -> Result<(), ApiClientError> {
    api_client::delete(&category::delete(id, token)).await
}
