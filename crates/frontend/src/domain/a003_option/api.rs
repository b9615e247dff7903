use contracts::domain::a003_option::aggregate::{ConfigOption, CreateOptionInput, UpdateOptionInput};
use contracts::shared::api::endpoints::option;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

pub async fn fetch_list(category_id: &str) -> Result<Vec<ConfigOption>, ApiClientError> {
    api_client::get(&option::list(category_id)).await
}

pub async fn create(input: &CreateOptionInput) -> Result<ConfigOption, ApiClientError> {
    api_client::post(option::CREATE, input).await
}

pub async fn update(input: &UpdateOptionInput) -> Result<ConfigOption, ApiClientError> {
    api_client::put(option::UPDATE, input).await
}

pub async fn delete(id: &str, token: &str) -> Result<(), ApiClientError> {
    api_client::delete(&option::delete(id, token)).await
}
