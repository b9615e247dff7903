use contracts::domain::a005_theme::aggregate::{CreateThemeInput, Theme, UpdateThemeInput};
use contracts::shared::api::endpoints::theme;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

pub async fn fetch_list(token: &str) -> Result<Vec<Theme>, ApiClientError> {
    api_client::get(&theme::list(token)).await
}

pub async fn create(input: &CreateThemeInput) -> Result<Theme, ApiClientError> {
    api_client::post(theme::CREATE, input).await
}

pub async fn update(input: &UpdateThemeInput) -> Result<Theme, ApiClientError> {
    api_client::put(theme::UPDATE, input).await
}

pub async fn delete(id: &str, token: &str) -> Result<(), ApiClientError> {
    api_client::delete(&theme::delete(id, token)).await
}
