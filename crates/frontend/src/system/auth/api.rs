use contracts::domain::a001_configurator::aggregate::{
    EditToken, GenerateEditTokenRequest, TokenVerification, VerifyEditTokenRequest,
};
use contracts::shared::api::endpoints::configurator;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

/// Issue an edit token for a configurator (used by the share dialog)
pub async fn generate_edit_token(configurator_id: &str) -> Result<EditToken, ApiClientError> {
    let request = GenerateEditTokenRequest {
        configurator_id: configurator_id.to_string(),
    };
    api_client::post(configurator::GENERATE_EDIT_TOKEN, &request).await
}

/// Exchange an edit token for the public credentials of its configurator
pub async fn verify_edit_token(token: &str) -> Result<TokenVerification, ApiClientError> {
    let request = VerifyEditTokenRequest {
        token: token.to_string(),
    };
    api_client::post(configurator::VERIFY_EDIT_TOKEN, &request).await
}
