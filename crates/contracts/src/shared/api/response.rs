use serde::{Deserialize, Serialize};

use super::error::{ApiClientError, ApiErrorCode};

/// Envelope every endpoint answers with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            code: None,
        }
    }

    /// Unwrap the envelope; `data` may legitimately be absent (deletes)
    pub fn into_result(self) -> Result<Option<T>, ApiClientError> {
        if self.success {
            return Ok(self.data);
        }
        let code = self
            .code
            .as_deref()
            .and_then(ApiErrorCode::from_code)
            .unwrap_or(ApiErrorCode::InternalError);
        let message = self
            .error
            .or(self.message)
            .unwrap_or_else(|| "Request was not successful".to_string());
        Err(ApiClientError::new(message, code, None))
    }

    /// Like [`into_result`](Self::into_result) but a missing payload is an error
    pub fn into_data(self) -> Result<T, ApiClientError> {
        self.into_result()?
            .ok_or_else(|| ApiClientError::decode("response carries no data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_data() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(resp.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert_eq!(resp.clone().into_result().unwrap(), None);
        assert!(resp.into_data().is_err());
    }

    #[test]
    fn test_unsuccessful_envelope() {
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(
            r#"{"success":false,"error":"Category not found","code":"NOT_FOUND"}"#,
        )
        .unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.code, ApiErrorCode::NotFound);
        assert_eq!(err.message, "Category not found");
    }
}
