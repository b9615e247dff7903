use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes returned by the API in the `code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    PlanLimit,
    LimitExceeded,
    CreateError,
    UpdateError,
    DeleteError,
    UploadError,
    EmailError,
    InternalError,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::ValidationError => "VALIDATION_ERROR",
            ApiErrorCode::Unauthorized => "UNAUTHORIZED",
            ApiErrorCode::Forbidden => "FORBIDDEN",
            ApiErrorCode::NotFound => "NOT_FOUND",
            ApiErrorCode::PlanLimit => "PLAN_LIMIT",
            ApiErrorCode::LimitExceeded => "LIMIT_EXCEEDED",
            ApiErrorCode::CreateError => "CREATE_ERROR",
            ApiErrorCode::UpdateError => "UPDATE_ERROR",
            ApiErrorCode::DeleteError => "DELETE_ERROR",
            ApiErrorCode::UploadError => "UPLOAD_ERROR",
            ApiErrorCode::EmailError => "EMAIL_ERROR",
            ApiErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let all = [
            ApiErrorCode::ValidationError,
            ApiErrorCode::Unauthorized,
            ApiErrorCode::Forbidden,
            ApiErrorCode::NotFound,
            ApiErrorCode::PlanLimit,
            ApiErrorCode::LimitExceeded,
            ApiErrorCode::CreateError,
            ApiErrorCode::UpdateError,
            ApiErrorCode::DeleteError,
            ApiErrorCode::UploadError,
            ApiErrorCode::EmailError,
            ApiErrorCode::InternalError,
        ];
        all.into_iter().find(|c| c.code() == code)
    }

    /// Fallback classification when the body carries no code
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiErrorCode::ValidationError,
            401 => ApiErrorCode::Unauthorized,
            403 => ApiErrorCode::Forbidden,
            404 => ApiErrorCode::NotFound,
            429 => ApiErrorCode::LimitExceeded,
            _ => ApiErrorCode::InternalError,
        }
    }

    /// Toast title for this class of failure
    pub fn title(&self) -> &'static str {
        match self {
            ApiErrorCode::ValidationError => "Validation error",
            ApiErrorCode::Unauthorized => "Not authorized",
            ApiErrorCode::Forbidden => "Access denied",
            ApiErrorCode::NotFound => "Not found",
            ApiErrorCode::PlanLimit | ApiErrorCode::LimitExceeded => "Limit reached",
            _ => "Error",
        }
    }
}

/// Error body sent by the API on failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Every failure of an API call, classified
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiClientError {
    pub message: String,
    pub code: ApiErrorCode,
    /// HTTP status, absent for network and decode failures
    pub status: Option<u16>,
}

impl ApiClientError {
    pub fn new(message: impl Into<String>, code: ApiErrorCode, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            code,
            status,
        }
    }

    /// Build from a non-2xx response.
    ///
    /// The code in the body wins over the status mapping; the message falls
    /// back to `fallback` (usually the status text).
    pub fn from_response(status: u16, body: Option<ApiErrorBody>, fallback: &str) -> Self {
        let body = body.unwrap_or_default();
        let message = body
            .error
            .or(body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if fallback.trim().is_empty() {
                    "An error occurred".to_string()
                } else {
                    fallback.to_string()
                }
            });
        let code = body
            .code
            .as_deref()
            .and_then(ApiErrorCode::from_code)
            .unwrap_or_else(|| ApiErrorCode::from_status(status));
        Self::new(message, code, Some(status))
    }

    pub fn network() -> Self {
        Self::new(NETWORK_ERROR_MESSAGE, ApiErrorCode::InternalError, None)
    }

    pub fn decode(detail: impl std::fmt::Display) -> Self {
        Self::new(
            format!("Unexpected response from server: {}", detail),
            ApiErrorCode::InternalError,
            None,
        )
    }

    /// Plan/usage limit hit: shown as the upgrade prompt instead of a toast
    pub fn is_limit_error(&self) -> bool {
        self.status == Some(403)
            || matches!(self.code, ApiErrorCode::PlanLimit | ApiErrorCode::LimitExceeded)
            || self.message.to_lowercase().contains("limit")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == ApiErrorCode::Unauthorized || self.status == Some(401)
    }

    pub fn title(&self) -> &'static str {
        self.code.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiErrorCode::from_status(400), ApiErrorCode::ValidationError);
        assert_eq!(ApiErrorCode::from_status(401), ApiErrorCode::Unauthorized);
        assert_eq!(ApiErrorCode::from_status(403), ApiErrorCode::Forbidden);
        assert_eq!(ApiErrorCode::from_status(404), ApiErrorCode::NotFound);
        assert_eq!(ApiErrorCode::from_status(429), ApiErrorCode::LimitExceeded);
        assert_eq!(ApiErrorCode::from_status(500), ApiErrorCode::InternalError);
        assert_eq!(ApiErrorCode::from_status(502), ApiErrorCode::InternalError);
    }

    #[test]
    fn test_body_code_wins_over_status() {
        let body = ApiErrorBody {
            error: Some("Plan allows 20 options".to_string()),
            code: Some("PLAN_LIMIT".to_string()),
            ..Default::default()
        };
        let err = ApiClientError::from_response(400, Some(body), "Bad Request");
        assert_eq!(err.code, ApiErrorCode::PlanLimit);
        assert_eq!(err.to_string(), "Plan allows 20 options");
        assert!(err.is_limit_error());
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiClientError::from_response(404, None, "Not Found");
        assert_eq!(err.message, "Not Found");
        assert_eq!(err.code, ApiErrorCode::NotFound);
        assert!(!err.is_limit_error());

        let err = ApiClientError::from_response(500, None, "");
        assert_eq!(err.message, "An error occurred");
    }

    #[test]
    fn test_limit_detection() {
        let forbidden = ApiClientError::from_response(403, None, "Forbidden");
        assert!(forbidden.is_limit_error());

        let by_message = ApiClientError::new("Option LIMIT reached", ApiErrorCode::CreateError, Some(400));
        assert!(by_message.is_limit_error());

        let plain = ApiClientError::new("Name is required", ApiErrorCode::ValidationError, Some(400));
        assert!(!plain.is_limit_error());
    }

    #[test]
    fn test_network_error() {
        let err = ApiClientError::network();
        assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
        assert_eq!(err.status, None);
        assert_eq!(err.code, ApiErrorCode::InternalError);
    }
}
