//! Wire-level API model: response envelope, error taxonomy and endpoint paths

pub mod endpoints;
pub mod error;
pub mod response;

pub use error::{ApiClientError, ApiErrorCode};
pub use response::ApiResponse;
