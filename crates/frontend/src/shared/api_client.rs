//! Typed REST client.
//!
//! Every call attaches `X-Public-Key` (when known) and `X-Embed-Origin`,
//! maps non-2xx responses to [`ApiClientError`] and unwraps the
//! `{ success, data }` envelope.

use contracts::shared::api::error::ApiErrorBody;
use contracts::shared::api::{ApiClientError, ApiResponse};
use contracts::system::embed::{origin_header_value, EMBED_ORIGIN_HEADER, PUBLIC_KEY_HEADER};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::shared::embed_origin::parent_origin;
use crate::system::auth::storage;

fn with_headers(builder: RequestBuilder) -> RequestBuilder {
    let origin = parent_origin();
    let builder = builder.header(EMBED_ORIGIN_HEADER, origin_header_value(origin.as_deref()));
    match storage::get_public_key() {
        Some(key) => builder.header(PUBLIC_KEY_HEADER, &key),
        None => builder,
    }
}

async fn send(request: Result<Request, gloo_net::Error>, url: &str) -> Result<Response, ApiClientError> {
    let request = request.map_err(|e| {
        log::error!("Failed to build request for {}: {}", url, e);
        ApiClientError::decode(e)
    })?;

    let response = request.send().await.map_err(|e| {
        log::error!("[Network Error] {}: {}", url, e);
        ApiClientError::network()
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.json::<ApiErrorBody>().await.ok();
    let error = ApiClientError::from_response(status, body, &status_text);
    log::error!(
        "[API Error] {} {} {}: {}",
        status,
        error.code.code(),
        url,
        error.message
    );
    Err(error)
}

async fn envelope<T: DeserializeOwned>(response: Response, url: &str) -> Result<ApiResponse<T>, ApiClientError> {
    response.json::<ApiResponse<T>>().await.map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        ApiClientError::decode(e)
    })
}

/// GET `path` and return the `data` of the envelope
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiClientError> {
    let url = api_url(path);
    let response = send(with_headers(Request::get(&url)).build(), &url).await?;
    envelope::<T>(response, &url).await?.into_data()
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiClientError> {
    let url = api_url(path);
    let response = send(with_headers(Request::post(&url)).json(body), &url).await?;
    envelope::<T>(response, &url).await?.into_data()
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiClientError> {
    let url = api_url(path);
    let response = send(with_headers(Request::put(&url)).json(body), &url).await?;
    envelope::<T>(response, &url).await?.into_data()
}

/// DELETE `path`; the envelope carries no data worth keeping
pub async fn delete(path: &str) -> Result<(), ApiClientError> {
    let url = api_url(path);
    let response = send(with_headers(Request::delete(&url)).build(), &url).await?;
    envelope::<serde_json::Value>(response, &url).await?.into_result()?;
    Ok(())
}

/// POST a multipart form; the browser sets the boundary header itself
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiClientError> {
    let url = api_url(path);
    let response = send(with_headers(Request::post(&url)).body(form), &url).await?;
    envelope::<T>(response, &url).await?.into_data()
}
