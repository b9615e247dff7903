use contracts::domain::a007_file::aggregate::{FileType, FileUpload};
use contracts::shared::api::endpoints::files;
use contracts::shared::api::ApiClientError;
use wasm_bindgen::JsValue;

use crate::shared::api_client;

fn form_error(e: JsValue) -> ApiClientError {
    ApiClientError::decode(format!("{:?}", e))
}

/// Multipart upload of a single file under the `file` field
pub async fn upload(file: &web_sys::File, token: &str) -> Result<FileUpload, ApiClientError> {
    let form = web_sys::FormData::new().map_err(form_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(form_error)?;
    form.append_with_str("token", token).map_err(form_error)?;
    api_client::post_form(files::UPLOAD, form).await
}

/// Earlier uploads of the account, optionally of one type
pub async fn fetch_list(token: &str, file_type: Option<FileType>) -> Result<Vec<FileUpload>, ApiClientError> {
    api_client::get(&files::list(token, file_type.map(|t| t.code()))).await
}

pub async fn delete(id: &str, token: &str) -> Result<(), ApiClientError> {
    api_client::delete(&files::delete(id, token)).await
}
