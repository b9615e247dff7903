use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Image,
    Document,
    Asset,
    #[default]
    Other,
}

impl FileType {
    pub fn code(&self) -> &'static str {
        match self {
            FileType::Image => "IMAGE",
            FileType::Document => "DOCUMENT",
            FileType::Asset => "ASSET",
            FileType::Other => "OTHER",
        }
    }

    /// Classify by MIME type the way the upload endpoint does
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        if mime.starts_with("image/") {
            FileType::Image
        } else if mime == "application/pdf" || mime.starts_with("text/") {
            FileType::Document
        } else if mime.starts_with("font/") || mime.starts_with("model/") {
            FileType::Asset
        } else {
            FileType::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    #[serde(default)]
    pub file_type: FileType,
    pub mime_type: String,
    pub size: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUploadUrl {
    pub upload_url: String,
    pub file_key: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_mime() {
        assert_eq!(FileType::from_mime("image/PNG"), FileType::Image);
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Document);
        assert_eq!(FileType::from_mime("font/woff2"), FileType::Asset);
        assert_eq!(FileType::from_mime("application/zip"), FileType::Other);
    }
}
