use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side lifecycle timestamps.
///
/// The API owns these values; the client only echoes them back. They are
/// optional because freshly built drafts have not been persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    pub fn is_persisted(&self) -> bool {
        self.created_at.is_some()
    }
}
