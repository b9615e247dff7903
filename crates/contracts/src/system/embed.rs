//! Handshake with the page embedding the configurator iframe

use serde::{Deserialize, Serialize};

/// `type` of the message the embed script posts into the iframe
pub const PARENT_ORIGIN_MESSAGE: &str = "KONFIGRA_PARENT_ORIGIN";

/// Header carrying the embedding page origin
pub const EMBED_ORIGIN_HEADER: &str = "X-Embed-Origin";
pub const PUBLIC_KEY_HEADER: &str = "X-Public-Key";

/// Sent when the parent origin is not known yet
pub const UNKNOWN_ORIGIN: &str = "UNKNOWN";

/// Reported by debug builds regardless of the handshake
pub const DEV_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub origin: Option<String>,
}

impl EmbedMessage {
    /// Origin announced by a parent handshake; any other message yields `None`
    pub fn parent_origin(&self) -> Option<&str> {
        if self.kind != PARENT_ORIGIN_MESSAGE {
            return None;
        }
        self.origin.as_deref().filter(|o| !o.trim().is_empty())
    }
}

pub fn origin_header_value(origin: Option<&str>) -> &str {
    origin.filter(|o| !o.is_empty()).unwrap_or(UNKNOWN_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_message() {
        let msg: EmbedMessage =
            serde_json::from_str(r#"{"type":"KONFIGRA_PARENT_ORIGIN","origin":"https://shop.example"}"#).unwrap();
        assert_eq!(msg.parent_origin(), Some("https://shop.example"));

        let other: EmbedMessage = serde_json::from_str(r#"{"type":"RESIZE","origin":"https://x"}"#).unwrap();
        assert_eq!(other.parent_origin(), None);

        let untyped: EmbedMessage = serde_json::from_str(r#"{"height":300}"#).unwrap();
        assert_eq!(untyped.parent_origin(), None);
    }

    #[test]
    fn test_header_value() {
        assert_eq!(origin_header_value(None), "UNKNOWN");
        assert_eq!(origin_header_value(Some("")), "UNKNOWN");
        assert_eq!(origin_header_value(Some("https://a.b")), "https://a.b");
    }
}
