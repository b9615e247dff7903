//! Access modes of the configurator and how they are resolved.
//!
//! Admins arrive with `?admin=true&token=...`, embedded viewers with
//! `?publicId=...&publicKey=...`. Both are remembered in session storage so a
//! reload keeps working after the secrets are stripped from the address bar.

use serde::{Deserialize, Serialize};

pub const EDIT_TOKEN_KEY: &str = "konfigra_edit_token";
pub const PUBLIC_ID_KEY: &str = "konfigra_public_id";
pub const PUBLIC_KEY_KEY: &str = "konfigra_public_key";

/// Query parameters never left in the address bar
pub const SENSITIVE_PARAMS: [&str; 2] = ["token", "publicKey"];

/// Auth related query parameters of the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlParams {
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
}

impl UrlParams {
    /// Build from decoded `(key, value)` pairs; the first occurrence wins
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "admin" => &mut params.admin,
                "token" => &mut params.token,
                "publicId" => &mut params.public_id,
                "publicKey" => &mut params.public_key,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        params
    }

    pub fn is_admin(&self) -> bool {
        self.admin.as_deref() == Some("true")
    }
}

/// Values previously written to session storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredCredentials {
    pub edit_token: Option<String>,
    pub public_id: Option<String>,
    pub public_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSession {
    /// Editing with an edit token; public id/key come from token verification
    Admin { token: String },
    /// Viewing an embedded configurator
    Public { public_id: String, public_key: String },
    Anonymous,
}

impl AuthSession {
    pub fn is_admin(&self) -> bool {
        matches!(self, AuthSession::Admin { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthSession::Admin { token } => Some(token),
            _ => None,
        }
    }

    pub fn public_key(&self) -> Option<&str> {
        match self {
            AuthSession::Public { public_key, .. } => Some(public_key),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Url,
    Storage,
    Nowhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub session: AuthSession,
    pub source: SessionSource,
}

impl ResolvedSession {
    /// Came from the URL: persist it and strip the secrets from the address bar
    pub fn needs_persist(&self) -> bool {
        self.source == SessionSource::Url
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Pick the access mode.
///
/// Order: admin token in the URL, stored admin token, public credentials in
/// the URL, stored public credentials, anonymous.
pub fn resolve_session(url: &UrlParams, stored: &StoredCredentials) -> ResolvedSession {
    if url.is_admin() {
        if let Some(token) = non_empty(&url.token) {
            return ResolvedSession {
                session: AuthSession::Admin {
                    token: token.to_string(),
                },
                source: SessionSource::Url,
            };
        }
    }

    if let Some(token) = non_empty(&stored.edit_token) {
        return ResolvedSession {
            session: AuthSession::Admin {
                token: token.to_string(),
            },
            source: SessionSource::Storage,
        };
    }

    if let (Some(public_id), Some(public_key)) = (non_empty(&url.public_id), non_empty(&url.public_key)) {
        return ResolvedSession {
            session: AuthSession::Public {
                public_id: public_id.to_string(),
                public_key: public_key.to_string(),
            },
            source: SessionSource::Url,
        };
    }

    if let (Some(public_id), Some(public_key)) = (non_empty(&stored.public_id), non_empty(&stored.public_key)) {
        return ResolvedSession {
            session: AuthSession::Public {
                public_id: public_id.to_string(),
                public_key: public_key.to_string(),
            },
            source: SessionSource::Storage,
        };
    }

    ResolvedSession {
        session: AuthSession::Anonymous,
        source: SessionSource::Nowhere,
    }
}

/// Remove [`SENSITIVE_PARAMS`] from a raw query string (with or without `?`).
///
/// Returns `None` when nothing had to be removed, otherwise the remaining
/// query without the leading `?` (possibly empty).
pub fn strip_sensitive_params(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut removed = false;
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            let sensitive = SENSITIVE_PARAMS.contains(&key);
            removed |= sensitive;
            !sensitive
        })
        .collect();

    removed.then(|| kept.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(token: Option<&str>, id: Option<&str>, key: Option<&str>) -> StoredCredentials {
        StoredCredentials {
            edit_token: token.map(str::to_string),
            public_id: id.map(str::to_string),
            public_key: key.map(str::to_string),
        }
    }

    #[test]
    fn test_url_admin_wins() {
        let url = UrlParams::from_pairs([("admin", "true"), ("token", "t1"), ("publicId", "p"), ("publicKey", "k")]);
        let resolved = resolve_session(&url, &stored(Some("old"), None, None));
        assert_eq!(resolved.session, AuthSession::Admin { token: "t1".to_string() });
        assert!(resolved.needs_persist());
    }

    #[test]
    fn test_token_without_admin_flag_is_ignored() {
        let url = UrlParams::from_pairs([("token", "t1")]);
        let resolved = resolve_session(&url, &StoredCredentials::default());
        assert_eq!(resolved.session, AuthSession::Anonymous);
        assert_eq!(resolved.source, SessionSource::Nowhere);
    }

    #[test]
    fn test_stored_admin_beats_url_public() {
        let url = UrlParams::from_pairs([("publicId", "p"), ("publicKey", "k")]);
        let resolved = resolve_session(&url, &stored(Some("saved"), None, None));
        assert_eq!(resolved.session.token(), Some("saved"));
        assert_eq!(resolved.source, SessionSource::Storage);
        assert!(!resolved.needs_persist());
    }

    #[test]
    fn test_public_from_url_then_storage() {
        let url = UrlParams::from_pairs([("publicId", "p"), ("publicKey", "k")]);
        let resolved = resolve_session(&url, &stored(None, Some("p0"), Some("k0")));
        assert_eq!(
            resolved.session,
            AuthSession::Public {
                public_id: "p".to_string(),
                public_key: "k".to_string()
            }
        );

        let resolved = resolve_session(&UrlParams::default(), &stored(None, Some("p0"), Some("k0")));
        assert_eq!(resolved.session.public_key(), Some("k0"));
        assert_eq!(resolved.source, SessionSource::Storage);
    }

    #[test]
    fn test_incomplete_public_credentials() {
        let url = UrlParams::from_pairs([("publicId", "p")]);
        let resolved = resolve_session(&url, &stored(None, None, Some("k0")));
        assert_eq!(resolved.session, AuthSession::Anonymous);
    }

    #[test]
    fn test_strip_sensitive_params() {
        assert_eq!(
            strip_sensitive_params("?admin=true&token=abc&x=1"),
            Some("admin=true&x=1".to_string())
        );
        assert_eq!(
            strip_sensitive_params("publicId=p&publicKey=k"),
            Some("publicId=p".to_string())
        );
        assert_eq!(strip_sensitive_params("token=abc"), Some(String::new()));
        assert_eq!(strip_sensitive_params("?publicId=p"), None);
        assert_eq!(strip_sensitive_params(""), None);
    }
}
