use contracts::system::auth::{
    AuthSession, StoredCredentials, EDIT_TOKEN_KEY, PUBLIC_ID_KEY, PUBLIC_KEY_KEY,
};
use web_sys::window;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

fn get(key: &str) -> Option<String> {
    get_session_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

fn set(key: &str, value: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Everything a previous page load left behind
pub fn stored_credentials() -> StoredCredentials {
    StoredCredentials {
        edit_token: get(EDIT_TOKEN_KEY),
        public_id: get(PUBLIC_ID_KEY),
        public_key: get(PUBLIC_KEY_KEY),
    }
}

/// Public key sent as `X-Public-Key`
pub fn get_public_key() -> Option<String> {
    get(PUBLIC_KEY_KEY)
}

pub fn save_edit_token(token: &str) {
    set(EDIT_TOKEN_KEY, token);
}

pub fn clear_edit_token() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(EDIT_TOKEN_KEY);
    }
}

pub fn save_public_credentials(public_id: &str, public_key: &str) {
    set(PUBLIC_ID_KEY, public_id);
    set(PUBLIC_KEY_KEY, public_key);
}

/// Remember a session that arrived through the URL
pub fn persist_session(session: &AuthSession) {
    match session {
        AuthSession::Admin { token } => save_edit_token(token),
        AuthSession::Public {
            public_id,
            public_key,
        } => save_public_credentials(public_id, public_key),
        AuthSession::Anonymous => {}
    }
}
