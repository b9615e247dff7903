use contracts::system::auth::{resolve_session, AuthSession};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage, url_params};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessStatus {
    Initializing,
    /// Admin token is being checked
    Verifying,
    Ready,
    /// Admin token rejected; it has been removed from storage
    InvalidToken,
}

/// Public id/key used to load the configurator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveCredentials {
    pub public_id: String,
    pub public_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: AuthSession,
    pub status: AccessStatus,
    pub credentials: Option<ActiveCredentials>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: AuthSession::Anonymous,
            status: AccessStatus::Initializing,
            credentials: None,
        }
    }
}

impl AuthState {
    /// Admin mode is only on once the token has been verified
    pub fn is_admin(&self) -> bool {
        self.session.is_admin() && self.status == AccessStatus::Ready
    }

    pub fn token(&self) -> Option<String> {
        self.session.token().map(str::to_string)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Resolve the session once on mount
    Effect::new(move |_| {
        let resolved = resolve_session(&url_params::read_url_params(), &storage::stored_credentials());

        if resolved.needs_persist() {
            storage::persist_session(&resolved.session);
            url_params::strip_sensitive_from_address_bar();
        }

        match resolved.session.clone() {
            AuthSession::Admin { token } => {
                set_auth_state.set(AuthState {
                    session: resolved.session,
                    status: AccessStatus::Verifying,
                    credentials: None,
                });
                spawn_local(async move {
                    match api::verify_edit_token(&token).await {
                        Ok(verification) if verification.valid => {
                            log::info!("Edit token verified");
                            storage::save_public_credentials(&verification.public_id, &verification.public_key);
                            set_auth_state.update(|state| {
                                state.status = AccessStatus::Ready;
                                state.credentials = Some(ActiveCredentials {
                                    public_id: verification.public_id,
                                    public_key: verification.public_key,
                                });
                            });
                        }
                        Ok(_) => {
                            log::warn!("Edit token rejected");
                            storage::clear_edit_token();
                            set_auth_state.update(|state| state.status = AccessStatus::InvalidToken);
                        }
                        Err(e) => {
                            log::warn!("Edit token verification failed: {}", e);
                            storage::clear_edit_token();
                            set_auth_state.update(|state| state.status = AccessStatus::InvalidToken);
                        }
                    }
                });
            }
            AuthSession::Public {
                public_id,
                public_key,
            } => {
                log::info!("Public session for configurator {}", public_id);
                set_auth_state.set(AuthState {
                    session: resolved.session,
                    status: AccessStatus::Ready,
                    credentials: Some(ActiveCredentials {
                        public_id,
                        public_key,
                    }),
                });
            }
            AuthSession::Anonymous => {
                log::warn!("No configurator credentials in URL or storage");
                set_auth_state.set(AuthState {
                    status: AccessStatus::Ready,
                    ..AuthState::default()
                });
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: verified admin session
pub fn is_admin() -> bool {
    let (auth_state, _) = use_auth();
    auth_state.get().is_admin()
}
