//! Session gate context and hooks.
//!
//! [`SessionProvider`] owns the app's [`AppClient`] (and with it the session store),
//! loads the stored session once on mount and exposes the result as a
//! `Signal<SessionGate>`. Layouts read the gate to decide which navigation subtree
//! may render.

use api::ApiError;
use dioxus::prelude::*;
use store::{AppConfig, KeyValueStore, Session, SessionStore, StoreError, User};
use tracing::{error, info, warn};

use crate::client::{data_dir, load_config, make_client, AppClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionGate {
    #[default]
    Loading,
    /// Signed in. The profile is `None` when only the credential survived.
    Authenticated(Option<User>),
    Unauthenticated,
}

impl SessionGate {
    /// Gate state for the result of reading the stored session. Fails closed.
    pub fn resolve(loaded: Result<Option<Session>, StoreError>) -> Self {
        match loaded {
            Ok(Some(session)) => SessionGate::Authenticated(session.user),
            Ok(None) => SessionGate::Unauthenticated,
            Err(e) => {
                error!(error = %e, "could not read stored session");
                SessionGate::Unauthenticated
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionGate::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionGate::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionGate::Authenticated(user) => user.as_ref(),
            _ => None,
        }
    }
}

/// Current gate state. Updates on sign in and sign out.
pub fn use_session() -> Signal<SessionGate> {
    use_context::<Signal<SessionGate>>()
}

pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

pub fn use_config() -> Signal<AppConfig> {
    use_context::<Signal<AppConfig>>()
}

/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_hook(|| load_config(&data_dir()));
    let client = use_context_provider(|| make_client(&config, data_dir()));
    use_context_provider(|| Signal::new(config));
    let mut gate = use_context_provider(|| Signal::new(SessionGate::Loading));

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let resolved = SessionGate::resolve(client.session().load().await);
            info!(authenticated = resolved.is_authenticated(), "session resolved");
            gate.set(resolved);
        }
    });

    rsx! {
        {children}
    }
}

/// Move the gate to signed in after a successful login or registration.
pub fn signed_in(mut gate: Signal<SessionGate>, user: User) {
    gate.set(SessionGate::Authenticated(Some(user)));
}

/// Clear the stored session and drop to the auth subtree. The gate moves even if
/// clearing storage fails.
pub async fn sign_out(client: &AppClient, mut gate: Signal<SessionGate>) {
    if let Err(e) = client.auth().logout().await {
        error!(error = %e, "failed to clear stored session");
    }
    gate.set(SessionGate::Unauthenticated);
}

/// Tear the session down if `err` says the server rejected the credential.
/// Returns whether it did.
pub async fn handle_unauthorized(
    err: &ApiError,
    client: &AppClient,
    mut gate: Signal<SessionGate>,
) -> bool {
    match clear_if_unauthorized(err, client.session()).await {
        Ok(false) => false,
        Ok(true) => {
            warn!("credential rejected by server, signed out");
            gate.set(SessionGate::Unauthenticated);
            true
        }
        Err(e) => {
            error!(error = %e, "failed to clear rejected session");
            gate.set(SessionGate::Unauthenticated);
            true
        }
    }
}

/// Pass a facade result through, signing out first if the server rejected the
/// credential.
pub async fn check_auth<T>(
    result: Result<T, ApiError>,
    client: &AppClient,
    gate: Signal<SessionGate>,
) -> Result<T, ApiError> {
    if let Err(e) = &result {
        handle_unauthorized(e, client, gate).await;
    }
    result
}

/// Storage half of [`handle_unauthorized`].
pub async fn clear_if_unauthorized<S: KeyValueStore>(
    err: &ApiError,
    session: &SessionStore<S>,
) -> Result<bool, StoreError> {
    if !err.is_unauthorized() {
        return Ok(false);
    }
    session.clear().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Credential, MemoryStore};

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            email: "a@b.com".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_resolve_states() {
        assert_eq!(SessionGate::resolve(Ok(None)), SessionGate::Unauthenticated);

        let gate = SessionGate::resolve(Ok(Some(Session::new(Credential::new("t"), user()))));
        assert!(gate.is_authenticated());
        assert_eq!(gate.user().map(|u| u.email.as_str()), Some("a@b.com"));

        let gate = SessionGate::resolve(Ok(Some(Session {
            credential: Credential::new("t"),
            user: None,
        })));
        assert!(gate.is_authenticated());
        assert_eq!(gate.user(), None);
    }

    #[test]
    fn test_resolve_fails_closed() {
        let err = StoreError::Corrupt {
            key: "user_data".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(SessionGate::resolve(Err(err)), SessionGate::Unauthenticated);

        let err = StoreError::Io(std::io::Error::other("disk gone"));
        assert_eq!(SessionGate::resolve(Err(err)), SessionGate::Unauthenticated);
    }

    #[test]
    fn test_default_is_loading() {
        assert!(SessionGate::default().is_loading());
        assert!(!SessionGate::default().is_authenticated());
    }

    #[tokio::test]
    async fn test_corrupt_user_record_fails_closed() {
        let kv = MemoryStore::new();
        kv.set("auth_token", "t").await.unwrap();
        kv.set("user_data", "{not json").await.unwrap();
        let gate = SessionGate::resolve(SessionStore::new(kv).load().await);
        assert_eq!(gate, SessionGate::Unauthenticated);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let session = SessionStore::new(MemoryStore::new());
        session.save(&Credential::new("t"), &user()).await.unwrap();

        let other = ApiError::Server {
            status: 500,
            detail: None,
        };
        assert!(!clear_if_unauthorized(&other, &session).await.unwrap());
        assert!(session.load().await.unwrap().is_some());

        let rejected = ApiError::Unauthorized { detail: None };
        assert!(clear_if_unauthorized(&rejected, &session).await.unwrap());
        assert_eq!(session.load().await.unwrap(), None);
    }
}
