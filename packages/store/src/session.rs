//! # Session store — the persisted Credential/User pair
//!
//! [`SessionStore`] is an explicitly scoped handle over a [`KeyValueStore`]. The app
//! creates one at startup, loads it once to decide which navigation subtree to show,
//! writes it after a successful login/registration and clears it on logout or when
//! the server rejects the credential.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`CREDENTIAL_KEY`] | bearer token, raw string |
//! | [`USER_KEY`] | [`User`] as JSON |
//!
//! The credential is the commit marker. Saving drops any previous credential, writes
//! the user, and writes the credential last, so a save that fails or is interrupted
//! part way leaves no credential behind and the next launch is signed out. A
//! credential without a user (written by older builds) still loads as a session
//! with an unknown profile.

use tracing::{debug, warn};

use crate::kv::KeyValueStore;
use crate::models::{Credential, User};
use crate::StoreError;

pub const CREDENTIAL_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";

/// A persisted session as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub credential: Credential,
    pub user: Option<User>,
}

impl Session {
    pub fn new(credential: Credential, user: User) -> Self {
        Self {
            credential,
            user: Some(user),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    kv: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// The stored credential, if any. Blank values count as absent.
    pub async fn credential(&self) -> Result<Option<Credential>, StoreError> {
        let token = self.kv.get(CREDENTIAL_KEY).await?;
        Ok(token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(Credential::new))
    }

    /// The cached user profile, if any.
    pub async fn user(&self) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.kv.get(USER_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: USER_KEY.to_string(),
                reason: e.to_string(),
            })
    }

    /// Read the full session. `Ok(None)` means signed out.
    pub async fn load(&self) -> Result<Option<Session>, StoreError> {
        let Some(credential) = self.credential().await? else {
            debug!("no stored credential");
            return Ok(None);
        };
        let user = self.user().await?;
        if user.is_none() {
            warn!("credential stored without a user profile");
        }
        Ok(Some(Session { credential, user }))
    }

    /// Persist user then credential.
    pub async fn save(&self, credential: &Credential, user: &User) -> Result<(), StoreError> {
        let json = serde_json::to_string(user).map_err(|e| StoreError::Corrupt {
            key: USER_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.kv.remove(CREDENTIAL_KEY).await?;
        self.kv.set(USER_KEY, &json).await?;
        self.kv.set(CREDENTIAL_KEY, credential.as_str()).await?;
        debug!(user = %user.email, "session saved");
        Ok(())
    }

    /// Remove both keys. Both removals are attempted even if the first fails.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let token = self.kv.remove(CREDENTIAL_KEY).await;
        let user = self.kv.remove(USER_KEY).await;
        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    /// Memory store that refuses writes to one key.
    #[derive(Clone, Default)]
    struct FailingWrites {
        inner: MemoryStore,
        fail_key: &'static str,
    }

    impl KeyValueStore for FailingWrites {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.fail_key {
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
    }

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "a@b.com".to_string(),
            created_at: Some("2025-01-01T00:00:00".to_string()),
        }
    }

    #[tokio::test]
    async fn test_empty_store_is_signed_out() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions
            .save(&Credential::new("tok"), &sample_user())
            .await
            .unwrap();

        let session = sessions.load().await.unwrap().unwrap();
        assert_eq!(session.credential.as_str(), "tok");
        assert_eq!(session.user, Some(sample_user()));
    }

    #[tokio::test]
    async fn test_clear_removes_both() {
        let kv = MemoryStore::new();
        let sessions = SessionStore::new(kv.clone());
        sessions
            .save(&Credential::new("tok"), &sample_user())
            .await
            .unwrap();

        sessions.clear().await.unwrap();

        assert_eq!(kv.get(CREDENTIAL_KEY).await.unwrap(), None);
        assert_eq!(kv.get(USER_KEY).await.unwrap(), None);
        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_user_write_leaves_no_session() {
        let kv = FailingWrites {
            inner: MemoryStore::new(),
            fail_key: USER_KEY,
        };
        let sessions = SessionStore::new(kv.clone());

        assert!(sessions
            .save(&Credential::new("tok"), &sample_user())
            .await
            .is_err());
        assert_eq!(kv.get(CREDENTIAL_KEY).await.unwrap(), None);
        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_save_drops_previous_credential() {
        let inner = MemoryStore::new();
        inner.set(CREDENTIAL_KEY, "old").await.unwrap();
        let sessions = SessionStore::new(FailingWrites {
            inner: inner.clone(),
            fail_key: USER_KEY,
        });

        assert!(sessions
            .save(&Credential::new("new"), &sample_user())
            .await
            .is_err());
        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_credential_without_user_is_still_a_session() {
        let kv = MemoryStore::new();
        kv.set(CREDENTIAL_KEY, "tok").await.unwrap();

        let session = SessionStore::new(kv).load().await.unwrap().unwrap();
        assert_eq!(session.credential.as_str(), "tok");
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_blank_credential_is_absent() {
        let kv = MemoryStore::new();
        kv.set(CREDENTIAL_KEY, "   ").await.unwrap();
        assert_eq!(SessionStore::new(kv).load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_user_is_an_error() {
        let kv = MemoryStore::new();
        kv.set(CREDENTIAL_KEY, "tok").await.unwrap();
        kv.set(USER_KEY, "{not json").await.unwrap();

        let err = SessionStore::new(kv).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == USER_KEY));
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let c = Credential::new("super-secret");
        assert!(!format!("{c:?}").contains("super-secret"));
    }
}
