//! # Locally persisted session models
//!
//! The only two things this app keeps on the device between launches:
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Credential`] | The opaque bearer token returned by login/registration. Its presence means "signed in"; the client never inspects it. |
//! | [`User`] | The last-known profile returned alongside the credential. A cache for display, not a source of truth. |
//!
//! Both are `Serialize + Deserialize` so the API layer can decode them straight from
//! the auth responses and re-export them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// User profile as last reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// ISO-8601 timestamp, kept verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name shown in greetings; the backend only knows the email.
    pub fn display_name(&self) -> &str {
        &self.email
    }
}
