//! # Auth payloads
//!
//! Login and registration both answer with a [`AuthResponse`]: the bearer
//! credential plus the user profile. The credential and user types themselves live
//! in the `store` crate because that is where they are persisted; they are
//! re-exported from this crate's root.

use serde::{Deserialize, Serialize};
use store::{Credential, User};

/// Request body for `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Serialize)]
pub(crate) struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: Credential,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
