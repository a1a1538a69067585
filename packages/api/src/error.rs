//! Normalized errors for every facade call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the credential (HTTP 401).
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },

    /// Any other non-success status.
    #[error("server returned {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] store::StoreError),
}

impl ApiError {
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Server { status, detail }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Server-supplied detail, if the server sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Server { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    /// Message for the screen: the server's detail when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`, whose messages are joined with `; `.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg")?.as_str())
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}
