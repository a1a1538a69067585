//! Errors raised by the device-local stores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A value was present under `key` but could not be decoded.
    #[error("corrupt value under `{key}`: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(e: toml::ser::Error) -> Self {
        StoreError::Config(e.to_string())
    }
}
