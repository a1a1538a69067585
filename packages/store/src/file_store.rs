//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each value as
//! its own file. It is what the mobile app uses on device so the session survives
//! app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── goal-achiever.toml    # app configuration (see crate::config)
//! └── kv/
//!     ├── auth_token        # bearer credential, raw string
//!     └── user_data         # cached user profile, JSON
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::default_dir`] resolves `<data_dir>/goal-achiever/` via [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/goal-achiever/` |
//! | Linux | `~/.local/share/goal-achiever/` |
//! | Android | App-internal storage (via `dirs`) |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::kv::KeyValueStore;
use crate::StoreError;

/// Name of the per-app directory under the platform data dir.
pub const APP_DIR: &str = "goal-achiever";

/// Filesystem-backed KeyValueStore for on-device persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Platform data directory for the app, falling back to the working directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn kv_dir(&self) -> PathBuf {
        self.base.join("kv")
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.kv_dir().join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.value_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(self.kv_dir())?;
        std::fs::write(self.value_path(key), value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.value_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        store.set("auth_token", "token-123").await.unwrap();

        // Re-open from same directory
        let store2 = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            store2.get("auth_token").await.unwrap().as_deref(),
            Some("token-123")
        );
        assert!(dir.path().join("kv").join("auth_token").exists());
    }

    #[tokio::test]
    async fn test_missing_key_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        // kv/ has never been created
        let store = FileStore::new(dir.path().join("fresh"));

        assert_eq!(store.get("user_data").await.unwrap(), None);
        assert!(store.remove("user_data").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("user_data", "{}").await.unwrap();
        store.remove("user_data").await.unwrap();

        assert_eq!(store.get("user_data").await.unwrap(), None);
        assert!(!dir.path().join("kv").join("user_data").exists());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        std::fs::create_dir_all(dir.path().join("kv")).unwrap();
        std::fs::write(dir.path().join("kv").join("auth_token"), [0xff, 0xfe, 0x00]).unwrap();

        let err = store.get("auth_token").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
