//! Device-local persistence for the Goal Achiever client: the session store
//! (credential + cached user), app configuration, and the key-value backends they
//! sit on.

pub mod config;
pub mod kv;
pub mod models;
pub mod session;

mod error;
pub use error::StoreError;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::{FileStore, APP_DIR};

pub use config::{AppConfig, ReminderConfig};
pub use kv::KeyValueStore;
pub use models::{Credential, User};
pub use session::{Session, SessionStore};
