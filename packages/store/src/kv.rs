//! # Key-value storage abstraction
//!
//! The session layer only ever needs a handful of string values persisted on the
//! device (the bearer credential and a cached user profile). [`KeyValueStore`] is
//! the async seam that lets the same [`crate::SessionStore`] logic run against
//! the filesystem on device ([`crate::FileStore`]) and an in-memory map in tests
//! ([`crate::MemoryStore`]).
//!
//! Unlike a cache, every method reports failures: the session gate must be able
//! to tell "nothing stored" (`Ok(None)`) apart from "storage unreadable"
//! (`Err`), because the latter fails closed.

use crate::StoreError;

/// Async trait for reading and writing string values by key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    /// Removing a key that does not exist is not an error.
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
