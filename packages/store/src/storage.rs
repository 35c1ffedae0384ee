//! The key/value medium underneath [`crate::SessionStore`].
//!
//! Implementations live in sibling modules: [`crate::MemoryStorage`] for tests,
//! [`crate::FileStorage`] for desktop, and `LocalStorage` (browser
//! `localStorage`) on the web.

use crate::error::StoreError;

/// Synchronous string key/value storage.
///
/// Every browser storage call is synchronous, so unlike a network backend this
/// trait has no async surface.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
