//! # Session store — the single owner of the persisted session
//!
//! [`SessionStore`] wraps a [`KeyValueStore`] and is the only code that knows
//! how a [`Session`] is laid out in storage. Views never touch the medium
//! directly: they get a `SessionStore` from context and call
//! [`read`](SessionStore::read), [`write`](SessionStore::write) or
//! [`clear`](SessionStore::clear).
//!
//! ## Storage layout
//!
//! | Key (default) | Value |
//! |---------------|-------|
//! | `"user"` | JSON `{"name": "...", "email": "..."}` |
//! | `"preferences"` | JSON `{"notifications": bool, "dark_mode": bool}` |
//!
//! Keys come from [`StorageConfig`]. There is no schema version.
//!
//! ## Change notification
//!
//! Listeners registered with [`subscribe`](SessionStore::subscribe) are called
//! after every successful `write` and `clear` made through any clone of the
//! store, and after [`notify_external`](SessionStore::notify_external), which
//! the web shell calls when another tab modified `localStorage`. Bookkeeping is
//! `Rc<RefCell<_>>`: the UI is single-threaded and listeners capture
//! non-`Send` signal handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::models::{Preferences, Session};
use crate::storage::KeyValueStore;

/// Where a session change came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// `write` or `clear` on this store (or a clone of it).
    Local,
    /// Another tab or process changed the medium.
    External,
}

/// Delivered to listeners after the stored session changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEvent {
    /// The session as it is now stored; `None` after a logout.
    pub session: Option<Session>,
    pub origin: ChangeOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SessionEvent)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Reads, writes and clears the one stored [`Session`].
#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
    keys: Rc<StorageConfig>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<S: KeyValueStore> fmt::Debug for SessionStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("keys", &self.keys)
            .field("listeners", &self.listeners.borrow().entries.len())
            .finish()
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Store using the default keys.
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, StorageConfig::default())
    }

    pub fn with_keys(backend: S, keys: StorageConfig) -> Self {
        Self {
            backend,
            keys: Rc::new(keys),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &S {
        &self.backend
    }

    pub fn session_key(&self) -> &str {
        &self.keys.session_key
    }

    /// The stored session, or `None` when absent.
    ///
    /// Unreadable media and malformed JSON both count as absent, so a corrupted
    /// entry sends the user to the login screen instead of breaking the view.
    pub fn read(&self) -> Option<Session> {
        let key = self.session_key();
        let raw = match self.backend.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read session from storage: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring malformed session under key `{}`: {}", key, e);
                None
            }
        }
    }

    /// Serialize `session` under the session key, replacing any previous one.
    pub fn write(&self, session: &Session) -> Result<(), StoreError> {
        let key = self.session_key();
        let json = serde_json::to_string(session).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &json)?;
        tracing::debug!("Session stored for {}", session.email);
        self.notify(SessionEvent {
            session: Some(session.clone()),
            origin: ChangeOrigin::Local,
        });
        Ok(())
    }

    /// Remove the stored session. Clearing an absent session is a no-op.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(self.session_key())?;
        tracing::debug!("Session cleared");
        self.notify(SessionEvent {
            session: None,
            origin: ChangeOrigin::Local,
        });
        Ok(())
    }

    /// Re-read the medium after an outside change and tell listeners.
    pub fn notify_external(&self) {
        let session = self.read();
        tracing::debug!("External session change, logged in: {}", session.is_some());
        self.notify(SessionEvent {
            session,
            origin: ChangeOrigin::External,
        });
    }

    /// Register `listener` for session changes.
    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> SubscriptionId {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners
            .borrow_mut()
            .entries
            .retain(|(entry_id, _)| *entry_id != id);
    }

    fn notify(&self, event: SessionEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }

    /// Stored preferences, or the defaults when none are stored or they are unreadable.
    pub fn load_preferences(&self) -> Preferences {
        let key = &self.keys.preferences_key;
        match self.backend.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed preferences under key `{}`: {}", key, e);
                Preferences::default()
            }),
            Ok(None) => Preferences::default(),
            Err(e) => {
                tracing::warn!("Failed to read preferences: {}", e);
                Preferences::default()
            }
        }
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), StoreError> {
        let key = &self.keys.preferences_key;
        let json = serde_json::to_string(prefs).map_err(|source| StoreError::Serialize {
            key: key.clone(),
            source,
        })?;
        self.backend.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::memory::MemoryStorage;

    fn jane() -> Session {
        Session::from_email("jane@example.com")
    }

    #[test]
    fn test_write_then_read() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.read().is_none());

        store.write(&jane()).unwrap();
        assert_eq!(store.read(), Some(jane()));

        // Raw layout under the fixed key
        let raw = store.backend().get("user").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "jane");
        assert_eq!(value["email"], "jane@example.com");
    }

    #[test]
    fn test_write_overwrites() {
        let store = SessionStore::new(MemoryStorage::new());
        store.write(&jane()).unwrap();
        store.write(&Session::from_email("bob@example.com")).unwrap();
        assert_eq!(store.read().unwrap().name, "bob");
    }

    #[test]
    fn test_write_does_not_validate_fields() {
        let store = SessionStore::new(MemoryStorage::new());
        let odd = Session {
            name: String::new(),
            email: "not an email".to_string(),
        };
        store.write(&odd).unwrap();
        assert_eq!(store.read(), Some(odd));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new(MemoryStorage::new());
        store.write(&jane()).unwrap();

        store.clear().unwrap();
        assert!(store.read().is_none());

        store.clear().unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_malformed_entry_reads_as_absent() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());

        storage.set("user", "{not json").unwrap();
        assert!(store.read().is_none());

        storage.set("user", r#"{"email":"jane@example.com"}"#).unwrap();
        assert!(store.read().is_none());

        storage.set("user", "null").unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        storage
            .set("user", r#"{"name":"jane","email":"jane@example.com","theme":"dark"}"#)
            .unwrap();
        assert_eq!(store.read(), Some(jane()));
    }

    #[test]
    fn test_custom_keys() {
        let storage = MemoryStorage::new();
        let keys = StorageConfig {
            session_key: "lumen.session".to_string(),
            preferences_key: "lumen.prefs".to_string(),
        };
        let store = SessionStore::with_keys(storage.clone(), keys);

        store.write(&jane()).unwrap();
        assert!(storage.get("user").unwrap().is_none());
        assert!(storage.get("lumen.session").unwrap().is_some());
    }

    #[test]
    fn test_listeners_see_local_changes() {
        let store = SessionStore::new(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        // A clone shares listeners with the original
        let other = store.clone();
        other.write(&jane()).unwrap();
        store.clear().unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].session, Some(jane()));
        assert_eq!(seen[0].origin, ChangeOrigin::Local);
        assert_eq!(seen[1].session, None);
    }

    #[test]
    fn test_external_change_rereads_storage() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        // Another tab logs in behind our back
        storage
            .set("user", r#"{"name":"jane","email":"jane@example.com"}"#)
            .unwrap();
        store.notify_external();

        let seen = seen.borrow();
        assert_eq!(
            seen.as_slice(),
            &[SessionEvent {
                session: Some(jane()),
                origin: ChangeOrigin::External,
            }]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let store = SessionStore::new(MemoryStorage::new());
        let count = Rc::new(RefCell::new(0));

        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.write(&jane()).unwrap();
        store.unsubscribe(id);
        store.clear().unwrap();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let store = SessionStore::new(MemoryStorage::new());
        let slot: Rc<RefCell<Option<SubscriptionId>>> = Rc::new(RefCell::new(None));

        let inner_store = store.clone();
        let inner_slot = slot.clone();
        let id = store.subscribe(move |_| {
            if let Some(id) = inner_slot.borrow_mut().take() {
                inner_store.unsubscribe(id);
            }
        });
        *slot.borrow_mut() = Some(id);

        store.write(&jane()).unwrap();
        store.clear().unwrap();
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_preferences_roundtrip_and_survive_logout() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.load_preferences(), Preferences::default());

        let prefs = Preferences {
            notifications: false,
            dark_mode: true,
        };
        store.save_preferences(&prefs).unwrap();
        store.write(&jane()).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load_preferences(), prefs);
    }

    #[test]
    fn test_malformed_preferences_fall_back_to_default() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        storage.set("preferences", "[]").unwrap();
        assert_eq!(store.load_preferences(), Preferences::default());
    }
}
