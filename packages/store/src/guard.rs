//! The presence check every protected view runs when it mounts.
//!
//! The check is one-shot: it reads the store once and either hands back the
//! session for the view to keep as its local copy, or sends the user to the
//! login screen. It does not watch for later changes unless the view opts
//! into follow mode, where [`follow_redirect`] decides what each change means.

use crate::models::Session;
use crate::nav::{AppRoute, Navigate};
use crate::session::{ChangeOrigin, SessionEvent, SessionStore};
use crate::storage::KeyValueStore;

/// Result of the mount-time check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A session is stored; render with this copy.
    Proceed(Session),
    /// No usable session; go here and render nothing protected.
    Redirect(AppRoute),
}

impl GuardOutcome {
    pub fn session(&self) -> Option<&Session> {
        match self {
            GuardOutcome::Proceed(session) => Some(session),
            GuardOutcome::Redirect(_) => None,
        }
    }

    /// Perform the redirect, if any. Views call this after their first render.
    pub fn apply(&self, nav: impl Navigate) {
        if let GuardOutcome::Redirect(route) = self {
            tracing::info!("No session, redirecting to {}", route.path());
            nav.navigate_to(*route);
        }
    }
}

/// Decide without navigating.
pub fn check_session<S: KeyValueStore>(store: &SessionStore<S>) -> GuardOutcome {
    match store.read() {
        Some(session) => GuardOutcome::Proceed(session),
        None => GuardOutcome::Redirect(AppRoute::Login),
    }
}

/// Run the check and perform the redirect if needed.
pub fn guard<S: KeyValueStore>(store: &SessionStore<S>, nav: impl Navigate) -> Option<Session> {
    let outcome = check_session(store);
    outcome.apply(nav);
    match outcome {
        GuardOutcome::Proceed(session) => Some(session),
        GuardOutcome::Redirect(_) => None,
    }
}

/// Where a following view goes after a session change, if anywhere.
///
/// Only another tab's logout counts. A local clear comes from [`crate::logout`],
/// which navigates on its own.
pub fn follow_redirect(event: &SessionEvent) -> Option<AppRoute> {
    match (event.origin, &event.session) {
        (ChangeOrigin::External, None) => Some(AppRoute::Login),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::nav::testing::RecordingNavigator;

    #[test]
    fn test_empty_store_redirects_to_login() {
        let store = SessionStore::new(MemoryStorage::new());
        let nav = RecordingNavigator::default();

        assert!(guard(&store, &nav).is_none());
        assert_eq!(nav.visited.borrow().as_slice(), &[AppRoute::Login]);
    }

    #[test]
    fn test_present_session_proceeds_without_navigation() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = Session::from_email("jane@example.com");
        store.write(&session).unwrap();
        let nav = RecordingNavigator::default();

        assert_eq!(guard(&store, &nav), Some(session.clone()));
        assert!(nav.visited.borrow().is_empty());
        assert_eq!(check_session(&store), GuardOutcome::Proceed(session));
    }

    #[test]
    fn test_malformed_session_redirects() {
        let storage = MemoryStorage::new();
        storage.set("user", "{{{").unwrap();
        let store = SessionStore::new(storage);

        let outcome = check_session(&store);
        assert_eq!(outcome, GuardOutcome::Redirect(AppRoute::Login));
        assert!(outcome.session().is_none());
    }

    #[test]
    fn test_check_is_a_snapshot() {
        let store = SessionStore::new(MemoryStorage::new());
        store.write(&Session::from_email("jane@example.com")).unwrap();

        let outcome = check_session(&store);
        store.clear().unwrap();

        // The view's copy is unaffected by the later clear
        assert_eq!(outcome.session().map(|s| s.name.as_str()), Some("jane"));
    }

    #[test]
    fn test_follow_redirects_on_logout_in_another_tab() {
        let event = SessionEvent {
            session: None,
            origin: ChangeOrigin::External,
        };
        assert_eq!(follow_redirect(&event), Some(AppRoute::Login));
    }

    #[test]
    fn test_follow_ignores_login_in_another_tab() {
        let event = SessionEvent {
            session: Some(Session::from_email("bob@example.com")),
            origin: ChangeOrigin::External,
        };
        assert_eq!(follow_redirect(&event), None);
    }

    #[test]
    fn test_follow_ignores_local_changes() {
        let cleared = SessionEvent {
            session: None,
            origin: ChangeOrigin::Local,
        };
        assert_eq!(follow_redirect(&cleared), None);

        let written = SessionEvent {
            session: Some(Session::from_email("jane@example.com")),
            origin: ChangeOrigin::Local,
        };
        assert_eq!(follow_redirect(&written), None);
    }

    #[test]
    fn test_follow_sees_external_clear_through_store() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.write(&Session::from_email("jane@example.com")).unwrap();

        let nav = std::rc::Rc::new(RecordingNavigator::default());
        let listener_nav = nav.clone();
        store.subscribe(move |event| {
            if let Some(route) = follow_redirect(event) {
                listener_nav.navigate_to(route);
            }
        });

        // Local logout: the listener stays quiet
        store.clear().unwrap();
        assert!(nav.visited.borrow().is_empty());

        // Another tab logs in, then out
        storage.set("user", r#"{"name":"jane","email":"jane@example.com"}"#).unwrap();
        store.notify_external();
        assert!(nav.visited.borrow().is_empty());

        storage.remove("user").unwrap();
        store.notify_external();
        assert_eq!(nav.last(), Some(AppRoute::Login));
        assert_eq!(nav.visited.borrow().len(), 1);
    }
}
