//! Login and logout, the two transitions between logged-out and logged-in.
//!
//! There is no credential check of any kind. Any non-empty email and password
//! produce a session; the password is dropped right after the emptiness test.
//! Anything resembling real authentication belongs behind this boundary.

use crate::error::{LoginError, StoreError};
use crate::models::Session;
use crate::nav::{AppRoute, Navigate};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Store a session fabricated from `email` and go to the home screen.
///
/// Fields are checked for emptiness only, exactly as typed (no trimming).
/// Nothing is stored and no navigation happens on error.
pub fn submit_login<S: KeyValueStore>(
    store: &SessionStore<S>,
    nav: impl Navigate,
    email: &str,
    password: &str,
) -> Result<Session, LoginError> {
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }
    if password.is_empty() {
        return Err(LoginError::MissingPassword);
    }

    let session = Session::from_email(email);
    store.write(&session)?;
    tracing::info!("Logged in as {}", session.name);
    nav.navigate_to(AppRoute::Home);
    Ok(session)
}

/// Drop the stored session and go to the login screen. No confirmation.
pub fn logout<S: KeyValueStore>(store: &SessionStore<S>, nav: impl Navigate) -> Result<(), StoreError> {
    store.clear()?;
    tracing::info!("Logged out");
    nav.navigate_to(AppRoute::Login);
    Ok(())
}
