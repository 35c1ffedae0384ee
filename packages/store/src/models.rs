//! # Domain models for the session and device preferences
//!
//! These are the only records Lumen ever persists. Both are
//! `Serialize + Deserialize` and are stored as JSON strings by
//! [`crate::SessionStore`].
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Session`] | Proof of the "logged in" state. Carries the display `name` (local part of the email) and the `email` as typed. Presence in storage is the only truth value: there is no token, expiry or signature. |
//! | [`Preferences`] | Device-level toggles shown on the profile screen (`notifications`, `dark_mode`). Stored under their own key so logout does not reset them. |

use serde::{Deserialize, Serialize};

/// The stored record that makes every guarded view treat the user as logged in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name: "jane" for "jane@example.com"
    pub name: String,
    /// Email exactly as entered on the login form
    pub email: String,
}

impl Session {
    /// Build a session from an email address, deriving the name from the
    /// part before the first `@`. An address without `@` becomes its own name.
    pub fn from_email(email: &str) -> Self {
        Self {
            name: local_part(email).to_string(),
            email: email.to_string(),
        }
    }

    /// Avatar initials: first letter of each space-separated word, uppercased,
    /// at most two characters. Empty when the name is empty.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Substring of `email` before the first `@`.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// First letter of each word in `name`, uppercased, truncated to two characters.
///
/// Words are separated by single spaces; empty words (from repeated spaces)
/// contribute nothing.
pub fn initials(name: &str) -> String {
    let firsts: String = name
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect();
    firsts.to_uppercase().chars().take(2).collect()
}

/// Toggles on the profile screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: default_notifications(),
            dark_mode: false,
        }
    }
}
