//! Platform-independent core of Lumen: the session record, the storage it
//! lives in, the mount-time guard and the login/logout transitions.

pub mod config;
pub mod error;
pub mod models;
pub mod session;

mod flows;
mod greeting;
mod guard;
mod nav;
mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::AppConfig;
pub use error::{ConfigError, LoginError, StoreError};
pub use flows::{logout, submit_login};
pub use greeting::Greeting;
pub use guard::{check_session, follow_redirect, guard, GuardOutcome};
pub use models::{Preferences, Session};
pub use nav::{AppRoute, Navigate};
pub use session::{ChangeOrigin, SessionEvent, SessionStore, SubscriptionId};
pub use storage::KeyValueStore;
