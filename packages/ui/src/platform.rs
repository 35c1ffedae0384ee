//! Platform-specific pieces behind one API.
//!
//! | Concern | Web (WASM + `web` feature) | Desktop (native) |
//! |---------|----------------------------|------------------|
//! | Session storage | [`store::LocalStorage`] | [`store::FileStorage`] under `<data_dir>/lumen/` |
//! | Config | defaults | `<data_dir>/lumen/lumen.toml` if present |
//! | Local hour | `js_sys::Date` | `chrono::Local` |
//! | Other-tab changes | `storage` DOM event | not applicable |
//!
//! A WASM build without the `web` feature falls back to [`store::MemoryStorage`].

use store::config::StorageConfig;
use store::{AppConfig, ConfigError, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

/// The session store type every view gets from context.
pub type AppSessionStore = SessionStore<PlatformStorage>;

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("lumen")
}

/// Create the platform's session store with the configured keys.
pub fn make_session_store(keys: &StorageConfig) -> AppSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let backend = store::LocalStorage::new();
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    let backend = store::MemoryStorage::new();
    #[cfg(not(target_arch = "wasm32"))]
    let backend = store::FileStorage::new(data_dir());

    SessionStore::with_keys(backend, keys.clone())
}

/// Load the app configuration, falling back to the defaults. Any read or
/// parse error comes back alongside for the launcher to log. Web builds
/// always use the defaults.
pub fn load_config() -> (AppConfig, Option<ConfigError>) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        AppConfig::load_or_default(&data_dir().join(AppConfig::filename()))
    }
    #[cfg(target_arch = "wasm32")]
    {
        (AppConfig::default(), None)
    }
}

/// Current local wall-clock hour, 0–23.
#[cfg(target_arch = "wasm32")]
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

/// Keeps a `storage` event listener registered until dropped.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub struct ExternalWatch {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>,
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl Drop for ExternalWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .window
            .remove_event_listener_with_callback("storage", self.callback.as_ref().unchecked_ref());
    }
}

/// Forward other tabs' changes to the session key into `store`'s listeners.
///
/// Browsers fire `storage` only in tabs other than the one that wrote, so
/// this never duplicates a local notification.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn watch_external_changes(store: AppSessionStore) -> Option<ExternalWatch> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let key = store.session_key().to_string();
    let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
        // A `None` key means the whole storage area was cleared.
        if event.key().is_some_and(|changed| changed != key) {
            return;
        }
        store.notify_external();
    });

    if let Err(e) = window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref()) {
        tracing::warn!("Failed to watch storage events: {:?}", e);
        return None;
    }
    Some(ExternalWatch { window, callback })
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub struct ExternalWatch;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn watch_external_changes(_store: AppSessionStore) -> Option<ExternalWatch> {
    None
}
