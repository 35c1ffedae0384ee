//! Shared UI for the Lumen launchers: session context, the three screens and
//! the not-found page.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{current_hour, load_config, make_session_store, AppSessionStore, PlatformStorage};

mod session;
pub use session::{
    use_app_config, use_router_navigator, use_session_guard, use_session_store, RouterNavigator,
    SessionProvider,
};

mod theme;
pub use theme::apply_theme;

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/app.css");
