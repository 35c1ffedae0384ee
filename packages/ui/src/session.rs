//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one [`AppSessionStore`] of the app and puts it
//! in context. Views never reach for storage themselves: they call
//! [`use_session_store`] for writes and [`use_session_guard`] on mount.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::{check_session, follow_redirect, AppConfig, AppRoute, Navigate, Session};

use crate::platform::{make_session_store, watch_external_changes, AppSessionStore};
use crate::theme::apply_theme;

/// Get the app's session store.
pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

/// Get the app configuration provided by [`SessionProvider`].
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component that creates the session store.
/// Wrap your router with this component.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let store = use_context_provider(|| make_session_store(&config.storage));
    use_context_provider(|| config.clone());

    // Other tabs logging in or out reach subscribers through the store.
    let watch_store = store.clone();
    let _watch = use_hook(move || Rc::new(watch_external_changes(watch_store)));

    // Restore the persisted theme once.
    use_effect(move || {
        apply_theme(store.load_preferences().dark_mode);
    });

    rsx! {
        {children}
    }
}

/// Dioxus router behind the core's navigation primitive.
#[derive(Clone, Copy)]
pub struct RouterNavigator(Navigator);

impl Navigate for RouterNavigator {
    fn navigate_to(&self, route: AppRoute) {
        self.0.push(route.path());
    }
}

pub fn use_router_navigator() -> RouterNavigator {
    RouterNavigator(use_navigator())
}

/// Mount-time session check for protected views.
///
/// Reads the store once when the view mounts and returns the view's own copy
/// of the session. When there is none, the view gets `None`, must render
/// nothing protected, and is sent to the login screen after this render.
///
/// With `session.follow_external_changes` enabled, the view also redirects
/// when another tab logs out while it is mounted (see [`follow_redirect`]).
pub fn use_session_guard() -> Option<Session> {
    let store = use_session_store();
    let config = use_app_config();
    let nav = use_router_navigator();

    let check_store = store.clone();
    let outcome = use_hook(move || check_session(&check_store));

    let redirect = outcome.clone();
    use_effect(move || redirect.apply(nav));

    let follow_store = store.clone();
    let follow = config.session.follow_external_changes;
    let subscription = use_hook(move || {
        follow.then(|| {
            follow_store.subscribe(move |event| {
                if let Some(route) = follow_redirect(event) {
                    tracing::info!("Session ended in another tab");
                    nav.navigate_to(route);
                }
            })
        })
    });
    use_drop(move || {
        if let Some(id) = subscription {
            store.unsubscribe(id);
        }
    });

    outcome.session().cloned()
}
