//! Profile screen: account summary, device preferences, menu and logout.

use dioxus::prelude::*;
use store::{logout, AppRoute, Navigate, Preferences};

use crate::components::{Card, IconBadge, Switch};
use crate::icons::{
    FaArrowLeft, FaBell, FaChevronRight, FaCircleQuestion, FaCreditCard, FaLock, FaMoon,
    FaRightFromBracket, FaUser,
};
use crate::session::{use_router_navigator, use_session_guard, use_session_store};
use crate::theme::apply_theme;
use crate::Icon;

/// Avatar text when the name yields no initials.
const FALLBACK_INITIALS: &str = "U";

/// Entries of the account menu. None of them lead anywhere yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuItem {
    EditProfile,
    Security,
    Payments,
    Help,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [
        MenuItem::EditProfile,
        MenuItem::Security,
        MenuItem::Payments,
        MenuItem::Help,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::EditProfile => "Редактировать профиль",
            MenuItem::Security => "Безопасность",
            MenuItem::Payments => "Платежи",
            MenuItem::Help => "Помощь",
        }
    }

    fn icon(self) -> Element {
        match self {
            MenuItem::EditProfile => rsx! { Icon { icon: FaUser, width: 20, height: 20 } },
            MenuItem::Security => rsx! { Icon { icon: FaLock, width: 20, height: 20 } },
            MenuItem::Payments => rsx! { Icon { icon: FaCreditCard, width: 20, height: 20 } },
            MenuItem::Help => rsx! { Icon { icon: FaCircleQuestion, width: 20, height: 20 } },
        }
    }
}

/// Guarded profile screen.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session_guard();
    let store = use_session_store();
    let nav = use_router_navigator();
    let prefs_store = store.clone();
    let mut prefs = use_signal(move || prefs_store.load_preferences());
    let mut error = use_signal(|| Option::<String>::None);

    let save_store = store.clone();
    let update_prefs = use_callback(move |next: Preferences| {
        prefs.set(next);
        apply_theme(next.dark_mode);
        if let Err(e) = save_store.save_preferences(&next) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    });

    let handle_logout = move |_| {
        error.set(None);
        if let Err(e) = logout(&store, nav) {
            tracing::error!("Failed to clear session: {}", e);
            error.set(Some("Не удалось выйти".to_string()));
        }
    };

    let Some(user) = session else {
        return rsx! {};
    };
    let initials = match user.initials() {
        initials if initials.is_empty() => FALLBACK_INITIALS.to_string(),
        initials => initials,
    };
    let current = prefs();

    rsx! {
        div {
            class: "screen",

            div {
                class: "page",

                div {
                    class: "page-header",
                    button {
                        class: "btn btn--ghost btn--icon",
                        aria_label: "Назад",
                        onclick: move |_| nav.navigate_to(AppRoute::Home),
                        Icon { icon: FaArrowLeft, width: 24, height: 24 }
                    }
                    h1 { class: "title title--bar", "Профиль" }
                    div { class: "spacer" }
                }

                Card {
                    class: "profile-card",
                    div { class: "avatar", "{initials}" }
                    h2 { class: "profile-name", "{user.name}" }
                    p { class: "muted small", "{user.email}" }
                }

                Card {
                    class: "list",
                    div {
                        class: "list-row",
                        div {
                            class: "list-label",
                            IconBadge { Icon { icon: FaBell, width: 20, height: 20 } }
                            span { "Уведомления" }
                        }
                        Switch {
                            checked: current.notifications,
                            label: "Уведомления",
                            on_change: move |on: bool| update_prefs.call(Preferences { notifications: on, ..prefs() }),
                        }
                    }
                    div {
                        class: "list-row",
                        div {
                            class: "list-label",
                            IconBadge { Icon { icon: FaMoon, width: 20, height: 20 } }
                            span { "Темная тема" }
                        }
                        Switch {
                            checked: current.dark_mode,
                            label: "Темная тема",
                            on_change: move |on: bool| update_prefs.call(Preferences { dark_mode: on, ..prefs() }),
                        }
                    }
                }

                Card {
                    class: "list",
                    for item in MenuItem::ALL {
                        button {
                            key: "{item.label()}",
                            class: "list-row list-row--button",
                            IconBadge { tint: "icon-badge--muted", {item.icon()} }
                            span { class: "list-grow", "{item.label()}" }
                            span {
                                class: "muted",
                                Icon { icon: FaChevronRight, width: 20, height: 20 }
                            }
                        }
                    }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                button {
                    class: "btn btn--danger btn--block",
                    onclick: handle_logout,
                    Icon { icon: FaRightFromBracket, width: 20, height: 20 }
                    "Выйти"
                }
            }
        }
    }
}
