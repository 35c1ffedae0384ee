//! Home dashboard: greeting, welcome card, quick actions and recent activity.

use dioxus::prelude::*;
use store::{AppRoute, Greeting, Navigate};

use crate::components::{Card, IconBadge};
use crate::icons::{FaArrowRight, FaAward, FaBolt, FaCircleCheck, FaHeart, FaStar, FaUser, FaWandMagicSparkles};
use crate::platform::current_hour;
use crate::session::{use_router_navigator, use_session_guard};
use crate::Icon;

/// Shown instead of an empty display name.
const FALLBACK_NAME: &str = "Пользователь";

/// Static tiles in the "quick actions" grid. They have no behaviour yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuickAction {
    Discover,
    Favorites,
    Achievements,
    Activity,
}

impl QuickAction {
    const ALL: [QuickAction; 4] = [
        QuickAction::Discover,
        QuickAction::Favorites,
        QuickAction::Achievements,
        QuickAction::Activity,
    ];

    fn label(self) -> &'static str {
        match self {
            QuickAction::Discover => "Открыть",
            QuickAction::Favorites => "Избранное",
            QuickAction::Achievements => "Достижения",
            QuickAction::Activity => "Активность",
        }
    }

    fn tint(self) -> &'static str {
        match self {
            QuickAction::Discover => "icon-badge--purple",
            QuickAction::Favorites => "icon-badge--pink",
            QuickAction::Achievements => "icon-badge--amber",
            QuickAction::Activity => "icon-badge--blue",
        }
    }

    fn icon(self) -> Element {
        match self {
            QuickAction::Discover => rsx! { Icon { icon: FaWandMagicSparkles, width: 24, height: 24 } },
            QuickAction::Favorites => rsx! { Icon { icon: FaHeart, width: 24, height: 24 } },
            QuickAction::Achievements => rsx! { Icon { icon: FaStar, width: 24, height: 24 } },
            QuickAction::Activity => rsx! { Icon { icon: FaBolt, width: 24, height: 24 } },
        }
    }
}

/// Guarded home screen.
#[component]
pub fn HomeView() -> Element {
    let session = use_session_guard();
    let nav = use_router_navigator();
    let greeting = use_hook(|| Greeting::from_hour(current_hour()));

    let Some(user) = session else {
        return rsx! {};
    };
    let name = if user.name.is_empty() { FALLBACK_NAME } else { user.name.as_str() };

    rsx! {
        div {
            class: "screen",

            div {
                class: "page",

                div {
                    class: "page-header",
                    div {
                        p { class: "muted small", "{greeting}" }
                        h1 { class: "title title--page", "{name}" }
                    }
                    button {
                        class: "btn btn--ghost btn--icon",
                        aria_label: "Профиль",
                        onclick: move |_| nav.navigate_to(AppRoute::Profile),
                        Icon { icon: FaUser, width: 24, height: 24 }
                    }
                }

                Card {
                    class: "welcome-card",
                    div {
                        class: "welcome-body",
                        div {
                            h2 { class: "welcome-title", "Добро пожаловать!" }
                            p { class: "welcome-text", "Исследуйте возможности приложения" }
                            button {
                                class: "btn btn--translucent btn--pill",
                                "Начать"
                                Icon { icon: FaArrowRight, width: 16, height: 16 }
                            }
                        }
                        span {
                            class: "welcome-art",
                            Icon { icon: FaWandMagicSparkles, width: 40, height: 40 }
                        }
                    }
                }

                section {
                    h3 { class: "section-title", "Быстрые действия" }
                    div {
                        class: "action-grid",
                        for (index, action) in QuickAction::ALL.into_iter().enumerate() {
                            Card {
                                key: "{index}",
                                class: "action-card",
                                IconBadge { tint: action.tint().to_string(), {action.icon()} }
                                p { class: "action-label", "{action.label()}" }
                            }
                        }
                    }
                }

                section {
                    h3 { class: "section-title", "Активность" }
                    Card {
                        class: "activity",
                        div {
                            class: "activity-item",
                            IconBadge { Icon { icon: FaCircleCheck, width: 18, height: 18 } }
                            div {
                                p { class: "activity-text", "Профиль настроен" }
                                p { class: "muted small", "Только что" }
                            }
                        }
                        div {
                            class: "activity-item",
                            IconBadge { Icon { icon: FaAward, width: 18, height: 18 } }
                            div {
                                p { class: "activity-text", "Первый вход" }
                                p { class: "muted small", "Сегодня" }
                            }
                        }
                    }
                }
            }
        }
    }
}
