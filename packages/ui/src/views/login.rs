//! Login screen.

use dioxus::prelude::*;
use store::{submit_login, LoginError};

use crate::icons::{FaEnvelope, FaEye, FaEyeSlash, FaLock, FaWandMagicSparkles};
use crate::session::{use_router_navigator, use_session_store};
use crate::Icon;

/// Email/password form. Any non-empty pair logs in; nothing is verified.
#[component]
pub fn LoginView() -> Element {
    let store = use_session_store();
    let nav = use_router_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        match submit_login(&store, nav, &email(), &password()) {
            Ok(_) => {}
            Err(LoginError::Store(e)) => {
                tracing::error!("Failed to store session: {}", e);
                error.set(Some("Не удалось сохранить сессию".to_string()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "screen screen--centered",

            div {
                class: "login",

                div {
                    class: "login-header",
                    div {
                        class: "login-logo",
                        Icon { icon: FaWandMagicSparkles, width: 32, height: 32 }
                    }
                    h1 { class: "title", "Добро пожаловать" }
                    p { class: "muted", "Войдите в свой аккаунт" }
                }

                div {
                    class: "card login-card",

                    form {
                        class: "form",
                        onsubmit: handle_login,

                        if let Some(err) = error() {
                            div { class: "form-error", "{err}" }
                        }

                        div {
                            class: "field",
                            label { r#for: "email", "Email" }
                            div {
                                class: "input-wrap",
                                span {
                                    class: "input-icon",
                                    Icon { icon: FaEnvelope, width: 18, height: 18 }
                                }
                                input {
                                    id: "email",
                                    class: "input",
                                    r#type: "email",
                                    placeholder: "example@mail.com",
                                    required: true,
                                    value: email(),
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "field",
                            label { r#for: "password", "Пароль" }
                            div {
                                class: "input-wrap",
                                span {
                                    class: "input-icon",
                                    Icon { icon: FaLock, width: 18, height: 18 }
                                }
                                input {
                                    id: "password",
                                    class: "input input--trailing",
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "••••••••",
                                    required: true,
                                    value: password(),
                                    oninput: move |evt: FormEvent| password.set(evt.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "input-action",
                                    aria_label: if show_password() { "Скрыть пароль" } else { "Показать пароль" },
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        Icon { icon: FaEyeSlash, width: 18, height: 18 }
                                    } else {
                                        Icon { icon: FaEye, width: 18, height: 18 }
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "btn btn--primary btn--block",
                            "Войти"
                        }
                    }

                    p {
                        class: "login-footer muted",
                        "Нет аккаунта? "
                        Link { class: "link", to: "/register", "Зарегистрироваться" }
                    }
                }
            }
        }
    }
}
