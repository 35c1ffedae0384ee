use dioxus::prelude::*;

/// Fallback for unknown paths, including the unimplemented registration page.
#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "screen screen--centered",
            div {
                class: "card not-found",
                h1 { class: "title", "404" }
                p { class: "muted", "Страница {path} не найдена" }
                Link { class: "btn btn--primary", to: "/home", "На главную" }
            }
        }
    }
}
