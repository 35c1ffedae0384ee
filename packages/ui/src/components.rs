//! Small presentational building blocks shared by the views.

use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}

/// On/off switch rendered as a button with `role="switch"`.
#[component]
pub fn Switch(checked: bool, on_change: EventHandler<bool>, #[props(default)] label: String) -> Element {
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            aria_checked: "{checked}",
            aria_label: "{label}",
            class: if checked { "switch switch--on" } else { "switch" },
            onclick: move |_| on_change.call(!checked),
            span { class: "switch-thumb" }
        }
    }
}

/// Round tinted badge holding an icon.
#[component]
pub fn IconBadge(#[props(default = "icon-badge--primary".to_string())] tint: String, children: Element) -> Element {
    rsx! {
        div {
            class: "icon-badge {tint}",
            {children}
        }
    }
}
