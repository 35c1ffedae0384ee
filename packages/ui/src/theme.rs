//! Light/dark theme switching on the document root.

use dioxus::prelude::*;

/// Toggle the `dark` class on the document root. Works in the browser and in
/// the desktop webview alike.
pub fn apply_theme(dark: bool) {
    let _ = document::eval(&format!(
        "document.documentElement.classList.toggle('dark', {dark});"
    ));
}
