use dioxus::prelude::*;

use views::{Home, Login, NotFound, Profile};

mod logging;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    let (config, config_error) = ui::load_config();
    logging::init(&config.logging.level);
    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {}", e);
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    // Loaded once in `main`.
    let config = use_context::<store::AppConfig>();

    rsx! {
        document::Title { "Lumen" }
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/home`, which runs the session guard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
