//! Logging setup.
//!
//! In the browser `tracing` events go to the developer console through
//! `tracing-web`. The level comes from the app config and can be overridden
//! per browser by setting the `lumen_log_level` local-storage key, e.g.
//! `localStorage.setItem("lumen_log_level", "debug")`.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;

/// Local-storage key that overrides the configured level.
pub const LOG_LEVEL_KEY: &str = "lumen_log_level";

fn parse_level(level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(level.trim()).ok()
}

#[cfg(target_arch = "wasm32")]
fn stored_level() -> Option<LevelFilter> {
    use store::KeyValueStore;

    let value = store::LocalStorage::new().get(LOG_LEVEL_KEY).ok()??;
    parse_level(&value)
}

/// Install the global subscriber. `configured` is the config's level name;
/// unknown names fall back to `warn`.
#[cfg(target_arch = "wasm32")]
pub fn init(configured: &str) {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let level = stored_level()
        .or_else(|| parse_level(configured))
        .unwrap_or(LevelFilter::WARN);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init(configured: &str) {
    let level = parse_level(configured).unwrap_or(LevelFilter::WARN);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
