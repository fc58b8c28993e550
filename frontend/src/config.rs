use shared::RouletteConfig;
use web_sys::window;

pub fn get_origin() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }

        // Some embedded webviews refuse `origin`; rebuild it by hand
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        if let Ok(host) = location.host() {
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:8080".to_string()
}

pub fn get_page_title() -> String {
    window()
        .and_then(|w| w.document())
        .map(|d| d.title())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Roulette".to_string())
}

/// Settings baked in at build time, e.g.
/// `ROULETTE_SHORTENER_URL=https://short.example/new trunk build`.
pub fn get_roulette_config() -> RouletteConfig {
    RouletteConfig::from_settings(
        option_env!("ROULETTE_AUTO_DISMISS_MS"),
        option_env!("ROULETTE_SHARE_ENABLED"),
        option_env!("ROULETTE_SHORTENER_URL"),
    )
}
