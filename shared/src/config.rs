use serde::{Deserialize, Serialize};

/// Switches for the optional parts of the page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RouletteConfig {
    /// Hide the result automatically after this many milliseconds.
    pub auto_dismiss_ms: Option<u32>,
    pub share_enabled: bool,
    /// Endpoint answering `POST { url }` with `{ data: { shortUrl } }`.
    pub shortener_url: Option<String>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: None,
            share_enabled: true,
            shortener_url: None,
        }
    }
}

impl RouletteConfig {
    /// Build from optional string settings, as they come out of the environment.
    /// Unparseable or empty values fall back to the defaults.
    pub fn from_settings(
        auto_dismiss_ms: Option<&str>,
        share_enabled: Option<&str>,
        shortener_url: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            auto_dismiss_ms: auto_dismiss_ms
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0),
            share_enabled: share_enabled
                .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Some(true),
                    "0" | "false" | "no" | "off" => Some(false),
                    _ => None,
                })
                .unwrap_or(defaults.share_enabled),
            shortener_url: shortener_url
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }
}
