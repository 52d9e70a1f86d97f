//! App Configuration
//!
//! `taskflow.toml` is embedded at build time and parsed once on start-up.
//! Missing or unusable values fall back to defaults.

use serde::Deserialize;
use taskflow_core::{WeekStart, PREVIEW_LIMIT};

const CONFIG_TOML: &str = include_str!("../taskflow.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Completion animation length before the update is sent
    pub toggle_delay_ms: u32,
    pub toast_timeout_ms: u32,
    pub calendar_preview_limit: usize,
    pub week_starts_on: WeekStart,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toggle_delay_ms: 400,
            toast_timeout_ms: 3000,
            calendar_preview_limit: PREVIEW_LIMIT,
            week_starts_on: WeekStart::Sunday,
        }
    }
}

/// localStorage keys
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub token_key: String,
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: "taskflow.token".to_string(),
            theme_key: "taskflow.theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

/// Load the embedded configuration
pub fn load_config() -> AppConfig {
    let config = parse_config(CONFIG_TOML);
    tracing::info!(
        base_url = %config.api.base_url,
        page_size = config.api.page_size,
        week_start = ?config.ui.week_starts_on,
        "loaded config"
    );
    config
}

pub fn parse_config(raw: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(raw) {
        Ok(mut config) => {
            sanitize_config(&mut config);
            config
        }
        Err(error) => {
            tracing::error!(%error, "failed parsing config; using defaults");
            AppConfig::default()
        }
    }
}

fn sanitize_config(config: &mut AppConfig) {
    let defaults = AppConfig::default();

    let base_url = config.api.base_url.trim().trim_end_matches('/');
    if base_url.is_empty() {
        tracing::warn!("empty api.base_url; using default");
        config.api.base_url = defaults.api.base_url;
    } else {
        config.api.base_url = base_url.to_string();
    }

    if config.api.page_size == 0 {
        tracing::warn!("api.page_size must be positive; using default");
        config.api.page_size = defaults.api.page_size;
    }
    if config.ui.calendar_preview_limit == 0 {
        config.ui.calendar_preview_limit = defaults.ui.calendar_preview_limit;
    }
    if config.ui.toast_timeout_ms == 0 {
        config.ui.toast_timeout_ms = defaults.ui.toast_timeout_ms;
    }
    if config.storage.token_key.trim().is_empty() {
        config.storage.token_key = defaults.storage.token_key;
    }
    if config.storage.theme_key.trim().is_empty() {
        config.storage.theme_key = defaults.storage.theme_key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(CONFIG_TOML);
        assert_eq!(config.ui.toggle_delay_ms, 400);
        assert_eq!(config.ui.calendar_preview_limit, 2);
        assert_eq!(config.api.base_url, "/api");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = parse_config("[ui]\nweek_starts_on = \"monday\"\n");
        assert_eq!(config.ui.week_starts_on, WeekStart::Monday);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.ui.toggle_delay_ms, 400);
    }

    #[test]
    fn test_bad_values_are_sanitized() {
        let config = parse_config(
            "[api]\nbase_url = \"https://tasks.example.com/v1/\"\npage_size = 0\n[storage]\ntoken_key = \" \"\n",
        );
        assert_eq!(config.api.base_url, "https://tasks.example.com/v1");
        assert_eq!(config.api.page_size, 10);
        assert_eq!(config.storage.token_key, "taskflow.token");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert_eq!(parse_config("[api\nbase_url ="), AppConfig::default());
    }
}
