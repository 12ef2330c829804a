// Configuration type definitions

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_PLACEHOLDER: &str = "Search videos, creators, hashtags...";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Backend API configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Search suggestion configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Color name or hex code ("cyan", "#ff8800") for the dropdown accent
    #[serde(default)]
    pub accent_color: Option<String>,
}

impl AutocompleteConfig {
    /// Resolve the accent color, falling back to cyan for unknown names
    pub fn accent(&self) -> Color {
        self.accent_color
            .as_deref()
            .and_then(|name| Color::from_str(name.trim()).ok())
            .unwrap_or(Color::Cyan)
    }
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: default_placeholder(),
            accent_color: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.autocomplete.min_query_chars, 2);
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r##"
[api]
base_url = "https://api.example.com/v1"
token = "secret"
timeout_ms = 2500

[autocomplete]
debounce_ms = 150
min_query_chars = 3
max_visible = 5
placeholder = "Find trends"
accent_color = "#ff8800"
"##;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        assert_eq!(config.api.timeout_ms, 2500);
        assert_eq!(config.autocomplete.debounce_ms, 150);
        assert_eq!(config.autocomplete.min_query_chars, 3);
        assert_eq!(config.autocomplete.max_visible, 5);
        assert_eq!(config.autocomplete.placeholder, "Find trends");
        assert_eq!(config.autocomplete.accent(), Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_accent_defaults_to_cyan() {
        let config = AutocompleteConfig::default();
        assert_eq!(config.accent(), Color::Cyan);
    }

    #[test]
    fn test_unknown_accent_falls_back_to_cyan() {
        let config = AutocompleteConfig {
            accent_color: Some("not-a-color".to_string()),
            ..AutocompleteConfig::default()
        };
        assert_eq!(config.accent(), Color::Cyan);
    }

    #[test]
    fn test_named_accent_color() {
        let config = AutocompleteConfig {
            accent_color: Some("magenta".to_string()),
            ..AutocompleteConfig::default()
        };
        assert_eq!(config.accent(), Color::Magenta);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[autocomplete]\ndebounce_ms = \"fast\"\n");
        assert!(result.is_err());
    }

    // Any subset of fields present in [autocomplete] parses, and every missing
    // field takes its default value.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            debounce in proptest::option::of(0u64..5000),
            min_chars in proptest::option::of(0usize..10),
            max_visible in proptest::option::of(1usize..30),
        ) {
            let mut toml_content = String::from("[autocomplete]\n");
            if let Some(v) = debounce {
                toml_content.push_str(&format!("debounce_ms = {}\n", v));
            }
            if let Some(v) = min_chars {
                toml_content.push_str(&format!("min_query_chars = {}\n", v));
            }
            if let Some(v) = max_visible {
                toml_content.push_str(&format!("max_visible = {}\n", v));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            prop_assert_eq!(config.autocomplete.debounce_ms, debounce.unwrap_or(DEFAULT_DEBOUNCE_MS));
            prop_assert_eq!(config.autocomplete.min_query_chars, min_chars.unwrap_or(DEFAULT_MIN_QUERY_CHARS));
            prop_assert_eq!(config.autocomplete.max_visible, max_visible.unwrap_or(DEFAULT_MAX_VISIBLE));
            prop_assert_eq!(config.api, ApiConfig::default());
        }
    }
}
