//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path) and applies command-line overrides.

mod types;

use std::path::{Path, PathBuf};

pub use types::{ApiConfig, AutocompleteConfig, Config};

use crate::error::VidscoutError;

const CONFIG_DIR_NAME: &str = "vidscout";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config file location, e.g. `~/.config/vidscout/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried and a missing file yields the built-in defaults.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, VidscoutError> {
    match explicit_path {
        Some(path) => {
            if !path.exists() {
                return Err(VidscoutError::ConfigNotFound(path.to_path_buf()));
            }
            load_config_file(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => load_config_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Parse a single config file
pub fn load_config_file(path: &Path) -> Result<Config, VidscoutError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| VidscoutError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub debounce_ms: Option<u64>,
}

impl Config {
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.api_url {
            self.api.base_url = url.clone();
        }
        if let Some(token) = overrides.token.as_ref().filter(|t| !t.trim().is_empty()) {
            self.api.token = Some(token.clone());
        }
        if let Some(ms) = overrides.debounce_ms {
            self.autocomplete.debounce_ms = ms;
        }
    }
}
