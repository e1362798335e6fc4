//! Configuration loading and management

mod settings;

pub use settings::Settings;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the site root
pub const CONFIG_FILE: &str = "webaudit.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a site directory
    ///
    /// Looks for `webaudit.toml` in the directory; falls back to defaults
    /// when absent.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    /// Render the default configuration as TOML, for `init`
    pub fn default_toml() -> String {
        // Defaults always serialize
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_dir(dir.path()).unwrap();
        assert_eq!(config.settings.slow_load_ms, 3000);
        assert!(!config.settings.include_external);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[settings]\ndom_warning = 500\ninclude_external = true\n",
        )
        .unwrap();

        let config = Config::from_dir(dir.path()).unwrap();
        assert_eq!(config.settings.dom_warning, 500);
        assert!(config.settings.include_external);
        assert_eq!(config.settings.slow_load_ms, 3000);
        assert_eq!(config.settings.viewport_width, 1200);
    }

    #[test]
    fn default_toml_round_trips() {
        let rendered = Config::default_toml();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.settings.mobile_breakpoint, 768);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "settings = nonsense").unwrap();
        assert!(Config::from_dir(dir.path()).is_err());
    }
}
