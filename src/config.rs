//! `shadecn.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [settings]
//! react = true
//! format = true
//! remove_ids = true
//!
//! [theme]
//! css = "app/globals.css"
//!
//! [theme.mapping]
//! "#FF0000" = "primary"
//! "#FFFFFF" = "background"
//! ```

use crate::error::ConfigError;
use crate::types::{ThemeMapping, TransformSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "shadecn.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: TransformSettings,
    pub theme: ThemeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Theme CSS file, relative paths resolve against the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<PathBuf>,
    /// SVG color → theme token
    pub mapping: ThemeMapping,
}

impl Config {
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file, resolving `theme.css` against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config = Self::from_str(&content)?;

        if let (Some(css), Some(dir)) = (&config.theme.css, path.parent()) {
            if css.is_relative() {
                config.theme.css = Some(dir.join(css));
            }
        }

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else `shadecn.toml` from the working directory
    /// when it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.settings.react);
        assert!(config.settings.format);
    }

    #[test]
    fn test_partial_settings() {
        let config = Config::from_str("[settings]\nreact = false\nremove_sizing = true\n").unwrap();
        assert!(!config.settings.react);
        assert!(config.settings.remove_sizing);
        assert!(config.settings.format);
    }

    #[test]
    fn test_mapping_keeps_file_order() {
        let config = Config::from_str(
            "[theme.mapping]\n\"#ffffff\" = \"background\"\n\"#fff\" = \"card\"\n",
        )
        .unwrap();
        let keys: Vec<_> = config.theme.mapping.keys().collect();
        assert_eq!(keys, vec!["#ffffff", "#fff"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Config::from_str("[settings"), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_resolves_css_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shadecn.toml");
        fs::write(&path, "[theme]\ncss = \"globals.css\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme.css, Some(dir.path().join("globals.css")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/shadecn.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }
}
