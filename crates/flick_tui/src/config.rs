//! Flick configuration file handling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level Flick configuration (flick.toml)
///
/// Every field has a default, so a missing file and an empty file mean the
/// same thing. CLI flags override whatever is loaded here.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FlickConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Startup UI state
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct UiConfig {
    /// Language code applied at startup
    #[serde(default = "default_language")]
    pub language: String,
    /// Minimum-rating threshold applied at startup
    #[serde(default)]
    pub min_rating: f64,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            min_rating: 0.0,
        }
    }
}

/// Catalog source
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in sample is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl FlickConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults, unless the path was given
    /// explicitly on the command line.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        if !path.exists() {
            if explicit {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: FlickConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn a_missing_default_path_yields_defaults() {
        let config = FlickConfig::load(Path::new("/nonexistent/flick.toml"), false).unwrap();
        assert_eq!(config, FlickConfig::default());
        assert_eq!(config.ui.language, "en");
        assert_eq!(config.ui.min_rating, 0.0);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn a_missing_explicit_path_is_an_error() {
        let err = FlickConfig::load(Path::new("/nonexistent/flick.toml"), true).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn partial_files_fall_back_per_field() {
        let config: FlickConfig = toml::from_str(
            r#"
            [ui]
            min_rating = 7.5
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.min_rating, 7.5);
        assert_eq!(config.ui.language, "en");
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn full_files_parse() {
        let config: FlickConfig = toml::from_str(
            r#"
            [ui]
            language = "fr"
            min_rating = 8.0

            [catalog]
            path = "resource/catalog.demo.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.language, "fr");
        assert_eq!(config.ui.min_rating, 8.0);
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("resource/catalog.demo.json"))
        );
    }
}
