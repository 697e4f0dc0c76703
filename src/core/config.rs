//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::i18n::Locale;

/// Selal configuration with layered hierarchy
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface language (en/ar)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Display currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Errors raised when persisting configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No writable config directory found for this platform")]
    NoConfigDir,

    #[error("Failed to write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yml::Error),
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/selal/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(language) = std::env::var("SELAL_LANG") {
            config.language = Some(language);
        }
        if let Ok(format) = std::env::var("SELAL_FORMAT") {
            config.default_format = Some(format);
        }
        if let Ok(currency) = std::env::var("SELAL_CURRENCY") {
            config.currency = Some(currency);
        }

        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "selal")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.language.is_some() {
            self.language = other.language;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.currency.is_some() {
            self.currency = other.currency;
        }
    }

    /// The configured interface locale, defaulting to English
    pub fn locale(&self) -> Locale {
        self.language
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Locale::En)
    }

    /// Display currency, defaulting to Egyptian pounds
    pub fn currency(&self) -> String {
        self.currency.clone().unwrap_or_else(|| "EGP".to_string())
    }

    /// Persist a new interface language to the global config file
    pub fn set_language(locale: Locale) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path().ok_or(ConfigError::NoConfigDir)?;

        // Preserve other keys already stored in the file
        let mut stored = path
            .exists()
            .then(|| std::fs::read_to_string(&path).ok())
            .flatten()
            .and_then(|contents| serde_yml::from_str::<Config>(&contents).ok())
            .unwrap_or_default();
        stored.language = Some(locale.to_string());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_yml::to_string(&stored)?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_other_when_set() {
        let mut base = Config {
            language: Some("en".to_string()),
            default_format: Some("tsv".to_string()),
            currency: None,
        };
        base.merge(Config {
            language: Some("ar".to_string()),
            default_format: None,
            currency: Some("USD".to_string()),
        });
        assert_eq!(base.language.as_deref(), Some("ar"));
        assert_eq!(base.default_format.as_deref(), Some("tsv"));
        assert_eq!(base.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_locale_defaults_to_english() {
        let config = Config::default();
        assert_eq!(config.locale(), Locale::En);

        let config = Config {
            language: Some("ar".to_string()),
            ..Default::default()
        };
        assert_eq!(config.locale(), Locale::Ar);
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Default::default()
        };
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_currency_defaults_to_egp() {
        assert_eq!(Config::default().currency(), "EGP");
    }
}
