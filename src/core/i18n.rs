//! Locale support - embedded message catalogs and text direction
//!
//! Locale only affects presentation: wizard headings and summary labels.
//! It never changes wizard logic or pricing.

use clap::ValueEnum;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Embed)]
#[folder = "assets/locales/"]
struct LocaleAssets;

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Reading direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ar]
    }

    /// Reading direction; Arabic renders right-to-left
    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ar => TextDirection::Rtl,
        }
    }

    /// Language name in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    fn asset_name(&self) -> &'static str {
        match self {
            Locale::En => "en.json",
            Locale::Ar => "ar.json",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            _ => Err(format!("Unsupported language: {} (expected en or ar)", s)),
        }
    }
}

/// Message catalog for one locale, with English fallback
#[derive(Debug)]
pub struct Catalog {
    locale: Locale,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    /// Load the embedded catalog for a locale
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            messages: load_messages(locale),
            fallback: load_messages(Locale::En),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translated text for a key.
    ///
    /// Missing keys fall back to English; a key absent from both
    /// catalogs is returned verbatim so the gap is visible.
    pub fn text(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn load_messages(locale: Locale) -> HashMap<String, String> {
    LocaleAssets::get(locale.asset_name())
        .and_then(|file| serde_json::from_slice(&file.data).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_is_right_to_left() {
        assert_eq!(Locale::Ar.direction(), TextDirection::Rtl);
        assert_eq!(Locale::En.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_catalogs_load_for_all_locales() {
        for locale in Locale::all() {
            let catalog = Catalog::for_locale(*locale);
            let title = catalog.text("wizard.user_type.title");
            assert_ne!(title, "wizard.user_type.title");
        }
    }

    #[test]
    fn test_arabic_catalog_is_translated() {
        let catalog = Catalog::for_locale(Locale::Ar);
        assert_ne!(
            catalog.text("wizard.user_type.title"),
            Catalog::for_locale(Locale::En).text("wizard.user_type.title")
        );
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let catalog = Catalog::for_locale(Locale::En);
        assert_eq!(catalog.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_locale_parse_accepts_full_names() {
        assert_eq!("arabic".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
