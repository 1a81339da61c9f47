//! Language registry: single source of truth for all supported languages.
//!
//! The site ships with a closed set of three languages (English, Dutch,
//! Arabic). The registry holds their metadata and is initialized once via
//! `OnceLock`; everything else in the crate derives language knowledge from
//! here, so adding a fourth language is a one-entry change.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "nl", "ar")
    pub code: &'static str,

    /// English name of the language (e.g., "Dutch")
    pub name: &'static str,

    /// Native name of the language (e.g., "Nederlands")
    pub native_name: &'static str,

    /// Label shown on the language switcher toggle (e.g., "EN", "NL", "ع")
    pub switch_label: &'static str,

    /// Whether text in this language runs right-to-left
    pub rtl: bool,

    /// Whether this is the default language applied at page load
    /// (only one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in switcher display order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if zero or several entries are flagged as default; either is a
    /// configuration error.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The site's supported languages.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            switch_label: "EN",
            rtl: false,
            is_default: true,
        },
        LanguageConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            switch_label: "NL",
            rtl: false,
            is_default: false,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            switch_label: "ع",
            rtl: true,
            is_default: false,
        },
    ]
}
