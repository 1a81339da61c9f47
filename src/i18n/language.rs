//! Language type: a validated language value.
//!
//! A `Language` can only be constructed for a code the registry knows, so
//! every place that holds one can rely on its metadata existing.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "nl", "ar")
    code: &'static str,
}

impl Language {
    /// English, the site's reference language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Dutch.
    pub const DUTCH: Language = Language { code: "nl" };

    /// Arabic, the only right-to-left language on the site.
    pub const ARABIC: Language = Language { code: "ar" };

    /// Create a `Language` from a language code string.
    ///
    /// Returns an error for codes the registry does not know. This is the
    /// boundary where untrusted input (e.g., a switcher click payload)
    /// becomes a trusted value.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            // Use the static str from the registry
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language the site falls back to at page load.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Dutch").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Nederlands").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this language renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// Whether this is the default page-load language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
