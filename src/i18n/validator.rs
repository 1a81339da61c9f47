//! Catalog completeness validation.
//!
//! Missing translation keys are tolerated at render time (the old text stays
//! on screen), which keeps page variants resilient but makes authoring gaps
//! invisible in production. This validator is the development-time
//! counterweight: it walks the English reference tree and reports every key
//! path another language fails to define.

use crate::i18n::{Catalog, Language, LanguageRegistry};

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Key paths missing from a non-reference language (authoring gaps)
    pub errors: Vec<String>,

    /// Key paths a language defines beyond the reference tree (dead strings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every supported language against the English reference tree.
    pub fn validate() -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = Catalog::tree(Language::ENGLISH).key_paths();

        for config in LanguageRegistry::get().list() {
            let lang = Language::from_code(config.code)
                .expect("registry codes are always constructible");
            if lang == Language::ENGLISH {
                continue;
            }

            for path in &reference {
                if Catalog::get(lang, path).is_none() {
                    report
                        .errors
                        .push(format!("'{}' is missing key path '{}'", config.code, path));
                }
            }

            for path in Catalog::tree(lang).key_paths() {
                if Catalog::get(Language::ENGLISH, &path).is_none() {
                    report.warnings.push(format!(
                        "'{}' defines '{}' which is absent from the reference tree",
                        config.code, path
                    ));
                }
            }
        }

        report
    }
}
