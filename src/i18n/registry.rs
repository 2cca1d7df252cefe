//! Locale registry: single source of truth for the supported languages.
//!
//! A registry is plain, immutable configuration. It can be built explicitly
//! with [`LocaleRegistry::new`] and passed by reference, or taken from the
//! process-wide built-in table via [`LocaleRegistry::builtin`], which is
//! initialized once with `OnceLock`.

use crate::error::ConfigError;
use crate::i18n::Language;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code, also the URL path segment (e.g., "en", "es")
    pub code: &'static str,

    /// Human-readable label shown in the language switcher (e.g., "Español")
    pub label: &'static str,

    /// English name of the language (e.g., "Spanish")
    pub name: &'static str,

    /// Locale identifier used for date formatting (e.g., "es-ES")
    pub date_locale: &'static str,

    /// Whether this is the default language (exactly one must be true)
    pub is_default: bool,
}

/// The closed set of languages the site is published in.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    languages: Vec<LanguageConfig>,
    default: usize,
}

/// Built-in registry instance (initialized lazily)
static BUILTIN: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry from a language table.
    ///
    /// # Errors
    /// Fails when no language (or more than one) is marked as default, or
    /// when a code is declared twice.
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self, ConfigError> {
        for (i, lang) in languages.iter().enumerate() {
            if languages[..i].iter().any(|other| other.code == lang.code) {
                return Err(ConfigError::DuplicateLanguage {
                    code: lang.code.to_string(),
                });
            }
        }

        let defaults: Vec<usize> = languages
            .iter()
            .enumerate()
            .filter(|(_, lang)| lang.is_default)
            .map(|(i, _)| i)
            .collect();

        let default = match defaults.as_slice() {
            [] => return Err(ConfigError::NoDefaultLanguage),
            [single] => *single,
            _ => {
                return Err(ConfigError::MultipleDefaultLanguages {
                    codes: defaults
                        .iter()
                        .map(|&i| languages[i].code.to_string())
                        .collect(),
                })
            }
        };

        Ok(Self { languages, default })
    }

    /// Build a registry whose default language is named separately from the
    /// table, as site configuration usually states it.
    ///
    /// # Errors
    /// Fails when `default_code` is not one of the declared languages.
    pub fn with_default(
        mut languages: Vec<LanguageConfig>,
        default_code: &str,
    ) -> Result<Self, ConfigError> {
        if !languages.iter().any(|lang| lang.code == default_code) {
            return Err(ConfigError::DefaultNotSupported {
                code: default_code.to_string(),
            });
        }
        for lang in &mut languages {
            lang.is_default = lang.code == default_code;
        }
        Self::new(languages)
    }

    /// Get the built-in registry (English default, Spanish).
    pub fn builtin() -> &'static LocaleRegistry {
        BUILTIN.get_or_init(|| {
            LocaleRegistry::new(default_languages())
                .expect("built-in language table declares exactly one default")
        })
    }

    /// Check if a token names a supported language.
    ///
    /// Total over all strings: anything that is not an exact, case-sensitive
    /// code match (including the empty string) is unsupported.
    pub fn is_supported(&self, token: &str) -> bool {
        self.config_by_code(token).is_some()
    }

    /// Get the language for a code, if supported.
    pub fn get(&self, code: &str) -> Option<Language> {
        self.config_by_code(code).map(|config| Language::new(config.code))
    }

    /// Get the configuration for a language of this registry.
    pub fn config(&self, lang: Language) -> Option<&LanguageConfig> {
        self.config_by_code(lang.code())
    }

    fn config_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the default language.
    pub fn default_language(&self) -> Language {
        Language::new(self.languages[self.default].code)
    }

    /// Get the configuration of the default language.
    pub fn default_config(&self) -> &LanguageConfig {
        &self.languages[self.default]
    }

    /// Human-readable label for a language; falls back to its code for a
    /// language that belongs to another registry.
    pub fn label(&self, lang: Language) -> &'static str {
        self.config(lang).map(|c| c.label).unwrap_or(lang.code())
    }

    /// All supported languages in declaration order.
    pub fn languages(&self) -> Vec<Language> {
        self.languages
            .iter()
            .map(|config| Language::new(config.code))
            .collect()
    }

    /// All language configurations in declaration order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }
}

/// Default language configurations.
///
/// English is the default; Spanish is the only other published language.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            label: "English",
            name: "English",
            date_locale: "en-US",
            is_default: true,
        },
        LanguageConfig {
            code: "es",
            label: "Español",
            name: "Spanish",
            date_locale: "es-ES",
            is_default: false,
        },
    ]
}
