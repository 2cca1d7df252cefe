//! Language type: a code drawn from a locale registry.
//!
//! A `Language` can only be obtained from a [`LocaleRegistry`] (or the
//! built-in constants), so every value in use is a registry member.

use crate::i18n::LocaleRegistry;
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// English, the built-in default language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    pub(crate) const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Create a Language from a code using the built-in registry.
    ///
    /// # Errors
    /// Fails if the code is not a supported language.
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Language::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LocaleRegistry::builtin().get(code) {
            Some(lang) => Ok(lang),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Check if this is the built-in default language.
    pub fn is_default(&self) -> bool {
        *self == LocaleRegistry::builtin().default_language()
    }
}

impl Default for Language {
    fn default() -> Self {
        LocaleRegistry::builtin().default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
