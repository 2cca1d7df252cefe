//! Locale-aware date formatting.
//!
//! Each language maps to one convention (locale + long date pattern) looked
//! up from a table by the registry's `date_locale`. Conventions are resolved
//! once when the formatter is built.

use crate::error::ConfigError;
use crate::i18n::{Language, LocaleRegistry};
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;

/// How dates are written for one locale.
#[derive(Debug, Clone, Copy)]
pub struct DateConvention {
    /// Locale identifier (e.g., "es-ES")
    pub locale_id: &'static str,
    /// Locale used for month names
    pub locale: Locale,
    /// strftime pattern for the long date style
    pub pattern: &'static str,
}

/// Known long-style conventions, keyed by locale identifier.
const CONVENTIONS: &[DateConvention] = &[
    DateConvention {
        locale_id: "en-US",
        locale: Locale::en_US,
        pattern: "%B %-d, %Y",
    },
    DateConvention {
        locale_id: "en-GB",
        locale: Locale::en_GB,
        pattern: "%-d %B %Y",
    },
    DateConvention {
        locale_id: "es-ES",
        locale: Locale::es_ES,
        pattern: "%-d de %B de %Y",
    },
    DateConvention {
        locale_id: "fr-FR",
        locale: Locale::fr_FR,
        pattern: "%-d %B %Y",
    },
    DateConvention {
        locale_id: "pt-BR",
        locale: Locale::pt_BR,
        pattern: "%-d de %B de %Y",
    },
];

/// Find the convention for a locale identifier.
pub fn convention_for(locale_id: &str) -> Option<&'static DateConvention> {
    CONVENTIONS.iter().find(|c| c.locale_id == locale_id)
}

/// Formats dates for every language of a registry.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    default_convention: DateConvention,
    conventions: HashMap<Language, DateConvention>,
}

impl DateFormatter {
    /// Resolve the convention of every language in the registry.
    ///
    /// # Errors
    /// Fails when a language's `date_locale` has no known convention.
    pub fn new(registry: &LocaleRegistry) -> Result<Self, ConfigError> {
        let mut conventions = HashMap::new();

        for config in registry.list() {
            let convention =
                convention_for(config.date_locale).ok_or_else(|| ConfigError::NoDateConvention {
                    code: config.code.to_string(),
                    locale: config.date_locale.to_string(),
                })?;

            if let Some(lang) = registry.get(config.code) {
                conventions.insert(lang, *convention);
            }
        }

        let default_convention = conventions
            .get(&registry.default_language())
            .copied()
            .ok_or_else(|| ConfigError::NoDateConvention {
                code: registry.default_config().code.to_string(),
                locale: registry.default_config().date_locale.to_string(),
            })?;

        Ok(Self {
            default_convention,
            conventions,
        })
    }

    /// Convention used for a language. A language from a different registry
    /// uses the default language's convention.
    pub fn convention(&self, lang: Language) -> &DateConvention {
        self.conventions
            .get(&lang)
            .unwrap_or(&self.default_convention)
    }

    /// Format a date in the long style of a language
    /// (`January 5, 2024`, `5 de enero de 2024`).
    pub fn format_date(&self, date: NaiveDate, lang: Language) -> String {
        let convention = self.convention(lang);
        Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
            .format_localized(convention.pattern, convention.locale)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageConfig;

    fn formatter() -> DateFormatter {
        DateFormatter::new(LocaleRegistry::builtin()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_english_long() {
        assert_eq!(
            formatter().format_date(date(2024, 1, 5), Language::ENGLISH),
            "January 5, 2024"
        );
    }

    #[test]
    fn test_format_spanish_long() {
        assert_eq!(
            formatter().format_date(date(2024, 1, 5), Language::SPANISH),
            "5 de enero de 2024"
        );
    }

    #[test]
    fn test_format_is_deterministic() {
        let f = formatter();
        let d = date(2023, 12, 31);
        assert_eq!(
            f.format_date(d, Language::SPANISH),
            f.format_date(d, Language::SPANISH)
        );
        assert_eq!(f.format_date(d, Language::ENGLISH), "December 31, 2023");
    }

    #[test]
    fn test_languages_share_underlying_date() {
        let f = formatter();
        let d = date(2024, 7, 14);
        let en = f.format_date(d, Language::ENGLISH);
        let es = f.format_date(d, Language::SPANISH);
        assert!(en.contains("14") && en.contains("2024"));
        assert!(es.contains("14") && es.contains("2024"));
        assert_ne!(en, es);
    }

    #[test]
    fn test_convention_lookup() {
        assert_eq!(convention_for("es-ES").unwrap().locale_id, "es-ES");
        assert!(convention_for("xx-XX").is_none());
        assert_eq!(
            formatter().convention(Language::SPANISH).locale_id,
            "es-ES"
        );
    }

    #[test]
    fn test_unknown_date_locale_fails() {
        let registry = LocaleRegistry::new(vec![LanguageConfig {
            code: "en",
            label: "English",
            name: "English",
            date_locale: "en-ZZ",
            is_default: true,
        }])
        .unwrap();

        assert!(matches!(
            DateFormatter::new(&registry).unwrap_err(),
            ConfigError::NoDateConvention { locale, .. } if locale == "en-ZZ"
        ));
    }
}
