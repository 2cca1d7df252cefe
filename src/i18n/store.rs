//! Dictionary store: one complete dictionary per supported language.
//!
//! The store is built once at startup and is read-only afterwards. Building
//! it checks that the dictionaries cover exactly the registry's languages,
//! contain no empty entries and agree with the registry on date locales.
//! Key shape needs no check here: every dictionary is a [`Dictionary`], so
//! the type fixes the keys and JSON overrides with missing or extra keys
//! fail to deserialize.

use crate::error::ConfigError;
use crate::i18n::dictionary::builtin_dictionary;
use crate::i18n::{Dictionary, Language, LocaleRegistry};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct DictionaryStore {
    default_language: Language,
    default_dictionary: Dictionary,
    others: HashMap<Language, Dictionary>,
}

impl DictionaryStore {
    /// Build a store from explicit dictionaries.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] when a supported language has no
    /// dictionary, a dictionary is given for an unsupported or repeated
    /// language, an entry is empty, or `locale.date`
    /// disagrees with the registry.
    pub fn new(
        registry: &LocaleRegistry,
        dictionaries: Vec<(Language, Dictionary)>,
    ) -> Result<Self, ConfigError> {
        let mut by_language: HashMap<Language, Dictionary> = HashMap::new();

        for (lang, dictionary) in dictionaries {
            let Some(config) = registry.config(lang) else {
                return Err(ConfigError::UnsupportedDictionary {
                    code: lang.code().to_string(),
                });
            };

            check_entries(lang, &dictionary)?;

            if dictionary.locale.date != config.date_locale {
                return Err(ConfigError::LocaleMismatch {
                    code: lang.code().to_string(),
                    expected: config.date_locale.to_string(),
                    found: dictionary.locale.date.to_string(),
                });
            }

            if by_language.insert(lang, dictionary).is_some() {
                return Err(ConfigError::DuplicateDictionary {
                    code: lang.code().to_string(),
                });
            }
        }

        for lang in registry.languages() {
            if !by_language.contains_key(&lang) {
                return Err(ConfigError::MissingDictionary {
                    code: lang.code().to_string(),
                });
            }
        }

        let default_language = registry.default_language();
        let Some(default_dictionary) = by_language.remove(&default_language) else {
            return Err(ConfigError::MissingDictionary {
                code: default_language.code().to_string(),
            });
        };

        Ok(Self {
            default_language,
            default_dictionary,
            others: by_language,
        })
    }

    /// Build a store from the dictionaries shipped with the crate.
    pub fn builtin(registry: &LocaleRegistry) -> Result<Self, ConfigError> {
        Self::load(registry, None)
    }

    /// Build a store, preferring `<dir>/<code>.json` over the built-in
    /// dictionary for each supported language.
    ///
    /// # Errors
    /// Fails on an unreadable or malformed override file, on a supported
    /// language with neither an override nor a built-in dictionary, and on
    /// every inconsistency [`DictionaryStore::new`] rejects.
    pub fn load(registry: &LocaleRegistry, dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut dictionaries = Vec::new();

        for lang in registry.languages() {
            let override_path = dir.map(|d| d.join(format!("{}.json", lang.code())));

            let dictionary = match override_path {
                Some(path) if path.exists() => {
                    info!("Loading {} dictionary from {}", lang, path.display());
                    Dictionary::from_json_file(&path)?
                }
                _ => match builtin_dictionary(lang.code()) {
                    Some(dictionary) => {
                        debug!("Using built-in {} dictionary", lang);
                        dictionary.clone()
                    }
                    None => {
                        return Err(ConfigError::MissingDictionary {
                            code: lang.code().to_string(),
                        })
                    }
                },
            };

            dictionaries.push((lang, dictionary));
        }

        Self::new(registry, dictionaries)
    }

    /// Get the dictionary for a language.
    ///
    /// Every language of the registry the store was built from has its own
    /// dictionary. A language from a different registry gets the default
    /// dictionary as a whole; entries are never mixed across languages.
    pub fn get(&self, lang: Language) -> &Dictionary {
        self.others.get(&lang).unwrap_or(&self.default_dictionary)
    }

    /// Language whose dictionary backs lookups for foreign languages.
    pub fn default_language(&self) -> Language {
        self.default_language
    }
}

fn check_entries(lang: Language, dictionary: &Dictionary) -> Result<(), ConfigError> {
    match dictionary
        .entries()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        Some((key, _)) => Err(ConfigError::EmptyEntry {
            code: lang.code().to_string(),
            key: key.to_string(),
        }),
        None => Ok(()),
    }
}
