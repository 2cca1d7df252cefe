//! Error taxonomy for content validation, reference resolution and
//! startup configuration.
//!
//! `ValidationError` and `ReferenceError` are per-record and recoverable:
//! the caller decides whether to skip the record or abort the build.
//! `ConfigError` is raised while building the registry, dictionary store or
//! date formatter and must keep the system from becoming ready.

use crate::content::EntityKind;
use thiserror::Error;

/// A raw content record did not match its entity schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{kind} '{key}': expected an object of fields, found {found}")]
    NotAnObject {
        kind: EntityKind,
        key: String,
        found: &'static str,
    },

    #[error("{kind} '{key}': missing required field '{field}' (expected {expected})")]
    MissingField {
        kind: EntityKind,
        key: String,
        field: String,
        expected: &'static str,
    },

    #[error("{kind} '{key}': field '{field}' expected {expected}, found {found}")]
    WrongType {
        kind: EntityKind,
        key: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{kind} '{key}': field '{field}' cannot be read as a date: {value}")]
    InvalidDate {
        kind: EntityKind,
        key: String,
        field: String,
        value: String,
    },

    #[error("{kind} '{key}': field '{field}' holds unsupported language '{value}'")]
    UnsupportedLanguage {
        kind: EntityKind,
        key: String,
        field: String,
        value: String,
    },

    #[error("{kind} '{key}': duplicate key, an earlier record already uses it")]
    DuplicateKey { kind: EntityKind, key: String },
}

impl ValidationError {
    /// Kind of the rejected record.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::NotAnObject { kind, .. }
            | Self::MissingField { kind, .. }
            | Self::WrongType { kind, .. }
            | Self::InvalidDate { kind, .. }
            | Self::UnsupportedLanguage { kind, .. }
            | Self::DuplicateKey { kind, .. } => *kind,
        }
    }

    /// Identifying key of the rejected record.
    pub fn key(&self) -> &str {
        match self {
            Self::NotAnObject { key, .. }
            | Self::MissingField { key, .. }
            | Self::WrongType { key, .. }
            | Self::InvalidDate { key, .. }
            | Self::UnsupportedLanguage { key, .. }
            | Self::DuplicateKey { key, .. } => key,
        }
    }

    /// Dotted path of the offending field, when the defect is field-level.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::WrongType { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::UnsupportedLanguage { field, .. } => Some(field),
            Self::NotAnObject { .. } | Self::DuplicateKey { .. } => None,
        }
    }
}

/// A declared reference points at a key missing from the target index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} '{key}': field '{field}' references missing {target} '{missing}'")]
pub struct ReferenceError {
    /// Kind of the referencing entity
    pub kind: EntityKind,
    /// Key of the referencing entity
    pub key: String,
    /// Reference field on the referencing entity
    pub field: &'static str,
    /// Kind the reference should resolve to
    pub target: EntityKind,
    /// The key that could not be found
    pub missing: String,
}

/// Startup configuration is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("language registry declares no default language")]
    NoDefaultLanguage,

    #[error("language registry declares several default languages: {}", codes.join(", "))]
    MultipleDefaultLanguages { codes: Vec<String> },

    #[error("default language '{code}' is not a supported language")]
    DefaultNotSupported { code: String },

    #[error("language '{code}' is declared more than once")]
    DuplicateLanguage { code: String },

    #[error("no dictionary registered for supported language '{code}'")]
    MissingDictionary { code: String },

    #[error("dictionary registered for unsupported language '{code}'")]
    UnsupportedDictionary { code: String },

    #[error("dictionary for '{code}' registered more than once")]
    DuplicateDictionary { code: String },

    #[error("dictionary for '{code}' has an empty entry '{key}'")]
    EmptyEntry { code: String, key: String },

    #[error("dictionary for '{code}' declares date locale '{found}' but the registry expects '{expected}'")]
    LocaleMismatch {
        code: String,
        expected: String,
        found: String,
    },

    #[error("no date formatting convention for locale '{locale}' (language '{code}')")]
    NoDateConvention { code: String, locale: String },

    #[error("failed to load dictionary file {path}: {reason}")]
    DictionaryFile { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field_and_type() {
        let error = ValidationError::MissingField {
            kind: EntityKind::Article,
            key: "hello".to_string(),
            field: "title".to_string(),
            expected: "string",
        };

        let message = error.to_string();
        assert!(message.contains("article 'hello'"));
        assert!(message.contains("'title'"));
        assert!(message.contains("string"));
        assert_eq!(error.field(), Some("title"));
        assert_eq!(error.key(), "hello");
        assert_eq!(error.kind(), EntityKind::Article);
    }

    #[test]
    fn test_duplicate_key_has_no_field() {
        let error = ValidationError::DuplicateKey {
            kind: EntityKind::Tag,
            key: "go".to_string(),
        };
        assert_eq!(error.field(), None);
        assert!(error.to_string().contains("duplicate key"));
    }

    #[test]
    fn test_reference_error_names_missing_key() {
        let error = ReferenceError {
            kind: EntityKind::Project,
            key: "diployable".to_string(),
            field: "tags",
            target: EntityKind::Tag,
            missing: "golang".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("project 'diployable'"));
        assert!(message.contains("missing tag 'golang'"));
    }
}
