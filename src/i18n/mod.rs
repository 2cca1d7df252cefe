//! Internationalization (i18n): supported languages, path-based language
//! resolution, UI dictionaries and locale-aware date formatting.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported languages and the default
//! - `language`: `Language` values, always members of a registry
//! - `resolver`: request path → `Language`, and localized path building
//! - `dictionary`: the typed, fixed-shape UI string tables
//! - `store`: one dictionary per language, checked at startup
//! - `format`: per-language date formatting conventions
//!
//! Registry, store and formatter are built once and only read afterwards;
//! they are `Send + Sync` and can be shared freely.
//!
//! # Example
//!
//! ```rust,ignore
//! use site_content::i18n::{DictionaryStore, LanguageResolver, LocaleRegistry};
//!
//! let registry = LocaleRegistry::builtin();
//! let store = DictionaryStore::builtin(registry)?;
//! let lang = LanguageResolver::new(registry).resolve("/es/blog/my-post");
//! let back = &store.get(lang).post.back_to_blog;
//! ```

pub mod dictionary;
mod format;
mod language;
mod registry;
mod resolver;
mod store;

pub use dictionary::Dictionary;
pub use format::{convention_for, DateConvention, DateFormatter};
pub use language::Language;
pub use registry::{LanguageConfig, LocaleRegistry};
pub use resolver::{build_localized_path, LanguageResolver};
pub use store::DictionaryStore;
