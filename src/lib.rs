//! Content and localization layer for a bilingual static personal site.
//!
//! - [`i18n`]: locale registry, path-based language resolution, UI
//!   dictionaries and localized date formatting
//! - [`content`]: schema validation and reference resolution for articles,
//!   projects and tags
//! - [`report`]: summaries of a content load

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod report;
