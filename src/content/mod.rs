//! Content module: schemas, validation, references and the loading
//! pipeline for articles, projects and tags.
//!
//! Loading is two-phase. Every raw record is validated first; only then is
//! the tag index built and references resolved against it.

pub mod collection;
pub mod entity;
pub mod loader;
pub mod reference;
pub mod schema;
pub mod validator;

use serde_json::Value;

pub use collection::{ContentError, ContentSet, ResolvedArticle, ResolvedProject};
pub use entity::{Article, ContentEntity, Project, Tag, Thumbnail};
pub use reference::{dedup_by_key, resolve_references, Resolved, TargetIndex};
pub use schema::EntityKind;
pub use validator::{coerce_date, ContentValidator};

/// One unvalidated record as supplied by a content source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Identifying key (slug or path relative to the collection)
    pub key: String,
    /// Loosely typed field map
    pub fields: Value,
    /// Markdown body, for records loaded from markdown files
    pub body: Option<String>,
}

impl RawRecord {
    pub fn new(key: impl Into<String>, fields: Value) -> Self {
        Self {
            key: key.into(),
            fields,
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Raw records of every kind, each in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawContent {
    pub articles: Vec<RawRecord>,
    pub projects: Vec<RawRecord>,
    pub tags: Vec<RawRecord>,
}

impl RawContent {
    pub fn records(&self, kind: EntityKind) -> &[RawRecord] {
        match kind {
            EntityKind::Article => &self.articles,
            EntityKind::Project => &self.projects,
            EntityKind::Tag => &self.tags,
        }
    }

    pub fn records_mut(&mut self, kind: EntityKind) -> &mut Vec<RawRecord> {
        match kind {
            EntityKind::Article => &mut self.articles,
            EntityKind::Project => &mut self.projects,
            EntityKind::Tag => &mut self.tags,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len() + self.projects.len() + self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
