//! The content pipeline: validate every record, index tags, then resolve
//! references.
//!
//! Accepted entities keep their input order. Rejected records never appear
//! in the output collections; they are collected as [`ContentError`]s.

use crate::content::entity::{Article, Dated, HasReferences, Keyed, Localized, Project, Tag};
use crate::content::reference::{dedup_by_key, resolve_references, Resolved, TargetIndex};
use crate::content::validator::ContentValidator;
use crate::content::{EntityKind, RawContent, RawRecord};
use crate::error::{ReferenceError, ValidationError};
use crate::i18n::Language;
use crate::report::ContentReport;
use thiserror::Error;
use tracing::{debug, info};

/// Why a record was left out of the content set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl ContentError {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Validation(e) => e.kind(),
            Self::Reference(e) => e.kind,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Validation(e) => e.key(),
            Self::Reference(e) => &e.key,
        }
    }
}

pub type ResolvedArticle = Resolved<Article, Tag>;
pub type ResolvedProject = Resolved<Project, Tag>;

/// Every accepted entity, with references resolved.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub articles: Vec<ResolvedArticle>,
    pub projects: Vec<ResolvedProject>,
    pub tags: Vec<Tag>,
    errors: Vec<ContentError>,
}

impl ContentSet {
    /// Run the full pipeline over raw content.
    ///
    /// Tags are validated and indexed before any reference is resolved.
    pub fn build(raw: &RawContent, validator: &ContentValidator<'_>) -> Self {
        let mut errors = Vec::new();

        // Phase 1: validate every kind
        let tags = validate_all(&raw.tags, |r| validator.validate_tag(r), &mut errors);
        let articles = validate_all(&raw.articles, |r| validator.validate_article(r), &mut errors);
        let projects = validate_all(&raw.projects, |r| validator.validate_project(r), &mut errors);

        // Phase 2: drop duplicate keys, then index targets
        let tags = dedup(tags, &mut errors);
        let tag_index = TargetIndex::build(tags.iter().cloned());

        // Phase 3: resolve references
        let articles = resolve_all(dedup(articles, &mut errors), &tag_index, &mut errors);
        let projects = resolve_all(dedup(projects, &mut errors), &tag_index, &mut errors);

        info!(
            "Content set: {} articles, {} projects, {} tags, {} rejected",
            articles.len(),
            projects.len(),
            tags.len(),
            errors.len()
        );

        Self {
            articles,
            projects,
            tags,
            errors,
        }
    }

    /// Records that were rejected, in the order they were found.
    pub fn errors(&self) -> &[ContentError] {
        &self.errors
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Articles listed for a language: its own plus language-agnostic ones.
    pub fn articles_for(&self, lang: Language) -> Vec<&ResolvedArticle> {
        for_language(&self.articles, lang)
    }

    /// Projects listed for a language: its own plus language-agnostic ones.
    pub fn projects_for(&self, lang: Language) -> Vec<&ResolvedProject> {
        for_language(&self.projects, lang)
    }

    /// Articles for a language, newest first.
    pub fn latest_articles(&self, lang: Language, limit: usize) -> Vec<&ResolvedArticle> {
        let mut articles = self.articles_for(lang);
        sort_by_date_desc(&mut articles);
        articles.truncate(limit);
        articles
    }

    /// All localized versions of one logical article.
    pub fn translations_of(&self, canonical_id: &str) -> Vec<&ResolvedArticle> {
        self.articles
            .iter()
            .filter(|a| a.canonical_id() == Some(canonical_id))
            .collect()
    }

    /// Summary counts for reporting.
    pub fn report(&self, raw: &RawContent) -> ContentReport {
        ContentReport::new(
            &[
                (EntityKind::Article, raw.articles.len(), self.articles.len()),
                (EntityKind::Project, raw.projects.len(), self.projects.len()),
                (EntityKind::Tag, raw.tags.len(), self.tags.len()),
            ],
            &self.errors,
        )
    }
}

/// Keep the entities visible in `lang`, preserving order.
pub fn for_language<T: Localized>(items: &[T], lang: Language) -> Vec<&T> {
    items.iter().filter(|item| item.is_visible_in(lang)).collect()
}

/// Sort newest first. Stable: entities with equal dates keep input order.
pub fn sort_by_date_desc<T: Dated>(items: &mut [T]) {
    items.sort_by(|a, b| b.date().cmp(&a.date()));
}

fn validate_all<T, F>(records: &[RawRecord], validate: F, errors: &mut Vec<ContentError>) -> Vec<T>
where
    F: Fn(&RawRecord) -> Result<T, ValidationError>,
{
    let mut accepted = Vec::with_capacity(records.len());
    for record in records {
        match validate(record) {
            Ok(entity) => accepted.push(entity),
            Err(e) => {
                debug!("Rejected record: {}", e);
                errors.push(e.into());
            }
        }
    }
    accepted
}

fn resolve_all<E>(
    entities: Vec<E>,
    index: &TargetIndex<Tag>,
    errors: &mut Vec<ContentError>,
) -> Vec<Resolved<E, Tag>>
where
    E: HasReferences,
{
    let mut resolved = Vec::with_capacity(entities.len());
    for entity in entities {
        match resolve_references(entity, index) {
            Ok(r) => resolved.push(r),
            Err(e) => {
                debug!("Unresolved reference: {}", e);
                errors.push(e.into());
            }
        }
    }
    resolved
}

/// Drop duplicate keys, moving the duplicates into the error list.
fn dedup<T: Keyed>(items: Vec<T>, errors: &mut Vec<ContentError>) -> Vec<T> {
    let (kept, duplicates) = dedup_by_key(items);
    errors.extend(duplicates.into_iter().map(ContentError::from));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleRegistry;
    use serde_json::json;

    fn tag(key: &str) -> RawRecord {
        RawRecord::new(key, json!({ "label": key.to_uppercase(), "color": "#00ADD8" }))
    }

    fn article(key: &str, date: &str, tags: &[&str], lang: Option<&str>) -> RawRecord {
        let mut fields = json!({
            "title": key,
            "excerpt": "",
            "tags": tags,
            "date": date,
        });
        if let Some(lang) = lang {
            fields["lang"] = json!(lang);
        }
        RawRecord::new(key, fields)
    }

    fn build(raw: &RawContent) -> ContentSet {
        ContentSet::build(raw, &ContentValidator::new(LocaleRegistry::builtin()))
    }

    // ==================== Pipeline Tests ====================

    #[test]
    fn test_build_resolves_tags() {
        let raw = RawContent {
            articles: vec![article("hello", "2024-01-05", &["go"], None)],
            projects: vec![],
            tags: vec![tag("go")],
        };

        let set = build(&raw);
        assert!(set.is_clean());
        assert_eq!(set.articles.len(), 1);
        assert_eq!(set.articles[0].related[0].label, "GO");
    }

    #[test]
    fn test_build_excludes_rejected_and_keeps_order() {
        let raw = RawContent {
            articles: vec![
                article("first", "2024-01-01", &["go"], None),
                RawRecord::new("broken", json!({ "title": "no date" })),
                article("dangling", "2024-01-02", &["golang"], None),
                article("last", "2024-01-03", &[], None),
            ],
            projects: vec![],
            tags: vec![tag("go")],
        };

        let set = build(&raw);
        let keys: Vec<_> = set.articles.iter().map(|a| a.entity.key.as_str()).collect();
        assert_eq!(keys, vec!["first", "last"]);

        assert_eq!(set.errors().len(), 2);
        assert!(matches!(set.errors()[0], ContentError::Validation(_)));
        assert!(matches!(
            &set.errors()[1],
            ContentError::Reference(e) if e.missing == "golang"
        ));
    }

    #[test]
    fn test_invalid_tag_breaks_its_references() {
        let raw = RawContent {
            articles: vec![article("hello", "2024-01-05", &["go"], None)],
            projects: vec![],
            tags: vec![RawRecord::new("go", json!({ "label": "Go" }))],
        };

        let set = build(&raw);
        assert!(set.articles.is_empty());
        assert_eq!(set.errors().len(), 2);
        assert_eq!(set.errors()[0].kind(), EntityKind::Tag);
        assert_eq!(set.errors()[1].kind(), EntityKind::Article);
    }

    #[test]
    fn test_duplicate_keys_are_reported() {
        let raw = RawContent {
            articles: vec![
                article("hello", "2024-01-05", &[], None),
                article("hello", "2024-02-05", &[], None),
            ],
            projects: vec![],
            tags: vec![tag("go"), tag("go")],
        };

        let set = build(&raw);
        assert_eq!(set.tags.len(), 1);
        assert_eq!(set.articles.len(), 1);
        assert_eq!(set.articles[0].entity.date.to_string(), "2024-01-05");
        assert_eq!(set.errors().len(), 2);
        assert!(set
            .errors()
            .iter()
            .all(|e| matches!(e, ContentError::Validation(ValidationError::DuplicateKey { .. }))));
    }

    // ==================== Query Tests ====================

    #[test]
    fn test_articles_for_language() {
        let raw = RawContent {
            articles: vec![
                article("en/hello", "2024-01-05", &[], Some("en")),
                article("es/hola", "2024-01-05", &[], Some("es")),
                article("shared", "2024-01-06", &[], None),
            ],
            projects: vec![],
            tags: vec![],
        };

        let set = build(&raw);
        let es: Vec<_> = set
            .articles_for(Language::SPANISH)
            .iter()
            .map(|a| a.entity.key.as_str())
            .collect();
        assert_eq!(es, vec!["es/hola", "shared"]);
    }

    #[test]
    fn test_latest_articles_sorted_newest_first() {
        let raw = RawContent {
            articles: vec![
                article("old", "2023-05-01", &[], None),
                article("new", "2024-05-01", &[], None),
                article("mid-a", "2024-01-01", &[], None),
                article("mid-b", "2024-01-01", &[], None),
            ],
            projects: vec![],
            tags: vec![],
        };

        let set = build(&raw);
        let latest: Vec<_> = set
            .latest_articles(Language::ENGLISH, 3)
            .iter()
            .map(|a| a.entity.key.as_str())
            .collect();
        assert_eq!(latest, vec!["new", "mid-a", "mid-b"]);
    }

    #[test]
    fn test_translations_of() {
        let mut en = article("en/hello", "2024-01-05", &[], Some("en"));
        en.fields["canonicalId"] = json!("hello");
        let mut es = article("es/hola", "2024-01-05", &[], Some("es"));
        es.fields["canonicalId"] = json!("hello");
        let other = article("other", "2024-01-05", &[], None);

        let raw = RawContent {
            articles: vec![en, es, other],
            projects: vec![],
            tags: vec![],
        };

        let set = build(&raw);
        let langs: Vec<_> = set
            .translations_of("hello")
            .iter()
            .map(|a| a.entity.lang)
            .collect();
        assert_eq!(langs, vec![Some(Language::ENGLISH), Some(Language::SPANISH)]);
    }

    #[test]
    fn test_report_counts() {
        let raw = RawContent {
            articles: vec![
                article("ok", "2024-01-05", &[], None),
                RawRecord::new("bad", json!({})),
            ],
            projects: vec![],
            tags: vec![tag("go")],
        };

        let set = build(&raw);
        let report = set.report(&raw);
        assert_eq!(report.total_accepted(), 2);
        assert_eq!(report.total_rejected(), 1);
    }
}
