//! Typed content entities produced by validation.

use crate::content::schema::EntityKind;
use crate::content::validator::Fields;
use crate::error::ValidationError;
use crate::i18n::Language;
use chrono::NaiveDate;
use serde::Serialize;

/// A blog article. Localized articles carry `lang`; siblings in other
/// languages share a `canonical_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub key: String,
    pub title: String,
    pub excerpt: String,
    /// Tag keys, in authored order
    pub tags: Vec<String>,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figcaption: Option<String>,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub thumbnail: Thumbnail,
    pub published_at: NaiveDate,
    pub description: String,
    /// Tag keys, in authored order
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A tag referenced by articles and projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl Article {
    pub(crate) fn from_fields(
        mut fields: Fields,
        body: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key: fields.key().to_string(),
            title: fields.text("title")?,
            excerpt: fields.text("excerpt")?,
            tags: fields.text_list("tags")?,
            date: fields.date("date")?,
            lang: fields.optional_language("lang")?,
            canonical_id: fields.optional_text("canonicalId")?,
            body,
        })
    }
}

impl Project {
    pub(crate) fn from_fields(
        mut fields: Fields,
        body: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut thumbnail = fields.object("thumbnail")?;

        Ok(Self {
            key: fields.key().to_string(),
            title: fields.text("title")?,
            repo_url: fields.optional_text("repoUrl")?,
            thumbnail: Thumbnail {
                src: thumbnail.text("src")?,
                alt: thumbnail.text("alt")?,
                figcaption: thumbnail.optional_text("figcaption")?,
            },
            published_at: fields.date("publishedAt")?,
            description: fields.text("description")?,
            tags: fields.text_list("tags")?,
            lang: fields.optional_language("lang")?,
            canonical_id: fields.optional_text("canonicalId")?,
            body,
        })
    }
}

impl Tag {
    pub(crate) fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            key: fields.key().to_string(),
            label: fields.text("label")?,
            color: fields.text("color")?,
        })
    }
}

/// Any validated entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentEntity {
    Article(Article),
    Project(Project),
    Tag(Tag),
}

impl ContentEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Article(_) => EntityKind::Article,
            Self::Project(_) => EntityKind::Project,
            Self::Tag(_) => EntityKind::Tag,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Article(a) => &a.key,
            Self::Project(p) => &p.key,
            Self::Tag(t) => &t.key,
        }
    }
}

/// Entities with an identifying key.
pub trait Keyed {
    const KIND: EntityKind;

    fn key(&self) -> &str;
}

/// Entities that may be authored per language.
pub trait Localized {
    /// Language of the entity; `None` means language-agnostic.
    fn lang(&self) -> Option<Language>;

    /// Identifier shared by the translations of one logical entity.
    fn canonical_id(&self) -> Option<&str>;

    /// Whether the entity should be listed for a language.
    fn is_visible_in(&self, lang: Language) -> bool {
        self.lang().map_or(true, |own| own == lang)
    }
}

/// Entities ordered by a publication date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> NaiveDate {
        (*self).date()
    }
}

/// Entities that point at other entities by key.
pub trait HasReferences: Keyed {
    /// Each reference field with its target kind and referenced keys.
    fn references(&self) -> Vec<(&'static str, EntityKind, &[String])>;
}

impl Keyed for Article {
    const KIND: EntityKind = EntityKind::Article;

    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn key(&self) -> &str {
        &self.key
    }
}

impl Localized for Article {
    fn lang(&self) -> Option<Language> {
        self.lang
    }

    fn canonical_id(&self) -> Option<&str> {
        self.canonical_id.as_deref()
    }
}

impl Localized for Project {
    fn lang(&self) -> Option<Language> {
        self.lang
    }

    fn canonical_id(&self) -> Option<&str> {
        self.canonical_id.as_deref()
    }
}

impl Dated for Article {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Project {
    fn date(&self) -> NaiveDate {
        self.published_at
    }
}

impl HasReferences for Article {
    fn references(&self) -> Vec<(&'static str, EntityKind, &[String])> {
        vec![("tags", EntityKind::Tag, self.tags.as_slice())]
    }
}

impl HasReferences for Project {
    fn references(&self) -> Vec<(&'static str, EntityKind, &[String])> {
        vec![("tags", EntityKind::Tag, self.tags.as_slice())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::schema::{ARTICLE_SCHEMA, PROJECT_SCHEMA};

    fn article(lang: Option<Language>) -> Article {
        Article {
            key: "hello".to_string(),
            title: "Hello".to_string(),
            excerpt: String::new(),
            tags: vec!["go".to_string()],
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            lang,
            canonical_id: None,
            body: None,
        }
    }

    #[test]
    fn test_language_agnostic_entity_is_visible_everywhere() {
        let a = article(None);
        assert!(a.is_visible_in(Language::ENGLISH));
        assert!(a.is_visible_in(Language::SPANISH));
    }

    #[test]
    fn test_localized_entity_is_visible_in_its_language_only() {
        let a = article(Some(Language::SPANISH));
        assert!(a.is_visible_in(Language::SPANISH));
        assert!(!a.is_visible_in(Language::ENGLISH));
    }

    #[test]
    fn test_reference_fields_follow_schema() {
        let a = article(None);
        let declared: Vec<_> = ARTICLE_SCHEMA.reference_fields().collect();
        let listed: Vec<_> = a
            .references()
            .into_iter()
            .map(|(field, kind, _)| (field, kind))
            .collect();
        assert_eq!(listed, declared);

        let project_declared: Vec<_> = PROJECT_SCHEMA.reference_fields().collect();
        assert_eq!(project_declared, declared);
    }

    #[test]
    fn test_serializes_camel_case_without_empty_options() {
        let json = serde_json::to_value(article(Some(Language::SPANISH))).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["lang"], "es");
        assert!(json.get("canonicalId").is_none());
        assert!(json.get("body").is_none());
    }

    #[test]
    fn test_content_entity_kind_and_key() {
        let entity = ContentEntity::Article(article(None));
        assert_eq!(entity.kind(), EntityKind::Article);
        assert_eq!(entity.key(), "hello");
    }
}
