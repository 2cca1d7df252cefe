//! Schema descriptions for each content entity kind.
//!
//! A schema is data: an ordered list of fields, each with a semantic type
//! and a required flag. The generic validator walks these lists in order,
//! so the first reported defect is deterministic.

use serde::Serialize;
use std::fmt;

/// The kinds of content the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Article,
    Project,
    Tag,
}

impl EntityKind {
    /// Every kind, in the order collections are processed.
    pub const ALL: [EntityKind; 3] = [EntityKind::Tag, EntityKind::Article, EntityKind::Project];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Project => "project",
            Self::Tag => "tag",
        }
    }

    /// Name of the content directory holding this kind.
    pub fn collection_name(self) -> &'static str {
        match self {
            Self::Article => "articles",
            Self::Project => "projects",
            Self::Tag => "tags",
        }
    }

    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Self::Article => &ARTICLE_SCHEMA,
            Self::Project => &PROJECT_SCHEMA,
            Self::Tag => &TAG_SCHEMA,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A string (may be empty)
    Text,
    /// A date, coerced from `YYYY-MM-DD`, RFC 3339, RFC 2822 or epoch millis
    Date,
    /// An array of strings
    TextList,
    /// An array of keys of another kind
    References(EntityKind),
    /// A nested object with its own fields
    Object(&'static [FieldSpec]),
    /// A supported language code
    Language,
}

impl FieldType {
    /// Human-readable name used in validation errors.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Date => "date",
            Self::TextList => "array of strings",
            Self::References(EntityKind::Article) => "array of article keys",
            Self::References(EntityKind::Project) => "array of project keys",
            Self::References(EntityKind::Tag) => "array of tag keys",
            Self::Object(_) => "object",
            Self::Language => "supported language code",
        }
    }
}

/// One field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

/// The full schema of one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Fields holding references, with their target kind.
    pub fn reference_fields(&self) -> impl Iterator<Item = (&'static str, EntityKind)> + '_ {
        self.fields.iter().filter_map(|spec| match spec.ty {
            FieldType::References(target) => Some((spec.name, target)),
            _ => None,
        })
    }
}

const THUMBNAIL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("src", FieldType::Text),
    FieldSpec::required("alt", FieldType::Text),
    FieldSpec::optional("figcaption", FieldType::Text),
];

pub static ARTICLE_SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Article,
    fields: &[
        FieldSpec::required("title", FieldType::Text),
        FieldSpec::required("excerpt", FieldType::Text),
        FieldSpec::required("tags", FieldType::References(EntityKind::Tag)),
        FieldSpec::required("date", FieldType::Date),
        FieldSpec::optional("lang", FieldType::Language),
        FieldSpec::optional("canonicalId", FieldType::Text),
    ],
};

pub static PROJECT_SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Project,
    fields: &[
        FieldSpec::required("title", FieldType::Text),
        FieldSpec::optional("repoUrl", FieldType::Text),
        FieldSpec::required("thumbnail", FieldType::Object(THUMBNAIL_FIELDS)),
        FieldSpec::required("publishedAt", FieldType::Date),
        FieldSpec::required("description", FieldType::Text),
        FieldSpec::required("tags", FieldType::References(EntityKind::Tag)),
        FieldSpec::optional("lang", FieldType::Language),
        FieldSpec::optional("canonicalId", FieldType::Text),
    ],
};

pub static TAG_SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Tag,
    fields: &[
        FieldSpec::required("label", FieldType::Text),
        FieldSpec::required("color", FieldType::Text),
    ],
};
