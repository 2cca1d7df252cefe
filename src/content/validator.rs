//! Content schema validation.
//!
//! One generic routine checks a raw record against an [`EntitySchema`]:
//! required fields must be present, every present field must have its
//! declared type, dates are coerced to [`NaiveDate`] and language fields
//! must name a supported language. The first defect rejects the whole
//! record; nothing is defaulted or dropped.

use crate::content::entity::{Article, ContentEntity, Project, Tag};
use crate::content::schema::{
    EntityKind, EntitySchema, FieldSpec, FieldType, ARTICLE_SCHEMA, PROJECT_SCHEMA, TAG_SCHEMA,
};
use crate::content::RawRecord;
use crate::error::ValidationError;
use crate::i18n::{Language, LocaleRegistry};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A field value after validation and coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    TextList(Vec<String>),
    References(Vec<String>),
    Object(Fields),
    Language(Language),
}

/// Validated fields of one record (or nested object), by field name.
///
/// Only present fields are stored; absent optional fields have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    kind: EntityKind,
    key: String,
    prefix: String,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Fields {
    fn new(kind: EntityKind, key: &str, prefix: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
            prefix: prefix.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Key of the record these fields belong to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn missing(&self, name: &str, expected: FieldType) -> ValidationError {
        ValidationError::MissingField {
            kind: self.kind,
            key: self.key.clone(),
            field: join_path(&self.prefix, name),
            expected: expected.describe(),
        }
    }

    pub(crate) fn text(&mut self, name: &str) -> Result<String, ValidationError> {
        self.optional_text(name)?
            .ok_or_else(|| self.missing(name, FieldType::Text))
    }

    pub(crate) fn optional_text(&mut self, name: &str) -> Result<Option<String>, ValidationError> {
        match self.values.remove(name) {
            Some(FieldValue::Text(value)) => Ok(Some(value)),
            None => Ok(None),
            Some(_) => Err(self.missing(name, FieldType::Text)),
        }
    }

    pub(crate) fn date(&mut self, name: &str) -> Result<NaiveDate, ValidationError> {
        match self.values.remove(name) {
            Some(FieldValue::Date(value)) => Ok(value),
            _ => Err(self.missing(name, FieldType::Date)),
        }
    }

    pub(crate) fn text_list(&mut self, name: &str) -> Result<Vec<String>, ValidationError> {
        match self.values.remove(name) {
            Some(FieldValue::TextList(value)) | Some(FieldValue::References(value)) => Ok(value),
            _ => Err(self.missing(name, FieldType::TextList)),
        }
    }

    pub(crate) fn object(&mut self, name: &str) -> Result<Fields, ValidationError> {
        match self.values.remove(name) {
            Some(FieldValue::Object(value)) => Ok(value),
            _ => Err(self.missing(name, FieldType::Object(&[]))),
        }
    }

    pub(crate) fn optional_language(
        &mut self,
        name: &str,
    ) -> Result<Option<Language>, ValidationError> {
        match self.values.remove(name) {
            Some(FieldValue::Language(value)) => Ok(Some(value)),
            None => Ok(None),
            Some(_) => Err(self.missing(name, FieldType::Language)),
        }
    }
}

/// Validates raw records against the schema of their kind.
#[derive(Debug, Clone, Copy)]
pub struct ContentValidator<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> ContentValidator<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Validate a record and build the typed entity.
    pub fn validate(
        &self,
        kind: EntityKind,
        raw: &RawRecord,
    ) -> Result<ContentEntity, ValidationError> {
        let fields = self.check_record(kind.schema(), raw)?;
        let body = raw.body.clone();

        Ok(match kind {
            EntityKind::Article => ContentEntity::Article(Article::from_fields(fields, body)?),
            EntityKind::Project => ContentEntity::Project(Project::from_fields(fields, body)?),
            EntityKind::Tag => ContentEntity::Tag(Tag::from_fields(fields)?),
        })
    }

    pub fn validate_article(&self, raw: &RawRecord) -> Result<Article, ValidationError> {
        let fields = self.check_record(&ARTICLE_SCHEMA, raw)?;
        Article::from_fields(fields, raw.body.clone())
    }

    pub fn validate_project(&self, raw: &RawRecord) -> Result<Project, ValidationError> {
        let fields = self.check_record(&PROJECT_SCHEMA, raw)?;
        Project::from_fields(fields, raw.body.clone())
    }

    pub fn validate_tag(&self, raw: &RawRecord) -> Result<Tag, ValidationError> {
        let fields = self.check_record(&TAG_SCHEMA, raw)?;
        Tag::from_fields(fields)
    }

    /// Check a raw record against a schema without building an entity.
    pub fn check_record(
        &self,
        schema: &EntitySchema,
        raw: &RawRecord,
    ) -> Result<Fields, ValidationError> {
        match &raw.fields {
            Value::Object(map) => self.check_fields(schema.kind, &raw.key, "", schema.fields, map),
            other => Err(ValidationError::NotAnObject {
                kind: schema.kind,
                key: raw.key.clone(),
                found: json_type(other),
            }),
        }
    }

    fn check_fields(
        &self,
        kind: EntityKind,
        key: &str,
        prefix: &str,
        specs: &'static [FieldSpec],
        map: &Map<String, Value>,
    ) -> Result<Fields, ValidationError> {
        let mut fields = Fields::new(kind, key, prefix);

        for spec in specs {
            let path = join_path(prefix, spec.name);
            match map.get(spec.name) {
                None | Some(Value::Null) if spec.required => {
                    return Err(ValidationError::MissingField {
                        kind,
                        key: key.to_string(),
                        field: path,
                        expected: spec.ty.describe(),
                    });
                }
                None | Some(Value::Null) => continue,
                Some(value) => {
                    let checked = self.check_value(kind, key, &path, spec.ty, value)?;
                    fields.values.insert(spec.name, checked);
                }
            }
        }

        Ok(fields)
    }

    fn check_value(
        &self,
        kind: EntityKind,
        key: &str,
        path: &str,
        ty: FieldType,
        value: &Value,
    ) -> Result<FieldValue, ValidationError> {
        let wrong_type = |field: String, expected: &'static str, found: &Value| {
            ValidationError::WrongType {
                kind,
                key: key.to_string(),
                field,
                expected,
                found: json_type(found),
            }
        };

        match ty {
            FieldType::Text => match value {
                Value::String(s) => Ok(FieldValue::Text(s.clone())),
                other => Err(wrong_type(path.to_string(), ty.describe(), other)),
            },
            FieldType::Date => match value {
                Value::String(_) | Value::Number(_) => {
                    coerce_date(value)
                        .map(FieldValue::Date)
                        .ok_or_else(|| ValidationError::InvalidDate {
                            kind,
                            key: key.to_string(),
                            field: path.to_string(),
                            value: value.to_string(),
                        })
                }
                other => Err(wrong_type(path.to_string(), ty.describe(), other)),
            },
            FieldType::TextList | FieldType::References(_) => {
                let Value::Array(items) = value else {
                    return Err(wrong_type(path.to_string(), ty.describe(), value));
                };

                let mut strings = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => strings.push(s.clone()),
                        other => {
                            return Err(wrong_type(format!("{}[{}]", path, i), "string", other))
                        }
                    }
                }

                Ok(match ty {
                    FieldType::References(_) => FieldValue::References(strings),
                    _ => FieldValue::TextList(strings),
                })
            }
            FieldType::Object(specs) => match value {
                Value::Object(map) => self
                    .check_fields(kind, key, path, specs, map)
                    .map(FieldValue::Object),
                other => Err(wrong_type(path.to_string(), ty.describe(), other)),
            },
            FieldType::Language => match value {
                Value::String(code) => self.registry.get(code).map(FieldValue::Language).ok_or_else(
                    || ValidationError::UnsupportedLanguage {
                        kind,
                        key: key.to_string(),
                        field: path.to_string(),
                        value: code.clone(),
                    },
                ),
                other => Err(wrong_type(path.to_string(), ty.describe(), other)),
            },
        }
    }
}

/// Coerce a serialized date into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 and RFC 2822 strings (converted to UTC)
/// and integer Unix timestamps in milliseconds.
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                return Some(date);
            }
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc).date_naive());
            }
            if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
                return Some(dt.with_timezone(&Utc).date_naive());
            }
            None
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
