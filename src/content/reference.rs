//! Cross-entity reference resolution.
//!
//! Resolution is the second phase of loading: a [`TargetIndex`] is built
//! from every validated entity of the target kind, and only then are
//! references looked up in it. A missing key fails the referencing entity.

use crate::content::entity::{Dated, HasReferences, Keyed, Localized};
use crate::error::{ReferenceError, ValidationError};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Validated entities of one kind, by key.
#[derive(Debug, Clone)]
pub struct TargetIndex<T> {
    entries: HashMap<String, T>,
}

impl<T: Keyed + Clone> TargetIndex<T> {
    /// Index entities by key.
    ///
    /// Keys are expected to be unique already; run [`dedup_by_key`] first
    /// to report duplicates. Should one slip through, the first entity with
    /// a key is kept.
    pub fn build<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut entries = HashMap::new();
        for entity in entities {
            entries.entry(entity.key().to_string()).or_insert(entity);
        }

        debug!("Indexed {} {} entries", entries.len(), T::KIND);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drop every entity whose key was already seen.
///
/// The first entity with a key wins; each later one is returned as a
/// duplicate-key error, in input order.
pub fn dedup_by_key<T: Keyed>(items: Vec<T>) -> (Vec<T>, Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    let mut duplicates = Vec::new();

    for item in items {
        if seen.insert(item.key().to_string()) {
            kept.push(item);
        } else {
            duplicates.push(ValidationError::DuplicateKey {
                kind: T::KIND,
                key: item.key().to_string(),
            });
        }
    }

    (kept, duplicates)
}

/// An entity whose references all resolved.
///
/// Keeps the raw keys on `entity` and the resolved targets in `related`,
/// in reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<E, T> {
    #[serde(flatten)]
    pub entity: E,
    pub related: Vec<T>,
}

/// Resolve every reference of `entity` that targets the index's kind.
///
/// # Errors
/// Returns a [`ReferenceError`] naming the first key absent from `index`.
pub fn resolve_references<E, T>(
    entity: E,
    index: &TargetIndex<T>,
) -> Result<Resolved<E, T>, ReferenceError>
where
    E: HasReferences,
    T: Keyed + Clone,
{
    let mut related = Vec::new();

    for (field, target, keys) in entity.references() {
        if target != T::KIND {
            continue;
        }

        for key in keys {
            match index.get(key) {
                Some(found) => related.push(found.clone()),
                None => {
                    return Err(ReferenceError {
                        kind: E::KIND,
                        key: entity.key().to_string(),
                        field,
                        target,
                        missing: key.clone(),
                    })
                }
            }
        }
    }

    Ok(Resolved { entity, related })
}

impl<E: Keyed, T> Keyed for Resolved<E, T> {
    const KIND: crate::content::EntityKind = E::KIND;

    fn key(&self) -> &str {
        self.entity.key()
    }
}

impl<E: Localized, T> Localized for Resolved<E, T> {
    fn lang(&self) -> Option<crate::i18n::Language> {
        self.entity.lang()
    }

    fn canonical_id(&self) -> Option<&str> {
        self.entity.canonical_id()
    }
}

impl<E: Dated, T> Dated for Resolved<E, T> {
    fn date(&self) -> NaiveDate {
        self.entity.date()
    }
}
