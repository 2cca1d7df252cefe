//! Content load reporting.
//!
//! A [`ContentReport`] summarizes one pipeline run: per-kind record counts,
//! acceptance rates and every rejection with its reason. It serializes to
//! JSON for the CLI.

use crate::content::{ContentError, EntityKind};
use serde::Serialize;

/// Counts for one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCounts {
    pub kind: EntityKind,

    /// Raw records supplied
    pub total: usize,

    /// Entities that made it into the content set
    pub accepted: usize,

    /// Records left out
    pub rejected: usize,

    /// Accepted records as a percentage (0-100)
    pub acceptance_rate: f64,
}

/// One rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub kind: EntityKind,
    pub key: String,
    pub reason: String,
}

/// Report for a whole content set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentReport {
    pub kinds: Vec<KindCounts>,
    pub rejected: Vec<RejectedRecord>,
}

impl ContentReport {
    /// Build a report from `(kind, total, accepted)` counts and the errors
    /// collected while loading.
    pub fn new(counts: &[(EntityKind, usize, usize)], errors: &[ContentError]) -> Self {
        let kinds = counts
            .iter()
            .map(|&(kind, total, accepted)| {
                let acceptance_rate = if total > 0 {
                    (accepted as f64 / total as f64) * 100.0
                } else {
                    0.0
                };

                KindCounts {
                    kind,
                    total,
                    accepted,
                    rejected: total.saturating_sub(accepted),
                    acceptance_rate,
                }
            })
            .collect();

        let rejected = errors
            .iter()
            .map(|e| RejectedRecord {
                kind: e.kind(),
                key: e.key().to_string(),
                reason: e.to_string(),
            })
            .collect();

        Self { kinds, rejected }
    }

    pub fn total_accepted(&self) -> usize {
        self.kinds.iter().map(|k| k.accepted).sum()
    }

    pub fn total_rejected(&self) -> usize {
        self.kinds.iter().map(|k| k.rejected).sum()
    }

    pub fn counts(&self, kind: EntityKind) -> Option<&KindCounts> {
        self.kinds.iter().find(|k| k.kind == kind)
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
