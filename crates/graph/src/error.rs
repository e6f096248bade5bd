//! Error types for loading, laying out and validating recent histories.

use crate::relationship::RelationshipKind;
use crate::revision::{Column, RevId};
use thiserror::Error;

/// Errors that can occur before a history reaches the renderer.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The recent-history blob is not valid JSON or has the wrong shape
    #[error("Invalid recent history: {0}")]
    Json(#[from] serde_json::Error),

    /// A layout spacing is zero, negative or not finite
    #[error("Invalid {name}: {value} (must be a positive number)")]
    InvalidSpacing { name: &'static str, value: f64 },

    /// Reading an input or options file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems found in a recent history that affect what gets drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The same id appears more than once in a column
    DuplicateRevision {
        column: Column,
        rev_id: RevId,
        /// Every row the id occupies; the last one wins
        rows: Vec<usize>,
    },

    /// A relationship endpoint is missing from its column
    UnresolvedEndpoint {
        kind: RelationshipKind,
        column: Column,
        rev_id: RevId,
    },

    /// A relationship touches the first row of a column and is not drawn
    HiddenByFirstRow {
        kind: RelationshipKind,
        internal: RevId,
        public: RevId,
    },

    /// An export or import has no `submitted_as` revision yet
    PendingMigration {
        kind: RelationshipKind,
        up_to: RevId,
    },
}

impl ValidationError {
    /// Get a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            ValidationError::DuplicateRevision {
                column,
                rev_id,
                rows,
            } => {
                let rows: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
                format!(
                    "Revision '{}' appears more than once in the {} column (rows {})",
                    rev_id,
                    column,
                    rows.join(", ")
                )
            }
            ValidationError::UnresolvedEndpoint {
                kind,
                column,
                rev_id,
            } => {
                format!(
                    "{} references revision '{}' which is not in the {} column",
                    capitalize(kind.label()),
                    rev_id,
                    column
                )
            }
            ValidationError::HiddenByFirstRow {
                kind,
                internal,
                public,
            } => {
                format!(
                    "{} between '{}' and '{}' touches the first row and is not drawn",
                    capitalize(kind.label()),
                    internal,
                    public
                )
            }
            ValidationError::PendingMigration { kind, up_to } => {
                format!(
                    "{} up to '{}' has not been submitted yet",
                    capitalize(kind.label()),
                    up_to
                )
            }
        }
    }

    /// A stable snake_case name for the error variant.
    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationError::DuplicateRevision { .. } => "duplicate_revision",
            ValidationError::UnresolvedEndpoint { .. } => "unresolved_endpoint",
            ValidationError::HiddenByFirstRow { .. } => "hidden_by_first_row",
            ValidationError::PendingMigration { .. } => "pending_migration",
        }
    }

    /// The relationship kind involved, if any.
    pub fn kind(&self) -> Option<RelationshipKind> {
        match self {
            ValidationError::DuplicateRevision { .. } => None,
            ValidationError::UnresolvedEndpoint { kind, .. }
            | ValidationError::HiddenByFirstRow { kind, .. }
            | ValidationError::PendingMigration { kind, .. } => Some(*kind),
        }
    }

    /// Check if this error means an edge will be missing from the drawing.
    pub fn hides_edge(&self) -> bool {
        matches!(
            self,
            ValidationError::UnresolvedEndpoint { .. } | ValidationError::HiddenByFirstRow { .. }
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
