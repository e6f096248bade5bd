//! The recent-history input blob.

use crate::error::HistoryError;
use crate::relationship::{EquivalenceRecord, MigrationRecord, Relationship, RelationshipKind};
use crate::revision::{Column, Revision};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Recent history of a project: both revision columns plus the relationship
/// records between them.
///
/// Revision lists are ordered newest first, as produced by the history
/// endpoint; row 0 is the top of each column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentHistory {
    pub internal_revisions: Vec<Revision>,
    pub public_revisions: Vec<Revision>,
    #[serde(default)]
    pub equivalences: Vec<EquivalenceRecord>,
    #[serde(default)]
    pub exports: Vec<MigrationRecord>,
    #[serde(default)]
    pub imports: Vec<MigrationRecord>,
}

impl RecentHistory {
    /// Parse a recent-history blob from JSON.
    ///
    /// Both revision lists are required; relationship lists default to empty.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let history: RecentHistory = serde_json::from_str(json)?;
        tracing::debug!(
            internal = history.internal_revisions.len(),
            public = history.public_revisions.len(),
            equivalences = history.equivalences.len(),
            exports = history.exports.len(),
            imports = history.imports.len(),
            "parsed recent history"
        );
        Ok(history)
    }

    /// Parse a recent-history blob from a reader, e.g. stdin.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, HistoryError> {
        let history: RecentHistory = serde_json::from_reader(reader)?;
        tracing::debug!(
            internal = history.internal_revisions.len(),
            public = history.public_revisions.len(),
            "read recent history"
        );
        Ok(history)
    }

    /// Serialize back to JSON.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Revisions of one column, in row order.
    pub fn revisions(&self, column: Column) -> &[Revision] {
        match column {
            Column::Internal => &self.internal_revisions,
            Column::Public => &self.public_revisions,
        }
    }

    /// The larger of the two column lengths.
    pub fn row_count(&self) -> usize {
        self.internal_revisions.len().max(self.public_revisions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.internal_revisions.is_empty() && self.public_revisions.is_empty()
    }

    /// Relationships of a single kind, in record order.
    ///
    /// Pending migrations are left out.
    pub fn relationships_of(&self, kind: RelationshipKind) -> Vec<Relationship> {
        match kind {
            RelationshipKind::Equivalence => self
                .equivalences
                .iter()
                .map(EquivalenceRecord::relationship)
                .collect(),
            RelationshipKind::Export => self
                .exports
                .iter()
                .filter_map(|m| m.relationship(RelationshipKind::Export))
                .collect(),
            RelationshipKind::Import => self
                .imports
                .iter()
                .filter_map(|m| m.relationship(RelationshipKind::Import))
                .collect(),
        }
    }

    /// All relationships in paint order: equivalences, exports, imports.
    pub fn relationships(&self) -> Vec<Relationship> {
        RelationshipKind::PAINT_ORDER
            .iter()
            .flat_map(|kind| self.relationships_of(*kind))
            .collect()
    }

    /// Migration records of the given kind (empty for equivalences).
    pub fn migrations(&self, kind: RelationshipKind) -> &[MigrationRecord] {
        match kind {
            RelationshipKind::Export => &self.exports,
            RelationshipKind::Import => &self.imports,
            RelationshipKind::Equivalence => &[],
        }
    }
}
