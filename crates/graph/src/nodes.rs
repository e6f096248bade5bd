//! Node type for the correspondence graph.

use crate::revision::{Column, RevId};
use serde::{Deserialize, Serialize};

/// A revision placed in the correspondence graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevisionNode {
    pub column: Column,
    pub rev_id: RevId,
    /// Row in the column; the last occurrence when the id is repeated
    pub row: usize,
}

impl RevisionNode {
    /// Get a human-readable label for this node.
    pub fn label(&self) -> String {
        format!("{}:{}", self.column, self.rev_id)
    }

    pub fn is_internal(&self) -> bool {
        self.column == Column::Internal
    }

    pub fn is_public(&self) -> bool {
        self.column == Column::Public
    }
}
