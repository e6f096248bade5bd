//! Query operations on the correspondence graph.

use crate::relationship::RelationshipKind;
use crate::revision::{Column, RevId};
use crate::HistoryGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// Result of a query operation.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// The nodes matching the query
    pub nodes: Vec<NodeIndex>,
}

impl QueryResult {
    /// Check if the query returned any results.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of results.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl HistoryGraph {
    /// Find every revision on the other side that is equivalent to `id`.
    pub fn find_equivalents(&self, column: Column, id: &RevId) -> QueryResult {
        let Some(idx) = self.get_revision(column, id) else {
            return QueryResult { nodes: vec![] };
        };

        let nodes = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .filter(|e| matches!(e.weight(), RelationshipKind::Equivalence))
            .map(|e| e.target())
            .chain(
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .filter(|e| matches!(e.weight(), RelationshipKind::Equivalence))
                    .map(|e| e.source()),
            )
            .collect();

        QueryResult { nodes }
    }

    /// Find the public revisions an internal revision was exported as.
    pub fn find_exports_from(&self, internal_id: &RevId) -> QueryResult {
        self.find_by_kind(
            Column::Internal,
            internal_id,
            RelationshipKind::Export,
            Direction::Outgoing,
        )
    }

    /// Find the public revisions that were imported as an internal revision.
    pub fn find_imports_into(&self, internal_id: &RevId) -> QueryResult {
        self.find_by_kind(
            Column::Internal,
            internal_id,
            RelationshipKind::Import,
            Direction::Incoming,
        )
    }

    /// Find every revision related to `id`, with the kind of relationship.
    pub fn find_related(&self, column: Column, id: &RevId) -> Vec<(NodeIndex, RelationshipKind)> {
        let Some(idx) = self.get_revision(column, id) else {
            return vec![];
        };

        let outgoing = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), *e.weight()));
        let incoming = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), *e.weight()));

        let mut related: Vec<_> = outgoing.chain(incoming).collect();
        related.sort_by_key(|(idx, kind)| {
            let row = self.graph.node_weight(*idx).map(|n| n.row).unwrap_or(usize::MAX);
            (row, kind.label())
        });
        related
    }

    /// The newest equivalence: the one whose internal revision sits highest
    /// in the column (ties broken by the public row).
    ///
    /// Returns `(internal, public)` node indices.
    pub fn latest_equivalence(&self) -> Option<(NodeIndex, NodeIndex)> {
        self.graph
            .edge_references()
            .filter(|e| matches!(e.weight(), RelationshipKind::Equivalence))
            .map(|e| (e.source(), e.target()))
            .min_by_key(|(internal, public)| {
                (
                    self.graph.node_weight(*internal).map(|n| n.row),
                    self.graph.node_weight(*public).map(|n| n.row),
                )
            })
    }

    /// Get summary statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            internal_revisions: self.internal.len(),
            public_revisions: self.public.len(),
            unresolved: self.unresolved.len(),
            ..GraphStats::default()
        };

        for edge in self.graph.edge_references() {
            match edge.weight() {
                RelationshipKind::Equivalence => stats.equivalences += 1,
                RelationshipKind::Export => stats.exports += 1,
                RelationshipKind::Import => stats.imports += 1,
            }
        }

        stats
    }

    fn find_by_kind(
        &self,
        column: Column,
        id: &RevId,
        kind: RelationshipKind,
        direction: Direction,
    ) -> QueryResult {
        let Some(idx) = self.get_revision(column, id) else {
            return QueryResult { nodes: vec![] };
        };

        let nodes = self
            .graph
            .edges_directed(idx, direction)
            .filter(|e| *e.weight() == kind)
            .map(|e| match direction {
                Direction::Outgoing => e.target(),
                Direction::Incoming => e.source(),
            })
            .collect();

        QueryResult { nodes }
    }
}

/// Summary statistics about the graph.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub internal_revisions: usize,
    pub public_revisions: usize,
    pub equivalences: usize,
    pub exports: usize,
    pub imports: usize,
    /// Relationship endpoints that matched no revision
    pub unresolved: usize,
}

impl GraphStats {
    /// Total number of revisions.
    pub fn total_revisions(&self) -> usize {
        self.internal_revisions + self.public_revisions
    }

    /// Total number of relationship edges.
    pub fn total_edges(&self) -> usize {
        self.equivalences + self.exports + self.imports
    }
}
