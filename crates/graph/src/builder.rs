//! Builder for constructing a HistoryGraph from a recent history.

use crate::error::ValidationError;
use crate::history::RecentHistory;
use crate::nodes::RevisionNode;
use crate::relationship::{Relationship, RelationshipKind};
use crate::revision::{Column, RevId, Revision};
use crate::HistoryGraph;
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};

/// Builder for constructing a correspondence graph from a recent history.
pub struct HistoryGraphBuilder {
    graph: DiGraph<RevisionNode, RelationshipKind>,
    internal: IndexMap<RevId, NodeIndex>,
    public: IndexMap<RevId, NodeIndex>,
    unresolved: Vec<ValidationError>,
}

impl HistoryGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            internal: IndexMap::new(),
            public: IndexMap::new(),
            unresolved: Vec::new(),
        }
    }

    /// Build a HistoryGraph from a recent history.
    pub fn build(mut self, history: &RecentHistory) -> HistoryGraph {
        // Phase 1: one node per distinct revision id in each column
        self.add_revisions(Column::Internal, &history.internal_revisions);
        self.add_revisions(Column::Public, &history.public_revisions);

        // Phase 2: one edge per relationship whose endpoints both exist
        for rel in history.relationships() {
            self.add_relationship(&rel);
        }

        tracing::debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            unresolved = self.unresolved.len(),
            "built history graph"
        );

        HistoryGraph {
            graph: self.graph,
            internal: self.internal,
            public: self.public,
            unresolved: self.unresolved,
        }
    }

    fn index(&self, column: Column) -> &IndexMap<RevId, NodeIndex> {
        match column {
            Column::Internal => &self.internal,
            Column::Public => &self.public,
        }
    }

    fn index_mut(&mut self, column: Column) -> &mut IndexMap<RevId, NodeIndex> {
        match column {
            Column::Internal => &mut self.internal,
            Column::Public => &mut self.public,
        }
    }

    /// Add revision nodes for one column. A repeated id keeps its first node
    /// but moves it to the later row.
    fn add_revisions(&mut self, column: Column, revisions: &[Revision]) {
        for (row, revision) in revisions.iter().enumerate() {
            let existing = self.index(column).get(&revision.rev_id).copied();
            if let Some(idx) = existing {
                if let Some(node) = self.graph.node_weight_mut(idx) {
                    node.row = row;
                }
                continue;
            }

            let idx = self.graph.add_node(RevisionNode {
                column,
                rev_id: revision.rev_id.clone(),
                row,
            });
            self.index_mut(column).insert(revision.rev_id.clone(), idx);
        }
    }

    fn add_relationship(&mut self, rel: &Relationship) {
        let internal = self.resolve(rel, Column::Internal);
        let public = self.resolve(rel, Column::Public);
        let (Some(internal), Some(public)) = (internal, public) else {
            return;
        };

        match rel.kind {
            RelationshipKind::Equivalence | RelationshipKind::Export => {
                self.graph.add_edge(internal, public, rel.kind);
            }
            RelationshipKind::Import => {
                self.graph.add_edge(public, internal, rel.kind);
            }
        }
    }

    fn resolve(&mut self, rel: &Relationship, column: Column) -> Option<NodeIndex> {
        let id = rel.endpoint(column);
        let found = self.index(column).get(id).copied();
        if found.is_none() {
            self.unresolved.push(ValidationError::UnresolvedEndpoint {
                kind: rel.kind,
                column,
                rev_id: id.clone(),
            });
        }
        found
    }
}

impl Default for HistoryGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
