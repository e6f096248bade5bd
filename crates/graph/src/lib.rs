//! # moe-history-graph
//!
//! Rendering and analysis of a MOE project's recent history.
//!
//! A recent history is two columns of revisions (internal and public, newest
//! first) plus the relationships between them: equivalences, exports and
//! imports. This crate draws that history as a two-column graph and builds a
//! correspondence graph for querying and validating it.
//!
//! ## Features
//!
//! - **Layout**: Place one vertex per revision and one line per relationship
//! - **Surfaces**: Paint onto SVG, a recording surface, or a text table
//! - **Queries**: Find equivalents, exports and imports of a revision
//! - **Validation**: Explain relationships the drawing silently drops
//!
//! ## Example
//!
//! ```
//! use moe_history_graph::{Element, RecentHistory, RevisionGraphRenderer, SvgSurface};
//!
//! let history = RecentHistory::from_json(r#"{
//!     "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
//!     "public_revisions": [{"rev_id": 10}, {"rev_id": 20}],
//!     "equivalences": [
//!         {"internal_revision": {"rev_id": 2}, "public_revision": {"rev_id": 20}}
//!     ]
//! }"#).unwrap();
//!
//! let renderer = RevisionGraphRenderer::with_spacing(100.0, 40.0).unwrap();
//! let scene = renderer.layout(&history);
//! let mut dest: Element<String> = Element::new();
//! renderer.render(&history, SvgSurface::new(scene.width(), scene.height()), &mut dest);
//!
//! assert_eq!(dest.class_name.as_deref(), Some("moe-graph"));
//! assert!(dest.children[0].contains("stroke=\"green\""));
//! ```

mod builder;
mod error;
pub mod export;
mod grid;
mod history;
mod layout;
mod nodes;
mod options;
mod queries;
mod relationship;
pub mod render;
mod renderer;
mod revision;
mod surface;
mod validation;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use builder::HistoryGraphBuilder;
pub use error::{HistoryError, ValidationError};
pub use export::{
    DrawableRepr, EdgeRepr, GraphRepr, NodeRepr, SceneRepr, ValidationErrorRepr,
    ValidationResultRepr,
};
pub use grid::{RenderGrid, RowIndex};
pub use history::RecentHistory;
pub use layout::{Drawable, Geometry, GridPos, Layout, Point, Scene, SceneItem};
pub use nodes::RevisionNode;
pub use options::{EdgeStyle, RenderOptions, RowZeroPolicy, Styles, VertexStyle};
pub use queries::{GraphStats, QueryResult};
pub use relationship::{EquivalenceRecord, MigrationRecord, Relationship, RelationshipKind};
pub use render::{render_ascii, DrawCommand, RecordingSurface, SvgSurface};
pub use renderer::RevisionGraphRenderer;
pub use revision::{Column, RevId, Revision, RevisionRef};
pub use surface::{Destination, Element, Fill, Path, PathSegment, Stroke, Surface};
pub use validation::ValidationResult;

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};

/// A correspondence graph built from a recent history.
///
/// Nodes are revisions from both columns; edges are the relationships whose
/// endpoints both resolved. Equivalence and export edges point from the
/// internal revision to the public one, import edges point the other way.
#[derive(Debug)]
pub struct HistoryGraph {
    /// The underlying directed graph
    graph: DiGraph<RevisionNode, RelationshipKind>,

    /// Index of internal revision nodes by id, in column order
    internal: IndexMap<RevId, NodeIndex>,

    /// Index of public revision nodes by id, in column order
    public: IndexMap<RevId, NodeIndex>,

    /// Relationship endpoints that matched no revision during build
    unresolved: Vec<ValidationError>,
}

impl HistoryGraph {
    /// Build a correspondence graph from a recent history.
    pub fn from_history(history: &RecentHistory) -> Self {
        HistoryGraphBuilder::new().build(history)
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn inner(&self) -> &DiGraph<RevisionNode, RelationshipKind> {
        &self.graph
    }

    /// Get a node by its index.
    pub fn get_node(&self, index: NodeIndex) -> Option<&RevisionNode> {
        self.graph.node_weight(index)
    }

    /// Look up a revision node by column and id.
    pub fn get_revision(&self, column: Column, id: &RevId) -> Option<NodeIndex> {
        self.column_index(column).get(id).copied()
    }

    /// Get all revision ids of a column, in column order.
    pub fn revision_ids(&self, column: Column) -> impl Iterator<Item = &RevId> {
        self.column_index(column).keys()
    }

    /// Relationship endpoints that could not be resolved.
    pub fn unresolved(&self) -> &[ValidationError] {
        &self.unresolved
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn column_index(&self, column: Column) -> &IndexMap<RevId, NodeIndex> {
        match column {
            Column::Internal => &self.internal,
            Column::Public => &self.public,
        }
    }
}
