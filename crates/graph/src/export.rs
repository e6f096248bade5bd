//! Serialization types for scene and graph export.
//!
//! This module contains the data structures used to serialize scenes,
//! correspondence graphs and validation results for external consumption
//! (JSON, WASM, etc.).

use crate::error::ValidationError;
use crate::layout::{Drawable, Geometry, Scene};
use crate::revision::{Column, RevId};
use crate::{HistoryGraph, ValidationResult};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

// ============================================================================
// Scene representations
// ============================================================================

/// Serializable representation of a laid-out scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRepr {
    pub width: f64,
    pub height: f64,
    /// Drawables in paint order
    pub drawables: Vec<DrawableRepr>,
}

impl From<&Scene> for SceneRepr {
    fn from(scene: &Scene) -> Self {
        Self {
            width: scene.width(),
            height: scene.height(),
            drawables: scene
                .items()
                .iter()
                .map(|item| DrawableRepr::new(&item.drawable, item.geometry))
                .collect(),
        }
    }
}

/// Serializable representation of one drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableRepr {
    /// `vertex`, `equivalence`, `export` or `import`
    pub drawable_type: String,
    pub column: Option<Column>,
    pub row: Option<usize>,
    pub internal_row: Option<usize>,
    pub public_row: Option<usize>,
    pub geometry: Geometry,
}

impl DrawableRepr {
    pub fn new(drawable: &Drawable, geometry: Geometry) -> Self {
        match drawable {
            Drawable::Vertex(pos) => DrawableRepr {
                drawable_type: "vertex".to_string(),
                column: Some(pos.column),
                row: Some(pos.row),
                internal_row: None,
                public_row: None,
                geometry,
            },
            Drawable::Edge { kind, from, to } => DrawableRepr {
                drawable_type: kind.label().to_string(),
                column: None,
                row: None,
                internal_row: Some(from.row),
                public_row: Some(to.row),
                geometry,
            },
        }
    }
}

// ============================================================================
// Graph representations
// ============================================================================

/// Serializable representation of a HistoryGraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRepr {
    pub nodes: Vec<NodeRepr>,
    pub edges: Vec<EdgeRepr>,
}

impl From<&HistoryGraph> for GraphRepr {
    fn from(graph: &HistoryGraph) -> Self {
        let inner = graph.inner();

        let nodes: Vec<NodeRepr> = inner
            .node_indices()
            .filter_map(|idx| {
                graph.get_node(idx).map(|node| NodeRepr {
                    id: idx.index(),
                    column: node.column,
                    rev_id: node.rev_id.clone(),
                    row: node.row,
                })
            })
            .collect();

        let edges: Vec<EdgeRepr> = inner
            .edge_references()
            .map(|e| EdgeRepr {
                source: e.source().index(),
                target: e.target().index(),
                edge_type: e.weight().label().to_string(),
            })
            .collect();

        Self { nodes, edges }
    }
}

/// Serializable representation of a RevisionNode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRepr {
    pub id: usize,
    pub column: Column,
    pub rev_id: RevId,
    pub row: usize,
}

/// Serializable representation of a relationship edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub source: usize,
    pub target: usize,
    pub edge_type: String,
}

// ============================================================================
// Validation representations
// ============================================================================

/// Serializable representation of ValidationResult.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResultRepr {
    pub errors: Vec<ValidationErrorRepr>,
    pub warnings: Vec<ValidationErrorRepr>,
    pub is_valid: bool,
}

impl From<&ValidationResult> for ValidationResultRepr {
    fn from(result: &ValidationResult) -> Self {
        Self {
            errors: result
                .errors
                .iter()
                .map(ValidationErrorRepr::from)
                .collect(),
            warnings: result
                .warnings
                .iter()
                .map(ValidationErrorRepr::from)
                .collect(),
            is_valid: result.is_ok(),
        }
    }
}

/// Serializable representation of ValidationError.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorRepr {
    pub error_type: String,
    pub message: String,
    pub relationship: Option<String>,
}

impl From<&ValidationError> for ValidationErrorRepr {
    fn from(error: &ValidationError) -> Self {
        Self {
            error_type: error.error_type().to_string(),
            message: error.message(),
            relationship: error.kind().map(|k| k.label().to_string()),
        }
    }
}
