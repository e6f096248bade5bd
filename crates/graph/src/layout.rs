//! Two-column layout of a recent history.
//!
//! Layout is a pure function of the history and the [`RenderOptions`]: it
//! builds the [`RenderGrid`], emits one vertex per revision and one edge per
//! relationship whose endpoints resolve, and attaches pixel geometry to each.
//! Painting the result is the job of [`crate::RevisionGraphRenderer`].

use crate::grid::RenderGrid;
use crate::history::RecentHistory;
use crate::options::RenderOptions;
use crate::relationship::RelationshipKind;
use crate::revision::Column;
use serde::{Deserialize, Serialize};

/// A pixel position on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted vertically by `dy`.
    pub fn offset_y(self, dy: f64) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

/// A cell of the two-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub column: Column,
    pub row: usize,
}

impl GridPos {
    pub fn new(column: Column, row: usize) -> Self {
        Self { column, row }
    }
}

/// Something to paint, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Drawable {
    Vertex(GridPos),
    Edge {
        kind: RelationshipKind,
        from: GridPos,
        to: GridPos,
    },
}

impl Drawable {
    pub fn is_vertex(&self) -> bool {
        matches!(self, Drawable::Vertex(_))
    }

    pub fn edge_kind(&self) -> Option<RelationshipKind> {
        match self {
            Drawable::Edge { kind, .. } => Some(*kind),
            Drawable::Vertex(_) => None,
        }
    }
}

/// Pixel geometry of a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Geometry {
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
}

/// A drawable together with where it lands on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneItem {
    pub drawable: Drawable,
    pub geometry: Geometry,
}

/// The laid-out contents of one render, in paint order.
///
/// Paint order is: internal vertices, public vertices, equivalence edges,
/// export edges, import edges. Within a group, input order is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    items: Vec<SceneItem>,
    width: f64,
    height: f64,
}

impl Scene {
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn drawables(&self) -> impl Iterator<Item = &Drawable> {
        self.items.iter().map(|item| &item.drawable)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(|item| item.drawable.is_vertex())
    }

    pub fn edges(&self) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(|item| !item.drawable.is_vertex())
    }

    pub fn edges_of(&self, kind: RelationshipKind) -> impl Iterator<Item = &SceneItem> {
        self.items
            .iter()
            .filter(move |item| item.drawable.edge_kind() == Some(kind))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Places revisions and relationships on the grid.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    options: &'a RenderOptions,
}

impl<'a> Layout<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// The pixel center of a grid cell.
    pub fn position(&self, pos: GridPos) -> Point {
        let x = match pos.column {
            Column::Internal => self.options.column_offset,
            Column::Public => self.options.column_offset + self.options.column_spacing,
        };
        let y = self.options.row_offset() + pos.row as f64 * self.options.row_spacing;
        Point::new(x, y)
    }

    /// Width and height that contain every vertex and offset edge.
    ///
    /// The configured width is a minimum; the surface grows when the columns
    /// are spaced wider than it. Height runs from the top to the last row
    /// plus half a row of padding, or more when vertices or edge offsets
    /// reach further.
    pub fn surface_size(&self, rows: usize) -> (f64, f64) {
        let options = self.options;
        let styles = &options.styles;
        let reach = [&styles.equivalence, &styles.export, &styles.import]
            .iter()
            .map(|edge| edge.offset.abs())
            .fold(styles.vertex.radius, f64::max);

        let content_width =
            options.column_offset + options.column_spacing + options.column_offset.max(reach);
        let width = options.width.unwrap_or(0.0).max(content_width);

        let height = match rows {
            0 => 0.0,
            rows => {
                let last_row = options.row_offset() + (rows - 1) as f64 * options.row_spacing;
                last_row + (options.row_spacing / 2.0).max(reach)
            }
        };

        (width, height)
    }

    /// Lay out a whole history.
    pub fn scene(&self, history: &RecentHistory) -> Scene {
        let grid = RenderGrid::build(history);
        let styles = &self.options.styles;
        let mut items = Vec::with_capacity(
            history.internal_revisions.len()
                + history.public_revisions.len()
                + history.equivalences.len()
                + history.exports.len()
                + history.imports.len(),
        );

        for column in Column::ALL {
            for row in 0..history.revisions(column).len() {
                let pos = GridPos::new(column, row);
                items.push(SceneItem {
                    drawable: Drawable::Vertex(pos),
                    geometry: Geometry::Circle {
                        center: self.position(pos),
                        radius: styles.vertex.radius,
                    },
                });
            }
        }

        for kind in RelationshipKind::PAINT_ORDER {
            let offset = styles.edge(kind).offset;
            for rel in history.relationships_of(kind) {
                let (Some(internal_row), Some(public_row)) = (
                    grid.row(Column::Internal, &rel.internal),
                    grid.row(Column::Public, &rel.public),
                ) else {
                    continue;
                };
                if !self.options.row_zero.accepts(internal_row, public_row) {
                    continue;
                }

                let from = GridPos::new(Column::Internal, internal_row);
                let to = GridPos::new(Column::Public, public_row);
                items.push(SceneItem {
                    drawable: Drawable::Edge { kind, from, to },
                    geometry: Geometry::Line {
                        from: self.position(from).offset_y(offset),
                        to: self.position(to).offset_y(offset),
                    },
                });
            }
        }

        let (width, height) = self.surface_size(grid.height());

        tracing::debug!(
            vertices = history.internal_revisions.len() + history.public_revisions.len(),
            drawables = items.len(),
            width,
            height,
            "laid out recent history"
        );

        Scene {
            items,
            width,
            height,
        }
    }
}
