//! Painting a laid-out history onto a surface.

use crate::error::HistoryError;
use crate::history::RecentHistory;
use crate::layout::{Drawable, Geometry, Layout, Scene};
use crate::options::RenderOptions;
use crate::render::SvgSurface;
use crate::surface::{Destination, Element, Surface};

/// Draws the recent-history graph: one vertex per revision in each column
/// and one line per relationship whose endpoints resolve.
///
/// The renderer keeps no state between calls. Rendering twice into the same
/// destination appends a second surface; clear the destination first if a
/// replacement is wanted.
#[derive(Debug, Clone, Default)]
pub struct RevisionGraphRenderer {
    options: RenderOptions,
}

impl RevisionGraphRenderer {
    /// Create a renderer, rejecting unusable spacings.
    pub fn new(options: RenderOptions) -> Result<Self, HistoryError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a renderer with default styles and the given spacings.
    pub fn with_spacing(column_spacing: f64, row_spacing: f64) -> Result<Self, HistoryError> {
        Self::new(RenderOptions::new(column_spacing, row_spacing))
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Lay out a history without painting it.
    pub fn layout(&self, history: &RecentHistory) -> Scene {
        Layout::new(&self.options).scene(history)
    }

    /// Paint every item of `scene` onto `surface`, in scene order.
    pub fn paint<S: Surface>(&self, scene: &Scene, surface: &mut S) {
        let styles = &self.options.styles;
        for item in scene.items() {
            match (item.drawable, item.geometry) {
                (Drawable::Vertex(_), Geometry::Circle { center, radius }) => {
                    surface.draw_circle(
                        center.x,
                        center.y,
                        radius,
                        &styles.vertex.stroke,
                        Some(&styles.vertex.fill),
                    );
                }
                (Drawable::Edge { kind, .. }, Geometry::Line { from, to }) => {
                    let mut path = surface.create_path();
                    path.move_to(from.x, from.y).line_to(to.x, to.y);
                    surface.draw_path(&path, &styles.edge(kind).stroke, None);
                }
                (drawable, geometry) => unreachable!(
                    "scenes are only built by Layout, which pairs vertices with circles \
                     and edges with lines; got {:?} with {:?}",
                    drawable,
                    geometry
                ),
            }
        }
    }

    /// Lay out `history`, paint it onto `surface` and attach the surface to
    /// `dest`, tagging `dest` with the configured class name.
    pub fn render<S, D>(&self, history: &RecentHistory, mut surface: S, dest: &mut D)
    where
        S: Surface,
        D: Destination<Child = S::Output>,
    {
        let scene = self.layout(history);
        self.paint(&scene, &mut surface);
        surface.render(dest);
        dest.set_class_name(&self.options.class_name);

        tracing::debug!(
            vertices = scene.vertex_count(),
            edges = scene.edge_count(),
            class_name = %self.options.class_name,
            "rendered revision graph"
        );
    }

    /// Render into a fresh SVG surface sized to the scene and return the
    /// `<svg>` markup.
    pub fn to_svg(&self, history: &RecentHistory) -> String {
        let scene = self.layout(history);
        let mut surface = SvgSurface::new(scene.width(), scene.height());
        self.paint(&scene, &mut surface);

        let mut dest: Element<String> = Element::new();
        surface.render(&mut dest);
        dest.children.pop().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::{EquivalenceRecord, MigrationRecord};
    use crate::render::{DrawCommand, RecordingSurface};
    use crate::revision::{Revision, RevisionRef};
    use crate::surface::{PathSegment, Stroke};
    use pretty_assertions::assert_eq;

    fn sample() -> RecentHistory {
        RecentHistory {
            internal_revisions: [1u64, 2, 3].iter().map(|id| Revision::new(*id)).collect(),
            public_revisions: [10u64, 20].iter().map(|id| Revision::new(*id)).collect(),
            equivalences: vec![EquivalenceRecord {
                internal_revision: RevisionRef::new(3u64),
                public_revision: RevisionRef::new(20u64),
            }],
            exports: vec![MigrationRecord::new(3u64, 20u64)],
            imports: vec![MigrationRecord::new(20u64, 3u64)],
        }
    }

    fn renderer() -> RevisionGraphRenderer {
        RevisionGraphRenderer::with_spacing(100.0, 40.0).unwrap()
    }

    fn recorded(history: &RecentHistory) -> (Element<Vec<DrawCommand>>, Vec<DrawCommand>) {
        let mut dest: Element<Vec<DrawCommand>> = Element::new();
        renderer().render(history, RecordingSurface::new(), &mut dest);
        let commands = dest.last_child().cloned().unwrap_or_default();
        (dest, commands)
    }

    #[test]
    fn test_render_tags_destination() {
        let (dest, _) = recorded(&sample());
        assert_eq!(dest.class_name.as_deref(), Some("moe-graph"));
        assert_eq!(dest.children.len(), 1);
    }

    #[test]
    fn test_render_draw_calls() {
        let (_, commands) = recorded(&sample());
        assert_eq!(commands.len(), 8);
        assert!(commands[..5].iter().all(DrawCommand::is_circle));

        let colors: Vec<&str> = commands[5..]
            .iter()
            .map(|c| c.stroke().color.as_str())
            .collect();
        assert_eq!(colors, vec!["green", "blue", "red"]);

        match &commands[6] {
            DrawCommand::Path { path, stroke, fill } => {
                assert_eq!(
                    path.segments(),
                    &[
                        PathSegment::MoveTo { x: 10.0, y: 105.0 },
                        PathSegment::LineTo { x: 110.0, y: 65.0 },
                    ]
                );
                assert_eq!(stroke, &Stroke::new(1.0, "blue"));
                assert!(fill.is_none());
            }
            other => panic!("expected export path, got {:?}", other),
        }
    }

    #[test]
    fn test_vertex_style() {
        let (_, commands) = recorded(&sample());
        match &commands[0] {
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                fill,
                ..
            } => {
                assert_eq!((*cx, *cy, *radius), (10.0, 20.0, 4.0));
                assert_eq!(fill.as_ref().map(|f| f.color.as_str()), Some("#c3d9ff"));
            }
            other => panic!("expected vertex circle, got {:?}", other),
        }
    }

    #[test]
    fn test_render_twice_appends() {
        let history = sample();
        let r = renderer();
        let mut dest: Element<Vec<DrawCommand>> = Element::new();
        r.render(&history, RecordingSurface::new(), &mut dest);
        r.render(&history, RecordingSurface::new(), &mut dest);
        assert_eq!(dest.children.len(), 2);
        assert_eq!(dest.children[0], dest.children[1]);
    }

    #[test]
    fn test_rejects_non_positive_spacing() {
        assert!(RevisionGraphRenderer::with_spacing(100.0, 0.0).is_err());
        assert!(RevisionGraphRenderer::with_spacing(-1.0, 10.0).is_err());
    }

    #[test]
    fn test_to_svg() {
        let svg = renderer().to_svg(&sample());
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains(r#"<path d="M10 100 L110 60" stroke="green""#));
    }
}
