//! End-to-end rendering of recent-history blobs.

use moe_history_graph::{
    Column, DrawCommand, Drawable, Element, Geometry, GridPos, HistoryGraph, Point, RecentHistory,
    RecordingSurface, RelationshipKind, RenderOptions, RevId, RevisionGraphRenderer,
    RowZeroPolicy, SvgSurface,
};
use pretty_assertions::assert_eq;

fn three_by_two(equivalence_internal: u64) -> RecentHistory {
    RecentHistory::from_json(&format!(
        r#"{{
            "internal_revisions": [{{"rev_id": 1}}, {{"rev_id": 2}}, {{"rev_id": 3}}],
            "public_revisions": [{{"rev_id": 10}}, {{"rev_id": 20}}],
            "equivalences": [
                {{"internal_revision": {{"rev_id": {}}}, "public_revision": {{"rev_id": 20}}}}
            ],
            "exports": [],
            "imports": []
        }}"#,
        equivalence_internal
    ))
    .unwrap()
}

fn renderer() -> RevisionGraphRenderer {
    RevisionGraphRenderer::with_spacing(100.0, 40.0).unwrap()
}

fn lines(history: &RecentHistory) -> Vec<(RelationshipKind, Point, Point)> {
    renderer()
        .layout(history)
        .edges()
        .filter_map(|item| match (item.drawable, item.geometry) {
            (Drawable::Edge { kind, .. }, Geometry::Line { from, to }) => Some((kind, from, to)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_equivalence_between_inner_rows() {
    let edges = lines(&three_by_two(3));
    assert_eq!(
        edges,
        vec![(
            RelationshipKind::Equivalence,
            Point::new(10.0, 100.0),
            Point::new(110.0, 60.0)
        )]
    );
}

#[test]
fn test_equivalence_on_first_row_is_skipped() {
    assert!(lines(&three_by_two(1)).is_empty());
}

#[test]
fn test_vertex_counts_and_positions() {
    let history = three_by_two(3);
    let scene = renderer().layout(&history);

    let vertices: Vec<(GridPos, Point)> = scene
        .vertices()
        .filter_map(|item| match (item.drawable, item.geometry) {
            (Drawable::Vertex(pos), Geometry::Circle { center, .. }) => Some((pos, center)),
            _ => None,
        })
        .collect();

    assert_eq!(vertices.len(), 5);
    for (pos, center) in &vertices {
        assert_eq!(center.y, 20.0 + pos.row as f64 * 40.0);
        let expected_x = match pos.column {
            Column::Internal => 10.0,
            Column::Public => 110.0,
        };
        assert_eq!(center.x, expected_x);
    }
    assert_eq!(vertices[2].0, GridPos::new(Column::Internal, 2));
    assert_eq!(vertices[3].0, GridPos::new(Column::Public, 0));
}

#[test]
fn test_unknown_ids_are_dropped_silently() {
    let history = RecentHistory::from_json(
        r#"{
        "internal_revisions": [{"rev_id": "a"}, {"rev_id": "b"}],
        "public_revisions": [{"rev_id": "x"}, {"rev_id": "y"}],
        "exports": [
            {"up_to_revision": {"rev_id": "ghost"}, "submitted_as": {"rev_id": "y"}},
            {"up_to_revision": {"rev_id": "b"}, "submitted_as": {"rev_id": "y"}}
        ],
        "imports": [
            {"up_to_revision": {"rev_id": "y"}, "submitted_as": {"rev_id": "b"}},
            {"up_to_revision": {"rev_id": "b"}, "submitted_as": {"rev_id": "y"}}
        ]
    }"#,
    )
    .unwrap();

    let edges = lines(&history);
    // The second import names its columns backwards and resolves nowhere.
    assert_eq!(
        edges,
        vec![
            (
                RelationshipKind::Export,
                Point::new(10.0, 65.0),
                Point::new(110.0, 65.0)
            ),
            (
                RelationshipKind::Import,
                Point::new(10.0, 55.0),
                Point::new(110.0, 55.0)
            ),
        ]
    );
}

#[test]
fn test_resolve_policy_draws_first_row() {
    let history = three_by_two(1);
    let options = RenderOptions::new(100.0, 40.0).with_row_zero(RowZeroPolicy::Resolve);
    let scene = RevisionGraphRenderer::new(options).unwrap().layout(&history);
    let edge = scene.edges().next().map(|item| item.geometry);
    assert_eq!(
        edge,
        Some(Geometry::Line {
            from: Point::new(10.0, 20.0),
            to: Point::new(110.0, 60.0),
        })
    );
}

#[test]
fn test_svg_destination() {
    let history = three_by_two(3);
    let r = renderer();
    let scene = r.layout(&history);

    let mut dest: Element<String> = Element::new();
    r.render(&history, SvgSurface::new(scene.width(), scene.height()), &mut dest);

    let html = dest.to_html();
    assert!(html.starts_with(r#"<div class="moe-graph"><svg"#));
    assert!(html.contains(r#"<path d="M10 100 L110 60" stroke="green" stroke-width="1" fill="none"/>"#));
    assert_eq!(html.matches("<circle").count(), 5);
}

#[test]
fn test_paint_order_over_same_rows() {
    let history = RecentHistory::from_json(
        r#"{
        "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
        "public_revisions": [{"rev_id": 10}, {"rev_id": 20}],
        "imports": [{"up_to_revision": {"rev_id": 20}, "submitted_as": {"rev_id": 2}}],
        "exports": [{"up_to_revision": {"rev_id": 2}, "submitted_as": {"rev_id": 20}}],
        "equivalences": [
            {"internal_revision": {"rev_id": 2}, "public_revision": {"rev_id": 20}}
        ]
    }"#,
    )
    .unwrap();

    let mut dest: Element<Vec<DrawCommand>> = Element::new();
    renderer().render(&history, RecordingSurface::new(), &mut dest);
    let commands = dest.last_child().cloned().unwrap_or_default();

    let strokes: Vec<&str> = commands
        .iter()
        .filter(|c| !c.is_circle())
        .map(|c| c.stroke().color.as_str())
        .collect();
    assert_eq!(strokes, vec!["green", "blue", "red"]);
}

#[test]
fn test_graph_and_drawing_disagree_on_first_row() {
    let history = three_by_two(1);
    let graph = HistoryGraph::from_history(&history);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(renderer().layout(&history).edge_count(), 0);

    let internal = graph.get_revision(Column::Internal, &RevId::from(1u64)).unwrap();
    let result = graph.find_equivalents(Column::Internal, &RevId::from("1"));
    assert_eq!(result.len(), 1);
    assert_eq!(graph.get_node(internal).map(|n| n.row), Some(0));
}

#[test]
fn test_svg_viewbox_fits_wide_columns() {
    let history = RecentHistory::from_json(
        r#"{
        "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
        "public_revisions": [{"rev_id": 10}, {"rev_id": 20}]
    }"#,
    )
    .unwrap();

    let svg = RevisionGraphRenderer::with_spacing(300.0, 24.0)
        .unwrap()
        .to_svg(&history);
    assert!(svg.contains(r#"width="320" height="48" viewBox="0 0 320 48""#));
    assert!(svg.contains(r#"<circle cx="310" cy="36" r="4""#));
}
