//! Terminal rendering of a recent history.
//!
//! Prints the two columns side by side, the way the history page lays out
//! its table, with a connector column between them.

use crate::history::RecentHistory;
use crate::layout::{Drawable, Layout};
use crate::options::RenderOptions;
use crate::relationship::RelationshipKind;
use crate::revision::Column;

/// Render a recent history as a text table.
///
/// Rows whose internal and public revisions are related show a glyph in the
/// middle column (`=` equivalence, `>` export, `<` import). Every drawn edge
/// is also listed under the table, since most edges are not horizontal.
/// Edges are filtered with the same row-zero policy as the graphical
/// renderers.
pub fn render_ascii(history: &RecentHistory, options: &RenderOptions) -> String {
    let scene = Layout::new(options).scene(history);
    let rows = history.row_count();

    let id_at = |column: Column, row: usize| -> String {
        history
            .revisions(column)
            .get(row)
            .map(|r| r.rev_id.to_string())
            .unwrap_or_default()
    };

    let mut connectors: Vec<String> = vec![String::new(); rows];
    let mut listed = Vec::new();
    for drawable in scene.drawables() {
        if let Drawable::Edge { kind, from, to } = drawable {
            if from.row == to.row {
                connectors[from.row].push(glyph(*kind));
            }
            listed.push((
                *kind,
                id_at(Column::Internal, from.row),
                from.row,
                id_at(Column::Public, to.row),
                to.row,
            ));
        }
    }

    let internal_width = (0..rows)
        .map(|row| id_at(Column::Internal, row).chars().count())
        .chain(std::iter::once("Internal".len()))
        .max()
        .unwrap_or(0);
    let connector_width = connectors
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<iw$} │ {:^cw$} │ {}\n",
        "Internal",
        "",
        "Public",
        iw = internal_width,
        cw = connector_width
    ));
    output.push_str(&format!(
        "{}─┼─{}─┼─{}\n",
        "─".repeat(internal_width),
        "─".repeat(connector_width),
        "─".repeat("Public".len())
    ));

    for (row, connector) in connectors.iter().enumerate() {
        let line = format!(
            "{:<iw$} │ {:^cw$} │ {}",
            id_at(Column::Internal, row),
            connector,
            id_at(Column::Public, row),
            iw = internal_width,
            cw = connector_width
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    if !listed.is_empty() {
        output.push_str("\nRELATIONSHIPS:\n");
        for (kind, internal, internal_row, public, public_row) in &listed {
            let arrow = match kind {
                RelationshipKind::Equivalence => "══",
                RelationshipKind::Export => "─▶",
                RelationshipKind::Import => "◀─",
            };
            output.push_str(&format!(
                "  {:<11} {} (row {}) {} {} (row {})\n",
                kind.label(),
                internal,
                internal_row,
                arrow,
                public,
                public_row
            ));
        }
    }

    output
}

fn glyph(kind: RelationshipKind) -> char {
    match kind {
        RelationshipKind::Equivalence => '=',
        RelationshipKind::Export => '>',
        RelationshipKind::Import => '<',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::{EquivalenceRecord, MigrationRecord};
    use crate::revision::{Revision, RevisionRef};

    fn sample() -> RecentHistory {
        RecentHistory {
            internal_revisions: ["1", "2", "3"].iter().map(|id| Revision::new(*id)).collect(),
            public_revisions: ["10", "20"].iter().map(|id| Revision::new(*id)).collect(),
            equivalences: vec![EquivalenceRecord {
                internal_revision: RevisionRef::new("2"),
                public_revision: RevisionRef::new("20"),
            }],
            exports: vec![MigrationRecord::new("3", "20")],
            imports: vec![],
        }
    }

    #[test]
    fn test_table_rows() {
        let text = render_ascii(&sample(), &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Internal │     │ Public");
        assert_eq!(lines[2], "1        │     │ 10");
        assert_eq!(lines[3], "2        │  =  │ 20");
        assert_eq!(lines[4], "3        │     │");
    }

    #[test]
    fn test_relationship_listing() {
        let text = render_ascii(&sample(), &RenderOptions::default());
        assert!(text.contains("RELATIONSHIPS:"));
        assert!(text.contains("  equivalence 2 (row 1) ══ 20 (row 1)"));
        assert!(text.contains("  export      3 (row 2) ─▶ 20 (row 1)"));
    }

    #[test]
    fn test_first_row_edges_not_listed() {
        let mut history = sample();
        history.equivalences = vec![EquivalenceRecord {
            internal_revision: RevisionRef::new("1"),
            public_revision: RevisionRef::new("10"),
        }];
        history.exports.clear();
        let text = render_ascii(&history, &RenderOptions::default());
        assert!(!text.contains("RELATIONSHIPS:"));
    }
}
