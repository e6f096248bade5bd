//! Per-column row indices.

use crate::history::RecentHistory;
use crate::revision::{Column, RevId, Revision};
use indexmap::IndexMap;

/// Map from revision id to its zero-based row in one column.
///
/// Rows follow input order. A repeated id overwrites the earlier entry, so
/// the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    rows: IndexMap<RevId, usize>,
    len: usize,
}

impl RowIndex {
    pub fn build(revisions: &[Revision]) -> Self {
        let mut rows = IndexMap::with_capacity(revisions.len());
        for (row, revision) in revisions.iter().enumerate() {
            rows.insert(revision.rev_id.clone(), row);
        }
        Self {
            rows,
            len: revisions.len(),
        }
    }

    /// Look up the row of a revision.
    pub fn row(&self, id: &RevId) -> Option<usize> {
        self.rows.get(id).copied()
    }

    pub fn contains(&self, id: &RevId) -> bool {
        self.rows.contains_key(id)
    }

    /// Number of rows in the column, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct ids.
    pub fn distinct(&self) -> usize {
        self.rows.len()
    }
}

/// Row indices for both columns of one render.
#[derive(Debug, Clone, Default)]
pub struct RenderGrid {
    internal: RowIndex,
    public: RowIndex,
}

impl RenderGrid {
    pub fn build(history: &RecentHistory) -> Self {
        Self {
            internal: RowIndex::build(&history.internal_revisions),
            public: RowIndex::build(&history.public_revisions),
        }
    }

    pub fn column(&self, column: Column) -> &RowIndex {
        match column {
            Column::Internal => &self.internal,
            Column::Public => &self.public,
        }
    }

    /// Look up the row of `id` in `column`.
    pub fn row(&self, column: Column, id: &RevId) -> Option<usize> {
        self.column(column).row(id)
    }

    /// Number of rows in the taller column.
    pub fn height(&self) -> usize {
        self.internal.len().max(self.public.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revs(ids: &[&str]) -> Vec<Revision> {
        ids.iter().map(|id| Revision::new(*id)).collect()
    }

    #[test]
    fn test_rows_follow_input_order() {
        let index = RowIndex::build(&revs(&["c", "b", "a"]));
        assert_eq!(index.row(&RevId::from("c")), Some(0));
        assert_eq!(index.row(&RevId::from("a")), Some(2));
        assert_eq!(index.row(&RevId::from("z")), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let index = RowIndex::build(&revs(&["x", "y", "x"]));
        assert_eq!(index.row(&RevId::from("x")), Some(2));
        assert_eq!(index.len(), 3);
        assert_eq!(index.distinct(), 2);
    }

    #[test]
    fn test_grid_columns_are_independent() {
        let history = RecentHistory {
            internal_revisions: revs(&["1", "2", "3"]),
            public_revisions: revs(&["3"]),
            ..Default::default()
        };
        let grid = RenderGrid::build(&history);
        assert_eq!(grid.row(Column::Internal, &RevId::from("3")), Some(2));
        assert_eq!(grid.row(Column::Public, &RevId::from("3")), Some(0));
        assert_eq!(grid.height(), 3);
    }
}
