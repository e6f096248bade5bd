//! Validation of recent histories.
//!
//! The renderer never reports anything: records it cannot place are simply
//! not drawn. Validation explains those gaps after the fact.

use crate::error::ValidationError;
use crate::grid::RenderGrid;
use crate::history::RecentHistory;
use crate::options::RowZeroPolicy;
use crate::relationship::RelationshipKind;
use crate::revision::{Column, RevId};
use indexmap::IndexMap;

/// Result of validating a recent history.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// All validation errors found
    pub errors: Vec<ValidationError>,
    /// All validation warnings found
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Check if validation passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any issues (errors or warnings).
    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    /// Get all issues (errors and warnings combined).
    pub fn all_issues(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

impl RecentHistory {
    /// Check the history for problems that change what gets drawn.
    ///
    /// Duplicate ids are errors, since they silently move vertices' edges.
    /// Unresolved endpoints, pending migrations and edges hidden by the
    /// first-row rule are warnings.
    pub fn validate(&self, policy: RowZeroPolicy) -> ValidationResult {
        let mut result = ValidationResult::default();

        for column in Column::ALL {
            result.errors.extend(self.find_duplicate_revisions(column));
        }

        let grid = RenderGrid::build(self);
        for kind in RelationshipKind::PAINT_ORDER {
            for rel in self.relationships_of(kind) {
                let internal = grid.row(Column::Internal, &rel.internal);
                let public = grid.row(Column::Public, &rel.public);

                if internal.is_none() {
                    result.warnings.push(ValidationError::UnresolvedEndpoint {
                        kind,
                        column: Column::Internal,
                        rev_id: rel.internal.clone(),
                    });
                }
                if public.is_none() {
                    result.warnings.push(ValidationError::UnresolvedEndpoint {
                        kind,
                        column: Column::Public,
                        rev_id: rel.public.clone(),
                    });
                }

                if let (Some(i), Some(p)) = (internal, public) {
                    if !policy.accepts(i, p) {
                        result.warnings.push(ValidationError::HiddenByFirstRow {
                            kind,
                            internal: rel.internal.clone(),
                            public: rel.public.clone(),
                        });
                    }
                }
            }

            for migration in self.migrations(kind) {
                if migration.is_pending() {
                    result.warnings.push(ValidationError::PendingMigration {
                        kind,
                        up_to: migration.up_to_revision.rev_id.clone(),
                    });
                }
            }
        }

        result
    }

    /// Find ids that occur more than once in a column.
    pub fn find_duplicate_revisions(&self, column: Column) -> Vec<ValidationError> {
        let mut rows: IndexMap<&RevId, Vec<usize>> = IndexMap::new();
        for (row, revision) in self.revisions(column).iter().enumerate() {
            rows.entry(&revision.rev_id).or_default().push(row);
        }

        rows.into_iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(rev_id, rows)| ValidationError::DuplicateRevision {
                column,
                rev_id: rev_id.clone(),
                rows,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history(json: &str) -> RecentHistory {
        RecentHistory::from_json(json).unwrap()
    }

    #[test]
    fn test_clean_history() {
        let h = history(
            r#"{
            "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
            "public_revisions": [{"rev_id": 10}, {"rev_id": 20}],
            "equivalences": [
                {"internal_revision": {"rev_id": 2}, "public_revision": {"rev_id": 20}}
            ]
        }"#,
        );
        let result = h.validate(RowZeroPolicy::SkipFirstRow);
        assert!(result.is_ok());
        assert!(!result.has_issues());
    }

    #[test]
    fn test_duplicate_revision_is_error() {
        let h = history(
            r#"{
            "internal_revisions": [{"rev_id": "a"}, {"rev_id": "b"}, {"rev_id": "a"}],
            "public_revisions": []
        }"#,
        );
        let result = h.validate(RowZeroPolicy::SkipFirstRow);
        assert_eq!(
            result.errors,
            vec![ValidationError::DuplicateRevision {
                column: Column::Internal,
                rev_id: RevId::from("a"),
                rows: vec![0, 2],
            }]
        );
    }

    #[test]
    fn test_first_row_warning_depends_on_policy() {
        let h = history(
            r#"{
            "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
            "public_revisions": [{"rev_id": 10}, {"rev_id": 20}],
            "equivalences": [
                {"internal_revision": {"rev_id": 1}, "public_revision": {"rev_id": 20}}
            ]
        }"#,
        );
        let skip = h.validate(RowZeroPolicy::SkipFirstRow);
        assert_eq!(
            skip.warnings,
            vec![ValidationError::HiddenByFirstRow {
                kind: RelationshipKind::Equivalence,
                internal: RevId::from("1"),
                public: RevId::from("20"),
            }]
        );

        let resolve = h.validate(RowZeroPolicy::Resolve);
        assert!(!resolve.has_issues());
    }

    #[test]
    fn test_unresolved_and_pending() {
        let h = history(
            r#"{
            "internal_revisions": [{"rev_id": 1}, {"rev_id": 2}],
            "public_revisions": [{"rev_id": 10}],
            "exports": [
                {"up_to_revision": {"rev_id": 2}, "submitted_as": {"rev_id": 99}},
                {"up_to_revision": {"rev_id": 2}, "submitted_as": null}
            ]
        }"#,
        );
        let result = h.validate(RowZeroPolicy::SkipFirstRow);
        assert!(result.is_ok());
        let types: Vec<&str> = result.warnings.iter().map(|w| w.error_type()).collect();
        assert_eq!(types, vec!["unresolved_endpoint", "pending_migration"]);
    }
}
