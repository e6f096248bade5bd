//! Relationship records connecting the internal and public columns.

use crate::revision::{Column, RevId, RevisionRef};
use serde::{Deserialize, Serialize};

/// The kind of correspondence between an internal and a public revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// Both revisions represent the same logical state
    Equivalence,

    /// An internal revision was submitted as a public revision
    Export,

    /// A public revision was brought in as an internal revision
    Import,
}

impl RelationshipKind {
    /// All kinds, in the order their edges are painted.
    pub const PAINT_ORDER: [RelationshipKind; 3] = [
        RelationshipKind::Equivalence,
        RelationshipKind::Export,
        RelationshipKind::Import,
    ];

    /// Get a human-readable label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipKind::Equivalence => "equivalence",
            RelationshipKind::Export => "export",
            RelationshipKind::Import => "import",
        }
    }

    /// The column the relationship originates from.
    pub fn source_column(&self) -> Column {
        match self {
            RelationshipKind::Equivalence | RelationshipKind::Export => Column::Internal,
            RelationshipKind::Import => Column::Public,
        }
    }

    /// Check if this is a migration (export or import) rather than an equivalence.
    pub fn is_migration(&self) -> bool {
        matches!(self, RelationshipKind::Export | RelationshipKind::Import)
    }
}

/// A typed relationship between one internal and one public revision.
///
/// Whatever the direction of the underlying record, `internal` always
/// resolves against the internal column and `public` against the public one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub internal: RevId,
    pub public: RevId,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, internal: impl Into<RevId>, public: impl Into<RevId>) -> Self {
        Self {
            kind,
            internal: internal.into(),
            public: public.into(),
        }
    }

    pub fn equivalence(internal: impl Into<RevId>, public: impl Into<RevId>) -> Self {
        Self::new(RelationshipKind::Equivalence, internal, public)
    }

    pub fn export(internal: impl Into<RevId>, public: impl Into<RevId>) -> Self {
        Self::new(RelationshipKind::Export, internal, public)
    }

    pub fn import(internal: impl Into<RevId>, public: impl Into<RevId>) -> Self {
        Self::new(RelationshipKind::Import, internal, public)
    }

    /// The revision id on the given side.
    pub fn endpoint(&self, column: Column) -> &RevId {
        match column {
            Column::Internal => &self.internal,
            Column::Public => &self.public,
        }
    }
}

/// An equivalence record as it appears in the recent-history blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceRecord {
    pub internal_revision: RevisionRef,
    pub public_revision: RevisionRef,
}

impl EquivalenceRecord {
    pub fn relationship(&self) -> Relationship {
        Relationship::equivalence(
            self.internal_revision.rev_id.clone(),
            self.public_revision.rev_id.clone(),
        )
    }
}

/// A migration record (export or import) as it appears in the blob.
///
/// The same two fields serve both directions: an export goes from
/// `up_to_revision` (internal) to `submitted_as` (public), an import from
/// `up_to_revision` (public) to `submitted_as` (internal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub up_to_revision: RevisionRef,
    /// `None` while the migration is still pending
    #[serde(default)]
    pub submitted_as: Option<RevisionRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl MigrationRecord {
    pub fn new(up_to: impl Into<RevId>, submitted_as: impl Into<RevId>) -> Self {
        Self {
            up_to_revision: RevisionRef::new(up_to),
            submitted_as: Some(RevisionRef::new(submitted_as)),
            migration_id: None,
            status: None,
        }
    }

    pub fn pending(up_to: impl Into<RevId>) -> Self {
        Self {
            up_to_revision: RevisionRef::new(up_to),
            submitted_as: None,
            migration_id: None,
            status: None,
        }
    }

    /// Check if the migration has not been submitted yet.
    pub fn is_pending(&self) -> bool {
        self.submitted_as.is_none()
    }

    /// Interpret this record as a relationship of the given migration kind.
    ///
    /// Returns `None` for pending migrations.
    pub fn relationship(&self, kind: RelationshipKind) -> Option<Relationship> {
        let submitted = self.submitted_as.as_ref()?.rev_id.clone();
        let up_to = self.up_to_revision.rev_id.clone();
        match kind {
            RelationshipKind::Export => Some(Relationship::export(up_to, submitted)),
            RelationshipKind::Import => Some(Relationship::import(submitted, up_to)),
            RelationshipKind::Equivalence => None,
        }
    }
}
