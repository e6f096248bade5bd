//! Layout and style options for a render.

use crate::error::HistoryError;
use crate::relationship::RelationshipKind;
use crate::surface::{Fill, Stroke};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a relationship touching row 0 is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowZeroPolicy {
    /// Row 0 counts as "not found"; such edges are skipped.
    #[default]
    SkipFirstRow,
    /// Row 0 resolves like any other row; only unknown ids are skipped.
    Resolve,
}

impl RowZeroPolicy {
    /// Check whether an edge between two resolved rows is drawn.
    pub fn accepts(&self, internal_row: usize, public_row: usize) -> bool {
        match self {
            RowZeroPolicy::SkipFirstRow => internal_row != 0 && public_row != 0,
            RowZeroPolicy::Resolve => true,
        }
    }
}

/// Stroke and vertical offset of one relationship kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: Stroke,
    /// Added to both endpoints' y so overlapping kinds stay visible
    pub offset: f64,
}

/// Outline and fill of revision vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexStyle {
    pub stroke: Stroke,
    pub fill: Fill,
    pub radius: f64,
}

/// Stroke, fill and offset for every kind of drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub vertex: VertexStyle,
    pub equivalence: EdgeStyle,
    pub export: EdgeStyle,
    pub import: EdgeStyle,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            vertex: VertexStyle {
                stroke: Stroke::new(1.0, "black"),
                fill: Fill::solid("#c3d9ff"),
                radius: 4.0,
            },
            equivalence: EdgeStyle {
                stroke: Stroke::new(1.0, "green"),
                offset: 0.0,
            },
            // +y is down the page: exports draw just below the equivalence
            // line, imports just above it
            export: EdgeStyle {
                stroke: Stroke::new(1.0, "blue"),
                offset: 5.0,
            },
            import: EdgeStyle {
                stroke: Stroke::new(1.0, "red"),
                offset: -5.0,
            },
        }
    }
}

impl Styles {
    pub fn edge(&self, kind: RelationshipKind) -> &EdgeStyle {
        match kind {
            RelationshipKind::Equivalence => &self.equivalence,
            RelationshipKind::Export => &self.export,
            RelationshipKind::Import => &self.import,
        }
    }
}

/// Everything that shapes a render besides the history itself.
///
/// Spacings are measured by the embedding page and passed in; nothing here
/// inspects a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Horizontal distance between the two columns
    pub column_spacing: f64,
    /// Vertical distance between successive rows
    pub row_spacing: f64,
    /// x of the internal column
    pub column_offset: f64,
    /// y of row 0; half the row spacing when unset
    pub row_offset: Option<f64>,
    /// Minimum surface width; the surface still grows to fit both columns
    pub width: Option<f64>,
    pub row_zero: RowZeroPolicy,
    /// Class assigned to the destination element
    pub class_name: String,
    pub styles: Styles,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_spacing: 100.0,
            row_spacing: 24.0,
            column_offset: 10.0,
            row_offset: None,
            width: Some(200.0),
            row_zero: RowZeroPolicy::default(),
            class_name: "moe-graph".to_string(),
            styles: Styles::default(),
        }
    }
}

impl RenderOptions {
    pub fn new(column_spacing: f64, row_spacing: f64) -> Self {
        Self {
            column_spacing,
            row_spacing,
            ..Self::default()
        }
    }

    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let options: RenderOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file without validating them, so callers
    /// can override fields first. [`RevisionGraphRenderer::new`] validates.
    ///
    /// [`RevisionGraphRenderer::new`]: crate::RevisionGraphRenderer::new
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn with_column_spacing(mut self, spacing: f64) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn with_row_spacing(mut self, spacing: f64) -> Self {
        self.row_spacing = spacing;
        self
    }

    pub fn with_row_offset(mut self, offset: f64) -> Self {
        self.row_offset = Some(offset);
        self
    }

    pub fn with_row_zero(mut self, policy: RowZeroPolicy) -> Self {
        self.row_zero = policy;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// The y of row 0.
    pub fn row_offset(&self) -> f64 {
        self.row_offset.unwrap_or(self.row_spacing / 2.0)
    }

    /// Reject spacings that cannot produce a drawing.
    pub fn validate(&self) -> Result<(), HistoryError> {
        for (name, value) in [
            ("column_spacing", self.column_spacing),
            ("row_spacing", self.row_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(HistoryError::InvalidSpacing { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offset_defaults_to_half_spacing() {
        let options = RenderOptions::new(100.0, 40.0);
        assert_eq!(options.row_offset(), 20.0);
        assert_eq!(options.with_row_offset(3.0).row_offset(), 3.0);
    }

    #[test]
    fn test_skip_first_row_policy() {
        let policy = RowZeroPolicy::SkipFirstRow;
        assert!(policy.accepts(1, 2));
        assert!(!policy.accepts(0, 2));
        assert!(!policy.accepts(1, 0));
    }

    #[test]
    fn test_resolve_policy() {
        let policy = RowZeroPolicy::Resolve;
        assert!(policy.accepts(0, 0));
    }

    #[test]
    fn test_from_json_partial() {
        let options =
            RenderOptions::from_json(r#"{"row_spacing": 30, "row_zero": "resolve"}"#).unwrap();
        assert_eq!(options.row_spacing, 30.0);
        assert_eq!(options.column_spacing, 100.0);
        assert_eq!(options.row_zero, RowZeroPolicy::Resolve);
        assert_eq!(options.styles.export.offset, 5.0);
    }

    #[test]
    fn test_validate_rejects_bad_spacing() {
        let err = RenderOptions::new(0.0, 10.0).validate().unwrap_err();
        assert!(matches!(
            err,
            HistoryError::InvalidSpacing {
                name: "column_spacing",
                ..
            }
        ));
        assert!(RenderOptions::new(10.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = RenderOptions::from_file("/nonexistent/moe-graph-options.json").unwrap_err();
        assert!(matches!(err, HistoryError::Io(_)));
    }

    #[test]
    fn test_from_file_defers_validation() {
        let path = std::env::temp_dir().join(format!(
            "moe-graph-options-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"row_spacing": 0}"#).unwrap();
        let options = RenderOptions::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.row_spacing, 0.0);
        assert!(options.validate().is_err());
        assert!(options.with_row_spacing(24.0).validate().is_ok());
    }
}
