//! Revision types for the two history columns.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the two parallel revision timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// The internal (private) repository
    Internal,
    /// The public (open-source) repository
    Public,
}

impl Column {
    /// Both columns, in left-to-right drawing order.
    pub const ALL: [Column; 2] = [Column::Internal, Column::Public];

    /// Get a human-readable label for this column.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Internal => "internal",
            Column::Public => "public",
        }
    }

    /// The column on the other side of the graph.
    pub fn opposite(&self) -> Column {
        match self {
            Column::Internal => Column::Public,
            Column::Public => Column::Internal,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An opaque revision identifier.
///
/// Identifiers arrive either as JSON strings or numbers. Numbers are kept in
/// their decimal form so that `1` and `"1"` name the same revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RevId(String);

impl RevId {
    pub fn new(id: impl Into<String>) -> Self {
        RevId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RevId {
    fn from(id: &str) -> Self {
        RevId(id.to_string())
    }
}

impl From<String> for RevId {
    fn from(id: String) -> Self {
        RevId(id)
    }
}

impl From<u64> for RevId {
    fn from(id: u64) -> Self {
        RevId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RevId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => RevId(s),
            Raw::Unsigned(n) => RevId(n.to_string()),
            Raw::Signed(n) => RevId(n.to_string()),
            Raw::Float(n) => RevId(js_number_string(n)),
        })
    }
}

/// Format a number the way a JavaScript property key would be, so ids the
/// page coerced to strings still match.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent form with
/// an explicit sign (`1e+21`, `1.5e-7`); everything else is plain decimal.
/// Integers beyond 2^53 are kept exactly rather than rounded as JavaScript
/// would.
fn js_number_string(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    n.to_string()
}

/// A revision as it appears in the recent-history blob.
///
/// Only `rev_id` matters for layout; the rest is display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub rev_id: RevId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    /// Commit time formatted as `%Y-%m-%d %H:%M:%S`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Revision {
    pub fn new(rev_id: impl Into<RevId>) -> Self {
        Self {
            rev_id: rev_id.into(),
            author: None,
            repository_name: None,
            time: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Reference to a revision inside a relationship record (`{"rev_id": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRef {
    pub rev_id: RevId,
}

impl RevisionRef {
    pub fn new(rev_id: impl Into<RevId>) -> Self {
        Self {
            rev_id: rev_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_are_equal() {
        let a: RevId = serde_json::from_str("12").unwrap();
        let b: RevId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "12");
    }

    #[test]
    fn test_revision_metadata_is_optional() {
        let rev: Revision = serde_json::from_str(r#"{"rev_id": "abc"}"#).unwrap();
        assert_eq!(rev.rev_id, RevId::from("abc"));
        assert!(rev.author.is_none());

        let rev: Revision = serde_json::from_str(
            r#"{"rev_id": 7, "author": "dbentley", "repository_name": "internal",
                "time": "2010-06-01 12:00:00"}"#,
        )
        .unwrap();
        assert_eq!(rev.author.as_deref(), Some("dbentley"));
        assert_eq!(rev.time.as_deref(), Some("2010-06-01 12:00:00"));
    }

    #[test]
    fn test_column_opposite() {
        assert_eq!(Column::Internal.opposite(), Column::Public);
        assert_eq!(Column::Public.opposite(), Column::Internal);
    }

    #[test]
    fn test_float_ids_follow_javascript_keys() {
        let id = |json: &str| serde_json::from_str::<RevId>(json).unwrap().to_string();
        assert_eq!(id("2.5"), "2.5");
        assert_eq!(id("1e20"), "100000000000000000000");
        assert_eq!(id("1e21"), "1e+21");
        assert_eq!(id("1.5e-7"), "1.5e-7");
        assert_eq!(id("-0.0"), "0");
    }
}
