//! Dotted metric paths.

use crate::{InvestezyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed dotted path into an entity's attribute tree, e.g. `returns.absolute`.
///
/// Segments are never empty. Numeric segments also index into JSON arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MetricPath {
    segments: Vec<String>,
}

impl MetricPath {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::InvalidPath`] if the path is empty or any
    /// segment between dots is empty.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(InvestezyError::InvalidPath("path is empty".to_string()));
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(InvestezyError::InvalidPath(format!(
                "'{trimmed}' contains an empty segment"
            )));
        }

        Ok(Self { segments })
    }

    /// The individual path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment of the path.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Walk the path through a JSON tree.
    ///
    /// Returns `None` as soon as a segment is absent; absence is not an error.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for MetricPath {
    type Err = InvestezyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MetricPath {
    type Error = InvestezyError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<MetricPath> for String {
    fn from(path: MetricPath) -> Self {
        path.to_string()
    }
}
