//! Resolved metric values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The literal the dashboard API uses for a value it could not compute.
pub const UNAVAILABLE: &str = "N/A";

/// The leaf of a metric path after classification.
///
/// Deserialization classifies like [`MetricValue::from_json`], so `"N/A"`
/// reads back as [`MetricValue::Unavailable`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum MetricValue {
    /// A finite numeric value.
    Number(f64),
    /// A categorical value such as a risk meter reading.
    Category(String),
    /// Absent, `null`, `"N/A"`, or a leaf that is neither numeric nor categorical.
    #[default]
    Unavailable,
}

impl MetricValue {
    /// Classify an optional JSON leaf.
    ///
    /// Objects, arrays, booleans and non-finite numbers are not comparable
    /// leaves and classify as [`MetricValue::Unavailable`].
    pub fn from_json(leaf: Option<&Value>) -> Self {
        match leaf {
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map_or(Self::Unavailable, Self::Number),
            Some(Value::String(s)) if s.trim() == UNAVAILABLE || s.trim().is_empty() => {
                Self::Unavailable
            }
            Some(Value::String(s)) => Self::Category(s.clone()),
            _ => Self::Unavailable,
        }
    }

    /// Returns the numeric value, if any.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the categorical value, if any.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value is the "not available" marker.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Category(s) => write!(f, "{s}"),
            Self::Unavailable => write!(f, "{UNAVAILABLE}"),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Self::Number(v)
        } else {
            Self::Unavailable
        }
    }
}

impl From<Value> for MetricValue {
    fn from(leaf: Value) -> Self {
        Self::from_json(Some(&leaf))
    }
}
