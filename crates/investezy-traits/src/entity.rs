//! Comparable entities.
//!
//! An entity is one stock or fund being compared. It carries a stable
//! identifier, a display name, and a nested attribute tree that metric paths
//! resolve into.

use crate::{InvestezyError, MetricPath, MetricValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A ticker symbol identifier, e.g. `"TCS.NS"`.
pub type Ticker = String;

/// Something that can be ranked by a metric path.
///
/// Implementations must be thread-safe (`Send + Sync`) so rankings can be
/// computed from any rendering context.
///
/// # Example
///
/// ```
/// use investezy_traits::{Comparable, MetricPath, MetricValue};
///
/// struct Fund {
///     code: String,
///     expense_ratio: f64,
/// }
///
/// impl Comparable for Fund {
///     fn id(&self) -> &str {
///         &self.code
///     }
///
///     fn display_name(&self) -> &str {
///         &self.code
///     }
///
///     fn metric(&self, path: &MetricPath) -> MetricValue {
///         match path.leaf() {
///             "expenseRatio" => MetricValue::from(self.expense_ratio),
///             _ => MetricValue::Unavailable,
///         }
///     }
/// }
/// ```
pub trait Comparable: Send + Sync {
    /// Unique, stable identifier within a comparison set.
    fn id(&self) -> &str;

    /// Human-readable label.
    fn display_name(&self) -> &str;

    /// Resolve a metric path to a classified value.
    ///
    /// Absent paths resolve to [`MetricValue::Unavailable`]; this never fails.
    fn metric(&self, path: &MetricPath) -> MetricValue;
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn metric(&self, path: &MetricPath) -> MetricValue {
        (**self).metric(path)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn metric(&self, path: &MetricPath) -> MetricValue {
        (**self).metric(path)
    }
}

/// A stock or fund record backed by a JSON attribute tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    id: Ticker,
    display_name: String,
    attributes: Value,
}

impl Entity {
    /// Create an entity from its parts.
    pub fn new(id: impl Into<Ticker>, display_name: impl Into<String>, attributes: Value) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            attributes,
        }
    }

    /// Build an entity from a dashboard stock record.
    ///
    /// The record's `ticker` becomes the id and `companyName` the display
    /// name. Without a company name the ticker minus its exchange suffix is
    /// used (`TCS.NS` displays as `TCS`). The whole record is kept as the
    /// attribute tree.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::InvalidData`] if the record is not an object
    /// or has no non-empty `ticker` string.
    pub fn from_record(record: Value) -> Result<Self> {
        if !record.is_object() {
            return Err(InvestezyError::InvalidData(
                "stock record is not a JSON object".to_string(),
            ));
        }

        let ticker = record
            .get("ticker")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| InvestezyError::InvalidData("stock record has no ticker".to_string()))?
            .to_string();

        let display_name = record
            .get("companyName")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| strip_exchange_suffix(&ticker).to_string(), str::to_string);

        Ok(Self::new(ticker, display_name, record))
    }

    /// The attribute tree.
    pub const fn attributes(&self) -> &Value {
        &self.attributes
    }
}

impl Comparable for Entity {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn metric(&self, path: &MetricPath) -> MetricValue {
        MetricValue::from_json(path.resolve(&self.attributes))
    }
}

/// Strip an exchange suffix such as `.NS` or `.BO` from a ticker.
pub fn strip_exchange_suffix(ticker: &str) -> &str {
    ticker.split_once('.').map_or(ticker, |(base, _)| base)
}
