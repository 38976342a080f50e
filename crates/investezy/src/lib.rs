#![doc(issue_tracker_base_url = "https://github.com/investezy/investezy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # investezy
//!
//! Side-by-side stock comparison for beginner investors.
//!
//! investezy is an umbrella crate that re-exports all investezy sub-crates for
//! convenience. It provides a unified API for ranking stocks by a metric,
//! placing each on a 0–100 scale and fetching records from the dashboard API.
//!
//! ## Quick Start
//!
//! ```
//! use investezy::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> investezy::Result<()> {
//! let set = ComparisonSet::new(vec![
//!     Entity::new("TCS.NS", "TCS", json!({ "returns": { "absolute": 81.4 } })),
//!     Entity::new("INFY.NS", "Infosys", json!({ "returns": { "absolute": 95.0 } })),
//!     Entity::new("WIPRO.NS", "Wipro", json!({ "returns": { "absolute": "N/A" } })),
//! ])?;
//!
//! let view = set.rank(&registry::descriptor("returns")?);
//! assert_eq!(view.ids(), vec!["INFY.NS", "TCS.NS", "WIPRO.NS"]);
//! assert_eq!(view.entries()[0].formatted_value, "95%");
//! assert_eq!(view.entries()[2].formatted_value, "N/A");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Entities, metric paths, metric values and errors
//! - [`rank`] - Descriptors, the ranker, normalization, labels and the metric catalogue
//! - [`api`] - Dashboard API client
//!
//! ## Ranking Model
//!
//! 1. **Descriptors** name a dotted path, a format and a direction
//! 2. **The ranker** orders entities, unavailable values last, ties stable
//! 3. **Normalization** maps each value onto 0–100 for bar widths
//! 4. **Labels** mark the top entry "Best Performer" or "Lowest Risk"

/// Version information for the investezy crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core type definitions.
///
/// - [`Comparable`] - Anything rankable by a metric path
/// - [`Entity`] - A JSON-backed stock record
/// - [`MetricPath`] - Dotted attribute path
/// - [`MetricValue`] - Number, category or unavailable
pub mod traits {
    pub use investezy_traits::*;
}

pub use investezy_traits::{Comparable, Entity, MetricPath, MetricValue};

// Re-export error types
pub use investezy_traits::{InvestezyError, Result};

// ============================================================================
// Ranking
// ============================================================================

/// Metric ranking.
///
/// ## Directions
///
/// - **HigherIsBetter**: largest first, largest at position 100
/// - **LowerIsBetter**: smallest first, smallest at position 100
/// - **Neutral**: largest first, the midpoint of the range at position 100
///
/// # Example
///
/// ```
/// use investezy::rank::{DescriptorConfig, Direction, MetricDescriptor, ValueFormat};
///
/// let descriptor = MetricDescriptor::new(
///     DescriptorConfig::new("risk.fluctuation", "Risk Level")
///         .with_format(ValueFormat::Percent)
///         .with_direction(Direction::LowerIsBetter)
///         .risk(),
/// )
/// .unwrap();
/// assert!(descriptor.is_risk_metric());
/// ```
pub mod rank {
    pub use investezy_rank::*;
}

pub use investezy_rank::{ComparisonSet, MetricDescriptor, RankedView};

// ============================================================================
// Data Providers
// ============================================================================

/// Investezy dashboard API client.
///
/// ## Setup
///
/// The client talks to the hosted backend by default. Point it elsewhere
/// with the `INVESTEZY_API_URL` environment variable or a `.env` file.
///
/// ## Example
///
/// ```ignore
/// use investezy::api::ApiClient;
/// use investezy::rank::{comparison_insights, registry};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::from_env()?;
///     let comparison = client.compare(&["TCS", "INFY"], 5).await?;
///
///     let view = investezy::rank::rank(&comparison.entities, &registry::descriptor("returns")?);
///     println!("{}", comparison_insights(&comparison.entities)?.summary);
///     Ok(())
/// }
/// ```
pub mod api {
    pub use investezy_api::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use investezy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::rank::{
        ComparisonSet, DescriptorConfig, Direction, MetricDescriptor, QualitativeLabel,
        RankedView, ValueFormat, rank, registry,
    };
    pub use crate::{Comparable, Entity, MetricPath, MetricValue};
    pub use crate::{InvestezyError, Result};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_comparable(_entity: &dyn Comparable) {}
        fn _accept_view(_view: &RankedView<'_, Entity>) {}
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let _error = InvestezyError::InvalidData("test".to_string());
    }

    #[test]
    fn test_prelude_ranks() {
        use crate::prelude::*;

        let stocks = vec![
            Entity::new("A", "Alpha", json!({ "risk": { "meter": "High Risk" } })),
            Entity::new("B", "Beta", json!({ "risk": { "meter": "Safe" } })),
        ];
        let view = rank(&stocks, &registry::descriptor("risk_category").unwrap());
        assert_eq!(view.ids(), vec!["B", "A"]);
        assert_eq!(view.entries()[0].formatted_value, "🟢 Safe");
    }
}
