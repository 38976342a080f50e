//! Metric ranking for side-by-side stock comparison.
//!
//! This crate turns a handful of stocks and a metric descriptor into a
//! ranked, normalized and labelled view:
//! - Descriptors: dotted metric path, display format and direction
//! - Ranking: stable ordering with unavailable values last
//! - Normalization: a 0–100 position for bar widths
//! - Registry: the dashboard's standard metrics grouped by tab
//!
//! # Example
//!
//! ```
//! use investezy_rank::registry;
//! use investezy_rank::{ComparisonSet, QualitativeLabel};
//! use investezy_traits::Entity;
//! use serde_json::json;
//!
//! let set = ComparisonSet::new(vec![
//!     Entity::new("TCS.NS", "TCS", json!({ "risk": { "fluctuation": 21.3 } })),
//!     Entity::new("HDFCBANK.NS", "HDFC Bank", json!({ "risk": { "fluctuation": 13.8 } })),
//! ])
//! .unwrap();
//!
//! let view = set.rank(&registry::descriptor("price_fluctuation").unwrap());
//! assert_eq!(view.ids(), vec!["HDFCBANK.NS", "TCS.NS"]);
//! assert_eq!(view.entries()[0].label, Some(QualitativeLabel::LowestRisk));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod descriptor;
pub mod format;
mod frame;
pub mod insights;
pub mod label;
pub mod normalise;
pub mod ranker;
pub mod registry;

// Re-export key types
pub use descriptor::{CategoryScale, DescriptorConfig, Direction, MetricDescriptor, SortPolicy};
pub use format::{ValueFormat, risk_emoji};
pub use insights::{ComparisonInsights, comparison_insights, friendly_message};
pub use label::QualitativeLabel;
pub use normalise::{Bounds, normalise};
pub use ranker::{ComparisonSet, MAX_COMPARISON_SIZE, RankedEntry, RankedView, rank};
pub use registry::{MetricInfo, MetricTab};
