//! Error types for the Investezy toolkit.
//!
//! Missing metric values are never errors; they degrade to
//! [`MetricValue::Unavailable`](crate::MetricValue::Unavailable). The variants
//! here cover caller and configuration mistakes that are rejected eagerly.

use thiserror::Error;

/// The main error type for Investezy operations.
#[derive(Debug, Error)]
pub enum InvestezyError {
    /// A dotted metric path is empty or contains an empty segment.
    #[error("Invalid metric path: {0}")]
    InvalidPath(String),

    /// A metric descriptor combines options that contradict each other.
    #[error("Invalid metric descriptor: {0}")]
    InvalidDescriptor(String),

    /// Two entities in one comparison share an identifier.
    #[error("Duplicate entity id in comparison: {0}")]
    DuplicateEntity(String),

    /// A comparison holds more entities than allowed.
    #[error("Comparison holds {size} entities, limit is {limit}")]
    ComparisonTooLarge {
        /// Number of entities supplied.
        size: usize,
        /// Maximum number of entities allowed.
        limit: usize,
    },

    /// A record could not be turned into an entity.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a metric is not found in the catalogue.
    #[error("Metric not found: {0}")]
    MetricNotFound(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error from JSON (de)serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for Investezy operations.
pub type Result<T> = std::result::Result<T, InvestezyError>;
