//! Error types for the dashboard API client.

use investezy_traits::InvestezyError;
use thiserror::Error;

/// Errors that can occur when using the dashboard API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API answered with `success: false` or an `error` field.
    #[error("Dashboard API error: {0}")]
    Api(String),

    /// A ticker, email or parameter was rejected before sending.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),

    /// A returned record could not be turned into a comparable entity.
    #[error("Invalid record: {0}")]
    Data(#[from] InvestezyError),

    /// DataFrame error.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
