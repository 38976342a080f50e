//! Client for the Investezy dashboard API.
//!
//! This crate fetches stock records, comparisons, portfolios,
//! recommendations and price predictions from the dashboard backend, plus the
//! beginner endpoints (risk questionnaire, risk-tiered starter picks, growth
//! calculator, glossary, learning material and market overview). Stock
//! records convert into [`Entity`](investezy_traits::Entity) values ready for
//! ranking.
//!
//! # Usage
//!
//! ```rust,ignore
//! use investezy_api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::from_env()?;
//!
//!     // Fetch one stock (".NS" is appended to bare tickers)
//!     let tcs = client.stock("TCS", 5).await?;
//!
//!     // Fetch up to three stocks side by side
//!     let comparison = client.compare(&["TCS", "INFY", "HDFCBANK"], 5).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Both are optional and may live in a `.env` file:
//!
//! ```bash
//! INVESTEZY_API_URL=http://localhost:5000/api
//! INVESTEZY_API_TIMEOUT_SECS=30
//! ```

mod beginner;
mod client;
mod config;
mod error;
mod types;

pub use beginner::*;
pub use client::{ApiClient, DEFAULT_EXCHANGE_SUFFIX, normalize_ticker};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use types::*;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
