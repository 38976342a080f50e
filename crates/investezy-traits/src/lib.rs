#![doc(issue_tracker_base_url = "https://github.com/investezy/investezy/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the Investezy comparison toolkit.
//!
//! This crate provides the shared vocabulary used by the ranking engine, the
//! API client and the CLI: comparable entities, dotted metric paths, resolved
//! metric values and the common error type.

/// The version of the investezy-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod entity;
pub mod error;
pub mod path;
pub mod value;

// Re-exports
pub use entity::{Comparable, Entity, Ticker};
pub use error::{InvestezyError, Result};
pub use path::MetricPath;
pub use value::{MetricValue, UNAVAILABLE};
