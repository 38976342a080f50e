//! Client configuration.

use crate::{Result, error::ApiError};
use std::env::VarError;
use std::time::Duration;

/// Base URL of the hosted dashboard API.
pub const DEFAULT_BASE_URL: &str = "https://investezy-backend.onrender.com/api";

/// Default request timeout. The hosted backend cold-starts slowly.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "INVESTEZY_API_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "INVESTEZY_API_TIMEOUT_SECS";

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL endpoints are appended to, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment.
    ///
    /// This will also load from a `.env` file if present. Unset variables
    /// fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unreadable or invalid.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(url) = read_var(BASE_URL_VAR)? {
            config = config.with_base_url(url);
        }

        if let Some(secs) = read_var(TIMEOUT_VAR)? {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got '{secs}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL, dropping any trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for a non-HTTP base URL or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

/// Read a variable, treating "not set" as `None`.
fn read_var(name: &str) -> Result<Option<String>> {
    match dotenvy::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(ApiError::Env(e)),
    }
}
