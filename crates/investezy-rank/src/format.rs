//! Value formatters.
//!
//! Formatters are plain data so descriptors stay serializable. Unavailable
//! values always render as the literal `N/A` and never reach a formatter arm.

use investezy_traits::{MetricValue, UNAVAILABLE};
use serde::{Deserialize, Serialize};

/// Maximum number of stars a reliability rating displays.
pub const MAX_STARS: f64 = 5.0;

/// Most decimal places a fixed-precision format renders.
pub const MAX_DECIMALS: usize = 12;

/// How a metric value is rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// The value as-is: `40`, `12.5`, `Safe`.
    #[default]
    Plain,
    /// Percentage: `12.5%`.
    Percent,
    /// Currency amount with a leading symbol: `₹10500`.
    Currency {
        /// Currency symbol placed before the amount.
        symbol: String,
    },
    /// Amount in crores with a leading symbol: `₹1500 Cr`.
    Crore {
        /// Currency symbol placed before the amount.
        symbol: String,
    },
    /// Star rating, rounded and clamped to 0..=5.
    Stars,
    /// Fixed number of decimal places.
    Fixed {
        /// Digits after the decimal point.
        decimals: usize,
    },
    /// Traffic-light emoji followed by the risk category.
    RiskBadge,
}

impl ValueFormat {
    /// Indian rupee currency format.
    pub fn rupees() -> Self {
        Self::Currency {
            symbol: "₹".to_string(),
        }
    }

    /// Indian rupee crore format.
    pub fn rupee_crores() -> Self {
        Self::Crore {
            symbol: "₹".to_string(),
        }
    }

    /// Whether the format's parameters are within display limits.
    pub const fn is_bounded(&self) -> bool {
        match self {
            Self::Fixed { decimals } => *decimals <= MAX_DECIMALS,
            _ => true,
        }
    }

    /// Render a value.
    pub fn format(&self, value: &MetricValue) -> String {
        match value {
            MetricValue::Unavailable => UNAVAILABLE.to_string(),
            MetricValue::Number(v) => self.format_number(*v),
            MetricValue::Category(s) => self.format_category(s),
        }
    }

    fn format_number(&self, v: f64) -> String {
        match self {
            Self::Plain | Self::RiskBadge => format!("{v}"),
            Self::Percent => format!("{v}%"),
            Self::Currency { symbol } => format!("{symbol}{v}"),
            Self::Crore { symbol } => format!("{symbol}{v} Cr"),
            Self::Stars => "⭐".repeat(v.round().clamp(0.0, MAX_STARS) as usize),
            Self::Fixed { decimals } => format!("{v:.prec$}", prec = (*decimals).min(MAX_DECIMALS)),
        }
    }

    fn format_category(&self, s: &str) -> String {
        match self {
            Self::RiskBadge => format!("{} {s}", risk_emoji(s)),
            _ => s.to_string(),
        }
    }
}

/// Traffic-light emoji for a risk meter reading.
///
/// Anything other than `Safe` or `Moderate Risk` reads as high risk.
pub fn risk_emoji(meter: &str) -> &'static str {
    match meter {
        "Safe" => "🟢",
        "Moderate Risk" => "🟡",
        _ => "🔴",
    }
}
