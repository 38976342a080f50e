//! Catalogue of the dashboard's standard comparison metrics.
//!
//! This module provides metadata and discovery for the metrics shown on the
//! comparison page, grouped by the tab they appear under.

use crate::descriptor::{CategoryScale, DescriptorConfig, Direction, MetricDescriptor, SortPolicy};
use crate::format::ValueFormat;
use investezy_traits::{InvestezyError, Result};
use serde::{Deserialize, Serialize};

/// Comparison page tab a metric is shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricTab {
    /// Headline returns, risk and reliability
    Overview,
    /// Growth figures
    Returns,
    /// Volatility and risk classification
    Risk,
    /// Valuation and size
    Fundamentals,
}

impl MetricTab {
    /// All tabs in page order.
    pub const ALL: [Self; 4] = [Self::Overview, Self::Returns, Self::Risk, Self::Fundamentals];

    /// Get a human-readable description of the tab.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Overview => "Returns, risk and reliability at a glance",
            Self::Returns => "Total returns, annual growth and projected value",
            Self::Risk => "Price fluctuation, risk category and stability",
            Self::Fundamentals => "Valuation, dividends and company size",
        }
    }

    /// Tab name as typed on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Returns => "returns",
            Self::Risk => "risk",
            Self::Fundamentals => "fundamentals",
        }
    }

    /// Parse a tab name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::InvalidData`] for an unknown tab.
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| InvestezyError::InvalidData(format!("Unknown tab: '{name}'")))
    }
}

/// Metadata about a catalogued metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricInfo {
    /// Unique identifier for the metric
    pub name: &'static str,

    /// Tab the metric appears under
    pub tab: MetricTab,

    /// Human-readable description
    pub description: &'static str,

    config: fn() -> DescriptorConfig,
}

impl MetricInfo {
    /// Dotted path ranked by the metric.
    #[must_use]
    pub fn path(&self) -> String {
        (self.config)().path
    }

    /// Build the validated descriptor for this metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalogued configuration fails validation.
    pub fn descriptor(&self) -> Result<MetricDescriptor> {
        MetricDescriptor::new((self.config)())
    }
}

fn returns_5y() -> DescriptorConfig {
    DescriptorConfig::new("returns.absolute", "Returns (5 Years)")
        .with_format(ValueFormat::Percent)
        .with_description("Higher returns mean better growth over the last 5 years")
}

fn risk_level() -> DescriptorConfig {
    DescriptorConfig::new("risk.fluctuation", "Risk Level")
        .with_format(ValueFormat::Percent)
        .with_direction(Direction::LowerIsBetter)
        .with_description("Lower risk means less price fluctuation")
        .risk()
}

fn reliability() -> DescriptorConfig {
    DescriptorConfig::new("stability.stars", "Reliability Rating")
        .with_format(ValueFormat::Stars)
        .with_description("More stars mean better risk-adjusted returns")
}

fn total_returns() -> DescriptorConfig {
    DescriptorConfig::new("returns.absolute", "Total Returns (5 Years)")
        .with_format(ValueFormat::Percent)
        .with_description("Total growth over the last 5 years")
}

fn annual_growth() -> DescriptorConfig {
    DescriptorConfig::new("returns.cagr", "Annual Growth Rate")
        .with_format(ValueFormat::Percent)
        .with_description("Average yearly growth rate")
}

fn projection() -> DescriptorConfig {
    DescriptorConfig::new("returns.projection", "₹10,000 would now be worth")
        .with_format(ValueFormat::rupees())
        .with_description("If you had invested ₹10,000 five years ago")
}

fn price_fluctuation() -> DescriptorConfig {
    DescriptorConfig::new("risk.fluctuation", "Price Fluctuation")
        .with_format(ValueFormat::Percent)
        .with_direction(Direction::LowerIsBetter)
        .with_description("How much the price typically moves up and down")
        .risk()
}

fn risk_category() -> DescriptorConfig {
    DescriptorConfig::new("risk.meter", "Risk Category")
        .with_format(ValueFormat::RiskBadge)
        .with_direction(Direction::LowerIsBetter)
        .with_sort(SortPolicy::CategoryRank {
            scale: CategoryScale::risk_meter(),
        })
        .with_description("Overall risk assessment")
}

fn stability_score() -> DescriptorConfig {
    DescriptorConfig::new("stability.score", "Stability Score")
        .with_format(ValueFormat::Fixed { decimals: 2 })
        .with_description("Higher scores mean better returns for the risk taken")
}

fn pe_ratio() -> DescriptorConfig {
    DescriptorConfig::new("fundamentals.peRatio", "P/E Ratio")
        .with_direction(Direction::Neutral)
        .with_description("Price relative to earnings (lower can be better value)")
}

fn dividend_yield() -> DescriptorConfig {
    DescriptorConfig::new("fundamentals.dividendYield", "Dividend Yield")
        .with_format(ValueFormat::Percent)
        .with_description("Annual dividend as percentage of share price")
}

fn market_cap() -> DescriptorConfig {
    DescriptorConfig::new("fundamentals.marketCap", "Market Cap")
        .with_format(ValueFormat::rupee_crores())
        .with_direction(Direction::Neutral)
        .with_description("Total market value of the company")
}

/// Get information about all catalogued metrics, in page order.
#[must_use]
pub fn standard_metrics() -> Vec<MetricInfo> {
    vec![
        // Overview
        MetricInfo {
            name: "returns",
            tab: MetricTab::Overview,
            description: "5-year absolute return",
            config: returns_5y,
        },
        MetricInfo {
            name: "risk_level",
            tab: MetricTab::Overview,
            description: "Annualized price fluctuation",
            config: risk_level,
        },
        MetricInfo {
            name: "reliability",
            tab: MetricTab::Overview,
            description: "Reliability star rating (1-5)",
            config: reliability,
        },
        // Returns
        MetricInfo {
            name: "total_returns",
            tab: MetricTab::Returns,
            description: "5-year absolute return",
            config: total_returns,
        },
        MetricInfo {
            name: "annual_growth",
            tab: MetricTab::Returns,
            description: "Compound annual growth rate",
            config: annual_growth,
        },
        MetricInfo {
            name: "projection",
            tab: MetricTab::Returns,
            description: "Current value of ₹10,000 invested 5 years ago",
            config: projection,
        },
        // Risk
        MetricInfo {
            name: "price_fluctuation",
            tab: MetricTab::Risk,
            description: "Annualized price fluctuation",
            config: price_fluctuation,
        },
        MetricInfo {
            name: "risk_category",
            tab: MetricTab::Risk,
            description: "Safe, Moderate Risk or High Risk",
            config: risk_category,
        },
        MetricInfo {
            name: "stability_score",
            tab: MetricTab::Risk,
            description: "Return earned per unit of risk",
            config: stability_score,
        },
        // Fundamentals
        MetricInfo {
            name: "pe_ratio",
            tab: MetricTab::Fundamentals,
            description: "Trailing price-to-earnings ratio",
            config: pe_ratio,
        },
        MetricInfo {
            name: "dividend_yield",
            tab: MetricTab::Fundamentals,
            description: "Annual dividend yield",
            config: dividend_yield,
        },
        MetricInfo {
            name: "market_cap",
            tab: MetricTab::Fundamentals,
            description: "Market capitalization in crores",
            config: market_cap,
        },
    ]
}

/// Get all metrics shown under a tab.
#[must_use]
pub fn metrics_by_tab(tab: MetricTab) -> Vec<MetricInfo> {
    standard_metrics()
        .into_iter()
        .filter(|info| info.tab == tab)
        .collect()
}

/// Get information about a specific metric by name.
#[must_use]
pub fn get_metric_info(name: &str) -> Option<MetricInfo> {
    standard_metrics()
        .into_iter()
        .find(|info| info.name == name)
}

/// Build the descriptor for a catalogued metric.
///
/// # Errors
///
/// Returns [`InvestezyError::MetricNotFound`] for an unknown name.
pub fn descriptor(name: &str) -> Result<MetricDescriptor> {
    get_metric_info(name)
        .ok_or_else(|| {
            InvestezyError::MetricNotFound(format!(
                "Unknown metric: '{name}'. Use 'investezy metrics' to list available metrics."
            ))
        })?
        .descriptor()
}

/// Build the descriptors for every metric under a tab, in page order.
///
/// # Errors
///
/// Returns an error if a catalogued configuration fails validation.
pub fn tab_descriptors(tab: MetricTab) -> Result<Vec<MetricDescriptor>> {
    metrics_by_tab(tab)
        .iter()
        .map(MetricInfo::descriptor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_metrics() {
        let metrics = standard_metrics();
        assert_eq!(metrics.len(), 12);

        let tabs: Vec<_> = metrics.iter().map(|m| m.tab).collect();
        for tab in MetricTab::ALL {
            assert!(tabs.contains(&tab));
        }
    }

    #[test]
    fn test_every_descriptor_validates() {
        for info in standard_metrics() {
            assert!(info.descriptor().is_ok(), "{}", info.name);
        }
    }

    #[test]
    fn test_metric_paths() {
        let info = get_metric_info("risk_category").unwrap();
        assert_eq!(info.path(), "risk.meter");
        assert_eq!(get_metric_info("reliability").unwrap().path(), "stability.stars");
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = standard_metrics().iter().map(|m| m.name).collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_metrics_by_tab() {
        assert_eq!(metrics_by_tab(MetricTab::Overview).len(), 3);
        assert_eq!(metrics_by_tab(MetricTab::Returns).len(), 3);
        assert_eq!(metrics_by_tab(MetricTab::Risk).len(), 3);
        assert_eq!(metrics_by_tab(MetricTab::Fundamentals).len(), 3);
    }

    #[test]
    fn test_risk_metrics() {
        let risk = descriptor("risk_level").unwrap();
        assert!(risk.is_risk_metric());
        assert_eq!(risk.direction(), Direction::LowerIsBetter);

        let category = descriptor("risk_category").unwrap();
        assert!(category.sort().is_custom());
        assert!(!category.is_risk_metric());
    }

    #[test]
    fn test_neutral_metrics() {
        assert!(descriptor("pe_ratio").unwrap().is_neutral());
        assert!(descriptor("market_cap").unwrap().is_neutral());
        assert!(!descriptor("dividend_yield").unwrap().is_neutral());
    }

    #[test]
    fn test_unknown_metric() {
        assert!(get_metric_info("beta").is_none());
        assert!(matches!(
            descriptor("beta"),
            Err(InvestezyError::MetricNotFound(_))
        ));
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(MetricTab::parse("Risk").unwrap(), MetricTab::Risk);
        assert_eq!(MetricTab::parse(" fundamentals ").unwrap(), MetricTab::Fundamentals);
        assert!(MetricTab::parse("charts").is_err());
        assert!(!MetricTab::Overview.description().is_empty());
    }

    #[test]
    fn test_tab_descriptors() {
        let descriptors = tab_descriptors(MetricTab::Returns).unwrap();
        let titles: Vec<_> = descriptors.iter().map(MetricDescriptor::title).collect();
        assert_eq!(
            titles,
            vec![
                "Total Returns (5 Years)",
                "Annual Growth Rate",
                "₹10,000 would now be worth"
            ]
        );
    }
}
