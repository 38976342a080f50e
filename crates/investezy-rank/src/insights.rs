//! Plain-language comparison insights.
//!
//! Insights are derived from rankings: the best performer is the top of the
//! 5-year returns ranking and the safest option the top of the price
//! fluctuation ranking.

use crate::descriptor::MetricDescriptor;
use crate::format::{ValueFormat, risk_emoji};
use crate::ranker::{RankedView, rank};
use crate::registry;
use investezy_traits::{Comparable, MetricPath, MetricValue, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shown when there is not enough data to compare.
pub const FALLBACK_SUMMARY: &str =
    "Compare the metrics to see which stock suits your investment style! 📊";

/// Shown when a stock lacks the fields for a friendly message.
pub const FALLBACK_MESSAGE: &str = "Check out the detailed metrics for this stock! 📊";

/// Headline insights for a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonInsights {
    /// Which stock had the best returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_performer: Option<String>,
    /// Which stock fluctuated least.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safest_option: Option<String>,
    /// One-sentence recommendation.
    pub summary: String,
}

impl ComparisonInsights {
    fn fallback() -> Self {
        Self {
            best_performer: None,
            safest_option: None,
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }
}

/// Catalogued metrics the insights are ranked by.
struct InsightMetrics {
    returns: MetricDescriptor,
    fluctuation: MetricDescriptor,
    meter: MetricPath,
}

impl InsightMetrics {
    fn new() -> Result<Self> {
        Ok(Self {
            returns: registry::descriptor("returns")?,
            fluctuation: registry::descriptor("risk_level")?,
            meter: MetricPath::parse("risk.meter")?,
        })
    }
}

/// The top entity of a view, if its value is available.
fn available_top<'a, T: Comparable>(view: &RankedView<'a, T>) -> Option<&'a T> {
    view.top()
        .filter(|entry| entry.value.as_number().is_some())
        .map(|entry| entry.entity)
}

/// Derive headline insights from two or more stocks.
///
/// Fewer than two stocks, or no available returns or fluctuation figures,
/// yield only the fallback summary.
///
/// # Errors
///
/// Returns an error only if the built-in descriptors fail validation.
pub fn comparison_insights<T: Comparable>(entities: &[T]) -> Result<ComparisonInsights> {
    if entities.len() < 2 {
        return Ok(ComparisonInsights::fallback());
    }

    let metrics = InsightMetrics::new()?;
    let by_returns = rank(entities, &metrics.returns);
    let by_risk = rank(entities, &metrics.fluctuation);

    let (Some(best), Some(safest)) = (available_top(&by_returns), available_top(&by_risk)) else {
        debug!(entities = entities.len(), "not enough data for comparison insights");
        return Ok(ComparisonInsights::fallback());
    };

    let best_return = best.metric(metrics.returns.path());
    let safest_meter = safest.metric(&metrics.meter);

    Ok(ComparisonInsights {
        best_performer: Some(format!(
            "🏆 {} had the best returns at {best_return}%",
            best.display_name()
        )),
        safest_option: Some(format!(
            "🛡 {} is the safest option with {safest_meter} risk",
            safest.display_name()
        )),
        summary: format!(
            "If you want growth, consider {}. If you prefer safety, look at {}.",
            best.display_name(),
            safest.display_name()
        ),
    })
}

/// A one-line, friendly summary of a single stock.
///
/// Needs a numeric `returns.absolute`, a categorical `risk.meter` and a
/// numeric `stability.stars`; otherwise returns [`FALLBACK_MESSAGE`].
pub fn friendly_message<T: Comparable>(entity: &T) -> String {
    let resolve = |path: &str| {
        MetricPath::parse(path)
            .map(|p| entity.metric(&p))
            .unwrap_or(MetricValue::Unavailable)
    };

    let returns = resolve("returns.absolute");
    let meter = resolve("risk.meter");
    let stars = resolve("stability.stars");

    let (Some(returns), Some(meter), Some(_)) =
        (returns.as_number(), meter.as_category(), stars.as_number())
    else {
        return FALLBACK_MESSAGE.to_string();
    };

    let trend = if returns > 50.0 {
        "🚀"
    } else if returns > 0.0 {
        "📈"
    } else {
        "📉"
    };

    format!(
        "{trend} {} has {returns}% returns over 5 years. {} Risk level: {meter}. Reliability: {}",
        entity.display_name(),
        risk_emoji(meter),
        ValueFormat::Stars.format(&stars)
    )
}
