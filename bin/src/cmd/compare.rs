//! Compare command implementation.

use crate::output;
use anyhow::{Result, bail};
use investezy_api::{ApiClient, normalize_ticker};
use investezy_rank::registry::{self, MetricTab};
use investezy_rank::{
    ComparisonInsights, ComparisonSet, MAX_COMPARISON_SIZE, RankedView, comparison_insights,
};
use investezy_traits::{Comparable, Entity};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompareReport<'a, 'e> {
    tab: MetricTab,
    missing: &'a [String],
    rankings: &'a [RankedView<'e, Entity>],
    insights: &'a ComparisonInsights,
}

/// Requested tickers the API returned no record for.
fn missing_tickers(requested: &[String], entities: &[Entity]) -> Result<Vec<String>> {
    let mut missing = Vec::new();
    for ticker in requested {
        let ticker = normalize_ticker(ticker)?;
        if !entities.iter().any(|e| e.id().eq_ignore_ascii_case(&ticker)) {
            missing.push(ticker);
        }
    }
    Ok(missing)
}

/// Compare up to three stocks on one tab of metrics.
pub(crate) async fn compare_stocks(
    client: &ApiClient,
    tickers: &[String],
    tab: &str,
    years: u32,
    json: bool,
) -> Result<()> {
    if tickers.len() > MAX_COMPARISON_SIZE {
        bail!(
            "At most {MAX_COMPARISON_SIZE} stocks can be compared side by side, got {}",
            tickers.len()
        );
    }

    let tab = MetricTab::parse(tab)?;
    let descriptors = registry::tab_descriptors(tab)?;

    if !json {
        output::banner("Stock Comparison");
        println!("Tickers:  {}", tickers.join(", "));
        println!("Tab:      {} ({})", tab.as_str(), tab.description());
        println!("Window:   {years} years");
        println!();
        println!("Fetching stock data...");
    }

    let ticker_refs: Vec<&str> = tickers.iter().map(String::as_str).collect();
    let comparison = client.compare(&ticker_refs, years).await?;

    let missing = missing_tickers(tickers, &comparison.entities)?;
    for ticker in &missing {
        warn!(%ticker, "no data returned");
    }

    let set = ComparisonSet::new(comparison.entities)?;
    if set.is_empty() {
        bail!("No data available for {}", tickers.join(", "));
    }

    let views = set.rank_all(&descriptors);
    let insights = comparison_insights(set.entities())?;

    if json {
        return output::print_json(&CompareReport {
            tab,
            missing: &missing,
            rankings: &views,
            insights: &insights,
        });
    }

    println!("Loaded {} of {} stock(s)", set.len(), tickers.len());
    for entity in set.entities() {
        println!("  {:<14} {}", entity.id(), entity.display_name());
    }
    println!();

    output::section(&format!("{} METRICS", tab.as_str().to_uppercase()));
    for view in &views {
        output::print_view(view)?;
    }

    output::section("WHAT THIS MEANS");
    if let Some(best) = &insights.best_performer {
        println!("{best}");
    }
    if let Some(safest) = &insights.safest_option {
        println!("{safest}");
    }
    println!("{}", insights.summary);
    println!();

    Ok(())
}
