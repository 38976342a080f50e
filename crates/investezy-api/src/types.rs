//! Data types for dashboard API responses.

use crate::Result;
use chrono::{NaiveDate, NaiveDateTime};
use investezy_traits::{Entity, MetricValue, Ticker};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Growth figures for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Returns {
    /// Total return over the period, in percent.
    pub absolute: f64,
    /// Current value of ₹10,000 invested at the start of the period.
    pub projection: f64,
    /// Compound annual growth rate, in percent.
    pub cagr: f64,
}

/// Volatility figures for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Annualized price fluctuation, in percent.
    pub fluctuation: f64,
    /// `Low`, `Medium` or `High`.
    pub level: String,
    /// `Safe`, `Moderate Risk` or `High Risk`.
    pub meter: String,
}

/// Risk-adjusted return figures for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stability {
    /// Excess return per unit of fluctuation.
    pub score: f64,
    /// Reliability rating from 1 to 5.
    pub stars: u8,
}

/// Valuation figures. Each may be `N/A`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundamentals {
    /// Trailing P/E ratio.
    #[serde(default)]
    pub pe_ratio: MetricValue,
    /// Dividend yield, in percent.
    #[serde(default)]
    pub dividend_yield: MetricValue,
    /// Market capitalization, in crores.
    #[serde(default)]
    pub market_cap: MetricValue,
}

/// Recent closing prices for the stock's sparkline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Trading dates (YYYY-MM-DD).
    #[serde(default)]
    pub dates: Vec<String>,
    /// Closing prices, aligned with `dates`.
    #[serde(default)]
    pub prices: Vec<f64>,
}

/// A stock record from the dashboard API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    /// Ticker symbol, e.g. `TCS.NS`.
    pub ticker: Ticker,
    /// Company name.
    pub company_name: String,
    /// Last closing price.
    pub latest_price: f64,
    /// Growth figures.
    pub returns: Returns,
    /// Volatility figures.
    pub risk: Risk,
    /// Risk-adjusted figures.
    pub stability: Stability,
    /// Valuation figures.
    #[serde(default)]
    pub fundamentals: Fundamentals,
    /// Recent prices.
    #[serde(default)]
    pub chart_data: ChartData,
    /// One-line summary generated by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_message: Option<String>,
}

impl StockData {
    /// Convert into a comparable entity keyed by ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be re-encoded or has no ticker.
    pub fn to_entity(&self) -> Result<Entity> {
        Ok(Entity::from_record(serde_json::to_value(self)?)?)
    }
}

/// Insights the API attaches to a comparison. Absent with fewer than two stocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInsights {
    /// Best performer sentence.
    #[serde(default)]
    pub best_performer: Option<String>,
    /// Safest option sentence.
    #[serde(default)]
    pub safest_option: Option<String>,
    /// Summary sentence.
    #[serde(default)]
    pub summary: Option<String>,
}

/// Raw response of the comparison endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CompareResponse {
    #[serde(default)]
    pub(crate) stocks: Vec<serde_json::Value>,
    #[serde(default)]
    pub(crate) comparison: ServerInsights,
}

/// Stocks fetched for a side-by-side comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Entities in request order; tickers the API could not load are absent.
    pub entities: Vec<Entity>,
    /// Insights attached by the API.
    pub insights: ServerInsights,
}

/// A user's holdings, keyed by broker platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio(pub BTreeMap<String, Vec<Ticker>>);

impl Portfolio {
    /// Platform names, sorted.
    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Holdings on one platform.
    #[must_use]
    pub fn holdings(&self, platform: &str) -> &[Ticker] {
        self.0.get(platform).map_or(&[], Vec::as_slice)
    }

    /// Every held ticker across platforms, trimmed and deduplicated, in
    /// first-seen order.
    #[must_use]
    pub fn all_tickers(&self) -> Vec<Ticker> {
        let mut tickers: Vec<Ticker> = Vec::new();
        for ticker in self.0.values().flatten() {
            let ticker = ticker.trim();
            if !ticker.is_empty() && !tickers.iter().any(|t| t == ticker) {
                tickers.push(ticker.to_string());
            }
        }
        tickers
    }

    /// Whether no platform holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

/// A recommended ticker, with an optional reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    /// Bare ticker.
    Ticker(Ticker),
    /// Ticker with a reason.
    Hinted {
        /// Recommended ticker.
        ticker: Ticker,
        /// Why it was recommended.
        hint: String,
    },
}

impl Recommendation {
    /// The recommended ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        match self {
            Self::Ticker(ticker) | Self::Hinted { ticker, .. } => ticker,
        }
    }

    /// The reason, if the API gave one.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Ticker(_) => None,
            Self::Hinted { hint, .. } => Some(hint),
        }
    }
}

/// Recommendations for a user's portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    /// Portfolio tickers the recommendations were based on.
    #[serde(default)]
    pub portfolio: Vec<Ticker>,
    /// Recommended stocks.
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    /// How the recommendations were chosen.
    #[serde(default)]
    pub note: Option<String>,
}

/// One predicted closing price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date (YYYY-MM-DD).
    pub date: String,
    /// Predicted price.
    pub price: f64,
}

impl PricePoint {
    /// Parse the date string into a NaiveDate.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Headline of a price prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    /// Expected change over the horizon, in percent.
    pub expected_change: f64,
    /// `up` or `down`.
    pub trend: String,
    /// Plain-language summary.
    pub message: String,
}

/// A short-horizon price prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// Company name.
    pub company_name: String,
    /// Last closing price.
    pub current_price: f64,
    /// Predicted prices by trading day.
    pub predictions: Vec<PricePoint>,
    /// Headline.
    pub summary: PredictionSummary,
    /// Model used, e.g. `Moving Average Trend`.
    pub method: String,
}

impl Prediction {
    /// Export the predicted prices as a `date`/`price` DataFrame.
    ///
    /// Points with unparseable dates are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if polars fails to assemble the frame.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let (dates, prices): (Vec<NaiveDate>, Vec<f64>) = self
            .predictions
            .iter()
            .filter_map(|p| p.parsed_date().map(|d| (d, p.price)))
            .unzip();

        let df = df! {
            "date" => dates,
            "price" => prices,
        }?;

        Ok(df)
    }
}

/// API health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `healthy` when the API is up.
    pub status: String,
    /// Server local time of the check.
    pub timestamp: NaiveDateTime,
    /// API version.
    pub version: String,
}

impl HealthStatus {
    /// Whether the API reports itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
