//! Data types for the beginner endpoints.
//!
//! These back the newcomer pages: a short risk questionnaire, risk-tiered
//! starter picks, a compound growth calculator and reference material.

use crate::{Result, error::ApiError};
use investezy_traits::Ticker;
use serde::{Deserialize, Serialize};

/// Longest horizon the growth calculator accepts, in years.
pub const MAX_CALCULATOR_YEARS: u32 = 40;

/// Highest expected annual return the growth calculator accepts, in percent.
pub const MAX_EXPECTED_RETURN: f64 = 30.0;

/// How long the user plans to stay invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    /// Under a few years.
    Short,
    /// A few years.
    #[default]
    Medium,
    /// Many years.
    Long,
}

/// Prior investing experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    /// Never invested.
    None,
    /// Just starting.
    #[default]
    Beginner,
    /// Has invested before.
    Some,
    /// Invests regularly.
    Experienced,
}

/// Comfort with price swings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    /// Prefers steady prices.
    Low,
    /// Accepts some swings.
    #[default]
    Medium,
    /// Accepts large swings.
    High,
}

/// What the money is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Protect capital.
    Safety,
    /// Mix of growth and safety.
    #[default]
    Balanced,
    /// Maximize growth.
    Growth,
}

/// Answers to the risk questionnaire.
///
/// The defaults match the questionnaire's starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnswers {
    /// Age in years.
    pub age: u32,
    /// Investment horizon.
    pub timeline: Timeline,
    /// Prior experience.
    pub experience: Experience,
    /// Comfort with price swings.
    pub risk_tolerance: Tolerance,
    /// Investment goal.
    pub goal: Goal,
}

impl Default for RiskAnswers {
    fn default() -> Self {
        Self {
            age: 30,
            timeline: Timeline::default(),
            experience: Experience::default(),
            risk_tolerance: Tolerance::default(),
            goal: Goal::default(),
        }
    }
}

/// Investor risk profile, from most to least cautious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    /// Capital preservation first.
    VeryConservative,
    /// Stable blue chips with dividends.
    Conservative,
    /// Balanced mix.
    #[default]
    Moderate,
    /// Tilted towards growing companies.
    Growth,
    /// Growth-focused, high risk.
    Aggressive,
}

impl RiskProfile {
    /// All profiles, most cautious first.
    pub const ALL: [Self; 5] = [
        Self::VeryConservative,
        Self::Conservative,
        Self::Moderate,
        Self::Growth,
        Self::Aggressive,
    ];

    /// Profile name as used in query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryConservative => "very_conservative",
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Growth => "growth",
            Self::Aggressive => "aggressive",
        }
    }

    /// Parse a profile name, case-insensitively. `-` and `_` are interchangeable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for an unknown profile.
    pub fn parse(name: &str) -> Result<Self> {
        let wanted = name.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ApiError::InvalidInput(format!("unknown risk profile: '{name}'")))
    }
}

/// Outcome of the risk questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Assigned profile.
    pub risk_profile: RiskProfile,
    /// Score on a 1-10 scale.
    pub risk_score: u8,
    /// Largest share of the budget suggested for risky holdings, in percent.
    pub max_risk_allocation: u8,
    /// Plain-language suggestion.
    pub suggestion: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AssessResponse {
    pub profile: RiskAssessment,
}

/// A split across the three risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierSplit {
    /// Stable blue chips.
    pub safe: f64,
    /// Balanced risk and reward.
    pub moderate: f64,
    /// Higher growth potential.
    pub growth: f64,
}

impl TierSplit {
    /// Sum over the tiers.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.safe + self.moderate + self.growth
    }
}

/// A suggested stock with a one-line reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterPick {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// Why it fits the tier.
    pub message: String,
}

/// Suggested stocks per risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierPicks {
    /// Stable blue chips.
    #[serde(default)]
    pub safe: Vec<StarterPick>,
    /// Balanced risk and reward.
    #[serde(default)]
    pub moderate: Vec<StarterPick>,
    /// Higher growth potential.
    #[serde(default)]
    pub growth: Vec<StarterPick>,
}

impl TierPicks {
    /// Tiers in display order, with their names.
    pub fn tiers(&self) -> [(&'static str, &[StarterPick]); 3] {
        [
            ("safe", self.safe.as_slice()),
            ("moderate", self.moderate.as_slice()),
            ("growth", self.growth.as_slice()),
        ]
    }
}

/// Risk-tiered starter recommendations for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterRecommendations {
    /// Profile the picks were made for.
    pub risk_profile: RiskProfile,
    /// Percentage of the budget per tier.
    pub allocation: TierSplit,
    /// Rupee amounts per tier when a budget was given.
    #[serde(default)]
    pub budget_allocation: Option<TierSplit>,
    /// Picks per tier.
    pub recommendations: TierPicks,
    /// Closing advice.
    #[serde(default)]
    pub note: Option<String>,
}

/// Inputs to the compound growth calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorRequest {
    /// Initial investment, in rupees.
    pub amount: f64,
    /// Amount added every month, in rupees.
    pub monthly: f64,
    /// Horizon in whole years.
    pub years: u32,
    /// Expected annual return, in percent.
    pub expected_return: f64,
}

impl Default for CalculatorRequest {
    fn default() -> Self {
        Self {
            amount: 10_000.0,
            monthly: 1_000.0,
            years: 5,
            expected_return: 12.0,
        }
    }
}

impl CalculatorRequest {
    /// Check the inputs are within the calculator's accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for a negative or non-finite amount,
    /// a horizon outside 1-40 years, or an expected return outside 0-30%.
    pub fn validate(&self) -> Result<()> {
        if !(self.amount.is_finite() && self.amount >= 0.0) {
            return Err(ApiError::InvalidInput(format!("invalid amount: {}", self.amount)));
        }
        if !(self.monthly.is_finite() && self.monthly >= 0.0) {
            return Err(ApiError::InvalidInput(format!(
                "invalid monthly addition: {}",
                self.monthly
            )));
        }
        if !(1..=MAX_CALCULATOR_YEARS).contains(&self.years) {
            return Err(ApiError::InvalidInput(format!(
                "years must be between 1 and {MAX_CALCULATOR_YEARS}, got {}",
                self.years
            )));
        }
        if !(0.0..=MAX_EXPECTED_RETURN).contains(&self.expected_return) {
            return Err(ApiError::InvalidInput(format!(
                "expected return must be between 0 and {MAX_EXPECTED_RETURN}%, got {}",
                self.expected_return
            )));
        }
        Ok(())
    }

    /// Query string for the calculator endpoint.
    pub(crate) fn query(&self) -> String {
        format!(
            "amount={}&monthly={}&years={}&return={}",
            self.amount, self.monthly, self.years, self.expected_return
        )
    }
}

/// One point on the projected growth path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPoint {
    /// Month number, starting at 1.
    pub month: u32,
    /// Elapsed years.
    pub year: f64,
    /// Projected value.
    pub value: f64,
    /// Money put in so far.
    pub total_invested: f64,
    /// Value minus money put in.
    pub growth: f64,
}

/// Result of the compound growth calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthProjection {
    /// Initial investment.
    pub initial_investment: f64,
    /// Monthly addition.
    pub monthly_contribution: f64,
    /// Horizon in years.
    pub years: u32,
    /// Expected annual return, in percent.
    pub expected_return: f64,
    /// Projected final value.
    pub final_value: f64,
    /// Money put in over the horizon.
    pub total_invested: f64,
    /// Final value minus money put in.
    pub total_growth: f64,
    /// Growth relative to money put in, in percent.
    pub growth_percentage: f64,
    /// First month, each year end and the last month.
    #[serde(default)]
    pub journey: Vec<JourneyPoint>,
    /// Plain-language summary.
    pub friendly_explanation: String,
    /// Caveat about estimates.
    #[serde(default)]
    pub note: Option<String>,
}

/// A glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    /// The term.
    pub term: String,
    /// Plain-language definition.
    pub definition: String,
    /// Worked example.
    #[serde(default)]
    pub example: Option<String>,
}

/// A group of related glossary entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryCategory {
    /// Category name.
    pub name: String,
    /// Category icon.
    #[serde(default)]
    pub emoji: String,
    /// Entries in the category.
    pub terms: Vec<GlossaryTerm>,
}

/// The beginner glossary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    /// Term groups.
    pub categories: Vec<GlossaryCategory>,
    /// Closing note.
    #[serde(default)]
    pub note: Option<String>,
}

impl Glossary {
    /// Entries whose term or definition mentions `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<(&GlossaryCategory, &GlossaryTerm)> {
        let query = query.trim().to_lowercase();
        self.categories
            .iter()
            .flat_map(|c| c.terms.iter().map(move |t| (c, t)))
            .filter(|(_, t)| {
                t.term.to_lowercase().contains(&query) || t.definition.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// A short lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson title.
    pub title: String,
    /// Lesson body.
    pub description: String,
}

/// A term with a one-line meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonTerm {
    /// The term.
    pub term: String,
    /// What it means.
    pub meaning: String,
}

/// Learning material for newcomers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResources {
    /// Market basics.
    #[serde(default)]
    pub basics: Vec<Lesson>,
    /// Practical tips.
    #[serde(default)]
    pub tips: Vec<Lesson>,
    /// Frequently met terms.
    #[serde(default)]
    pub common_terms: Vec<CommonTerm>,
}

/// Latest level of a market index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSummary {
    /// Index name, e.g. `NIFTY 50`.
    pub name: String,
    /// What the index tracks.
    pub description: String,
    /// Latest close.
    pub value: f64,
    /// Change from the previous close, in percent.
    pub change: f64,
    /// Up or down marker.
    #[serde(default)]
    pub emoji: String,
}

/// A sector worth a newcomer's attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorHighlight {
    /// Sector name.
    pub name: String,
    /// What companies in the sector do.
    pub description: String,
    /// Ease of understanding, 1 to 5.
    pub beginner_friendliness: u8,
    /// Well-known stocks in the sector.
    #[serde(default)]
    pub example_stocks: Vec<Ticker>,
    /// Sector icon.
    #[serde(default)]
    pub emoji: String,
}

/// Market snapshot for newcomers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    /// Major indices.
    #[serde(default)]
    pub market_summary: Vec<IndexSummary>,
    /// Highlighted sectors.
    #[serde(default)]
    pub trending_sectors: Vec<SectorHighlight>,
    /// One-line read of the day's moves.
    pub market_mood: String,
    /// General advice.
    #[serde(default)]
    pub beginner_tip: Option<String>,
}

impl MarketOverview {
    /// Mean index change, in percent. `None` when no index was reported.
    #[must_use]
    pub fn average_change(&self) -> Option<f64> {
        if self.market_summary.is_empty() {
            return None;
        }
        let total: f64 = self.market_summary.iter().map(|i| i.change).sum();
        Some(total / self.market_summary.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_risk_answers_wire_format() {
        let answers = RiskAnswers {
            age: 24,
            timeline: Timeline::Long,
            experience: Experience::None,
            risk_tolerance: Tolerance::High,
            goal: Goal::Growth,
        };
        assert_eq!(
            serde_json::to_value(answers).unwrap(),
            json!({
                "age": 24,
                "timeline": "long",
                "experience": "none",
                "riskTolerance": "high",
                "goal": "growth"
            })
        );
        assert_eq!(RiskAnswers::default().age, 30);
    }

    #[test]
    fn test_risk_profile_parse() {
        assert_eq!(RiskProfile::parse("Growth").unwrap(), RiskProfile::Growth);
        assert_eq!(
            RiskProfile::parse("very-conservative").unwrap(),
            RiskProfile::VeryConservative
        );
        assert!(matches!(
            RiskProfile::parse("reckless"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_assess_response() {
        let body = json!({
            "success": true,
            "profile": {
                "riskProfile": "aggressive",
                "riskScore": 10,
                "maxRiskAllocation": 80,
                "suggestion": "🚀 You seem comfortable with high risk."
            }
        });
        let response: AssessResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.profile.risk_profile, RiskProfile::Aggressive);
        assert_eq!(response.profile.max_risk_allocation, 80);
    }

    #[test]
    fn test_starter_recommendations() {
        let body = json!({
            "success": true,
            "riskProfile": "moderate",
            "allocation": { "safe": 40, "moderate": 40, "growth": 20 },
            "budgetAllocation": null,
            "recommendations": {
                "safe": [{ "ticker": "HDFCBANK.NS", "message": "Stable blue-chip stock 🛡️" }],
                "moderate": [{ "ticker": "TCS.NS", "message": "Balanced risk-reward ⚖️" }],
                "growth": []
            },
            "note": "Start small."
        });
        let recs: StarterRecommendations = serde_json::from_value(body).unwrap();
        assert_relative_eq!(recs.allocation.total(), 100.0);
        assert!(recs.budget_allocation.is_none());

        let tiers = recs.recommendations.tiers();
        assert_eq!(tiers[0].0, "safe");
        assert_eq!(tiers[0].1[0].ticker, "HDFCBANK.NS");
        assert!(tiers[2].1.is_empty());
    }

    #[test]
    fn test_calculator_validation() {
        assert!(CalculatorRequest::default().validate().is_ok());

        let bad = [
            CalculatorRequest { amount: -1.0, ..Default::default() },
            CalculatorRequest { monthly: f64::NAN, ..Default::default() },
            CalculatorRequest { years: 0, ..Default::default() },
            CalculatorRequest { years: 41, ..Default::default() },
            CalculatorRequest { expected_return: 35.0, ..Default::default() },
        ];
        for request in bad {
            assert!(matches!(request.validate(), Err(ApiError::InvalidInput(_))), "{request:?}");
        }
    }

    #[test]
    fn test_calculator_query() {
        assert_eq!(
            CalculatorRequest::default().query(),
            "amount=10000&monthly=1000&years=5&return=12"
        );
    }

    #[test]
    fn test_glossary_search() {
        let glossary: Glossary = serde_json::from_value(json!({
            "success": true,
            "categories": [
                {
                    "name": "Stock Basics",
                    "emoji": "🧩",
                    "terms": [
                        { "term": "Dividend", "definition": "Money paid to shareholders." },
                        { "term": "IPO", "definition": "Initial Public Offering." }
                    ]
                },
                {
                    "name": "Analysis Terms",
                    "emoji": "🔍",
                    "terms": [
                        { "term": "Dividend Yield", "definition": "Annual dividend over price.", "example": "5%" }
                    ]
                }
            ]
        }))
        .unwrap();

        let hits: Vec<&str> = glossary.search("dividend").iter().map(|(_, t)| t.term.as_str()).collect();
        assert_eq!(hits, vec!["Dividend", "Dividend Yield"]);
        assert_eq!(glossary.search("public")[0].0.name, "Stock Basics");
        assert!(glossary.search("beta").is_empty());
    }

    #[test]
    fn test_market_overview() {
        let overview: MarketOverview = serde_json::from_value(json!({
            "success": true,
            "marketSummary": [
                { "name": "NIFTY 50", "description": "Main Indian Index", "value": 22000.5, "change": 1.5, "emoji": "🟢" },
                { "name": "SENSEX", "description": "Bombay Stock Exchange Index", "value": 73000.0, "change": -0.5, "emoji": "🔴" }
            ],
            "trendingSectors": [
                {
                    "name": "IT/Technology",
                    "description": "Software and tech services",
                    "beginner_friendliness": 4,
                    "example_stocks": ["TCS.NS", "INFY.NS"],
                    "emoji": "💻"
                }
            ],
            "marketMood": "The market is slightly up today.",
            "beginnerTip": "Focus on long-term growth."
        }))
        .unwrap();

        assert_relative_eq!(overview.average_change().unwrap(), 0.5);
        assert_eq!(overview.trending_sectors[0].beginner_friendliness, 4);

        let empty = MarketOverview {
            market_summary: vec![],
            trending_sectors: vec![],
            market_mood: String::new(),
            beginner_tip: None,
        };
        assert!(empty.average_change().is_none());
    }

    #[test]
    fn test_learning_resources() {
        let resources: LearningResources = serde_json::from_value(json!({
            "success": true,
            "basics": [{ "title": "What is a stock? 🧩", "description": "Ownership in a company." }],
            "tips": [],
            "commonTerms": [{ "term": "Dividend 💰", "meaning": "Profit paid to shareholders" }]
        }))
        .unwrap();
        assert_eq!(resources.basics.len(), 1);
        assert_eq!(resources.common_terms[0].meaning, "Profit paid to shareholders");
    }
}
