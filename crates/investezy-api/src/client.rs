//! Dashboard API client implementation.

use crate::{
    Result,
    beginner::{
        AssessResponse, CalculatorRequest, Glossary, GrowthProjection, LearningResources,
        MarketOverview, RiskAnswers, RiskAssessment, RiskProfile, StarterRecommendations,
    },
    config::ApiConfig,
    error::ApiError,
    types::{CompareResponse, Comparison, HealthStatus, Portfolio, Prediction, Recommendations, StockData},
};
use investezy_traits::Entity;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

/// Exchange suffix appended to bare tickers (National Stock Exchange).
pub const DEFAULT_EXCHANGE_SUFFIX: &str = ".NS";

/// Investezy dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create a new client configured from the environment.
    ///
    /// See [`ApiConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds invalid settings.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The client's configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build a full URL for an endpoint.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url)
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        read_body(response).await
    }

    /// Make a POST request with a JSON body and parse the JSON response.
    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        read_body(response).await
    }


    /// Get a stock's metrics over the last `years` years.
    ///
    /// # Arguments
    ///
    /// * `ticker` - Stock ticker; `.NS` is appended when no exchange is given
    /// * `years` - Lookback window
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank or the API request fails.
    pub async fn stock(&self, ticker: &str, years: u32) -> Result<StockData> {
        let ticker = normalize_ticker(ticker)?;
        self.get(&format!("stock/{ticker}?years={years}")).await
    }

    /// Get several stocks for a side-by-side comparison.
    ///
    /// Records the API returns without a ticker are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if `tickers` is empty, a ticker is blank, or the API
    /// request fails.
    pub async fn compare(&self, tickers: &[&str], years: u32) -> Result<Comparison> {
        if tickers.is_empty() {
            return Err(ApiError::InvalidInput("no tickers to compare".to_string()));
        }

        let tickers = tickers
            .iter()
            .map(|t| normalize_ticker(t))
            .collect::<Result<Vec<_>>>()?
            .join(",");

        let response: CompareResponse = self
            .get(&format!("compare?tickers={tickers}&years={years}"))
            .await?;

        let entities = records_to_entities(response.stocks);
        debug!(requested = %tickers, received = entities.len(), "comparison fetched");

        Ok(Comparison {
            entities,
            insights: response.comparison,
        })
    }

    /// Get a user's demo portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is invalid or the API request fails.
    pub async fn portfolio(&self, email: &str) -> Result<Portfolio> {
        let email = validate_email(email)?;
        self.get(&format!("portfolio/{email}")).await
    }

    /// Get recommendations based on a user's portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is invalid, the portfolio is empty, or
    /// the API request fails.
    pub async fn recommend(&self, email: &str) -> Result<Recommendations> {
        let email = validate_email(email)?;
        self.get(&format!("recommend/{email}")).await
    }

    /// Predict a stock's price over the next `days` trading days.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank, `days` is zero, or the API
    /// request fails.
    pub async fn predict(&self, ticker: &str, days: u32) -> Result<Prediction> {
        if days == 0 {
            return Err(ApiError::InvalidInput("days must be at least 1".to_string()));
        }
        let ticker = normalize_ticker(ticker)?;
        self.get(&format!("predict/{ticker}?days={days}")).await
    }

    /// Check the API is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("health").await
    }

    /// Score the risk questionnaire.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn assess_risk(&self, answers: &RiskAnswers) -> Result<RiskAssessment> {
        let response: AssessResponse = self.post("beginner/assess", answers).await?;
        Ok(response.profile)
    }

    /// Get risk-tiered starter picks for a profile.
    ///
    /// With a `budget`, the response also splits the amount across tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is negative or non-finite, or the API
    /// request fails.
    pub async fn starter_picks(&self, profile: RiskProfile, budget: Option<f64>) -> Result<StarterRecommendations> {
        let mut endpoint = format!("beginner/recommend?profile={}", profile.as_str());
        if let Some(budget) = budget {
            if !(budget.is_finite() && budget > 0.0) {
                return Err(ApiError::InvalidInput(format!("invalid budget: {budget}")));
            }
            endpoint.push_str(&format!("&budget={budget}"));
        }
        self.get(&endpoint).await
    }

    /// Project compound growth of an investment.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are out of range or the API request
    /// fails.
    pub async fn calculate_growth(&self, request: &CalculatorRequest) -> Result<GrowthProjection> {
        request.validate()?;
        self.get(&format!("beginner/calculator?{}", request.query())).await
    }

    /// Get the beginner glossary.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn glossary(&self) -> Result<Glossary> {
        self.get("beginner/glossary").await
    }

    /// Get learning material for newcomers.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn learning_resources(&self) -> Result<LearningResources> {
        self.get("beginner/learn").await
    }

    /// Get the market snapshot for newcomers.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn market_overview(&self) -> Result<MarketOverview> {
        self.get("beginner/market-overview").await
    }
}

/// Parse a JSON response.
///
/// The API reports failures in the body (`success: false` and an `error`
/// message), sometimes with a 2xx status, so the body is checked first.
async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;

    let body: Value = match serde_json::from_str(&text) {
        Ok(body) => body,
        Err(_) if !status.is_success() => {
            return Err(ApiError::Api(format!("HTTP {status}: {text}")));
        }
        Err(e) => return Err(ApiError::Json(e)),
    };

    check_body(&body)?;

    if !status.is_success() {
        return Err(ApiError::Api(format!("HTTP {status}: {text}")));
    }

    Ok(serde_json::from_value(body)?)
}

/// Fail on an API-reported error.
fn check_body(body: &Value) -> Result<()> {
    let failed = body.get("success").and_then(Value::as_bool) == Some(false);
    let message = body.get("error").and_then(Value::as_str);

    match (failed, message) {
        (_, Some(message)) => Err(ApiError::Api(message.to_string())),
        (true, None) => Err(ApiError::Api("request was not successful".to_string())),
        (false, None) => Ok(()),
    }
}

/// Convert comparison records to entities, skipping invalid ones.
fn records_to_entities(records: Vec<Value>) -> Vec<Entity> {
    records
        .into_iter()
        .filter_map(|record| match Entity::from_record(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(error = %e, "skipping comparison record");
                None
            }
        })
        .collect()
}

/// Uppercase a ticker and append `.NS` when it has no exchange suffix.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] for a blank ticker or one containing
/// URL-reserved characters.
pub fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim().to_uppercase();

    if ticker.is_empty() {
        return Err(ApiError::InvalidInput("ticker is empty".to_string()));
    }

    if ticker.contains(['/', '?', '&', '#', ',', ' ']) {
        return Err(ApiError::InvalidInput(format!("invalid ticker: '{ticker}'")));
    }

    if ticker.contains('.') {
        Ok(ticker)
    } else {
        Ok(format!("{ticker}{DEFAULT_EXCHANGE_SUFFIX}"))
    }
}

fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || email.contains(['/', '?', '#', ' ']) {
        return Err(ApiError::InvalidInput(format!("invalid email: '{email}'")));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use investezy_traits::Comparable;
    use serde_json::json;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(
            client.url("stock/TCS.NS?years=5"),
            "https://investezy-backend.onrender.com/api/stock/TCS.NS?years=5"
        );

        let local = ApiConfig::default().with_base_url("http://localhost:5000/api/");
        let client = ApiClient::new(local).unwrap();
        assert_eq!(client.url("health"), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ApiConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(ApiClient::new(config), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(normalize_ticker("tcs").unwrap(), "TCS.NS");
        assert_eq!(normalize_ticker(" RELIANCE.BO ").unwrap(), "RELIANCE.BO");
        assert_eq!(normalize_ticker("infy.ns").unwrap(), "INFY.NS");
        assert!(matches!(normalize_ticker("  "), Err(ApiError::InvalidInput(_))));
        assert!(normalize_ticker("TCS/../health").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" demo@investezy.in ").unwrap(), "demo@investezy.in");
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b/c").is_err());
    }

    #[test]
    fn test_check_body() {
        assert!(check_body(&json!({ "stocks": [], "success": true })).is_ok());
        assert!(check_body(&json!({ "status": "healthy" })).is_ok());

        let err = check_body(&json!({ "error": "No tickers provided 😕", "success": false }));
        assert!(matches!(err, Err(ApiError::Api(ref m)) if m == "No tickers provided 😕"));

        let err = check_body(&json!({ "success": false }));
        assert!(matches!(err, Err(ApiError::Api(_))));
    }

    #[test]
    fn test_records_to_entities_skips_invalid() {
        let entities = records_to_entities(vec![
            json!({ "ticker": "TCS.NS", "companyName": "TCS" }),
            json!({ "companyName": "No ticker" }),
            json!("garbage"),
            json!({ "ticker": "INFY.NS" }),
        ]);
        let ids: Vec<&str> = entities.iter().map(Comparable::id).collect();
        assert_eq!(ids, vec!["TCS.NS", "INFY.NS"]);
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_input() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        let result = client.compare(&[], 5).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));

        let result = client.compare(&["TCS", " "], 5).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_beginner_inputs_validated_before_request() {
        let client = ApiClient::new(ApiConfig::default().with_base_url("http://127.0.0.1:9/api")).unwrap();

        let result = client.starter_picks(RiskProfile::Growth, Some(-500.0)).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));

        let request = CalculatorRequest {
            years: 50,
            ..CalculatorRequest::default()
        };
        let result = client.calculate_growth(&request).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_beginner_urls() {
        let client = ApiClient::new(ApiConfig::default().with_base_url("http://localhost:5000/api")).unwrap();
        assert_eq!(
            client.url(&format!("beginner/calculator?{}", CalculatorRequest::default().query())),
            "http://localhost:5000/api/beginner/calculator?amount=10000&monthly=1000&years=5&return=12"
        );
        assert_eq!(
            client.url("beginner/market-overview"),
            "http://localhost:5000/api/beginner/market-overview"
        );
    }

    #[tokio::test]
    async fn test_predict_rejects_zero_days() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        let result = client.predict("TCS", 0).await;
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }
}
