//! Predict command implementation.

use crate::output;
use anyhow::Result;
use investezy_api::ApiClient;

/// Show a short-horizon price prediction.
pub(crate) async fn show_prediction(client: &ApiClient, ticker: &str, days: u32, json: bool) -> Result<()> {
    let prediction = client.predict(ticker, days).await?;

    if json {
        return output::print_json(&prediction);
    }

    output::banner("Price Prediction");
    println!("Company:  {}", prediction.company_name);
    println!("Ticker:   {}", prediction.ticker);
    println!("Price:    ₹{}", prediction.current_price);
    println!("Method:   {}", prediction.method);
    println!();

    output::section(&format!("NEXT {days} TRADING DAYS"));

    println!("{:<12} {:>12}", "Date", "Price");
    println!("{}", "─".repeat(25));
    for point in &prediction.predictions {
        println!("{:<12} {:>12.2}", point.date, point.price);
    }
    println!();

    let arrow = if prediction.summary.expected_change >= 0.0 {
        "📈"
    } else {
        "📉"
    };
    println!("{arrow} {}", prediction.summary.message);
    println!();
    println!("Predictions are estimates, not investment advice.\n");

    Ok(())
}
