//! Portfolio and recommendation command implementations.

use crate::output;
use anyhow::Result;
use investezy_api::{ApiClient, Recommendation};

/// Show a user's holdings by platform.
pub(crate) async fn show_portfolio(client: &ApiClient, email: &str, json: bool) -> Result<()> {
    let portfolio = client.portfolio(email).await?;

    if json {
        return output::print_json(&portfolio);
    }

    output::banner("Portfolio");
    println!("Account:  {email}");
    println!();

    if portfolio.is_empty() {
        println!("No holdings found.\n");
        return Ok(());
    }

    for platform in portfolio.platforms() {
        let holdings = portfolio.holdings(platform);
        println!("{platform} ({} holdings):", holdings.len());
        println!("{}", "-".repeat(60));
        for ticker in holdings {
            println!("  {ticker}");
        }
        println!();
    }

    println!("{} distinct stock(s) across platforms\n", portfolio.all_tickers().len());
    Ok(())
}

fn recommendation_line(rec: &Recommendation) -> String {
    match rec.hint() {
        Some(hint) => format!("  {:<16} {hint}", rec.ticker()),
        None => format!("  {}", rec.ticker()),
    }
}

/// Show recommendations based on a user's holdings.
pub(crate) async fn show_recommendations(client: &ApiClient, email: &str, json: bool) -> Result<()> {
    let recs = client.recommend(email).await?;

    if json {
        return output::print_json(&recs);
    }

    output::banner("Recommendations");
    println!("Account:  {email}");
    println!("Based on: {}", recs.portfolio.join(", "));
    println!();

    output::section("YOU MIGHT ALSO LIKE");
    for rec in &recs.recommendations {
        println!("{}", recommendation_line(rec));
    }
    println!();

    if let Some(note) = &recs.note {
        println!("{note}\n");
    }

    Ok(())
}
