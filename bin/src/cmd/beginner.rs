//! Beginner command implementations.

use crate::output;
use anyhow::Result;
use investezy_api::{
    ApiClient, CalculatorRequest, Glossary, RiskAnswers, RiskProfile, StarterPick, TierSplit,
};

/// Score the risk questionnaire.
pub(crate) async fn assess(client: &ApiClient, answers: &RiskAnswers, json: bool) -> Result<()> {
    let assessment = client.assess_risk(answers).await?;

    if json {
        return output::print_json(&assessment);
    }

    output::banner("Investor Profile");
    println!("Profile:      {}", assessment.risk_profile.as_str());
    println!("Risk score:   {}/10", assessment.risk_score);
    println!("Risky share:  up to {}% of your budget", assessment.max_risk_allocation);
    println!();
    println!("{}", assessment.suggestion);
    println!();
    println!(
        "Next: investezy beginner picks --profile {}\n",
        assessment.risk_profile.as_str()
    );

    Ok(())
}

fn split_line(name: &str, percent: f64, amount: Option<f64>) -> String {
    let mut line = format!("  {name:<10} {percent:>5.0}%  {}", output::bar(percent));
    if let Some(amount) = amount {
        line.push_str(&format!(" ₹{amount:.0}"));
    }
    line
}

fn pick_line(pick: &StarterPick) -> String {
    format!("  {:<16} {}", pick.ticker, pick.message)
}

/// Show risk-tiered starter picks for a profile.
pub(crate) async fn show_picks(
    client: &ApiClient,
    profile: RiskProfile,
    budget: Option<f64>,
    json: bool,
) -> Result<()> {
    let recs = client.starter_picks(profile, budget).await?;

    if json {
        return output::print_json(&recs);
    }

    output::banner("Starter Picks");
    println!("Profile:  {}", recs.risk_profile.as_str());
    if let Some(budget) = budget {
        println!("Budget:   ₹{budget:.0}");
    }
    println!();

    output::section("ALLOCATION");
    let TierSplit { safe, moderate, growth } = recs.allocation;
    let amounts = recs.budget_allocation;
    println!("{}", split_line("safe", safe, amounts.map(|a| a.safe)));
    println!("{}", split_line("moderate", moderate, amounts.map(|a| a.moderate)));
    println!("{}", split_line("growth", growth, amounts.map(|a| a.growth)));
    println!();

    for (tier, picks) in recs.recommendations.tiers() {
        if picks.is_empty() {
            continue;
        }
        output::section(&tier.to_uppercase());
        for pick in picks {
            println!("{}", pick_line(pick));
        }
        println!();
    }

    if let Some(note) = &recs.note {
        println!("{note}\n");
    }

    Ok(())
}

/// Project compound growth of an investment.
pub(crate) async fn show_projection(client: &ApiClient, request: &CalculatorRequest, json: bool) -> Result<()> {
    let projection = client.calculate_growth(request).await?;

    if json {
        return output::print_json(&projection);
    }

    output::banner("Growth Calculator");
    println!("Start:    ₹{:.2}", projection.initial_investment);
    println!("Monthly:  ₹{:.2}", projection.monthly_contribution);
    println!("Horizon:  {} years at {}% a year", projection.years, projection.expected_return);
    println!();

    output::section("JOURNEY");
    println!("{:>6} {:>14} {:>14} {:>14}", "Month", "Value", "Invested", "Growth");
    println!("{}", "─".repeat(51));
    for point in &projection.journey {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2}",
            point.month, point.value, point.total_invested, point.growth
        );
    }
    println!();

    println!("Final value:     ₹{:.2}", projection.final_value);
    println!("Total invested:  ₹{:.2}", projection.total_invested);
    println!(
        "Total growth:    ₹{:.2} ({:.2}%)",
        projection.total_growth, projection.growth_percentage
    );
    println!();
    println!("{}", projection.friendly_explanation);
    if let Some(note) = &projection.note {
        println!("{note}");
    }
    println!();

    Ok(())
}

/// Lines for the glossary, optionally filtered by a search query.
fn glossary_lines(glossary: &Glossary, query: Option<&str>) -> Vec<String> {
    let entries = match query {
        Some(query) => glossary.search(query),
        None => glossary
            .categories
            .iter()
            .flat_map(|c| c.terms.iter().map(move |t| (c, t)))
            .collect(),
    };

    let mut lines = Vec::new();
    let mut current = None;
    for (category, term) in entries {
        if current != Some(category.name.as_str()) {
            current = Some(category.name.as_str());
            lines.push(format!("{} {}", category.emoji, category.name).trim().to_string());
        }
        lines.push(format!("  {}: {}", term.term, term.definition));
        if let Some(example) = &term.example {
            lines.push(format!("    e.g. {example}"));
        }
    }
    lines
}

/// Show the glossary, optionally searched.
pub(crate) async fn show_glossary(client: &ApiClient, query: Option<&str>, json: bool) -> Result<()> {
    let glossary = client.glossary().await?;
    let lines = glossary_lines(&glossary, query);

    if json {
        return match query {
            Some(query) => {
                let terms: Vec<_> = glossary.search(query).into_iter().map(|(_, t)| t).collect();
                output::print_json(&terms)
            }
            None => output::print_json(&glossary),
        };
    }

    output::banner("Glossary");
    if lines.is_empty() {
        println!("No terms match '{}'.\n", query.unwrap_or_default());
        return Ok(());
    }
    for line in lines {
        println!("{line}");
    }
    println!();

    if let Some(note) = &glossary.note {
        println!("{note}\n");
    }

    Ok(())
}

/// Show learning material for newcomers.
pub(crate) async fn show_learning(client: &ApiClient, json: bool) -> Result<()> {
    let resources = client.learning_resources().await?;

    if json {
        return output::print_json(&resources);
    }

    output::banner("Learn the Basics");

    output::section("BASICS");
    for lesson in &resources.basics {
        println!("  {}\n    {}", lesson.title, lesson.description);
    }
    println!();

    output::section("TIPS");
    for tip in &resources.tips {
        println!("  {}\n    {}", tip.title, tip.description);
    }
    println!();

    output::section("COMMON TERMS");
    for term in &resources.common_terms {
        println!("  {:<20} {}", term.term, term.meaning);
    }
    println!();

    Ok(())
}

/// Show the market snapshot for newcomers.
pub(crate) async fn show_market(client: &ApiClient, json: bool) -> Result<()> {
    let overview = client.market_overview().await?;

    if json {
        return output::print_json(&overview);
    }

    output::banner("Market Overview");

    output::section("INDICES");
    if overview.market_summary.is_empty() {
        println!("  Index data unavailable");
    }
    for index in &overview.market_summary {
        println!(
            "  {} {:<12} {:>12.2} {:>+7.2}%  {}",
            index.emoji, index.name, index.value, index.change, index.description
        );
    }
    println!();
    println!("{}", overview.market_mood);
    println!();

    output::section("SECTORS");
    for sector in &overview.trending_sectors {
        println!(
            "  {} {:<22} {}",
            sector.emoji,
            sector.name,
            "⭐".repeat(usize::from(sector.beginner_friendliness.min(5)))
        );
        println!("      {}", sector.description);
        if !sector.example_stocks.is_empty() {
            println!("      e.g. {}", sector.example_stocks.join(", "));
        }
    }
    println!();

    if let Some(tip) = &overview.beginner_tip {
        println!("{tip}\n");
    }

    Ok(())
}
