//! Investezy CLI binary.
//!
//! Provides a command-line interface for ranking and comparing stocks.

mod cmd;
mod data;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use investezy_api::{
    ApiClient, ApiConfig, CalculatorRequest, Experience, Goal, RiskAnswers, RiskProfile, Timeline,
    Tolerance,
};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "investezy")]
#[command(about = "Side-by-side stock comparison for beginner investors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dashboard API base URL (overrides INVESTEZY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Show detailed output and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the standard comparison metrics
    Metrics {
        /// Filter by tab (overview, returns, risk, fundamentals)
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Rank stock records from a JSON file
    Rank {
        /// JSON file holding an array of stock records or a comparison response
        file: PathBuf,

        /// Catalogued metric name (see `investezy metrics`)
        #[arg(short, long, conflicts_with_all = ["descriptor", "tab"])]
        metric: Option<String>,

        /// JSON file holding a custom metric descriptor
        #[arg(short, long, conflicts_with = "tab")]
        descriptor: Option<PathBuf>,

        /// Rank by every metric under a tab
        #[arg(short, long)]
        tab: Option<String>,

        /// Largest number of records to rank side by side
        #[arg(short, long, default_value_t = investezy_rank::MAX_COMPARISON_SIZE)]
        limit: usize,
    },

    /// Compare stocks side by side using the dashboard API
    Compare {
        /// Ticker symbols (".NS" is appended when no exchange is given)
        #[arg(value_delimiter = ',', required = true)]
        tickers: Vec<String>,

        /// Tab to show (overview, returns, risk, fundamentals)
        #[arg(short, long, default_value = "overview")]
        tab: String,

        /// Lookback window in years
        #[arg(short, long, default_value = "5")]
        years: u32,
    },

    /// Show one stock's metrics
    Stock {
        /// Ticker symbol
        ticker: String,

        /// Lookback window in years
        #[arg(short, long, default_value = "5")]
        years: u32,
    },

    /// Show a user's demo portfolio
    Portfolio {
        /// Account email
        email: String,
    },

    /// Recommend stocks based on a user's portfolio
    Recommend {
        /// Account email
        email: String,
    },

    /// Predict a stock's price over the coming days
    Predict {
        /// Ticker symbol
        ticker: String,

        /// Number of trading days to predict
        #[arg(short, long, default_value = "30")]
        days: u32,
    },

    /// Guidance for first-time investors
    #[command(subcommand)]
    Beginner(BeginnerCommands),

    /// Check the dashboard API is up
    Health,
}

#[derive(Subcommand)]
enum BeginnerCommands {
    /// Find your investor risk profile
    Assess {
        /// Age in years
        #[arg(long, default_value = "30")]
        age: u32,

        /// Investment horizon (short, medium, long)
        #[arg(long, default_value = "medium", value_parser = parse_choice::<Timeline>)]
        timeline: Timeline,

        /// Prior experience (none, beginner, some, experienced)
        #[arg(long, default_value = "beginner", value_parser = parse_choice::<Experience>)]
        experience: Experience,

        /// Comfort with price swings (low, medium, high)
        #[arg(long, default_value = "medium", value_parser = parse_choice::<Tolerance>)]
        tolerance: Tolerance,

        /// Investment goal (safety, balanced, growth)
        #[arg(long, default_value = "balanced", value_parser = parse_choice::<Goal>)]
        goal: Goal,
    },

    /// Risk-tiered starter stocks for a profile
    Picks {
        /// Risk profile (very_conservative, conservative, moderate, growth, aggressive)
        #[arg(short, long, default_value = "moderate", value_parser = parse_profile)]
        profile: RiskProfile,

        /// Budget in rupees to split across tiers
        #[arg(short, long)]
        budget: Option<f64>,
    },

    /// Project compound growth of an investment
    Calculate {
        /// Initial investment in rupees
        #[arg(short, long, default_value = "10000")]
        amount: f64,

        /// Amount added every month
        #[arg(short, long, default_value = "1000")]
        monthly: f64,

        /// Horizon in years (1-40)
        #[arg(short, long, default_value = "5")]
        years: u32,

        /// Expected annual return in percent (0-30)
        #[arg(short = 'r', long = "return", default_value = "12")]
        expected_return: f64,
    },

    /// Look up stock market terms
    Glossary {
        /// Only show terms mentioning this text
        query: Option<String>,
    },

    /// Read the basics
    Learn,

    /// Today's indices and beginner-friendly sectors
    Market,
}

/// Parse a lowercase wire name into one of the questionnaire's choice enums.
fn parse_choice<T: DeserializeOwned>(value: &str) -> std::result::Result<T, String> {
    let wire = serde_json::Value::String(value.trim().to_lowercase());
    serde_json::from_value(wire).map_err(|_| format!("unknown choice: '{value}'"))
}

fn parse_profile(value: &str) -> std::result::Result<RiskProfile, String> {
    RiskProfile::parse(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Install the fmt subscriber, logging to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "investezy=debug,warn"
    } else {
        "investezy=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// Build an API client from the environment and the `--api-url` flag.
fn api_client(api_url: Option<String>) -> Result<ApiClient> {
    let mut config = ApiConfig::from_env()?;
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }
    Ok(ApiClient::new(config)?)
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        api_url,
        verbose,
        json,
    } = cli;

    match command {
        Commands::Metrics { tab } => {
            cmd::metrics::list_metrics(tab.as_deref(), verbose, json)?;
        }
        Commands::Rank {
            file,
            metric,
            descriptor,
            tab,
            limit,
        } => {
            let selection = cmd::rank::Selection::from_args(metric, descriptor, tab);
            cmd::rank::rank_file(&file, &selection, limit, json)?;
        }
        Commands::Compare {
            tickers,
            tab,
            years,
        } => {
            let client = api_client(api_url)?;
            cmd::compare::compare_stocks(&client, &tickers, &tab, years, json).await?;
        }
        Commands::Stock { ticker, years } => {
            let client = api_client(api_url)?;
            cmd::stock::show_stock(&client, &ticker, years, json).await?;
        }
        Commands::Portfolio { email } => {
            let client = api_client(api_url)?;
            cmd::portfolio::show_portfolio(&client, &email, json).await?;
        }
        Commands::Recommend { email } => {
            let client = api_client(api_url)?;
            cmd::portfolio::show_recommendations(&client, &email, json).await?;
        }
        Commands::Predict { ticker, days } => {
            let client = api_client(api_url)?;
            cmd::predict::show_prediction(&client, &ticker, days, json).await?;
        }
        Commands::Beginner(command) => {
            let client = api_client(api_url)?;
            run_beginner(&client, command, json).await?;
        }
        Commands::Health => {
            let client = api_client(api_url)?;
            cmd::health::check_health(&client, json).await?;
        }
    }

    Ok(())
}

async fn run_beginner(client: &ApiClient, command: BeginnerCommands, json: bool) -> Result<()> {
    match command {
        BeginnerCommands::Assess {
            age,
            timeline,
            experience,
            tolerance,
            goal,
        } => {
            let answers = RiskAnswers {
                age,
                timeline,
                experience,
                risk_tolerance: tolerance,
                goal,
            };
            cmd::beginner::assess(client, &answers, json).await
        }
        BeginnerCommands::Picks { profile, budget } => {
            cmd::beginner::show_picks(client, profile, budget, json).await
        }
        BeginnerCommands::Calculate {
            amount,
            monthly,
            years,
            expected_return,
        } => {
            let request = CalculatorRequest {
                amount,
                monthly,
                years,
                expected_return,
            };
            cmd::beginner::show_projection(client, &request, json).await
        }
        BeginnerCommands::Glossary { query } => {
            cmd::beginner::show_glossary(client, query.as_deref(), json).await
        }
        BeginnerCommands::Learn => cmd::beginner::show_learning(client, json).await,
        BeginnerCommands::Market => cmd::beginner::show_market(client, json).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::parse_from(["investezy", "compare", "TCS,INFY", "--tab", "risk", "--json"]);
        assert!(cli.json);
        match cli.command {
            Commands::Compare { tickers, tab, years } => {
                assert_eq!(tickers, vec!["TCS", "INFY"]);
                assert_eq!(tab, "risk");
                assert_eq!(years, 5);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_beginner_assess() {
        let cli = Cli::parse_from([
            "investezy",
            "beginner",
            "assess",
            "--age",
            "55",
            "--timeline",
            "Long",
            "--experience",
            "none",
        ]);
        match cli.command {
            Commands::Beginner(BeginnerCommands::Assess {
                age,
                timeline,
                experience,
                tolerance,
                goal,
            }) => {
                assert_eq!(age, 55);
                assert_eq!(timeline, Timeline::Long);
                assert_eq!(experience, Experience::None);
                assert_eq!(tolerance, Tolerance::Medium);
                assert_eq!(goal, Goal::Balanced);
            }
            _ => panic!("expected beginner assess"),
        }

        let bad = Cli::try_parse_from(["investezy", "beginner", "assess", "--goal", "lottery"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_beginner_picks_and_calculate() {
        let cli = Cli::parse_from(["investezy", "beginner", "picks", "-p", "very-conservative", "-b", "50000"]);
        match cli.command {
            Commands::Beginner(BeginnerCommands::Picks { profile, budget }) => {
                assert_eq!(profile, RiskProfile::VeryConservative);
                assert_eq!(budget, Some(50000.0));
            }
            _ => panic!("expected beginner picks"),
        }

        let cli = Cli::parse_from(["investezy", "beginner", "calculate", "--return", "8", "-y", "10"]);
        match cli.command {
            Commands::Beginner(BeginnerCommands::Calculate {
                amount,
                years,
                expected_return,
                ..
            }) => {
                assert_eq!(amount, 10000.0);
                assert_eq!(years, 10);
                assert_eq!(expected_return, 8.0);
            }
            _ => panic!("expected beginner calculate"),
        }
    }

    #[test]
    fn test_rank_metric_conflicts_with_descriptor() {
        let result = Cli::try_parse_from([
            "investezy",
            "rank",
            "stocks.json",
            "--metric",
            "returns",
            "--descriptor",
            "custom.json",
        ]);
        assert!(result.is_err());
    }
}
