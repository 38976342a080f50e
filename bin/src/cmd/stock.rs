//! Stock command implementation.

use crate::output;
use anyhow::Result;
use investezy_api::ApiClient;
use investezy_rank::registry::{self, MetricTab};
use investezy_rank::friendly_message;
use investezy_traits::{Comparable, Entity};

/// One formatted line per catalogued metric under `tab`.
fn metric_lines(entity: &Entity, tab: MetricTab) -> Result<Vec<(String, String)>> {
    registry::tab_descriptors(tab)?
        .into_iter()
        .map(|descriptor| {
            let value = descriptor.format().format(&entity.metric(descriptor.path()));
            Ok((descriptor.title().to_string(), value))
        })
        .collect()
}

/// Show one stock's metrics, grouped by tab.
pub(crate) async fn show_stock(client: &ApiClient, ticker: &str, years: u32, json: bool) -> Result<()> {
    let stock = client.stock(ticker, years).await?;

    if json {
        return output::print_json(&stock);
    }

    let entity = stock.to_entity()?;

    output::banner("Stock Overview");
    println!("Company:  {}", stock.company_name);
    println!("Ticker:   {}", stock.ticker);
    println!("Price:    ₹{}", stock.latest_price);
    println!();

    let message = stock
        .friendly_message
        .clone()
        .unwrap_or_else(|| friendly_message(&entity));
    println!("{message}");
    println!();

    for tab in MetricTab::ALL {
        output::section(&tab.as_str().to_uppercase());
        for (title, value) in metric_lines(&entity, tab)? {
            println!("  {title:<30} {value:>16}");
        }
        println!();
    }

    Ok(())
}
