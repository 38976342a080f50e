//! Metric listing command implementation.

use crate::output;
use anyhow::Result;
use investezy_rank::registry::{self, MetricInfo, MetricTab};
use investezy_rank::MetricDescriptor;
use serde::Serialize;

#[derive(Serialize)]
struct MetricRow {
    name: &'static str,
    tab: MetricTab,
    descriptor: MetricDescriptor,
}

/// Tabs to list, optionally filtered by name.
fn selected_tabs(tab: Option<&str>) -> Result<Vec<MetricTab>> {
    match tab {
        Some(name) => Ok(vec![MetricTab::parse(name)?]),
        None => Ok(MetricTab::ALL.to_vec()),
    }
}

/// List the catalogued metrics, optionally filtered by tab.
pub(crate) fn list_metrics(tab: Option<&str>, verbose: bool, json: bool) -> Result<()> {
    let tabs = selected_tabs(tab)?;

    if json {
        let rows = tabs
            .iter()
            .flat_map(|&tab| registry::metrics_by_tab(tab))
            .map(|info: MetricInfo| {
                Ok(MetricRow {
                    name: info.name,
                    tab: info.tab,
                    descriptor: info.descriptor()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        return output::print_json(&rows);
    }

    output::banner("Available Metrics");

    for tab in tabs {
        println!("{} ({}):", tab.as_str(), tab.description());
        println!("{}", "-".repeat(60));

        for info in registry::metrics_by_tab(tab) {
            if verbose {
                let descriptor = info.descriptor()?;
                println!(
                    "  {:20} - {} [{}, {:?}]",
                    info.name,
                    descriptor.title(),
                    descriptor.path(),
                    descriptor.direction()
                );
                if let Some(description) = descriptor.description() {
                    println!("  {:20}   {}", "", description);
                }
            } else {
                println!("  {:20} {}", info.name, info.description);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for titles, paths and directions.\n");
    }

    Ok(())
}
