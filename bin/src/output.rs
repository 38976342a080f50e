//! Terminal output helpers for the Investezy CLI.

use anyhow::{Result, anyhow};
use investezy_rank::RankedView;
use investezy_traits::Comparable;
use polars::prelude::{DataFrame, Series};
use serde::Serialize;

/// Inner width of the banner box.
const BANNER_WIDTH: usize = 62;

/// Width of a full 0–100 position bar.
const BAR_WIDTH: usize = 20;

/// Print a boxed command banner.
pub(crate) fn banner(title: &str) {
    println!("\n╔{}╗", "═".repeat(BANNER_WIDTH));
    println!("║{:^BANNER_WIDTH$}║", title);
    println!("╚{}╝\n", "═".repeat(BANNER_WIDTH));
}

/// Print a section heading between heavy rules.
pub(crate) fn section(title: &str) {
    println!("{}", "━".repeat(60));
    println!("{title}");
    println!("{}\n", "━".repeat(60));
}

/// Print a value as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a 0–100 position as a fixed-width bar.
pub(crate) fn bar(position: f64) -> String {
    let filled = ((position.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print one ranked metric as a table.
pub(crate) fn print_view<T: Comparable>(view: &RankedView<'_, T>) -> Result<()> {
    let frame = view.to_frame()?;

    let ranks: Vec<u32> = column(&frame, "rank")?
        .u32()
        .map_err(|e| anyhow!("Rank column error: {e}"))?
        .into_iter()
        .flatten()
        .collect();
    let names: Vec<&str> = column(&frame, "name")?
        .str()
        .map_err(|e| anyhow!("Name column error: {e}"))?
        .into_iter()
        .flatten()
        .collect();
    let formatted: Vec<&str> = column(&frame, "formatted")?
        .str()
        .map_err(|e| anyhow!("Formatted column error: {e}"))?
        .into_iter()
        .flatten()
        .collect();
    let positions: Vec<f64> = column(&frame, "position")?
        .f64()
        .map_err(|e| anyhow!("Position column error: {e}"))?
        .into_iter()
        .flatten()
        .collect();
    let labels: Vec<Option<&str>> = column(&frame, "label")?
        .str()
        .map_err(|e| anyhow!("Label column error: {e}"))?
        .into_iter()
        .collect();

    println!("{}", view.title());
    println!("{}", "─".repeat(60));

    for i in 0..ranks.len() {
        let label = labels[i].map(|l| format!("  ← {l}")).unwrap_or_default();
        println!(
            "  {}. {:<24} {:>14}  {}{}",
            ranks[i],
            truncate(names[i], 24),
            formatted[i],
            bar(positions[i]),
            label
        );
    }
    println!();

    Ok(())
}

fn column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Series> {
    Ok(frame
        .column(name)
        .map_err(|e| anyhow!("Missing {name} column: {e}"))?
        .as_materialized_series())
}

/// Shorten a name to at most `max` characters.
pub(crate) fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let kept: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        assert_eq!(bar(100.0), "█".repeat(20));
        assert_eq!(bar(0.0), "░".repeat(20));
        assert_eq!(bar(50.0), format!("{}{}", "█".repeat(10), "░".repeat(10)));
        assert_eq!(bar(250.0), "█".repeat(20));
        assert_eq!(bar(72.0).chars().count(), 20);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("TCS", 24), "TCS");
        assert_eq!(
            truncate("Tata Consultancy Services Limited", 10),
            "Tata Cons…"
        );
    }
}
