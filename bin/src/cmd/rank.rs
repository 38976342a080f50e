//! Rank command implementation.

use crate::{data, output};
use anyhow::Result;
use investezy_rank::registry::{self, MetricTab};
use investezy_rank::{
    ComparisonInsights, ComparisonSet, MetricDescriptor, RankedView, comparison_insights,
};
use investezy_traits::Entity;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct RankReport<'a, 'e> {
    rankings: &'a [RankedView<'e, Entity>],
    insights: &'a ComparisonInsights,
}

/// Which metrics to rank by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection {
    /// A catalogued metric by name.
    Metric(String),
    /// A custom descriptor file.
    Descriptor(PathBuf),
    /// Every metric under a tab.
    Tab(String),
}

impl Selection {
    /// Resolve the mutually exclusive flags; the overview tab by default.
    pub(crate) fn from_args(
        metric: Option<String>,
        descriptor: Option<PathBuf>,
        tab: Option<String>,
    ) -> Self {
        match (metric, descriptor, tab) {
            (Some(name), _, _) => Self::Metric(name),
            (None, Some(path), _) => Self::Descriptor(path),
            (None, None, Some(tab)) => Self::Tab(tab),
            (None, None, None) => Self::Tab(MetricTab::Overview.as_str().to_string()),
        }
    }

    /// Build the selected descriptors.
    pub(crate) fn descriptors(&self) -> Result<Vec<MetricDescriptor>> {
        let descriptors = match self {
            Self::Metric(name) => vec![registry::descriptor(name)?],
            Self::Descriptor(path) => vec![data::load_descriptor(path)?],
            Self::Tab(tab) => registry::tab_descriptors(MetricTab::parse(tab)?)?,
        };
        Ok(descriptors)
    }
}

/// Rank the stock records in a JSON file.
pub(crate) fn rank_file(path: &Path, selection: &Selection, limit: usize, json: bool) -> Result<()> {
    let descriptors = selection.descriptors()?;
    let entities = data::load_entities(path)?;
    info!(file = %path.display(), records = entities.len(), "loaded stock records");

    let set = ComparisonSet::with_limit(entities, limit)?;
    let views = set.rank_all(&descriptors);
    let insights = comparison_insights(set.entities())?;

    if json {
        return output::print_json(&RankReport {
            rankings: &views,
            insights: &insights,
        });
    }

    output::banner("Metric Ranking");
    println!("File:     {}", path.display());
    println!("Stocks:   {}", set.len());
    println!("Metrics:  {}", descriptors.len());
    println!();

    output::section("RANKINGS");
    for view in &views {
        output::print_view(view)?;
    }

    if set.len() >= 2 {
        output::section("INSIGHTS");
        if let Some(best) = &insights.best_performer {
            println!("{best}");
        }
        if let Some(safest) = &insights.safest_option {
            println!("{safest}");
        }
        println!("{}", insights.summary);
        println!();
    }

    Ok(())
}
