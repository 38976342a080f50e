//! Qualitative labels for the top-ranked entity.

use crate::descriptor::MetricDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A qualitative label shown under a ranked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualitativeLabel {
    /// Top entry of a non-risk, non-neutral metric.
    #[serde(rename = "Best Performer")]
    BestPerformer,
    /// Top entry of a risk metric.
    #[serde(rename = "Lowest Risk")]
    LowestRisk,
}

impl QualitativeLabel {
    /// Display text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestPerformer => "Best Performer",
            Self::LowestRisk => "Lowest Risk",
        }
    }

    /// The label for the entry at `index` in rank order (0 is first).
    ///
    /// Only the first entry of a non-neutral metric is labelled.
    pub const fn for_rank(descriptor: &MetricDescriptor, index: usize) -> Option<Self> {
        if index != 0 || descriptor.is_neutral() {
            None
        } else if descriptor.is_risk_metric() {
            Some(Self::LowestRisk)
        } else {
            Some(Self::BestPerformer)
        }
    }
}

impl fmt::Display for QualitativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{DescriptorConfig, Direction};

    fn descriptor(config: DescriptorConfig) -> MetricDescriptor {
        MetricDescriptor::new(config).unwrap()
    }

    #[test]
    fn test_top_entry_labels() {
        let returns = descriptor(DescriptorConfig::new("returns.absolute", "Returns"));
        assert_eq!(
            QualitativeLabel::for_rank(&returns, 0),
            Some(QualitativeLabel::BestPerformer)
        );
        assert_eq!(QualitativeLabel::for_rank(&returns, 1), None);

        let risk = descriptor(
            DescriptorConfig::new("risk.fluctuation", "Risk Level")
                .with_direction(Direction::LowerIsBetter)
                .risk(),
        );
        assert_eq!(
            QualitativeLabel::for_rank(&risk, 0),
            Some(QualitativeLabel::LowestRisk)
        );
    }

    #[test]
    fn test_lower_is_better_without_risk_flag() {
        let pe = descriptor(
            DescriptorConfig::new("fundamentals.peRatio", "P/E")
                .with_direction(Direction::LowerIsBetter),
        );
        assert_eq!(
            QualitativeLabel::for_rank(&pe, 0),
            Some(QualitativeLabel::BestPerformer)
        );
    }

    #[test]
    fn test_neutral_never_labelled() {
        let cap = descriptor(
            DescriptorConfig::new("fundamentals.marketCap", "Market Cap")
                .with_direction(Direction::Neutral),
        );
        assert_eq!(QualitativeLabel::for_rank(&cap, 0), None);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(QualitativeLabel::LowestRisk.to_string(), "Lowest Risk");
        assert_eq!(
            serde_json::to_string(&QualitativeLabel::BestPerformer).unwrap(),
            "\"Best Performer\""
        );
    }
}
