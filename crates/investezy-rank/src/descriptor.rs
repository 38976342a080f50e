//! Metric descriptors.
//!
//! A descriptor says which attribute to rank by and how to interpret
//! "better". Descriptors are validated when they are built or deserialized,
//! so a ranking never fails half-way because of a contradictory
//! configuration.

use crate::format::{MAX_DECIMALS, ValueFormat};
use investezy_traits::{InvestezyError, MetricPath, MetricValue, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Which end of a metric's range is favoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger values rank first and normalize towards 100.
    #[default]
    HigherIsBetter,
    /// Smaller values rank first and normalize towards 100.
    LowerIsBetter,
    /// No inherent "better"; values are scored by closeness to the centre.
    ///
    /// Neutral metrics still list entities largest first.
    Neutral,
}

impl Direction {
    /// Whether rank order is descending by value.
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::HigherIsBetter | Self::Neutral)
    }

    /// Whether this is the neutral direction.
    pub const fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

/// An ordered list of categories, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryScale {
    categories: Vec<String>,
}

impl CategoryScale {
    /// Build a scale from categories listed best first.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::InvalidDescriptor`] if the scale is empty or
    /// lists a category twice.
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(InvestezyError::InvalidDescriptor(
                "category scale is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.as_str()) {
                return Err(InvestezyError::InvalidDescriptor(format!(
                    "category '{category}' appears twice in scale"
                )));
            }
        }

        Ok(Self { categories })
    }

    /// The dashboard's risk meter: `Safe`, `Moderate Risk`, `High Risk`.
    pub fn risk_meter() -> Self {
        Self {
            categories: vec![
                "Safe".to_string(),
                "Moderate Risk".to_string(),
                "High Risk".to_string(),
            ],
        }
    }

    /// Position of a category on the scale, 0 being best.
    pub fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// The categories, best first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl TryFrom<Vec<String>> for CategoryScale {
    type Error = InvestezyError;

    fn try_from(categories: Vec<String>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<CategoryScale> for Vec<String> {
    fn from(scale: CategoryScale) -> Self {
        scale.categories
    }
}

/// How entities are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SortPolicy {
    /// Compare numeric leaves directly, following the descriptor's direction.
    #[default]
    Numeric,
    /// Custom comparator: order categorical leaves by their position on a
    /// scale, best first.
    CategoryRank {
        /// The categories, best first.
        scale: CategoryScale,
    },
}

impl SortPolicy {
    /// Whether a custom comparator replaces numeric comparison.
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::CategoryRank { .. })
    }
}

/// Plain, unvalidated descriptor settings.
///
/// This is the shape descriptors take in JSON files. Convert it with
/// [`MetricDescriptor::new`] (or `TryFrom`) to get a validated descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorConfig {
    /// Dotted path into the entity, e.g. `returns.absolute`.
    pub path: String,

    /// Display title.
    pub title: String,

    /// Optional explanation shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value formatter.
    #[serde(default)]
    pub format: ValueFormat,

    /// Which end of the range is favoured.
    #[serde(default)]
    pub direction: Direction,

    /// Ordering strategy.
    #[serde(default)]
    pub sort: SortPolicy,

    /// Use risk wording ("Lowest Risk") for the top label.
    #[serde(default)]
    pub risk_metric: bool,
}

impl DescriptorConfig {
    /// Start a higher-is-better, plainly formatted config.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            description: None,
            format: ValueFormat::default(),
            direction: Direction::default(),
            sort: SortPolicy::default(),
            risk_metric: false,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the value formatter.
    #[must_use]
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the ordering strategy.
    #[must_use]
    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    /// Mark as a risk metric.
    #[must_use]
    pub const fn risk(mut self) -> Self {
        self.risk_metric = true;
        self
    }
}

/// A validated metric descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorConfig", into = "DescriptorConfig")]
pub struct MetricDescriptor {
    path: MetricPath,
    title: String,
    description: Option<String>,
    format: ValueFormat,
    direction: Direction,
    sort: SortPolicy,
    risk_metric: bool,
}

impl MetricDescriptor {
    /// Validate a config into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::InvalidPath`] for a malformed path, and
    /// [`InvestezyError::InvalidDescriptor`] when:
    /// - the title is blank
    /// - a risk metric does not use [`Direction::LowerIsBetter`]
    /// - a custom comparator is combined with [`Direction::Neutral`]
    /// - a category scale is combined with [`Direction::HigherIsBetter`]
    /// - a fixed-precision format asks for more than [`MAX_DECIMALS`] places
    pub fn new(config: DescriptorConfig) -> Result<Self> {
        let path = MetricPath::parse(&config.path)?;

        if config.title.trim().is_empty() {
            return Err(InvestezyError::InvalidDescriptor(format!(
                "metric '{path}' has no title"
            )));
        }

        if !config.format.is_bounded() {
            return Err(InvestezyError::InvalidDescriptor(format!(
                "metric '{path}' asks for more than {MAX_DECIMALS} decimal places"
            )));
        }

        if config.risk_metric && config.direction != Direction::LowerIsBetter {
            return Err(InvestezyError::InvalidDescriptor(format!(
                "risk metric '{path}' must use lower_is_better, got {:?}",
                config.direction
            )));
        }

        if config.sort.is_custom() {
            match config.direction {
                Direction::Neutral => {
                    return Err(InvestezyError::InvalidDescriptor(format!(
                        "metric '{path}' combines a custom comparator with a neutral direction"
                    )));
                }
                Direction::HigherIsBetter => {
                    return Err(InvestezyError::InvalidDescriptor(format!(
                        "metric '{path}' ranks a best-first category scale as higher_is_better"
                    )));
                }
                Direction::LowerIsBetter => {}
            }
        }

        Ok(Self {
            path,
            title: config.title,
            description: config.description,
            format: config.format,
            direction: config.direction,
            sort: config.sort,
            risk_metric: config.risk_metric,
        })
    }

    /// The dotted path being ranked.
    pub const fn path(&self) -> &MetricPath {
        &self.path
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The value formatter.
    pub const fn format(&self) -> &ValueFormat {
        &self.format
    }

    /// The direction.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The ordering strategy.
    pub const fn sort(&self) -> &SortPolicy {
        &self.sort
    }

    /// Whether this is a risk metric.
    pub const fn is_risk_metric(&self) -> bool {
        self.risk_metric
    }

    /// Whether this is a neutral metric.
    pub const fn is_neutral(&self) -> bool {
        self.direction.is_neutral()
    }

    /// Project a value onto the number line used for ordering and
    /// normalization.
    ///
    /// Under [`SortPolicy::Numeric`] only numbers project; under
    /// [`SortPolicy::CategoryRank`] only categories on the scale do, at their
    /// scale position. Everything else is unavailable.
    pub fn score(&self, value: &MetricValue) -> Option<f64> {
        match &self.sort {
            SortPolicy::Numeric => value.as_number(),
            SortPolicy::CategoryRank { scale } => value
                .as_category()
                .and_then(|c| scale.position(c))
                .map(|p| p as f64),
        }
    }

    /// Three-way comparison of two projected scores in rank order.
    ///
    /// Unavailable scores always sort after available ones and compare equal
    /// to each other.
    pub fn compare_scores(&self, a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => {
                let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                if self.direction.is_descending() {
                    ord.reverse()
                } else {
                    ord
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl TryFrom<DescriptorConfig> for MetricDescriptor {
    type Error = InvestezyError;

    fn try_from(config: DescriptorConfig) -> Result<Self> {
        Self::new(config)
    }
}

impl From<MetricDescriptor> for DescriptorConfig {
    fn from(d: MetricDescriptor) -> Self {
        Self {
            path: d.path.to_string(),
            title: d.title,
            description: d.description,
            format: d.format,
            direction: d.direction,
            sort: d.sort,
            risk_metric: d.risk_metric,
        }
    }
}
