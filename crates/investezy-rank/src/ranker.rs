//! The metric ranker.
//!
//! [`rank`] turns a collection of entities and a [`MetricDescriptor`] into a
//! [`RankedView`]: entries in rank order, each with its formatted value, its
//! normalized position on the 0–100 scale and an optional qualitative label.
//!
//! Ranking is a pure function of its inputs. Entities are borrowed and never
//! mutated, so the same collection can be ranked from several threads at
//! once, one descriptor per call.
//!
//! # Ordering policy
//!
//! - numeric metrics sort descending for higher-is-better and neutral
//!   metrics, ascending for lower-is-better
//! - category-rank metrics sort by scale position, best first
//! - values that do not project onto a score (absent, `N/A`, a category under
//!   numeric comparison) always sort last
//! - ties keep input order

use crate::descriptor::MetricDescriptor;
use crate::label::QualitativeLabel;
use crate::normalise::{Bounds, normalise};
use investezy_traits::{Comparable, InvestezyError, MetricPath, MetricValue, Result};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Largest number of entities the dashboard compares side by side.
pub const MAX_COMPARISON_SIZE: usize = 3;

/// One entity's place in a ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<'a, T> {
    /// 1 for the top entry.
    pub rank: usize,
    /// The ranked entity.
    pub entity: &'a T,
    /// The resolved metric value.
    pub value: MetricValue,
    /// The value rendered by the descriptor's formatter, or `N/A`.
    pub formatted_value: String,
    /// Position on the 0–100 display scale.
    pub normalized_position: f64,
    /// Label for the top entry, if any.
    pub label: Option<QualitativeLabel>,
}

/// A ranked, normalized and labelled view of a collection for one metric.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedView<'a, T> {
    title: String,
    path: MetricPath,
    entries: Vec<RankedEntry<'a, T>>,
}

impl<'a, T: Comparable> RankedView<'a, T> {
    /// The metric's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The ranked metric path.
    pub const fn path(&self) -> &MetricPath {
        &self.path
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[RankedEntry<'a, T>] {
        &self.entries
    }

    /// The top entry, if the view is non-empty.
    pub fn top(&self) -> Option<&RankedEntry<'a, T>> {
        self.entries.first()
    }

    /// Find the entry for an entity id.
    pub fn entry(&self, id: &str) -> Option<&RankedEntry<'a, T>> {
        self.entries.iter().find(|e| e.entity.id() == id)
    }

    /// Entity ids in rank order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.entity.id()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the view, returning its entries.
    pub fn into_entries(self) -> Vec<RankedEntry<'a, T>> {
        self.entries
    }
}

/// Rank entities by a metric.
///
/// Never fails: malformed or missing leaves degrade to unavailable values,
/// which sort last, normalize to 0 and format as `N/A`.
///
/// # Example
///
/// ```
/// use investezy_rank::{DescriptorConfig, MetricDescriptor, ValueFormat, rank};
/// use investezy_traits::Entity;
/// use serde_json::json;
///
/// let stocks = vec![
///     Entity::new("A", "Alpha", json!({ "returns": { "absolute": 20.0 } })),
///     Entity::new("B", "Beta", json!({ "returns": { "absolute": 40.0 } })),
/// ];
/// let descriptor = MetricDescriptor::new(
///     DescriptorConfig::new("returns.absolute", "Returns").with_format(ValueFormat::Percent),
/// )
/// .unwrap();
///
/// let view = rank(&stocks, &descriptor);
/// assert_eq!(view.ids(), vec!["B", "A"]);
/// assert_eq!(view.entries()[0].formatted_value, "40%");
/// ```
pub fn rank<'a, T: Comparable>(entities: &'a [T], descriptor: &MetricDescriptor) -> RankedView<'a, T> {
    let values: Vec<MetricValue> = entities
        .iter()
        .map(|e| e.metric(descriptor.path()))
        .collect();
    let scores: Vec<Option<f64>> = values.iter().map(|v| descriptor.score(v)).collect();
    let bounds = Bounds::from_scores(scores.iter().copied());

    // `sort_by` is stable, so equal scores keep input order.
    let mut order: Vec<usize> = (0..entities.len()).collect();
    order.sort_by(|&a, &b| descriptor.compare_scores(scores[a], scores[b]));

    let entries: Vec<RankedEntry<'a, T>> = order
        .into_iter()
        .enumerate()
        .map(|(index, i)| {
            let value = values[i].clone();
            RankedEntry {
                rank: index + 1,
                entity: &entities[i],
                formatted_value: descriptor.format().format(&value),
                normalized_position: normalise(scores[i], bounds, descriptor.direction()),
                label: QualitativeLabel::for_rank(descriptor, index),
                value,
            }
        })
        .collect();

    debug!(
        metric = %descriptor.path(),
        entities = entities.len(),
        unavailable = scores.iter().filter(|s| s.is_none()).count(),
        "ranked comparison"
    );

    RankedView {
        title: descriptor.title().to_string(),
        path: descriptor.path().clone(),
        entries,
    }
}

/// A validated group of entities compared side by side.
///
/// Ids must be unique and the group must not exceed its size limit.
#[derive(Debug, Clone)]
pub struct ComparisonSet<T> {
    entities: Vec<T>,
}

impl<T: Comparable> ComparisonSet<T> {
    /// Build a set holding at most [`MAX_COMPARISON_SIZE`] entities.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or too many entities.
    pub fn new(entities: Vec<T>) -> Result<Self> {
        Self::with_limit(entities, MAX_COMPARISON_SIZE)
    }

    /// Build a set with a custom size limit.
    ///
    /// # Errors
    ///
    /// Returns [`InvestezyError::ComparisonTooLarge`] when `entities` exceeds
    /// `limit`, and [`InvestezyError::DuplicateEntity`] on a repeated id.
    pub fn with_limit(entities: Vec<T>, limit: usize) -> Result<Self> {
        if entities.len() > limit {
            return Err(InvestezyError::ComparisonTooLarge {
                size: entities.len(),
                limit,
            });
        }

        let mut seen = HashSet::new();
        for entity in &entities {
            if !seen.insert(entity.id()) {
                return Err(InvestezyError::DuplicateEntity(entity.id().to_string()));
            }
        }

        Ok(Self { entities })
    }

    /// Rank the set by one metric.
    pub fn rank(&self, descriptor: &MetricDescriptor) -> RankedView<'_, T> {
        rank(&self.entities, descriptor)
    }

    /// Rank the set by each metric in turn.
    pub fn rank_all<'d, I>(&self, descriptors: I) -> Vec<RankedView<'_, T>>
    where
        I: IntoIterator<Item = &'d MetricDescriptor>,
    {
        descriptors.into_iter().map(|d| self.rank(d)).collect()
    }

    /// The entities, in input order.
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Consume the set, returning its entities.
    pub fn into_inner(self) -> Vec<T> {
        self.entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CategoryScale, DescriptorConfig, Direction, SortPolicy};
    use crate::format::ValueFormat;
    use approx::assert_relative_eq;
    use investezy_traits::Entity;
    use serde_json::{Value, json};

    fn stock(id: &str, value: Value) -> Entity {
        Entity::new(id, format!("{id} Ltd"), json!({ "metric": { "value": value } }))
    }

    fn metric(direction: Direction) -> MetricDescriptor {
        MetricDescriptor::new(
            DescriptorConfig::new("metric.value", "Metric")
                .with_format(ValueFormat::Percent)
                .with_direction(direction),
        )
        .unwrap()
    }

    fn risk_metric() -> MetricDescriptor {
        MetricDescriptor::new(
            DescriptorConfig::new("metric.value", "Risk Level")
                .with_format(ValueFormat::Percent)
                .with_direction(Direction::LowerIsBetter)
                .risk(),
        )
        .unwrap()
    }

    fn positions<T: Comparable>(view: &RankedView<'_, T>) -> Vec<f64> {
        view.entries().iter().map(|e| e.normalized_position).collect()
    }

    #[test]
    fn test_higher_is_better_ties_are_stable() {
        let stocks = vec![
            stock("A", json!(40)),
            stock("B", json!(20)),
            stock("C", json!(20)),
        ];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));

        assert_eq!(view.ids(), vec!["A", "B", "C"]);
        let pos = positions(&view);
        assert_relative_eq!(pos[0], 100.0);
        assert_relative_eq!(pos[1], 0.0);
        assert_relative_eq!(pos[2], 0.0);
        assert_eq!(view.entries()[0].label, Some(QualitativeLabel::BestPerformer));
        assert_eq!(view.entries()[1].label, None);
        assert_eq!(view.entries()[2].label, None);
    }

    #[test]
    fn test_max_value_ranks_first() {
        let stocks = vec![
            stock("A", json!(3.2)),
            stock("B", json!(-1.5)),
            stock("C", json!(17.9)),
            stock("D", json!(8.0)),
        ];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));

        assert_eq!(view.ids(), vec!["C", "D", "A", "B"]);
        assert_relative_eq!(view.top().unwrap().normalized_position, 100.0);
        assert_relative_eq!(view.entries()[3].normalized_position, 0.0);
    }

    #[test]
    fn test_risk_metric_order_and_label() {
        let stocks = vec![
            stock("MID", json!(12)),
            stock("HIGH", json!(30)),
            stock("LOW", json!(5)),
        ];
        let view = rank(&stocks, &risk_metric());

        assert_eq!(view.ids(), vec!["LOW", "MID", "HIGH"]);
        assert_eq!(view.entries()[0].label, Some(QualitativeLabel::LowestRisk));
        assert_eq!(view.entries()[0].formatted_value, "5%");
        let pos = positions(&view);
        assert_relative_eq!(pos[0], 100.0);
        assert_relative_eq!(pos[1], 72.0);
        assert_relative_eq!(pos[2], 0.0);
    }

    #[test]
    fn test_all_equal_values() {
        let stocks = vec![
            stock("A", json!(15)),
            stock("B", json!(15)),
            stock("C", json!(15)),
        ];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));

        assert_eq!(view.ids(), vec!["A", "B", "C"]);
        for pos in positions(&view) {
            assert_relative_eq!(pos, 100.0);
        }
        assert_eq!(view.entries()[0].label, Some(QualitativeLabel::BestPerformer));
    }

    #[test]
    fn test_unavailable_sorts_last_and_scores_zero() {
        let stocks = vec![
            stock("NA", json!("N/A")),
            stock("LOW", json!(1)),
            Entity::new("MISSING", "Missing Ltd", json!({ "other": 1 })),
            stock("HIGH", json!(9)),
            stock("NULL", json!(null)),
        ];

        for direction in [Direction::HigherIsBetter, Direction::LowerIsBetter] {
            let view = rank(&stocks, &metric(direction));
            let ids = view.ids();
            assert_eq!(&ids[2..], &["NA", "MISSING", "NULL"]);
            for entry in &view.entries()[2..] {
                assert!(entry.value.is_unavailable());
                assert_eq!(entry.formatted_value, "N/A");
                assert_relative_eq!(entry.normalized_position, 0.0);
            }
        }
    }

    #[test]
    fn test_only_unavailable_values() {
        let stocks = vec![stock("A", json!("N/A")), stock("B", json!(null))];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));

        assert_eq!(view.ids(), vec!["A", "B"]);
        for pos in positions(&view) {
            assert_relative_eq!(pos, 0.0);
        }
    }

    #[test]
    fn test_empty_input() {
        let stocks: Vec<Entity> = Vec::new();
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));
        assert!(view.is_empty());
        assert!(view.top().is_none());
    }

    #[test]
    fn test_neutral_metric() {
        let stocks = vec![
            stock("LOW", json!(10)),
            stock("MID", json!(21)),
            stock("HIGH", json!(30)),
        ];
        let view = rank(&stocks, &metric(Direction::Neutral));

        // Neutral metrics list largest first.
        assert_eq!(view.ids(), vec!["HIGH", "MID", "LOW"]);
        assert_relative_eq!(view.entry("MID").unwrap().normalized_position, 90.0);
        assert_relative_eq!(view.entry("LOW").unwrap().normalized_position, 0.0);
        assert_relative_eq!(view.entry("HIGH").unwrap().normalized_position, 0.0);
        assert!(view.entries().iter().all(|e| e.label.is_none()));
    }

    #[test]
    fn test_category_rank_comparator() {
        let stocks = vec![
            stock("HIGH", json!("High Risk")),
            stock("UNKNOWN", json!("Speculative")),
            stock("SAFE", json!("Safe")),
            stock("MOD", json!("Moderate Risk")),
        ];
        let descriptor = MetricDescriptor::new(
            DescriptorConfig::new("metric.value", "Risk Category")
                .with_format(ValueFormat::RiskBadge)
                .with_direction(Direction::LowerIsBetter)
                .with_sort(SortPolicy::CategoryRank {
                    scale: CategoryScale::risk_meter(),
                }),
        )
        .unwrap();
        let view = rank(&stocks, &descriptor);

        assert_eq!(view.ids(), vec!["SAFE", "MOD", "HIGH", "UNKNOWN"]);
        assert_eq!(view.entries()[0].formatted_value, "🟢 Safe");
        assert_eq!(view.entries()[3].formatted_value, "🔴 Speculative");
        let pos = positions(&view);
        assert_relative_eq!(pos[0], 100.0);
        assert_relative_eq!(pos[1], 50.0);
        assert_relative_eq!(pos[2], 0.0);
        assert_relative_eq!(pos[3], 0.0);
        assert_eq!(view.entries()[0].label, Some(QualitativeLabel::BestPerformer));
    }

    #[test]
    fn test_categorical_leaf_under_numeric_comparison() {
        let stocks = vec![stock("CAT", json!("Medium")), stock("NUM", json!(4))];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));

        assert_eq!(view.ids(), vec!["NUM", "CAT"]);
        let cat = view.entry("CAT").unwrap();
        assert_eq!(cat.formatted_value, "Medium");
        assert_relative_eq!(cat.normalized_position, 0.0);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let stocks = vec![
            stock("A", json!(7.5)),
            stock("B", json!(null)),
            stock("C", json!(7.5)),
            stock("D", json!(2)),
        ];
        let descriptor = metric(Direction::LowerIsBetter);

        let first = rank(&stocks, &descriptor);
        let second = rank(&stocks, &descriptor);
        assert_eq!(first.ids(), second.ids());
        assert_eq!(positions(&first), positions(&second));
    }

    #[test]
    fn test_positions_stay_in_range() {
        let stocks: Vec<Entity> = [-50.0, 0.0, 3.3, 1e6, -1e-3]
            .iter()
            .enumerate()
            .map(|(i, v)| stock(&format!("S{i}"), json!(v)))
            .collect();

        for direction in [
            Direction::HigherIsBetter,
            Direction::LowerIsBetter,
            Direction::Neutral,
        ] {
            let view = rank(&stocks, &metric(direction));
            assert!(positions(&view).iter().all(|p| (0.0..=100.0).contains(p)));
        }
    }

    #[test]
    fn test_positions_with_extreme_spread() {
        let stocks = vec![stock("LO", json!(-1e308)), stock("HI", json!(1e308))];

        let view = rank(&stocks, &metric(Direction::HigherIsBetter));
        assert_eq!(view.ids(), vec!["HI", "LO"]);
        assert_eq!(positions(&view), vec![100.0, 0.0]);

        let view = rank(&stocks, &metric(Direction::LowerIsBetter));
        assert_eq!(view.ids(), vec!["LO", "HI"]);
        assert_eq!(positions(&view), vec![100.0, 0.0]);

        let view = rank(&stocks, &metric(Direction::Neutral));
        assert_eq!(positions(&view), vec![0.0, 0.0]);
    }

    #[test]
    fn test_ranks_are_one_based() {
        let stocks = vec![stock("A", json!(1)), stock("B", json!(2))];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));
        let ranks: Vec<usize> = view.entries().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn test_rank_boxed_trait_objects() {
        let stocks: Vec<Box<dyn Comparable>> = vec![
            Box::new(stock("A", json!(1))),
            Box::new(stock("B", json!(2))),
        ];
        let view = rank(&stocks, &metric(Direction::HigherIsBetter));
        assert_eq!(view.ids(), vec!["B", "A"]);
    }

    #[test]
    fn test_comparison_set_validation() {
        let set = ComparisonSet::new(vec![stock("A", json!(1)), stock("B", json!(2))]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.rank(&metric(Direction::HigherIsBetter)).ids(), vec!["B", "A"]);

        let dup = ComparisonSet::new(vec![stock("A", json!(1)), stock("A", json!(2))]);
        assert!(matches!(dup, Err(InvestezyError::DuplicateEntity(ref id)) if id == "A"));

        let too_many = ComparisonSet::new(vec![
            stock("A", json!(1)),
            stock("B", json!(2)),
            stock("C", json!(3)),
            stock("D", json!(4)),
        ]);
        assert!(matches!(
            too_many,
            Err(InvestezyError::ComparisonTooLarge { size: 4, limit: 3 })
        ));

        let wide = ComparisonSet::with_limit(
            (0..5).map(|i| stock(&format!("S{i}"), json!(i))).collect(),
            10,
        );
        assert!(wide.is_ok());
    }

    #[test]
    fn test_rank_all() {
        let set = ComparisonSet::new(vec![stock("A", json!(1)), stock("B", json!(2))]).unwrap();
        let descriptors = [metric(Direction::HigherIsBetter), risk_metric()];
        let views = set.rank_all(&descriptors);

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].ids(), vec!["B", "A"]);
        assert_eq!(views[1].ids(), vec!["A", "B"]);
        assert_eq!(views[1].title(), "Risk Level");
    }

    #[test]
    fn test_serialize_view() {
        let stocks = vec![stock("A", json!(12.5))];
        let view = rank(&stocks, &risk_metric());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["path"], "metric.value");
        assert_eq!(json["entries"][0]["formattedValue"], "12.5%");
        assert_eq!(json["entries"][0]["label"], "Lowest Risk");
        assert_eq!(json["entries"][0]["entity"]["id"], "A");
    }
}
