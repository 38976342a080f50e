//! DataFrame export of ranked views.

use crate::ranker::RankedView;
use investezy_traits::{Comparable, Result};
use polars::prelude::*;

impl<T: Comparable> RankedView<'_, T> {
    /// Export the view as a DataFrame, one row per entry in rank order.
    ///
    /// Columns: `rank`, `id`, `name`, `value` (null when unavailable or
    /// categorical), `formatted`, `position` and `label` (null when absent).
    ///
    /// # Errors
    ///
    /// Returns an error if polars fails to assemble the frame.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let entries = self.entries();

        let ranks: Vec<u32> = entries.iter().map(|e| e.rank as u32).collect();
        let ids: Vec<String> = entries.iter().map(|e| e.entity.id().to_string()).collect();
        let names: Vec<String> = entries
            .iter()
            .map(|e| e.entity.display_name().to_string())
            .collect();
        let values: Vec<Option<f64>> = entries.iter().map(|e| e.value.as_number()).collect();
        let formatted: Vec<String> = entries.iter().map(|e| e.formatted_value.clone()).collect();
        let positions: Vec<f64> = entries.iter().map(|e| e.normalized_position).collect();
        let labels: Vec<Option<String>> = entries
            .iter()
            .map(|e| e.label.map(|l| l.as_str().to_string()))
            .collect();

        let df = df! {
            "rank" => ranks,
            "id" => ids,
            "name" => names,
            "value" => values,
            "formatted" => formatted,
            "position" => positions,
            "label" => labels,
        }?;

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{DescriptorConfig, Direction, MetricDescriptor};
    use crate::format::ValueFormat;
    use crate::ranker::rank;
    use approx::assert_relative_eq;
    use investezy_traits::Entity;
    use serde_json::json;

    #[test]
    fn test_to_frame() {
        let stocks = vec![
            Entity::new("A", "Alpha", json!({ "risk": { "fluctuation": 30.0 } })),
            Entity::new("B", "Beta", json!({ "risk": { "fluctuation": "N/A" } })),
            Entity::new("C", "Gamma", json!({ "risk": { "fluctuation": 10.0 } })),
        ];
        let descriptor = MetricDescriptor::new(
            DescriptorConfig::new("risk.fluctuation", "Price Fluctuation")
                .with_format(ValueFormat::Percent)
                .with_direction(Direction::LowerIsBetter)
                .risk(),
        )
        .unwrap();

        let df = rank(&stocks, &descriptor).to_frame().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 7);

        let ids = df.column("id").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(ids.get(0), Some("C"));
        assert_eq!(ids.get(1), Some("A"));
        assert_eq!(ids.get(2), Some("B"));

        let values = df.column("value").unwrap().as_materialized_series().f64().unwrap();
        assert_eq!(values.get(0), Some(10.0));
        assert_eq!(values.get(2), None);

        let positions = df
            .column("position")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap();
        assert_relative_eq!(positions.get(0).unwrap(), 100.0);
        assert_relative_eq!(positions.get(1).unwrap(), 0.0);

        let formatted = df
            .column("formatted")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap();
        assert_eq!(formatted.get(2), Some("N/A"));

        let labels = df.column("label").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(labels.get(0), Some("Lowest Risk"));
        assert_eq!(labels.get(1), None);
    }

    #[test]
    fn test_empty_frame() {
        let stocks: Vec<Entity> = Vec::new();
        let descriptor =
            MetricDescriptor::new(DescriptorConfig::new("returns.absolute", "Returns")).unwrap();
        let df = rank(&stocks, &descriptor).to_frame().unwrap();
        assert_eq!(df.height(), 0);
    }
}
