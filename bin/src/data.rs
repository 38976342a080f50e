//! Local data loading for the Investezy CLI.

use investezy_rank::MetricDescriptor;
use investezy_traits::{Entity, InvestezyError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| InvestezyError::InvalidData(format!("Cannot read {}: {e}", path.display())))
}

/// Load stock records from a JSON file.
///
/// Accepts an array of records, a comparison response (`{"stocks": [...]}`)
/// or a single record.
pub(crate) fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    parse_entities(&read_file(path)?)
}

/// Parse stock records from JSON text.
pub(crate) fn parse_entities(json: &str) -> Result<Vec<Entity>> {
    let value: Value = serde_json::from_str(json)?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("stocks") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(InvestezyError::InvalidData(
                    "'stocks' must be an array of records".to_string(),
                ));
            }
            None => vec![Value::Object(object)],
        },
        _ => {
            return Err(InvestezyError::InvalidData(
                "expected an array of stock records".to_string(),
            ));
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            Entity::from_record(record)
                .map_err(|e| InvestezyError::InvalidData(format!("record {}: {e}", i + 1)))
        })
        .collect()
}

/// Load a metric descriptor from a JSON file.
pub(crate) fn load_descriptor(path: &Path) -> Result<MetricDescriptor> {
    parse_descriptor(&read_file(path)?)
}

/// Parse a metric descriptor from JSON text, validating it.
pub(crate) fn parse_descriptor(json: &str) -> Result<MetricDescriptor> {
    Ok(serde_json::from_str(json)?)
}
