//! Field projection for listing results

use serde::Serialize;
use serde_json::{Map, Value};

/// Shape of a projected listing.
///
/// A single requested field yields the bare values; several fields yield
/// partial records. Serializes untagged, i.e. as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projection {
    Values(Vec<Value>),
    Records(Vec<Map<String, Value>>),
}

impl Projection {
    /// Records missing a field never get it synthesized: they contribute no value
    /// in the single-field case and simply lack the key otherwise.
    pub fn project(records: Vec<Map<String, Value>>, fields: &[String]) -> Self {
        if let [field] = fields {
            let values = records
                .iter()
                .filter_map(|record| record.get(field).cloned())
                .collect();
            return Projection::Values(values);
        }

        let records = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .filter(|(key, _)| fields.contains(key))
                    .collect::<Map<String, Value>>()
            })
            .collect();
        Projection::Records(records)
    }

    pub fn len(&self) -> usize {
        match self {
            Projection::Values(values) => values.len(),
            Projection::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
