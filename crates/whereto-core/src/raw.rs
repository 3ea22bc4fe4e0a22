// crates/whereto-core/src/raw.rs

use serde::{Deserialize, Serialize};

/// One city as it appears in the reference data, before flattening.
///
/// This is both the shape of the embedded `destinations.json` entries and
/// the input type of [`Dataset::from_records`](crate::Dataset::from_records)
/// for callers that supply their own destination list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    /// Short unique identifier, e.g. an IATA-style code ("GOI"). Primary key.
    pub code: String,
    /// Display name shown in the autocomplete box.
    pub name: String,
    /// Zone names owned by this city, in display order.
    #[serde(default)]
    pub zones: Vec<String>,
}

impl CityRecord {
    /// Convenience constructor used by tests and examples.
    pub fn new<C, N>(code: C, name: N, zones: &[&str]) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            zones: zones.iter().map(|z| (*z).to_string()).collect(),
        }
    }
}
