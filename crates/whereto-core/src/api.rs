// crates/whereto-core/src/api.rs
//! Flat serializable views handed across FFI and process boundaries.

use crate::model::search::{HitItem, SearchHit};
use serde::Serialize;

/// A [`SearchHit`] flattened for JSON output.
///
/// The wasm and CLI front ends serialize this instead of the borrowing
/// enum shape, so consumers get one stable record layout.
#[derive(Debug, Clone, Serialize)]
pub struct HitView<'a> {
    /// `"city"` or `"zone"`.
    pub kind: &'static str,
    pub name: &'a str,
    pub code: &'a str,
    pub score: f64,
    /// Owning city name; absent for city hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_city: Option<&'a str>,
}

impl<'a> From<&SearchHit<'a>> for HitView<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        HitView {
            kind: match hit.item {
                HitItem::City(_) => "city",
                HitItem::Zone { .. } => "zone",
            },
            name: hit.name(),
            code: hit.code(),
            score: hit.score,
            parent_city: hit.parent_city(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use crate::raw::CityRecord;
    use serde_json::json;

    #[test]
    fn city_and_zone_hits_serialize_distinctly() {
        let db = Dataset::from_records(vec![CityRecord::new(
            "GOI",
            "Goa",
            &["North Goa"],
        )])
        .unwrap();

        let hits = db.search("go", 8);
        let views: Vec<HitView<'_>> = hits.iter().map(HitView::from).collect();
        let value = serde_json::to_value(&views).unwrap();

        assert_eq!(value[0]["kind"], json!("city"));
        assert_eq!(value[0]["name"], json!("Goa"));
        assert_eq!(value[0]["code"], json!("GOI"));
        assert!(value[0].get("parent_city").is_none());

        assert_eq!(value[1]["kind"], json!("zone"));
        assert_eq!(value[1]["name"], json!("North Goa"));
        assert_eq!(value[1]["parent_city"], json!("Goa"));
    }
}
