// crates/whereto-core/src/model/convert.rs

use crate::error::{DatasetError, Result};
use crate::model::flat::{City, Dataset, Zone};
use crate::raw::CityRecord;
use crate::text::equals_folded;
use std::collections::HashSet;

impl Dataset {
    /// Build a dataset from city records, flattening zones as it goes.
    ///
    /// Validation: codes and names must be non-blank, and codes must be
    /// unique (case-insensitive, to match the case-insensitive code
    /// lookup). Zone names are trimmed; blank zones are dropped, and so is
    /// any zone whose name is case-insensitively identical to its parent
    /// city's name (it would repeat the city entry in every result list).
    /// City ids are 16-bit and zone ranges 32-bit; records past those
    /// widths are rejected instead of wrapping.
    pub fn from_records(records: Vec<CityRecord>) -> Result<Self> {
        let mut db = Dataset {
            cities: Vec::with_capacity(records.len()),
            zones: Vec::new(),
        };
        let mut seen_codes: HashSet<String> = HashSet::with_capacity(records.len());

        for record in records {
            let code = record.code.trim().to_string();
            let name = record.name.trim().to_string();
            if code.is_empty() {
                return Err(DatasetError::EmptyCode(record.name));
            }
            if name.is_empty() {
                return Err(DatasetError::EmptyName(code));
            }
            if !seen_codes.insert(code.to_ascii_lowercase()) {
                return Err(DatasetError::DuplicateCode(code));
            }

            let city_id = u16::try_from(db.cities.len())
                .map_err(|_| DatasetError::TooManyCities(db.cities.len()))?;
            let zone_start = u32::try_from(db.zones.len())
                .map_err(|_| DatasetError::TooManyZones(db.zones.len()))?;

            for zone in record.zones {
                let zone = zone.trim();
                if zone.is_empty() || equals_folded(zone, &name) {
                    continue;
                }
                db.zones.push(Zone {
                    city_id,
                    name: zone.to_string(),
                });
            }
            let zone_end = u32::try_from(db.zones.len())
                .map_err(|_| DatasetError::TooManyZones(db.zones.len()))?;

            db.cities.push(City {
                id: city_id,
                code,
                name,
                zones_range: zone_start..zone_end,
            });
        }

        Ok(db)
    }

    /// Build a dataset from a JSON array of city records.
    ///
    /// Same validation as [`Dataset::from_records`]; this is the parsing
    /// path the embedded reference data goes through.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CityRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, name: &str, zones: &[&str]) -> CityRecord {
        CityRecord::new(code, name, zones)
    }

    #[test]
    fn flattens_zones_with_parent_links() {
        let db = Dataset::from_records(vec![
            record("GOI", "Goa", &["North Goa", "South Goa", "Panaji"]),
            record("JAI", "Jaipur", &["Amer", "Pink City"]),
        ])
        .unwrap();

        assert_eq!(db.cities.len(), 2);
        assert_eq!(db.zones.len(), 5);

        let goa = &db.cities[0];
        let goa_zones = db.zones_of(goa);
        assert_eq!(goa_zones.len(), 3);
        assert_eq!(goa_zones[0].name, "North Goa");
        assert_eq!(db.parent_of(&goa_zones[0]).code, "GOI");

        let jaipur = &db.cities[1];
        assert_eq!(db.zones_of(jaipur).len(), 2);
    }

    #[test]
    fn drops_zone_that_repeats_city_name() {
        let db = Dataset::from_records(vec![record(
            "GOI",
            "Goa",
            &["goa", "GOA", "North Goa"],
        )])
        .unwrap();

        // Only "North Goa" survives; both casings of "Goa" are redundant.
        assert_eq!(db.zones.len(), 1);
        assert_eq!(db.zones[0].name, "North Goa");
    }

    #[test]
    fn drops_blank_zones_and_trims_names() {
        let db = Dataset::from_records(vec![record("DEL", "Delhi", &["  ", "", " Hauz Khas "])])
            .unwrap();
        assert_eq!(db.zones.len(), 1);
        assert_eq!(db.zones[0].name, "Hauz Khas");
    }

    #[test]
    fn rejects_duplicate_codes_case_insensitively() {
        let err = Dataset::from_records(vec![
            record("GOI", "Goa", &[]),
            record("goi", "Goa Again", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateCode(code) if code == "goi"));
    }

    #[test]
    fn rejects_blank_code_and_name() {
        assert!(matches!(
            Dataset::from_records(vec![record("  ", "Goa", &[])]),
            Err(DatasetError::EmptyCode(_))
        ));
        assert!(matches!(
            Dataset::from_records(vec![record("GOI", "  ", &[])]),
            Err(DatasetError::EmptyName(_))
        ));
    }

    #[test]
    fn rejects_more_cities_than_the_id_space() {
        // Ids are u16, so 65_536 cities fit and the next one must not.
        let records: Vec<CityRecord> = (0..=u16::MAX as usize + 1)
            .map(|i| record(&format!("C{i:05}"), "City", &[]))
            .collect();
        assert!(matches!(
            Dataset::from_records(records),
            Err(DatasetError::TooManyCities(n)) if n == u16::MAX as usize + 1
        ));
    }

    #[test]
    fn from_json_parses_records() {
        let db = Dataset::from_json(
            r#"[{"code":"GOI","name":"Goa","zones":["North Goa"]},{"code":"DEL","name":"Delhi"}]"#,
        )
        .unwrap();
        assert_eq!(db.stats().cities, 2);
        assert_eq!(db.stats().zones, 1);
        assert!(db.find_city_by_code("del").is_some());
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            Dataset::from_json("not json"),
            Err(DatasetError::Parse(_))
        ));
    }
}
