// crates/whereto-core/src/model/flat.rs

use crate::text::NameMatch;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The reference dataset behind the "where to" box.
///
/// Flat "Structure of Arrays" layout: cities and zones each live in one
/// contiguous vector, linked by ids and ranges instead of nesting. The
/// per-keystroke search is a pair of linear scans over these vectors.
///
/// A dataset is built once, from the embedded reference data or from
/// caller-supplied records, and is read-only from then on. Nothing in this
/// crate mutates a dataset after construction, and no caller should either;
/// `search` relies on it for determinism.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dataset {
    /// All cities, in reference-data order. Indexed by [`City::id`].
    pub cities: Vec<City>,
    /// All derived zones, grouped by owning city. Zones whose name merely
    /// repeats the parent city's name are dropped during construction.
    pub zones: Vec<Zone>,
}

/// A bookable destination city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    /// Position of this city in [`Dataset::cities`].
    pub id: u16,
    /// Short unique identifier, e.g. "GOI". Primary key across the dataset.
    pub code: String,
    /// Display name, original casing. Never empty.
    pub name: String,
    /// Range of this city's zones in [`Dataset::zones`].
    pub zones_range: Range<u32>,
}

/// A named sub-area of a city (beach belt, old town, hotel district...).
///
/// Not unique across the dataset, only within its parent city.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zone {
    /// Index of the owning city in [`Dataset::cities`]. Valid by
    /// construction.
    pub city_id: u16,
    /// Display name, original casing.
    pub name: String,
}

impl Dataset {
    /// All cities, in display-default order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The zones of `city`, in display-default order (what the UI shows
    /// when the box is unfiltered).
    pub fn zones_of(&self, city: &City) -> &[Zone] {
        let range = city.zones_range.start as usize..city.zones_range.end as usize;
        &self.zones[range]
    }

    /// The owning city of `zone`.
    pub fn parent_of(&self, zone: &Zone) -> &City {
        &self.cities[zone.city_id as usize]
    }

    /// Look up a city by code, ASCII case-insensitive (codes are ASCII
    /// identifiers like "GOI", "BOM").
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use whereto_core::Dataset;
    ///
    /// let db = Dataset::shared().unwrap();
    /// let goa = db.find_city_by_code("goi").unwrap();
    /// assert_eq!(goa.name, "Goa");
    /// ```
    pub fn find_city_by_code(&self, code: &str) -> Option<&City> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Aggregate statistics for the dataset.
    pub fn stats(&self) -> crate::common::DbStats {
        crate::common::DbStats {
            cities: self.cities.len(),
            zones: self.zones.len(),
        }
    }
}

impl NameMatch for City {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Zone {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}
