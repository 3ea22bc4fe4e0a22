// crates/whereto-core/src/model/search.rs

use crate::model::flat::{City, Dataset, Zone};
use crate::text::{equals_folded, fold_lower, normalize_query};
use std::collections::HashSet;

/// Result-page size used when the caller passes `limit == 0`.
pub const DEFAULT_LIMIT: usize = 8;

/// Score constants for one tier ladder.
///
/// Every name is scored by the first tier that matches, top to bottom;
/// tiers are never summed. The three lower tiers interpolate with the
/// query-length / name-length ratio, so a query covering more of a name
/// scores higher within the same tier. The numbers are ranking policy, not
/// derived from anything; tune them here and nowhere else.
#[derive(Debug, Clone, Copy)]
pub struct TierWeights {
    /// Name equals the query.
    pub exact: f64,
    /// Name starts with the query: `prefix_base + ratio * prefix_bonus`.
    pub prefix_base: f64,
    pub prefix_bonus: f64,
    /// Query starts right after a space inside the name:
    /// `word_base + ratio * word_bonus`.
    pub word_base: f64,
    pub word_bonus: f64,
    /// Query appears anywhere else in the name:
    /// `contains_base + ratio * contains_bonus`.
    pub contains_base: f64,
    pub contains_bonus: f64,
}

/// Tier ladder for city names.
pub const CITY_TIERS: TierWeights = TierWeights {
    exact: 200.0,
    prefix_base: 150.0,
    prefix_bonus: 50.0,
    word_base: 120.0,
    word_bonus: 30.0,
    contains_base: 70.0,
    contains_bonus: 20.0,
};

/// Tier ladder for zone names. Lower across the board, so a city always
/// outranks a zone of equal match quality.
pub const ZONE_TIERS: TierWeights = TierWeights {
    exact: 180.0,
    prefix_base: 120.0,
    prefix_bonus: 40.0,
    word_base: 100.0,
    word_bonus: 30.0,
    contains_base: 60.0,
    contains_bonus: 20.0,
};

/// Query data computed once per call instead of once per candidate.
struct PreparedQuery {
    /// Trimmed, lowercased query.
    folded: String,
    /// `" " + folded`, the word-boundary needle.
    word_needle: String,
    /// Character count of `folded`.
    chars: f64,
}

impl PreparedQuery {
    fn new(query: &str) -> Self {
        let folded = normalize_query(query);
        let word_needle = format!(" {folded}");
        let chars = folded.chars().count() as f64;
        Self {
            folded,
            word_needle,
            chars,
        }
    }

    fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Score a folded candidate name against the prepared query.
///
/// Returns `None` when no tier matches; a `Some` score is always `> 0`.
fn tier_score(folded_name: &str, query: &PreparedQuery, tiers: &TierWeights) -> Option<f64> {
    if folded_name == query.folded {
        return Some(tiers.exact);
    }
    // Lengths in characters; only needed once a substring tier has hit,
    // which also rules out empty names before the division.
    let ratio = || query.chars / folded_name.chars().count() as f64;
    if folded_name.starts_with(&query.folded) {
        Some(tiers.prefix_base + ratio() * tiers.prefix_bonus)
    } else if folded_name.contains(&query.word_needle) {
        Some(tiers.word_base + ratio() * tiers.word_bonus)
    } else if folded_name.contains(&query.folded) {
        Some(tiers.contains_base + ratio() * tiers.contains_bonus)
    } else {
        None
    }
}

/// One ranked autocomplete result.
///
/// Hits borrow the dataset they were produced from; hits from the shared
/// dataset are `SearchHit<'static>`.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    /// Relevance score. Strictly positive for every emitted hit.
    pub score: f64,
    /// The matched place.
    pub item: HitItem<'a>,
}

/// Matched entity variant of a [`SearchHit`].
#[derive(Debug, Clone, Copy)]
pub enum HitItem<'a> {
    /// The query matched a city name.
    City(&'a City),
    /// The query matched a zone name; `city` is the owning city.
    Zone { city: &'a City, zone: &'a Zone },
}

impl<'a> SearchHit<'a> {
    #[inline]
    pub fn city(score: f64, city: &'a City) -> Self {
        SearchHit {
            score,
            item: HitItem::City(city),
        }
    }

    #[inline]
    pub fn zone(score: f64, city: &'a City, zone: &'a Zone) -> Self {
        SearchHit {
            score,
            item: HitItem::Zone { city, zone },
        }
    }

    /// Display name of the matched place (the zone name for zone hits).
    pub fn name(&self) -> &'a str {
        match self.item {
            HitItem::City(c) => &c.name,
            HitItem::Zone { zone, .. } => &zone.name,
        }
    }

    /// Code of the owning city (the city itself for city hits).
    pub fn code(&self) -> &'a str {
        match self.item {
            HitItem::City(c) => &c.code,
            HitItem::Zone { city, .. } => &city.code,
        }
    }

    /// Owning city's display name for zone hits, `None` for city hits.
    pub fn parent_city(&self) -> Option<&'a str> {
        match self.item {
            HitItem::City(_) => None,
            HitItem::Zone { city, .. } => Some(&city.name),
        }
    }

    /// True if this hit is a city.
    #[inline]
    pub fn is_city(&self) -> bool {
        matches!(self.item, HitItem::City(_))
    }

    /// True if this hit is a zone.
    #[inline]
    pub fn is_zone(&self) -> bool {
        matches!(self.item, HitItem::Zone { .. })
    }

    /// True if this hit is a city with the given name (case-insensitive).
    #[inline]
    pub fn is_city_named(&self, name: &str) -> bool {
        matches!(self.item, HitItem::City(c) if equals_folded(&c.name, name))
    }

    /// True if this hit is a zone with the given name (case-insensitive).
    #[inline]
    pub fn is_zone_named(&self, name: &str) -> bool {
        matches!(self.item, HitItem::Zone { zone, .. } if equals_folded(&zone.name, name))
    }
}

/// Per-call dedup key: `code` for cities, `(code, folded zone name)` for
/// zones.
#[derive(PartialEq, Eq, Hash)]
enum SeenKey<'a> {
    City(&'a str),
    Zone(&'a str, String),
}

impl Dataset {
    /// Rank every city and zone against `query` and return the best
    /// matches, deduplicated and ordered.
    ///
    /// `limit` caps the returned page; `0` means [`DEFAULT_LIMIT`]. The
    /// query is trimmed and compared case-insensitively; a query that is
    /// empty after trimming returns an empty list. This function never
    /// fails, never touches shared state, and is safe to call from any
    /// number of threads at once.
    ///
    /// # Scoring (descending priority)
    ///
    /// Cities: exact **200**, prefix **150..200**, word boundary
    /// **120..150**, substring **70..90**. Zones: exact **180**, prefix
    /// **120..160**, word boundary **100..130**, substring **60..80**. See
    /// [`CITY_TIERS`] / [`ZONE_TIERS`]; within a tier the score grows with
    /// the share of the name the query covers.
    ///
    /// # Ordering
    ///
    /// Score descending, ties by case-insensitive name ascending; the sort
    /// is stable, so the full order is deterministic call over call. UI
    /// keyboard navigation depends on that.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use whereto_core::Dataset;
    ///
    /// let db = Dataset::shared().unwrap();
    /// for hit in db.search("goa", 8) {
    ///     println!("{:>6.1}  {}", hit.score, hit.name());
    /// }
    /// ```
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let q = PreparedQuery::new(query);
        if q.is_empty() {
            return Vec::new();
        }
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };

        let mut out: Vec<SearchHit<'_>> = Vec::new();
        let mut seen: HashSet<SeenKey<'_>> = HashSet::new();

        // 1. Scan cities
        for city in &self.cities {
            if let Some(score) = tier_score(&fold_lower(&city.name), &q, &CITY_TIERS) {
                if seen.insert(SeenKey::City(&city.code)) {
                    out.push(SearchHit::city(score, city));
                }
            }
        }

        // 2. Scan zones (name-collision zones were dropped at build time)
        for zone in &self.zones {
            let folded = fold_lower(&zone.name);
            if let Some(score) = tier_score(&folded, &q, &ZONE_TIERS) {
                let city = &self.cities[zone.city_id as usize];
                if seen.insert(SeenKey::Zone(&city.code, folded)) {
                    out.push(SearchHit::zone(score, city, zone));
                }
            }
        }

        // 3. Sort by relevance, then name; stable, so repeated calls agree
        out.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| fold_lower(a.name()).cmp(&fold_lower(b.name())))
        });

        out.truncate(limit);
        out
    }
}
