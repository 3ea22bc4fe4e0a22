// crates/whereto-core/tests/search.rs
//! End-to-end checks against the embedded destination table.

#![cfg(feature = "embedded-data")]

use whereto_core::prelude::*;

#[test]
fn embedded_table_counts_are_stable() {
    let db = Dataset::shared().unwrap();
    let stats = db.stats();
    assert_eq!(stats.cities, 22);
    assert_eq!(stats.zones, 83);
}

#[test]
fn goa_query_ranks_the_city_first() {
    let db = Dataset::shared().unwrap();
    let hits = db.search("goa", 8);

    assert!(hits[0].is_city_named("Goa"));
    assert_eq!(hits[0].score, 200.0);
    assert!(hits.iter().any(|h| h.is_zone_named("North Goa")));
    assert!(hits.iter().any(|h| h.is_zone_named("South Goa")));
}

#[test]
fn shared_zone_names_surface_once_per_city() {
    let db = Dataset::shared().unwrap();

    // "City Palace" exists in Jaipur and Udaipur; both must surface.
    let hits = db.search("city palace", 8);
    let mut parents: Vec<_> = hits
        .iter()
        .filter(|h| h.is_zone_named("City Palace"))
        .filter_map(|h| h.parent_city())
        .collect();
    parents.sort_unstable();
    assert_eq!(parents, vec!["Jaipur", "Udaipur"]);

    // Same shape for "Marine Drive" (Mumbai, Kochi).
    let hits = db.search("marine drive", 8);
    let codes: Vec<_> = hits
        .iter()
        .filter(|h| h.is_zone_named("Marine Drive"))
        .map(|h| h.code())
        .collect();
    assert_eq!(codes.len(), 2);
    assert_ne!(codes[0], codes[1]);
}

#[test]
fn zero_limit_falls_back_to_the_default_page() {
    let db = Dataset::shared().unwrap();
    assert_eq!(db.search("a", 0).len(), DEFAULT_LIMIT);
    assert!(db.search("", 0).is_empty());
}

#[test]
fn code_lookup_and_zone_navigation_agree() {
    let db = Dataset::shared().unwrap();

    let goa = db.find_city_by_code("goi").unwrap();
    assert_eq!(goa.name, "Goa");

    let zones = db.zones_of(goa);
    assert_eq!(zones.len(), 8);
    for zone in zones {
        assert!(std::ptr::eq(db.parent_of(zone), goa));
    }

    assert!(db.find_city_by_code("").is_none());
    assert!(db.find_city_by_code("XXX").is_none());
}

#[test]
fn every_hit_highlights_its_own_name() {
    let db = Dataset::shared().unwrap();
    for query in ["goa", "city", "lake", "fort"] {
        for hit in db.search(query, 20) {
            let segments = highlight(hit.name(), query);
            let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(rebuilt, hit.name());
            assert!(
                segments.iter().any(|s| s.matched),
                "{:?} not lit for {:?}",
                hit.name(),
                query
            );
        }
    }
}

#[test]
fn hits_borrow_the_static_dataset() {
    let hits: Vec<SearchHit<'static>> = Dataset::shared().unwrap().search("jaipur", 8);
    assert!(hits[0].is_city_named("Jaipur"));
}
