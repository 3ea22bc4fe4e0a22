//! Basic usage example for whereto-rs
//!
//! This example demonstrates how to:
//! - Load the shared destination dataset
//! - Search cities and zones with ranked results
//! - Navigate from a zone hit back to its owning city
//! - Highlight query matches for display

use whereto_core::prelude::*;

fn main() -> Result<()> {
    println!("=== WhereTo Basic Usage Example ===\n");

    // Load the dataset (cached for the whole process)
    println!("Loading destination dataset...");
    let db = Dataset::shared()?;
    let stats = db.stats();
    println!("✓ {} cities, {} zones\n", stats.cities, stats.zones);

    // Example 1: Ranked search
    println!("--- Example 1: Search for \"goa\" ---");
    for hit in db.search("goa", 8) {
        println!("{:>7.2}  {}", hit.score, hit.name());
    }
    println!();

    // Example 2: Zone hits know their city
    println!("--- Example 2: Search for \"palace\" ---");
    for hit in db.search("palace", 8) {
        match hit.parent_city() {
            Some(city) => println!("{:>7.2}  {} ({})", hit.score, hit.name(), city),
            None => println!("{:>7.2}  {}", hit.score, hit.name()),
        }
    }
    println!();

    // Example 3: Find a city by its code
    println!("--- Example 3: Look up by code ---");
    if let Some(city) = db.find_city_by_code("JAI") {
        println!("Found: {} ({})", city.name, city.code);
        println!("Zones:");
        for zone in db.zones_of(city) {
            println!("- {}", zone.name);
        }
    }
    println!();

    // Example 4: Highlight matches for rendering
    println!("--- Example 4: Highlighting ---");
    let query = "goa";
    for hit in db.search(query, 3) {
        let rendered: String = highlight(hit.name(), query)
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect();
        println!("{rendered}");
    }
    println!();

    // Example 5: Limits
    println!("--- Example 5: Result limits ---");
    println!("limit 3:  {} hits", db.search("a", 3).len());
    println!("limit 0:  {} hits (default page)", db.search("a", 0).len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
