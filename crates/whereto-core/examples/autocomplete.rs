//! Simulated autocomplete session for whereto-rs
//!
//! This example demonstrates how a frontend would drive the engine:
//! - Re-run the search on every keystroke
//! - Render the suggestion list with match highlighting
//! - Show how the ranking shifts as the query grows

use whereto_core::prelude::*;

fn render(hit: &SearchHit<'_>, query: &str) -> String {
    let name: String = highlight(hit.name(), query)
        .iter()
        .map(|s| {
            if s.matched {
                format!("\x1b[1m{}\x1b[0m", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect();
    match hit.parent_city() {
        Some(city) => format!("{name} — {city}"),
        None => name,
    }
}

fn main() -> Result<()> {
    println!("=== WhereTo Autocomplete Example ===\n");

    let db = Dataset::shared()?;

    // Type "city palace" one keystroke at a time.
    let typed = "city palace";
    for end in 1..=typed.len() {
        let query = &typed[..end];
        let hits = db.search(query, 5);

        println!("query: {query:?}  ({} hits)", hits.len());
        for hit in &hits {
            println!("  {:>7.2}  {}", hit.score, render(hit, query));
        }
        println!();
    }

    Ok(())
}
