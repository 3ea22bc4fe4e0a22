//! whereto — Command-line interface for whereto-core
//!
//! This binary provides a simple way to exercise the destination search
//! engine from your terminal. It supports printing basic statistics,
//! listing cities, looking up a specific city with its zones, and running
//! the same ranked search the autocomplete box runs.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ whereto stats
//!
//! - List all cities
//!   $ whereto cities
//!
//! - Show details for a city by code (case-insensitive)
//!   $ whereto city goi
//!
//! - Ranked search, optionally with bracket highlighting
//!   $ whereto search goa
//!   $ whereto search "city palace" --limit 5 --highlight
//!   $ whereto search goa --json
//!
//! Data source
//! -----------
//!
//! The CLI always runs against the destination table bundled with the
//! `whereto-core` crate; there is nothing to download or configure.
//!
//! See also: the repository README for more details and examples.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use whereto_core::{highlight, Dataset, HitView};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let db = Dataset::shared().context("failed to load the embedded destination data")?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Zones: {}", stats.zones);
        }

        Commands::Cities => {
            for city in db.cities() {
                println!("{} ({})", city.name, city.code);
            }
        }

        Commands::City { code } => match db.find_city_by_code(&code) {
            Some(city) => {
                println!("City: {}", city.name);
                println!("Code: {}", city.code);
                println!("Zones: {}", db.zones_of(city).len());
                for zone in db.zones_of(city) {
                    println!("- {}", zone.name);
                }
            }
            None => {
                eprintln!("No city found for: {code}");
            }
        },

        Commands::Search {
            query,
            limit,
            highlight: mark,
            json,
        } => {
            let hits = db.search(&query, limit);
            if json {
                let views: Vec<HitView<'_>> = hits.iter().map(HitView::from).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if hits.is_empty() {
                println!("No destinations found matching: {query}");
            } else {
                for hit in &hits {
                    let name = if mark {
                        bracketed(hit.name(), &query)
                    } else {
                        hit.name().to_string()
                    };
                    match hit.parent_city() {
                        Some(city) => println!("{:>7.2}  {} — {}", hit.score, name, city),
                        None => println!("{:>7.2}  {}", hit.score, name),
                    }
                }
            }
        }
    }

    Ok(())
}

/// Bracket the matched runs of `name` for plain-terminal output.
fn bracketed(name: &str, query: &str) -> String {
    highlight(name, query)
        .iter()
        .map(|s| {
            if s.matched {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}
