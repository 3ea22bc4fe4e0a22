use clap::{Parser, Subcommand};

/// CLI arguments for whereto
#[derive(Debug, Parser)]
#[command(
    name = "whereto",
    version,
    about = "CLI for querying the whereto-core destination search engine"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the destination dataset
    Stats,

    /// List all cities
    Cities,

    /// Lookup a city and its zones by code
    City {
        /// City code (e.g. GOI), case-insensitive
        code: String,
    },

    /// Ranked search over cities and zones
    Search {
        /// The query as typed in the "where to" box
        query: String,

        /// Maximum number of results (0 = default page size)
        #[arg(short = 'l', long = "limit", default_value_t = 0)]
        limit: usize,

        /// Wrap the matched part of each name in brackets
        #[arg(long)]
        highlight: bool,

        /// Print hits as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
