//! whereto-cli
//! ===========
//!
//! Command-line interface for the `whereto-core` destination search engine.
//!
//! This crate primarily provides a binary (`whereto`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install whereto-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! whereto --help
//! whereto stats
//! whereto city GOI
//! whereto search goa --limit 5 --highlight
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`whereto-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/whereto-rs/whereto-rs>
//! - Core crate: <https://docs.rs/whereto-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
