use clap::{Parser, Subcommand};
use std::path::PathBuf;

use yield_table::model::{SortDirection, SortKey};
use yield_table::render::OutputFormat;

/// Sortable yield-farming opportunity tables: render, browse, and fetch
/// protocol/chain/APY/TVL listings.
#[derive(Parser)]
#[command(name = "yield-table", version, about)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a yield table from a JSON file of records or a fetch snapshot
    Show {
        /// Path to the JSON file ("-" for stdin)
        file: PathBuf,

        /// Initial sort column: protocol, chain, apy or tvl (default: tvl)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Initial sort direction: asc or desc
        #[arg(long)]
        direction: Option<SortDirection>,

        /// Simulate a header click on a column; repeat to click again
        #[arg(long = "click")]
        clicks: Vec<SortKey>,

        /// Render the loading placeholder instead of the data
        #[arg(long)]
        loading: bool,

        /// Output format: ascii (default), html, csv, or json
        #[arg(long, default_value = "ascii")]
        format: OutputFormat,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Browse a yield table interactively, re-sorting by column name
    Browse {
        /// Path to the JSON file ("-" for stdin)
        file: PathBuf,
    },

    /// Fetch current yield pools from DefiLlama into a snapshot file
    Fetch {
        /// Output file for the snapshot JSON (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only keep pools on this chain (e.g. "Ethereum")
        #[arg(long)]
        chain: Option<String>,

        /// Only keep pools whose project slug starts with this (e.g. "aave")
        #[arg(long)]
        project: Option<String>,

        /// Minimum TVL in USD
        #[arg(long, default_value = "0")]
        min_tvl: f64,

        /// Keep only the N largest pools by TVL
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Output the JSON schema for snapshot files
    Schema,

    /// Output an example dataset to stdout
    Example,
}
