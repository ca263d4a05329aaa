//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::ParamArg;

/// Parameter overrides shared between commands
#[derive(Debug, Args)]
pub struct ParamArgs {
    /// Parameter override (repeatable): `-p Season=2016-17 -p PerMode=Totals`.
    #[clap(short = 'p', long = "param")]
    pub params: Vec<ParamArg>,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "Stats API command line client")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the endpoints in the catalog with their tables.
    Endpoints,

    /// Show the parameters an endpoint would be called with, without sending anything.
    Params {
        /// Endpoint name (see `endpoints`).
        endpoint: String,

        #[clap(flatten)]
        params: ParamArgs,
    },

    /// Fetch an endpoint and print one of its tables.
    Get {
        /// Endpoint name (see `endpoints`).
        endpoint: String,

        #[clap(flatten)]
        params: ParamArgs,

        /// Table to print, by declared name or index. Defaults to the first table.
        #[clap(long, short)]
        table: Option<String>,

        /// Output records as JSON instead of tab-separated text.
        #[clap(long)]
        json: bool,

        /// Log request URLs and parameters to stderr.
        #[clap(long)]
        debug: bool,
    },
}
