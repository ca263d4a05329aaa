//! Stats API Client Library
//!
//! A Rust client for the NBA stats web API. Every endpoint answers with one or
//! more result tables shaped as parallel `headers` / `rowSet` arrays; this
//! library validates request parameters against each endpoint's vocabulary,
//! performs the request and reshapes the chosen table into row records.
//!
//! ## Features
//!
//! - **Parameter Validation**: Overrides are checked against the endpoint's
//!   recognized parameters before anything is sent; every unknown key is reported
//! - **Explicit Null Handling**: Each parameter declares whether an absent value
//!   is omitted, sent empty, sent as zero or replaced by its default
//! - **Table Extraction**: `resultSets` lists and single `resultSet` objects,
//!   selected by index or name, with strict row/header alignment checks
//! - **Atomic Re-query**: Re-fetching with new parameters keeps the previous
//!   state when validation, transport or decoding fails
//! - **Concurrent Fetches**: Independent endpoints can be fetched in parallel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::{stats::endpoints::LeagueLeaders, Overrides, StatsClient};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let client = StatsClient::from_env()?;
//! let leaders = LeagueLeaders::fetch(client, Overrides::new().set("StatCategory", "AST")).await?;
//!
//! for row in leaders.leaders()? {
//!     println!("{:?} {:?}", row.get("PLAYER"), row.get("AST"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at another host or change the request timeout:
//! ```bash
//! export NBA_STATS_BASE_URL=http://localhost:8080/stats
//! export NBA_STATS_TIMEOUT_SECS=10
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{GameDate, PlayerId, Season, TeamId};
pub use crate::core::{
    extract, NullPolicy, Overrides, ParamKind, ParamSchema, ParamSpec, ParamValue,
    ParameterBuilder, ParameterSet, Record, ResponseDocument, ResultTable, TableLayout,
    TableSelector,
};
pub use error::{NbaError, Result};
pub use stats::{fetch_all, ClientConfig, Endpoint, EndpointSpec, StatsClient, Transport};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_STATS_TIMEOUT_SECS";
