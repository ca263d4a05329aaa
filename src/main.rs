//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_stats::{
    cli::{Commands, NbaStats},
    commands::{catalog::handle_endpoints, get::handle_get, params::handle_params},
};
use tracing_subscriber::EnvFilter;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nba_stats=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaStats::parse();

    match app.command {
        Commands::Endpoints => {
            init_logging(false);
            handle_endpoints();
        }

        Commands::Params { endpoint, params } => {
            init_logging(false);
            handle_params(&endpoint, &params.params)
                .with_context(|| format!("invalid parameters for {}", endpoint))?;
        }

        Commands::Get {
            endpoint,
            params,
            table,
            json,
            debug,
        } => {
            init_logging(debug);
            handle_get(&endpoint, &params.params, table.as_deref(), json)
                .await
                .with_context(|| format!("failed to fetch {}", endpoint))?;
        }
    }

    Ok(())
}
