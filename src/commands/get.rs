//! `get` command: fetch one endpoint and print a table.

use crate::{
    cli::types::ParamArg,
    core::Record,
    stats::{Endpoint, StatsClient, Transport},
    Result,
};

use super::{output::render, resolve_endpoint, resolve_table};

/// Fetch `endpoint` through `transport` and extract the selected table.
pub async fn fetch_records<T: Transport>(
    transport: T,
    endpoint: &str,
    params: &[ParamArg],
    table: Option<&str>,
) -> Result<Vec<Record>> {
    let (spec, overrides) = resolve_endpoint(endpoint, params)?;
    let selector = resolve_table(&spec, table);

    let fetched = Endpoint::fetch(transport, spec, &overrides).await?;
    fetched.records(&selector)
}

/// Handle the get command
pub async fn handle_get(
    endpoint: &str,
    params: &[ParamArg],
    table: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let client = StatsClient::from_env()?;

    // tarpaulin::skip - HTTP call, tested via the transport-generic fetch_records
    let records = fetch_records(client, endpoint, params, table).await?;

    println!("{}", render(&records, as_json)?);
    Ok(())
}
