//! Command implementations for the stats CLI

pub mod catalog;
pub mod get;
pub mod output;
pub mod params;

#[cfg(test)]
mod tests;

use crate::{
    cli::types::{to_overrides, ParamArg},
    core::{Overrides, TableSelector},
    stats::{endpoints, EndpointSpec},
    Result,
};

/// Look up an endpoint and coerce the CLI parameter arguments against its schema.
pub fn resolve_endpoint(name: &str, params: &[ParamArg]) -> Result<(EndpointSpec, Overrides)> {
    let spec = endpoints::by_name(name)?;
    let overrides = to_overrides(params, &spec.schema()?)?;
    Ok((spec, overrides))
}

/// Turn a `--table` argument into a selector.
///
/// Numbers are indexes, declared table names map to their position, anything
/// else is looked up by the name the server reports.
pub fn resolve_table(spec: &EndpointSpec, table: Option<&str>) -> TableSelector {
    match table {
        None => TableSelector::Index(0),
        Some(t) => {
            if let Ok(i) = t.trim().parse::<usize>() {
                return TableSelector::Index(i);
            }
            spec.tables
                .iter()
                .position(|name| name.eq_ignore_ascii_case(t))
                .map(TableSelector::Index)
                .unwrap_or_else(|| TableSelector::Name(t.to_string()))
        }
    }
}
