//! `params` command: validate overrides and show what would be sent.

use crate::{cli::types::ParamArg, core::ParameterBuilder, Result};

use super::resolve_endpoint;

/// Query pairs an endpoint would be called with, without sending anything.
pub fn preview(endpoint: &str, params: &[ParamArg]) -> Result<Vec<(String, String)>> {
    let (spec, overrides) = resolve_endpoint(endpoint, params)?;
    let mut builder = ParameterBuilder::new(spec.name, spec.schema()?);
    builder.apply_overrides(&overrides)?;
    Ok(builder.query_pairs())
}

/// Handle the params command
pub fn handle_params(endpoint: &str, params: &[ParamArg]) -> Result<()> {
    for (key, value) in preview(endpoint, params)? {
        println!("{}={}", key, value);
    }
    Ok(())
}
