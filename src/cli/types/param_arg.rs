//! `Key=Value` command line parameter overrides.

use crate::core::params::{Overrides, ParamSchema};
use crate::error::{NbaError, Result};
use std::fmt;
use std::str::FromStr;

/// One `-p Key=Value` argument. The value stays textual until it is coerced
/// against an endpoint schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamArg {
    pub key: String,
    pub value: String,
}

impl FromStr for ParamArg {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok(Self {
                key: key.trim().to_string(),
                value: value.to_string(),
            }),
            _ => Err(NbaError::InvalidConfig {
                message: format!("expected Key=Value, got {:?}", s),
            }),
        }
    }
}

impl fmt::Display for ParamArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Coerce textual arguments into typed overrides for `schema`.
///
/// Unknown keys are kept so that merging reports every one of them.
pub fn to_overrides(args: &[ParamArg], schema: &ParamSchema) -> Result<Overrides> {
    let mut overrides = Overrides::new();
    for arg in args {
        overrides.insert(arg.key.clone(), schema.coerce(&arg.key, &arg.value)?);
    }
    Ok(overrides)
}
