//! Error types for the stats API client

use std::fmt;

use thiserror::Error;

use crate::core::params::ParamKind;


pub type Result<T> = std::result::Result<T, NbaError>;

/// An override whose value kind does not match the endpoint schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatch {
    pub key: String,
    pub expected: ParamKind,
    pub found: ParamKind,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (expected {}, got {})", self.key, self.expected, self.found)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("Unrecognized parameter(s) for {endpoint}: {}", .keys.join(", "))]
    UnrecognizedParameter { endpoint: String, keys: Vec<String> },

    #[error("Parameter value kind mismatch for {endpoint}: {}", join(.mismatches))]
    ParameterKind {
        endpoint: String,
        mismatches: Vec<KindMismatch>,
    },

    #[error("Invalid value for parameter {key}: expected {kind}, got {value:?}")]
    InvalidParameterValue {
        key: String,
        kind: ParamKind,
        value: String,
    },

    /// Non-success reply. `body` is the raw payload returned by the server.
    #[error("Stats API returned {status} for {url}: {body}")]
    Transport {
        status: u16,
        url: String,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Result table not found: {selector}")]
    TableNotFound { selector: String },

    #[error("Malformed result table {table}: {reason}")]
    MalformedTable { table: String, reason: String },

    #[error("Fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("Invalid season {value:?} (expected e.g. 2015-16)")]
    InvalidSeason { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
