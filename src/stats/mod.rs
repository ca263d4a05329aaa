//! Stats API access: HTTP transport, the generic endpoint wrapper and the
//! endpoint catalog.

pub mod endpoint;
pub mod endpoints;
pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use endpoint::{fetch_all, Endpoint, EndpointSpec};
pub use http::{ClientConfig, StatsClient, Transport, STATS_BASE_URL};
