//! `endpoints` command: list the catalog.

use crate::stats::{endpoints, EndpointSpec};

/// One line per endpoint: name, resource path and table names.
pub fn describe(spec: &EndpointSpec) -> String {
    format!("{:<20} {:<20} {}", spec.name, spec.path, spec.tables.join(", "))
}

/// Handle the endpoints command
pub fn handle_endpoints() {
    for spec in endpoints::all() {
        println!("{}", describe(&spec));
    }
}
