//! Core request/response plumbing shared by every endpoint
//!
//! - `params`: parameter vocabulary, validation and merging
//! - `table`: result tables and their conversion into records

pub mod params;
pub mod table;

// Re-export commonly used items for convenience
pub use params::{
    NullPolicy, Overrides, ParamKind, ParamSchema, ParamSpec, ParamValue, ParameterBuilder,
    ParameterSet,
};
pub use table::{extract, Record, ResponseDocument, ResultTable, TableLayout, TableSelector};
