#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for selector-shorthand navigation schemas.
//!
//! Two layers:
//! - **Raw layer** (`SchemaNode`): 1:1 mapping to the schema JSON file
//! - **Extended layer** (`ExtendedSchema`): the raw tree plus synthesized
//!   row filters for container nodes, with a canonical form per subtree
//!   that the navigation engine uses as a memoization key
//!
//! Nothing in this crate talks to a browser. It only shapes schemas.

mod colors;
mod containers;
mod extend;
mod interner;
mod schema;
pub mod utils;


pub use colors::Colors;
pub use containers::{ContainerMatch, ContainerTable};
pub use extend::{ExtendedSchema, ROW_FILTER_KEY, RowFilterSchema, extend};
pub use interner::{Interner, Symbol};
pub use schema::{SchemaNode, parse_schema};

/// Errors raised while loading a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input is not valid JSON.
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that must be an object (or `null`, below the root) was something else.
    #[error("expected {expected} at `{path}`, found {found}")]
    InvalidShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
