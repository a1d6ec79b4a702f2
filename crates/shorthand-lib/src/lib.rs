//! Selector shorthand: schema-driven navigation that compiles property
//! paths into `data-test` attribute selectors.
//!
//! # Example
//!
//! ```
//! use shorthand_lib::{Config, Navigator};
//!
//! let schema = r#"{ "todo_page": { "rows": { "row": { "label": null } } } }"#;
//! let navigator = Navigator::from_json(schema, Config::default())?;
//!
//! let rows = navigator.root().walk("todo_page.rows").unwrap();
//! let row = rows.row_filter().unwrap().by("label", "Walk the dog").unwrap();
//! assert_eq!(
//!     row.selector(),
//!     "[data-test='todo_page'] [data-test='rows'] \
//!      [data-test='row']:has([data-test='label']:contains('Walk the dog'))"
//! );
//! # Ok::<(), shorthand_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod accessor;
pub mod config;
pub mod host;
pub mod nav;
pub mod printer;
pub mod scope;
pub mod selector;
pub mod session;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod session_tests;

pub use accessor::{Accessor, HostOperation, PREFIX_KEY};
pub use config::Config;
pub use host::{HostApi, Invocation, QueryHost, QueryOptions};
pub use nav::{Navigator, Node, NodeId, NodeKind, RowFilter, Stats};
pub use printer::TreePrinter;
pub use scope::{ScopeGuard, ScopeStack};
pub use selector::{SelectorCompiler, compile};
pub use session::Session;

/// Errors raised by the navigation engine or passed through from the host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] shorthand_core::SchemaError),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The name is not a host operation.
    #[error("`{name}` is not a host operation (at `{prefix}`)")]
    UnknownOperation { name: String, prefix: String },

    /// The name is a host operation, but this node does not dispatch it:
    /// either the node defines the name itself or it is the schema root.
    #[error("`{name}` does not dispatch to the host at `{prefix}`")]
    ShadowedOperation { name: String, prefix: String },

    /// The scoping operation needs a callback; it cannot be called directly.
    #[error("`{name}` takes a callback, use `within`")]
    ScopingOperation { name: String },

    /// Failure reported by the host.
    #[error("host error: {0}")]
    Host(String),
}

impl Error {
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, Error>;
