//! Navigator configuration.

use serde::{Deserialize, Serialize};
use shorthand_core::ContainerTable;

use crate::selector::{DEFAULT_ATTRIBUTE, SelectorCompiler};
use crate::{Error, Result};

/// Host operation that scopes subsequent queries to a subject.
pub const DEFAULT_SCOPING_OPERATION: &str = "within";

/// Configuration shared by everything a [`Navigator`](crate::Navigator) builds.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```json
/// { "attribute": "data-testid", "containers": { "rows": "row", "items": "item" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Test attribute the selector compiler and row filters match on.
    pub(crate) attribute: String,
    /// Container-suffix to item-name table used by row extension.
    pub(crate) containers: ContainerTable,
    /// Host operation treated as "enter scope".
    pub(crate) scoping_operation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            containers: ContainerTable::default(),
            scoping_operation: DEFAULT_SCOPING_OPERATION.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).map_err(Error::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject names that would compile to broken selectors or never dispatch.
    pub fn validate(&self) -> Result<()> {
        if self.attribute.trim().is_empty() {
            return Err(Error::InvalidConfig("`attribute` must not be empty".into()));
        }
        if self.scoping_operation.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "`scoping_operation` must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Set the test attribute (default: `data-test`).
    pub fn attribute(mut self, value: impl Into<String>) -> Self {
        self.attribute = value.into();
        self
    }

    /// Replace the container table (default: `rows` → `row`).
    pub fn containers(mut self, table: ContainerTable) -> Self {
        self.containers = table;
        self
    }

    /// Set the scoping operation name (default: `within`).
    pub fn scoping_operation(mut self, name: impl Into<String>) -> Self {
        self.scoping_operation = name.into();
        self
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute
    }

    pub fn container_table(&self) -> &ContainerTable {
        &self.containers
    }

    pub fn scoping_operation_name(&self) -> &str {
        &self.scoping_operation
    }

    pub(crate) fn compiler(&self) -> SelectorCompiler {
        SelectorCompiler::new(self.attribute.clone())
    }
}
