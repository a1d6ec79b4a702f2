//! Boundary with the host query-chain engine.
//!
//! The navigation engine never touches a DOM. It compiles selectors and
//! hands them to a [`QueryHost`], which owns element lookup, deferred
//! execution and its own notion of the current scope subject.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Options forwarded verbatim to host primitives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    /// Whether the host should log the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<bool>,
    /// Retry timeout for the command, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl QueryOptions {
    /// Options that suppress host logging.
    pub fn quiet() -> Self {
        Self {
            log: Some(false),
            ..Self::default()
        }
    }

    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = Some(ms);
        self
    }
}

/// A host operation call: its name and JSON arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<Value>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Callback run by the host while a scope is active.
pub type ScopedBody<'b, H> = dyn FnMut(&mut H, <H as QueryHost>::Subject) -> Result<()> + 'b;

/// The host query-chain engine.
///
/// Calls are made in submission order; a host that defers execution must
/// preserve that order.
pub trait QueryHost: Sized {
    /// What a scoped callback receives as the current subject.
    type Subject;
    /// A deferred, chainable result.
    type Chain;

    /// Names of every operation a chain result exposes.
    ///
    /// Called at most once per navigator; implementations typically build a
    /// throwaway chain and list its methods.
    fn operation_names(&mut self) -> Vec<String>;

    /// Look up elements by a compiled selector.
    fn query(&mut self, selector: &str, options: &QueryOptions) -> Result<Self::Chain>;

    /// The subject of the innermost active scope.
    fn scoped_subject(&mut self) -> Result<Self::Chain>;

    /// Run an operation on a chain.
    fn call(&mut self, chain: Self::Chain, invocation: &Invocation) -> Result<Self::Chain>;

    /// Scope subsequent queries to `chain`'s subject while `body` runs.
    fn within(
        &mut self,
        chain: Self::Chain,
        options: &QueryOptions,
        body: &mut ScopedBody<'_, Self>,
    ) -> Result<Self::Chain>;
}

/// Operation names exposed by the host, captured once.
#[derive(Clone, Debug, Default)]
pub struct HostApi {
    names: HashSet<String>,
}

impl HostApi {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
