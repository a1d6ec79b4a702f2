//! Recording host and schema fixtures for tests.

use indoc::indoc;

use crate::host::{Invocation, QueryHost, QueryOptions, ScopedBody};
use crate::{Config, Error, Navigator, Result};

pub const TODO_SCHEMA: &str = indoc! {r#"
    {
        "todo_page": {
            "todo_app": {
                "new_todo": null,
                "main": {
                    "toggle_all": null,
                    "rows": {
                        "row": { "checkbox": null, "label": null }
                    }
                },
                "footer": { "count": null }
            }
        }
    }
"#};

pub fn navigator(schema: &str) -> Navigator {
    Navigator::from_json(schema, Config::default()).unwrap()
}

pub fn todo_navigator() -> Navigator {
    navigator(TODO_SCHEMA)
}

/// Operations the recording host exposes unless told otherwise.
pub const DEFAULT_OPERATIONS: &[&str] = &[
    "and", "as", "check", "click", "contains", "eq", "find", "first", "invoke", "its", "last",
    "should", "then", "type", "within",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Query(String),
    ScopedSubject,
    Call(String),
    Enter(String),
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockChain {
    pub selector: String,
    pub calls: Vec<String>,
}

impl MockChain {
    fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            calls: Vec::new(),
        }
    }
}

/// Records every request in order and answers with [`MockChain`]s.
#[derive(Debug)]
pub struct RecordingHost {
    pub events: Vec<Event>,
    pub captures: usize,
    operations: Vec<String>,
    subjects: Vec<String>,
    fail_call: Option<String>,
    fail_within: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::with_operations(DEFAULT_OPERATIONS)
    }

    pub fn with_operations(names: &[&str]) -> Self {
        Self {
            events: Vec::new(),
            captures: 0,
            operations: names.iter().map(|n| n.to_string()).collect(),
            subjects: Vec::new(),
            fail_call: None,
            fail_within: false,
        }
    }

    /// Make every call of operation `name` fail.
    pub fn fail_call(mut self, name: &str) -> Self {
        self.fail_call = Some(name.to_string());
        self
    }

    /// Make the scoping primitive fail before running its body.
    pub fn fail_within(mut self) -> Self {
        self.fail_within = true;
        self
    }

    /// Selectors passed to `query`, in order.
    pub fn queries(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Query(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl QueryHost for RecordingHost {
    type Subject = String;
    type Chain = MockChain;

    fn operation_names(&mut self) -> Vec<String> {
        self.captures += 1;
        self.operations.clone()
    }

    fn query(&mut self, selector: &str, _options: &QueryOptions) -> Result<MockChain> {
        self.events.push(Event::Query(selector.to_string()));
        Ok(MockChain::new(selector))
    }

    fn scoped_subject(&mut self) -> Result<MockChain> {
        self.events.push(Event::ScopedSubject);
        let subject = self.subjects.last().cloned().unwrap_or_default();
        Ok(MockChain::new(subject))
    }

    fn call(&mut self, mut chain: MockChain, invocation: &Invocation) -> Result<MockChain> {
        self.events.push(Event::Call(invocation.name.clone()));
        if self.fail_call.as_deref() == Some(invocation.name.as_str()) {
            return Err(Error::host(format!("{} failed", invocation.name)));
        }
        chain.calls.push(invocation.name.clone());
        Ok(chain)
    }

    fn within(
        &mut self,
        chain: MockChain,
        _options: &QueryOptions,
        body: &mut ScopedBody<'_, Self>,
    ) -> Result<MockChain> {
        if self.fail_within {
            return Err(Error::host("within failed"));
        }
        self.events.push(Event::Enter(chain.selector.clone()));
        self.subjects.push(chain.selector.clone());
        let result = body(self, chain.selector.clone());
        self.subjects.pop();
        self.events.push(Event::Exit);
        result.map(|()| chain)
    }
}
