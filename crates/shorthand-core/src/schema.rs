//! Raw navigation schema.
//!
//! A schema is a nested JSON object. Keys name selector fragments (usually
//! `data-test` values), values are either another object or `null` for a leaf.
//! Only the shape is checked here; key contents are the author's business.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{Result, SchemaError};

/// One level of DOM hierarchy.
///
/// Entries keep the order in which they were written, so everything derived
/// from a schema (extension, canonical keys, printed trees) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaNode {
    entries: IndexMap<String, Option<SchemaNode>>,
}

impl SchemaNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf entry (`"key": null`).
    pub fn leaf(mut self, key: impl Into<String>) -> Self {
        self.entries.insert(key.into(), None);
        self
    }

    /// Add a nested entry.
    pub fn branch(mut self, key: impl Into<String>, child: SchemaNode) -> Self {
        self.entries.insert(key.into(), Some(child));
        self
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, child: Option<SchemaNode>) {
        self.entries.insert(key.into(), child);
    }

    /// Look up an entry. The outer `Option` is presence, the inner one is leaf-ness.
    pub fn get(&self, key: &str) -> Option<Option<&SchemaNode>> {
        self.entries.get(key).map(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SchemaNode>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert a JSON value into a schema, checking shape along the way.
    ///
    /// The root must be an object. Below the root every value must be an
    /// object or `null`; anything else is reported with its JSON path.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map, "$"),
            other => Err(SchemaError::InvalidShape {
                path: "$".to_string(),
                expected: "an object",
                found: json_kind(other),
            }),
        }
    }

    fn from_map(map: &Map<String, Value>, path: &str) -> Result<Self> {
        let mut node = SchemaNode::new();
        for (key, child) in map {
            let child_path = format!("{path}.{key}");
            let child = match child {
                Value::Null => None,
                Value::Object(inner) => Some(Self::from_map(inner, &child_path)?),
                other => {
                    return Err(SchemaError::InvalidShape {
                        path: child_path,
                        expected: "an object or null",
                        found: json_kind(other),
                    });
                }
            };
            node.entries.insert(key.clone(), child);
        }
        Ok(node)
    }

    /// Render back to JSON, preserving entry order.
    pub fn to_value(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.as_ref().map_or(Value::Null, SchemaNode::to_value)))
            .collect();
        Value::Object(map)
    }
}

/// Parse schema JSON text.
pub fn parse_schema(json: &str) -> Result<SchemaNode> {
    let value: Value = serde_json::from_str(json)?;
    SchemaNode::from_value(&value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
