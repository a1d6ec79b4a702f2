//! Row extension.
//!
//! Every container key (per the [`ContainerTable`]) whose item child has a
//! schema of its own gains a synthetic `with` entry mirroring that item
//! schema. Navigation turns that entry into per-column row filters.
//!
//! Extension is recursive and visits every node, extended or not.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::{ContainerTable, SchemaNode};

/// Key under which a synthesized row filter appears.
pub const ROW_FILTER_KEY: &str = "with";

/// Schema node after row extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedSchema {
    children: IndexMap<String, Option<Arc<ExtendedSchema>>>,
    row_filter: Option<RowFilterSchema>,
    canonical: String,
}

/// Synthetic `with` entry of a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowFilterSchema {
    item_key: String,
    columns: Arc<ExtendedSchema>,
}

impl RowFilterSchema {
    /// Key of the item inside the container (`row`).
    pub fn item_key(&self) -> &str {
        &self.item_key
    }

    /// The item's schema. Its keys are the filterable columns.
    pub fn columns(&self) -> &Arc<ExtendedSchema> {
        &self.columns
    }
}

/// Extend a raw schema.
pub fn extend(schema: &SchemaNode, containers: &ContainerTable) -> ExtendedSchema {
    let extended = extend_node(schema, None, containers);
    tracing::debug!(
        keys = extended.len(),
        canonical_len = extended.canonical.len(),
        "extended schema"
    );
    extended
}

fn extend_node(
    schema: &SchemaNode,
    own_key: Option<&str>,
    containers: &ContainerTable,
) -> ExtendedSchema {
    let children: IndexMap<String, Option<Arc<ExtendedSchema>>> = schema
        .iter()
        .map(|(key, child)| {
            let child = child.map(|c| Arc::new(extend_node(c, Some(key), containers)));
            (key.to_string(), child)
        })
        .collect();

    let row_filter = own_key
        .and_then(|key| containers.match_key(key))
        .and_then(|matched| {
            let item = children.get(&matched.item_key)?.as_ref()?;
            if item.is_empty() {
                return None;
            }
            if children.contains_key(ROW_FILTER_KEY) {
                tracing::warn!(
                    container = own_key.unwrap_or_default(),
                    "container already defines `{ROW_FILTER_KEY}`; row filter not synthesized"
                );
                return None;
            }
            Some(RowFilterSchema {
                item_key: matched.item_key,
                columns: Arc::clone(item),
            })
        });

    let canonical = canonicalize(&children, row_filter.as_ref());
    ExtendedSchema {
        children,
        row_filter,
        canonical,
    }
}

/// Deterministic form of a subtree. Synthesized filters are marked so that
/// they never collide with an author-written `with` key.
fn canonicalize(
    children: &IndexMap<String, Option<Arc<ExtendedSchema>>>,
    row_filter: Option<&RowFilterSchema>,
) -> String {
    let mut out = String::from("{");
    for (i, (key, child)) in children.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&Value::from(key.as_str()).to_string());
        out.push(':');
        match child {
            Some(child) => out.push_str(&child.canonical),
            None => out.push_str("null"),
        }
    }
    if let Some(filter) = row_filter {
        if !children.is_empty() {
            out.push(',');
        }
        out.push_str(&format!(
            "+{ROW_FILTER_KEY}({}):",
            Value::from(filter.item_key.as_str())
        ));
        out.push_str(&filter.columns.canonical);
    }
    out.push('}');
    out
}

impl ExtendedSchema {
    /// Look up a child. The outer `Option` is presence, the inner one is leaf-ness.
    pub fn get(&self, key: &str) -> Option<Option<&Arc<ExtendedSchema>>> {
        self.children.get(key).map(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Arc<ExtendedSchema>>)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn row_filter(&self) -> Option<&RowFilterSchema> {
        self.row_filter.as_ref()
    }

    /// Canonical serialization of this subtree, row filters included.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Render as JSON, with synthesized filters as a trailing `with` key.
    pub fn to_value(&self) -> Value {
        let mut map: serde_json::Map<String, Value> = self
            .children
            .iter()
            .map(|(k, v)| (k.clone(), v.as_ref().map_or(Value::Null, |c| c.to_value())))
            .collect();
        if let Some(filter) = &self.row_filter {
            map.insert(ROW_FILTER_KEY.to_string(), filter.columns.to_value());
        }
        Value::Object(map)
    }
}
