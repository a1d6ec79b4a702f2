//! Node handles and row filters.

use std::fmt;
use std::sync::Arc;

use shorthand_core::ExtendedSchema;
use shorthand_core::utils::to_camel_case;

use super::{Navigator, NodeId, NodeKind};
use crate::selector::escape_text;

/// A position in the navigation tree.
///
/// Cheap to copy. Navigating never mutates anything visible; it only
/// returns other nodes.
#[derive(Clone, Copy)]
pub struct Node<'n> {
    navigator: &'n Navigator,
    id: NodeId,
}

impl<'n> Node<'n> {
    pub(crate) fn new(navigator: &'n Navigator, id: NodeId) -> Self {
        Self { navigator, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn navigator(&self) -> &'n Navigator {
        self.navigator
    }

    /// Accumulated shorthand selector from the root to this node.
    pub fn prefix(&self) -> Arc<str> {
        self.navigator.with_data(self.id, |d| Arc::clone(&d.prefix))
    }

    /// The prefix run through the selector compiler, ignoring any scope.
    pub fn selector(&self) -> String {
        self.navigator.compiler().compile(&self.prefix())
    }

    pub fn kind(&self) -> NodeKind {
        self.navigator.with_data(self.id, |d| d.kind)
    }

    /// Whether host operations can be dispatched through this node.
    pub fn is_proxied(&self) -> bool {
        self.kind() == NodeKind::Proxied
    }

    pub fn is_leaf(&self) -> bool {
        self.schema().is_none()
    }

    pub(crate) fn schema(&self) -> Option<Arc<ExtendedSchema>> {
        self.navigator.with_data(self.id, |d| d.schema.clone())
    }

    /// Child keys as written in the schema.
    pub fn keys(&self) -> Vec<String> {
        self.schema()
            .map(|s| s.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Navigate to a child by key, or by the key's camelCase alias.
    pub fn child(&self, name: &str) -> Option<Node<'n>> {
        let schema = self.schema()?;
        let key = resolve_key(&schema, name)?;
        let child_schema = schema.get(key).flatten();

        let parent = self.prefix();
        let prefix = if parent.is_empty() {
            key.to_string()
        } else {
            format!("{parent} {key}")
        };
        Some(Node::new(
            self.navigator,
            self.navigator.build(&prefix, child_schema),
        ))
    }

    /// Follow several child names, separated by dots or whitespace.
    pub fn walk(&self, path: &str) -> Option<Node<'n>> {
        path.split(|c: char| c == '.' || c.is_whitespace())
            .filter(|step| !step.is_empty())
            .try_fold(*self, |node, step| node.child(step))
    }

    /// Row filters, when this node is a container whose item has columns.
    pub fn row_filter(&self) -> Option<RowFilter<'n>> {
        let schema = self.schema()?;
        let filter = schema.row_filter()?;
        Some(RowFilter {
            container: *self,
            item_key: filter.item_key().to_string(),
            columns: Arc::clone(filter.columns()),
        })
    }

    /// Whether `name` is something this node defines itself: a child (or
    /// its alias), the `with` row filter, or the prefix field.
    pub fn defines(&self, name: &str) -> bool {
        use crate::accessor::PREFIX_KEY;
        use shorthand_core::ROW_FILTER_KEY;

        if name == PREFIX_KEY {
            return true;
        }
        let Some(schema) = self.schema() else {
            return false;
        };
        resolve_key(&schema, name).is_some()
            || (name == ROW_FILTER_KEY && schema.row_filter().is_some())
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.navigator, other.navigator) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("prefix", &self.prefix())
            .finish()
    }
}

/// `with` accessor of a container: one filter per item column.
#[derive(Clone)]
pub struct RowFilter<'n> {
    container: Node<'n>,
    item_key: String,
    columns: Arc<ExtendedSchema>,
}

impl<'n> RowFilter<'n> {
    pub fn container(&self) -> Node<'n> {
        self.container
    }

    pub fn item_key(&self) -> &str {
        &self.item_key
    }

    /// Column names as written in the item schema.
    pub fn columns(&self) -> Vec<String> {
        self.columns.keys().map(str::to_string).collect()
    }

    /// The item whose `column` contains `text`.
    ///
    /// The returned node sits on one matched item, so navigation continues
    /// with the item's children.
    pub fn by(&self, column: &str, text: &str) -> Option<Node<'n>> {
        let column = resolve_key(&self.columns, column)?;
        let navigator = self.container.navigator;
        let parent = self.container.prefix();
        let fragment = format!(
            "{}:has({}:contains('{}'))",
            self.item_key,
            navigator.compiler().attribute_selector(column),
            escape_text(text)
        );
        let prefix = if parent.is_empty() {
            fragment
        } else {
            format!("{parent} {fragment}")
        };
        Some(Node::new(
            navigator,
            navigator.build(&prefix, Some(&self.columns)),
        ))
    }
}

impl fmt::Debug for RowFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowFilter")
            .field("container", &self.container)
            .field("item_key", &self.item_key)
            .field("columns", &self.columns())
            .finish()
    }
}

/// Exact key first, then the first key whose camelCase alias matches.
fn resolve_key<'s>(schema: &'s ExtendedSchema, name: &str) -> Option<&'s str> {
    if schema.contains_key(name) {
        return schema.keys().find(|k| *k == name);
    }
    schema.keys().find(|k| to_camel_case(k) == name)
}
