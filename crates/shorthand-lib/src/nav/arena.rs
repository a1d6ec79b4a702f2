//! Node storage and the `(prefix, schema)` memo cache.

use std::collections::HashMap;
use std::sync::Arc;

use shorthand_core::{ExtendedSchema, Interner, Symbol};

/// Index of a built node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// Whether a node answers host operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The root of a schema with children: a plain record of child accessors.
    Record,
    /// Any node with a prefix, or a leaf: host operations dispatch through it.
    Proxied,
}

#[derive(Debug)]
pub(crate) struct NodeData {
    pub prefix: Arc<str>,
    pub schema: Option<Arc<ExtendedSchema>>,
    pub kind: NodeKind,
}

type CacheKey = (Symbol, Option<Symbol>);

#[derive(Debug, Default)]
pub(crate) struct Arena {
    interner: Interner,
    nodes: Vec<NodeData>,
    cache: HashMap<CacheKey, NodeId>,
    pub hits: usize,
}

impl Arena {
    /// Return the node for `(prefix, schema)`, building it on first request.
    pub fn build(&mut self, prefix: &str, schema: Option<&Arc<ExtendedSchema>>) -> NodeId {
        let prefix_sym = self.interner.intern(prefix);
        let schema_sym = schema.map(|s| self.interner.intern(s.canonical()));
        let key = (prefix_sym, schema_sym);

        if let Some(&id) = self.cache.get(&key) {
            self.hits += 1;
            tracing::trace!(prefix, node = id.0, "navigation cache hit");
            return id;
        }

        let kind = if schema.is_none() || !prefix.is_empty() {
            NodeKind::Proxied
        } else {
            NodeKind::Record
        };
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            prefix: self.interner.resolve_shared(prefix_sym),
            schema: schema.cloned(),
            kind,
        });
        self.cache.insert(key, id);
        tracing::debug!(prefix, node = id.0, ?kind, "built navigation node");
        id
    }

    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
