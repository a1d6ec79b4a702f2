//! Property resolution on a node.
//!
//! Every name looked up on a node resolves to exactly one [`Accessor`].
//! Host operation names dispatch to the host, except where the node defines
//! the same name itself: schema children shadow host operations on that
//! node only.

use std::sync::Arc;

use shorthand_core::ROW_FILTER_KEY;

use crate::host::HostApi;
use crate::nav::{Node, RowFilter};

/// Reserved name under which a node exposes its accumulated prefix.
pub const PREFIX_KEY: &str = "___prefix";

/// What a name means on a particular node.
#[derive(Debug)]
pub enum Accessor<'n> {
    /// A schema child.
    NavigationChild(Node<'n>),
    /// The `with` row filter of a container.
    RowFilter(RowFilter<'n>),
    /// The node's own prefix.
    Prefix(Arc<str>),
    /// An operation of the host query chain, run against this node.
    HostOperation(HostOperation<'n>),
}

/// A host operation bound to the node it was looked up on.
#[derive(Clone, Debug)]
pub struct HostOperation<'n> {
    pub(crate) node: Node<'n>,
    pub(crate) name: String,
    pub(crate) scoping: bool,
}

impl<'n> HostOperation<'n> {
    pub fn node(&self) -> Node<'n> {
        self.node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the scoping operation, which needs a callback.
    pub fn is_scoping(&self) -> bool {
        self.scoping
    }
}

/// Resolve `name` on `node`.
///
/// Returns `None` for names that are neither host operations nor defined by
/// the node. Mistyped paths therefore surface later, as a host-side
/// "element not found", not here.
pub fn resolve<'n>(node: Node<'n>, name: &str, api: &HostApi) -> Option<Accessor<'n>> {
    if node.is_proxied() && api.contains(name) && !node.defines(name) {
        let scoping = name == node.navigator().config().scoping_operation_name();
        return Some(Accessor::HostOperation(HostOperation {
            node,
            name: name.to_string(),
            scoping,
        }));
    }

    if let Some(child) = node.child(name) {
        return Some(Accessor::NavigationChild(child));
    }
    if name == ROW_FILTER_KEY
        && let Some(filter) = node.row_filter()
    {
        return Some(Accessor::RowFilter(filter));
    }
    if name == PREFIX_KEY {
        return Some(Accessor::Prefix(node.prefix()));
    }
    None
}
