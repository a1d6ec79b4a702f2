//! Lazy navigation tree.
//!
//! A [`Navigator`] owns one extended schema and an arena of nodes built from
//! it. Nodes are created only when navigation reaches them, and each
//! `(prefix, schema)` pair is built once: walking to the same place twice
//! yields the same [`NodeId`].
//!
//! The navigator is meant to be shared by every test that uses the schema.
//! Its caches only grow and are never invalidated.

mod arena;
mod node;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use shorthand_core::{ExtendedSchema, SchemaNode, extend, parse_schema};

use crate::host::{HostApi, QueryHost};
use crate::printer::TreePrinter;
use crate::selector::SelectorCompiler;
use crate::session::Session;
use crate::{Config, Result};

pub use arena::{NodeId, NodeKind};
pub use node::{Node, RowFilter};

use arena::{Arena, NodeData};

/// Counters describing how much work the navigator has done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Nodes built (memo cache misses).
    pub nodes_built: usize,
    /// Memo cache hits.
    pub cache_hits: usize,
    /// Host operation-name captures.
    pub host_captures: usize,
}

/// Entry point: one schema, its lazily built tree, and shared caches.
#[derive(Debug)]
pub struct Navigator {
    config: Config,
    compiler: SelectorCompiler,
    schema: Arc<ExtendedSchema>,
    arena: Mutex<Arena>,
    root: NodeId,
    host_api: OnceLock<HostApi>,
    host_captures: AtomicUsize,
}

impl Navigator {
    /// Build a navigator with the default configuration.
    pub fn new(schema: &SchemaNode) -> Self {
        Self::assemble(schema, Config::default())
    }

    /// Build a navigator after checking `config`.
    pub fn with_config(schema: &SchemaNode, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(schema, config))
    }

    fn assemble(schema: &SchemaNode, config: Config) -> Self {
        let extended = Arc::new(extend(schema, &config.containers));
        let mut arena = Arena::default();
        let root = arena.build("", Some(&extended));

        Self {
            compiler: config.compiler(),
            config,
            schema: extended,
            arena: Mutex::new(arena),
            root,
            host_api: OnceLock::new(),
            host_captures: AtomicUsize::new(0),
        }
    }

    /// Parse schema JSON and build a navigator.
    pub fn from_json(json: &str, config: Config) -> Result<Self> {
        let schema = parse_schema(json)?;
        Self::with_config(&schema, config)
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(self, self.root)
    }

    /// Reconstruct a node handle from an id previously handed out by this navigator.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.lock().len() as u32).then(|| Node::new(self, id))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn compiler(&self) -> &SelectorCompiler {
        &self.compiler
    }

    pub fn schema(&self) -> &ExtendedSchema {
        &self.schema
    }

    pub fn stats(&self) -> Stats {
        let arena = self.lock();
        Stats {
            nodes_built: arena.len(),
            cache_hits: arena.hits,
            host_captures: self.host_captures.load(Ordering::Relaxed),
        }
    }

    /// Start a session (one linear test execution) against `host`.
    pub fn session<'h, H: QueryHost>(&self, host: &'h mut H) -> Session<'_, 'h, H> {
        Session::new(self, host)
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }

    /// Host operation names, captured from `host` the first time they are needed.
    pub(crate) fn host_api<H: QueryHost>(&self, host: &mut H) -> &HostApi {
        self.host_api.get_or_init(|| {
            self.host_captures.fetch_add(1, Ordering::Relaxed);
            let api = HostApi::new(host.operation_names());
            tracing::debug!(operations = api.len(), "captured host operation names");
            api
        })
    }

    pub(crate) fn build(&self, prefix: &str, schema: Option<&Arc<ExtendedSchema>>) -> NodeId {
        self.lock().build(prefix, schema)
    }

    pub(crate) fn with_data<R>(&self, id: NodeId, f: impl FnOnce(&NodeData) -> R) -> R {
        f(self.lock().get(id))
    }

    fn lock(&self) -> MutexGuard<'_, Arena> {
        // Append-only: a poisoned lock still guards a consistent arena.
        self.arena.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
