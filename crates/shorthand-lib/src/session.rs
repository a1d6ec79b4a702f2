//! One linear test execution against a host.
//!
//! A [`Session`] pairs the shared [`Navigator`] with a host and a scope
//! stack of its own. Every host operation goes through it, so the selector
//! that reaches the host is always computed from the scope stack as it is
//! at the moment the operation is issued.

use serde_json::Value;

use crate::accessor::{self, Accessor};
use crate::host::{Invocation, QueryHost, QueryOptions};
use crate::nav::{Navigator, Node};
use crate::scope::ScopeStack;
use crate::{Error, Result};

pub struct Session<'n, 'h, H: QueryHost> {
    navigator: &'n Navigator,
    host: &'h mut H,
    scopes: ScopeStack,
}

impl<'n, 'h, H: QueryHost> Session<'n, 'h, H> {
    pub(crate) fn new(navigator: &'n Navigator, host: &'h mut H) -> Self {
        Self {
            navigator,
            host,
            scopes: ScopeStack::new(),
        }
    }

    pub fn root(&self) -> Node<'n> {
        self.navigator.root()
    }

    pub fn navigator(&self) -> &'n Navigator {
        self.navigator
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn host(&mut self) -> &mut H {
        &mut *self.host
    }

    /// What `name` means on `node`, given the host's operation names.
    pub fn resolve(&mut self, node: Node<'n>, name: &str) -> Option<Accessor<'n>> {
        let api = self.navigator.host_api(&mut *self.host);
        accessor::resolve(node, name, api)
    }

    /// Run the host operation `name` against the elements `node` addresses.
    ///
    /// The scoping operation is rejected here; use [`Session::within`].
    pub fn call(&mut self, node: Node<'n>, name: &str, args: Vec<Value>) -> Result<H::Chain> {
        let op = self.host_operation(node, name)?;
        if op.is_scoping() {
            return Err(Error::ScopingOperation {
                name: name.to_string(),
            });
        }
        let chain = self.subject_for(node)?;
        tracing::debug!(operation = name, "dispatching host operation");
        self.host.call(chain, &Invocation::new(name, args))
    }

    /// Continue a chain returned by an earlier call.
    pub fn then(&mut self, chain: H::Chain, name: &str, args: Vec<Value>) -> Result<H::Chain> {
        tracing::debug!(operation = name, "continuing host chain");
        self.host.call(chain, &Invocation::new(name, args))
    }

    /// Scope queries to `node` while `body` runs.
    ///
    /// Inside `body`, nodes at or below `node` resolve relative to it, and
    /// `node` itself resolves to the host's scoped subject. The scope entry
    /// is popped before this returns, whatever the outcome.
    pub fn within<F>(
        &mut self,
        node: Node<'n>,
        options: &QueryOptions,
        mut body: F,
    ) -> Result<H::Chain>
    where
        F: FnMut(&mut Session<'n, '_, H>, Node<'n>, H::Subject) -> Result<()>,
    {
        let scoping = self.navigator.config().scoping_operation_name().to_string();
        self.host_operation(node, &scoping)?;

        let prefix = node.prefix();
        // Target first: it must be stripped against the enclosing scope.
        let chain = self.subject_for(node)?;
        let guard = self.scopes.enter(&prefix);

        let navigator = self.navigator;
        let scopes = self.scopes.clone();
        let mut scoped = |host: &mut H, subject: H::Subject| -> Result<()> {
            let mut inner = Session {
                navigator,
                host,
                scopes: scopes.clone(),
            };
            body(&mut inner, node, subject)
        };
        let result = self.host.within(chain, options, &mut scoped);

        drop(guard);
        result
    }

    /// Compile `shorthand` and query it directly, ignoring the scope stack.
    pub fn tget(&mut self, shorthand: &str, options: &QueryOptions) -> Result<H::Chain> {
        let selector = self.navigator.compiler().compile(shorthand);
        tracing::debug!(%selector, "dispatching direct query");
        self.host.query(&selector, options)
    }

    fn host_operation(
        &mut self,
        node: Node<'n>,
        name: &str,
    ) -> Result<accessor::HostOperation<'n>> {
        let api = self.navigator.host_api(&mut *self.host);
        match accessor::resolve(node, name, api) {
            Some(Accessor::HostOperation(op)) => Ok(op),
            _ if api.contains(name) => Err(Error::ShadowedOperation {
                name: name.to_string(),
                prefix: node.prefix().to_string(),
            }),
            _ => Err(Error::UnknownOperation {
                name: name.to_string(),
                prefix: node.prefix().to_string(),
            }),
        }
    }

    /// The chain a host operation on `node` runs against.
    fn subject_for(&mut self, node: Node<'n>) -> Result<H::Chain> {
        let stripped = self.scopes.strip(&node.prefix());
        if stripped.is_empty() {
            tracing::debug!(depth = self.scopes.depth(), "reusing scoped subject");
            return self.host.scoped_subject();
        }
        let selector = self.navigator.compiler().compile(&stripped);
        tracing::debug!(%selector, "dispatching query");
        self.host.query(&selector, &QueryOptions::default())
    }
}
