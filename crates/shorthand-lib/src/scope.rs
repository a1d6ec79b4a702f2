//! Scope stack.
//!
//! Each entry is the full shorthand prefix of a node that is currently being
//! scoped into. Queries issued while a scope is active drop the top entry's
//! tokens from their own prefix, because the host already restricts them to
//! that subtree.
//!
//! The stack belongs to one session (one test). Entries are popped by
//! [`ScopeGuard`] on drop, so the stack stays balanced when a scoped body
//! returns an error or unwinds.

use std::cell::RefCell;
use std::rc::Rc;

use crate::selector::tokenize;

/// Shared handle to a session's scope stack.
///
/// Clones share the same stack, which lets nested sessions created inside
/// a scoped callback see and extend the outer scopes.
#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    entries: Rc<RefCell<Vec<String>>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Prefix of the innermost active scope.
    pub fn top(&self) -> Option<String> {
        self.entries.borrow().last().cloned()
    }

    /// Snapshot of all entries, outermost first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    /// Strip the innermost scope from `selector`, token by token.
    ///
    /// With no active scope, or when the scope is not a token prefix of
    /// `selector`, the selector comes back unchanged (normalized to single
    /// spaces). An empty result means `selector` *is* the active scope.
    pub fn strip(&self, selector: &str) -> String {
        match self.entries.borrow().last() {
            Some(scope) => strip_scope(selector, scope),
            None => tokenize(selector).join(" "),
        }
    }

    /// Push `selector` as the new innermost scope.
    #[must_use = "the scope is popped when the guard is dropped"]
    pub fn enter(&self, selector: &str) -> ScopeGuard {
        let depth = {
            let mut entries = self.entries.borrow_mut();
            entries.push(selector.to_string());
            entries.len()
        };
        tracing::debug!(scope = selector, depth, "entered scope");
        ScopeGuard {
            stack: self.clone(),
            depth,
        }
    }
}

/// Pops its scope entry when dropped.
#[derive(Debug)]
pub struct ScopeGuard {
    stack: ScopeStack,
    depth: usize,
}

impl ScopeGuard {
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let mut entries = self.stack.entries.borrow_mut();
        // Truncate rather than pop: anything still above this level is stale too.
        entries.truncate(self.depth - 1);
        tracing::debug!(depth = self.depth - 1, "left scope");
    }
}

/// Token-aligned prefix removal.
///
/// `strip_scope("a b c", "a b")` is `"c"`, but `strip_scope("a bc", "a b")`
/// is `"a bc"`: a partial token never counts as a match.
pub fn strip_scope(selector: &str, scope: &str) -> String {
    let tokens = tokenize(selector);
    let scope_tokens = tokenize(scope);

    if scope_tokens.len() <= tokens.len() && tokens[..scope_tokens.len()] == scope_tokens[..] {
        tokens[scope_tokens.len()..].join(" ")
    } else {
        tokens.join(" ")
    }
}
