//! String interning for memoization keys.
//!
//! Selector prefixes and canonical schema forms are long strings that get
//! compared on every navigation step. Interning turns them into `Symbol`
//! handles so cache keys are a pair of integers.

use std::collections::HashMap;
use std::sync::Arc;

/// Handle to an interned string. Equality is integer equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

/// Deduplicating string store.
///
/// Strings are held as `Arc<str>` so callers can keep a resolved string
/// alive without borrowing the interner.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    lookup: HashMap<Arc<str>, Symbol>,
    strings: Vec<Arc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the existing symbol if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.lookup.get(s) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        let shared: Arc<str> = Arc::from(s);
        self.strings.push(Arc::clone(&shared));
        self.lookup.insert(shared, sym);
        sym
    }

    /// Resolve to a shared handle that outlives the borrow of the interner.
    ///
    /// # Panics
    /// Panics if the symbol came from another interner.
    #[inline]
    pub fn resolve_shared(&self, sym: Symbol) -> Arc<str> {
        Arc::clone(&self.strings[sym.0 as usize])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
