//! Named predicate storage.

use crate::node::PredicateNode;
use std::collections::HashMap;

/// Symbol table of resolved predicates (`$name -> tree`).
///
/// Trees handed out by [`resolve`](Self::resolve) are owned copies; nothing
/// the caller does to them reaches the stored entry.
#[derive(Debug, Default, Clone)]
pub struct PredicateSymbolTable {
    predicates: HashMap<String, PredicateNode>,
}

impl PredicateSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or rebind a symbol. Returns the previous tree, if any.
    pub fn set(&mut self, symbol: impl Into<String>, node: PredicateNode) -> Option<PredicateNode> {
        let symbol = symbol.into();
        tracing::trace!(%symbol, predicate = %node, "set predicate symbol");
        self.predicates.insert(symbol, node)
    }

    /// Deep copy of the tree bound to `symbol`.
    pub fn resolve(&self, symbol: &str) -> Option<PredicateNode> {
        self.predicates.get(symbol).cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.predicates.contains_key(symbol)
    }

    /// Remove a symbol. Returns true if it was bound.
    pub fn erase(&mut self, symbol: &str) -> bool {
        self.predicates.remove(symbol).is_some()
    }

    /// Bound symbol names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
