//! Graph names and the symbol environment that binds them.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ExecutionError, ExecutionResult};

/// A storage graph name: the label a vertex carries and the entry an edge
/// lists in its membership property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphName(String);

impl GraphName {
    /// Validate a name. It must be non-empty and free of commas and
    /// whitespace.
    pub fn new(name: impl Into<String>) -> ExecutionResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExecutionError::invalid_graph_name(name, "name is empty"));
        }
        if name.contains(',') {
            return Err(ExecutionError::invalid_graph_name(name, "name contains a comma"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ExecutionError::invalid_graph_name(
                name,
                "name contains whitespace",
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GraphName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Binds graph symbols (`$name`) to storage names.
///
/// The base graph is known by name but never bound to a symbol; it stands
/// for every ingested element and carries no tag of its own.
#[derive(Debug, Clone)]
pub struct GraphEnvironment {
    base: GraphName,
    membership_key: String,
    prefix: String,
    next_id: u64,
    symbols: BTreeMap<String, GraphName>,
}

impl GraphEnvironment {
    /// Create an environment. `prefix` seeds allocated storage names.
    pub fn new(base: &str, prefix: &str, membership_key: &str) -> ExecutionResult<Self> {
        let base = GraphName::new(base)?;
        // the first allocated name must itself be valid
        GraphName::new(format!("{prefix}1"))?;
        Ok(Self {
            base,
            membership_key: membership_key.to_string(),
            prefix: prefix.to_string(),
            next_id: 1,
            symbols: BTreeMap::new(),
        })
    }

    pub fn base(&self) -> &GraphName {
        &self.base
    }

    /// Edge property holding the membership list.
    pub fn membership_key(&self) -> &str {
        &self.membership_key
    }

    pub fn is_base_graph(&self, name: &GraphName) -> bool {
        *name == self.base
    }

    /// Allocate a fresh storage name. Names already bound are skipped.
    pub fn allocate(&mut self) -> GraphName {
        loop {
            let candidate = GraphName(format!("{}{}", self.prefix, self.next_id));
            self.next_id += 1;
            if candidate != self.base && !self.symbols.values().any(|bound| *bound == candidate) {
                return candidate;
            }
        }
    }

    /// Bind `symbol`. Returns the previous binding, if any.
    pub fn bind(&mut self, symbol: impl Into<String>, name: GraphName) -> Option<GraphName> {
        let symbol = symbol.into();
        tracing::trace!(%symbol, graph = %name, "bind graph symbol");
        self.symbols.insert(symbol, name)
    }

    /// Storage name bound to `symbol`.
    pub fn lookup(&self, symbol: &str) -> ExecutionResult<&GraphName> {
        self.symbols
            .get(symbol)
            .ok_or_else(|| ExecutionError::unknown_graph_symbol(symbol))
    }

    /// Remove a binding. The graph's tags stay in the store.
    pub fn unbind(&mut self, symbol: &str) -> Option<GraphName> {
        self.symbols.remove(symbol)
    }

    /// Bound symbols sorted by symbol name.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &GraphName)> + '_ {
        self.symbols.iter().map(|(symbol, name)| (symbol.as_str(), name))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
