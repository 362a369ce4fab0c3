//! Session - the store plus the symbols bound over it.

use tagraph_algebra::{
    Comparison, GraphAlgebra, GraphEnvironment, GraphName, Instruction, InstructionOutput,
    TaggedGraphExecutor,
};
use tagraph_graph::Graph;
use tagraph_predicate::{
    codec, CompileError, Expr, PredicateNode, PredicateResolver, PredicateSymbolTable,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::result::ScriptResult;

/// A tagraph session.
///
/// Owns the backing store, the predicate symbol table and the graph
/// environment. Instructions run one at a time through `&mut self`.
pub struct Session {
    config: SessionConfig,
    /// Backing store shared by every named graph.
    graph: Graph,
    /// Graph symbol bindings.
    environment: GraphEnvironment,
    /// Predicate symbol bindings.
    predicates: PredicateSymbolTable,
}

impl Session {
    /// Create a session over an empty store.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        Self::with_graph(config, Graph::new())
    }

    /// Create a session over an existing store.
    ///
    /// The membership key becomes reserved: edges ingested afterwards may
    /// not carry it.
    pub fn with_graph(config: SessionConfig, mut graph: Graph) -> SessionResult<Self> {
        config.validate()?;
        let environment = GraphEnvironment::new(
            &config.base_graph_name,
            &config.graph_name_prefix,
            &config.membership_key,
        )?;
        graph.reserve_edge_key(config.membership_key.as_str());
        tracing::info!(
            base = %config.base_graph_name,
            prefix = %config.graph_name_prefix,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "session created"
        );
        Ok(Self {
            config,
            graph,
            environment,
            predicates: PredicateSymbolTable::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &Graph {
        &self.graph
    }

    /// Get a mutable reference to the store, for ingestion.
    pub fn store_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn environment(&self) -> &GraphEnvironment {
        &self.environment
    }

    pub fn predicates(&self) -> &PredicateSymbolTable {
        &self.predicates
    }

    // ==================== Predicates ====================

    /// Resolve an expression against the current predicate symbols.
    pub fn resolve_predicate(&self, expr: &Expr) -> SessionResult<PredicateNode> {
        Ok(PredicateResolver::new(&self.predicates).resolve(expr)?)
    }

    /// Resolve an expression and bind the tree to `symbol`.
    pub fn define_predicate(
        &mut self,
        symbol: impl Into<String>,
        expr: &Expr,
    ) -> SessionResult<PredicateNode> {
        let node = self.resolve_predicate(expr)?;
        self.predicates.set(symbol, node.clone());
        Ok(node)
    }

    /// Resolve an expression into a single-field filter.
    pub fn comparison(&self, expr: &Expr) -> SessionResult<Comparison> {
        let node = self.resolve_predicate(expr)?;
        Ok(Comparison::try_from(&node)?)
    }

    /// Encode the predicate bound to `symbol` as a versioned stream.
    pub fn export_predicate(&self, symbol: &str) -> SessionResult<String> {
        let node = self
            .predicates
            .resolve(symbol)
            .ok_or_else(|| CompileError::unknown_predicate(symbol, None))?;
        Ok(codec::serialize_versioned(&node))
    }

    /// Decode a versioned stream and bind it to `symbol`.
    pub fn import_predicate(
        &mut self,
        symbol: impl Into<String>,
        stream: &str,
    ) -> SessionResult<PredicateNode> {
        let node = codec::deserialize_versioned(stream)?;
        self.predicates.set(symbol, node.clone());
        Ok(node)
    }

    // ==================== Graphs ====================

    pub fn base_graph(&self) -> &GraphName {
        self.environment.base()
    }

    /// Allocate a fresh, empty graph and bind it to `symbol`.
    pub fn create_graph(&mut self, symbol: impl Into<String>) -> SessionResult<GraphName> {
        let name = self.environment.allocate();
        self.execute(&Instruction::CreateEmptyGraph {
            target: name.clone(),
        })?;
        self.environment.bind(symbol, name.clone());
        Ok(name)
    }

    /// Storage name of a graph symbol. The base graph answers to its own
    /// name.
    pub fn graph(&self, symbol: &str) -> SessionResult<GraphName> {
        if symbol == self.environment.base().as_str() {
            return Ok(self.environment.base().clone());
        }
        Ok(self.environment.lookup(symbol)?.clone())
    }

    // ==================== Execution ====================

    /// Run one instruction.
    pub fn execute(&mut self, instruction: &Instruction) -> SessionResult<InstructionOutput> {
        let mut executor =
            TaggedGraphExecutor::new(&mut self.graph, &mut self.environment, &mut self.predicates);
        Ok(executor.execute(instruction)?)
    }

    /// Run instructions in order, stopping at the first failure.
    ///
    /// There is no rollback: on failure the instructions before the failing
    /// one stay in effect, and the error reports how many there were.
    pub fn run_script(&mut self, instructions: &[Instruction]) -> SessionResult<ScriptResult> {
        let mut result = ScriptResult::default();
        for (index, instruction) in instructions.iter().enumerate() {
            match self.execute(instruction) {
                Ok(output) => result.outputs.push(output),
                Err(err) => {
                    tracing::warn!(
                        completed = index,
                        instruction = %instruction,
                        error = %err,
                        "script aborted"
                    );
                    return Err(SessionError::script_aborted(index, err));
                }
            }
        }
        tracing::info!(instructions = result.len(), "script completed");
        Ok(result)
    }
}
