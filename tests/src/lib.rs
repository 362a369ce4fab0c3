//! Tagraph integration test framework.
//!
//! Scenarios run a sequence of graph algebra instructions against a seeded
//! provenance store and check the membership of named graphs after each
//! step.
//!
//! ```ignore
//! Scenario::new("union")
//!     .step(
//!         "c_gets_a",
//!         |s| s.union("$C", "$A"),
//!         |a| a.graph("$C").vertices(["v1", "v2"]).edges(["e1"]),
//!     )
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod error;
pub mod fixtures;
mod scenario;

pub use assertion::Assertion;
pub use error::{TestError, TestResult};
pub use scenario::{Scenario, Step};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::fixtures::{self, GraphOps};
    pub use crate::{init_tracing, Assertion, Scenario, Step, TestError, TestResult};
    pub use tagraph_algebra::{
        Comparison, Component, Direction, ExecutionError, GraphName, GraphStats, Instruction,
        InstructionOutput, ListStyle, PredicateOperator,
    };
    pub use tagraph_core::{annotations, EdgeId, VertexId};
    pub use tagraph_predicate::{
        codec, BinaryOperator, CompileError, Expr, FormatError, PredicateNode, SymbolType,
    };
    pub use tagraph_session::{
        ConfigError, ScriptResult, Session, SessionConfig, SessionError, SessionResult,
    };
}
