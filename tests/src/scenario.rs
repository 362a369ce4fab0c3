//! Scenario definition and runner.

use tagraph_session::{Session, SessionResult};

use crate::assertion::Assertion;
use crate::error::{TestError, TestResult};
use crate::fixtures;

type Seed = Box<dyn Fn() -> SessionResult<Session>>;
type Action = Box<dyn Fn(&mut Session) -> SessionResult<()>>;

/// One step: an action on the session and what must hold afterwards.
pub struct Step {
    pub name: String,
    pub action: Action,
    pub assertion: Assertion,
}

/// A named sequence of steps run against one seeded session.
pub struct Scenario {
    name: String,
    seed: Seed,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a scenario seeded with [`fixtures::provenance`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: Box::new(fixtures::provenance),
            steps: Vec::new(),
        }
    }

    /// Replace the seed.
    pub fn seed(mut self, seed: impl Fn() -> SessionResult<Session> + 'static) -> Self {
        self.seed = Box::new(seed);
        self
    }

    pub fn step(
        mut self,
        name: &str,
        action: impl Fn(&mut Session) -> SessionResult<()> + 'static,
        assertion: impl FnOnce(Assertion) -> Assertion,
    ) -> Self {
        self.steps.push(Step {
            name: name.to_string(),
            action: Box::new(action),
            assertion: assertion(Assertion::new()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failed expectation.
    pub fn run(&self) -> TestResult<()> {
        crate::init_tracing();
        let mut session = (self.seed)()
            .map_err(|e| TestError::seed(format!("{}: {}", self.name, e)))?;

        for step in &self.steps {
            let outcome = (step.action)(&mut session).map_err(|e| e.to_string());
            step.assertion.verify(&step.name, &outcome, &mut session)?;
        }
        tracing::debug!(scenario = %self.name, steps = self.steps.len(), "scenario passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_steps() {
        let scenario = Scenario::new("builder")
            .step("noop", |_| Ok(()), |a| a)
            .step("check_a", |_| Ok(()), |a| a.graph("$A").stats(2, 1));

        assert_eq!(scenario.name(), "builder");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[1].name, "check_a");
    }

    #[test]
    fn test_seeded_graphs() {
        Scenario::new("seed")
            .step(
                "a",
                |_| Ok(()),
                |a| a.graph("$A").vertices(["v1", "v2"]).edges(["e1"]),
            )
            .step(
                "b",
                |_| Ok(()),
                |a| a.graph("$B").vertices(["v2", "v3"]).edges(["e2"]),
            )
            .run()
            .unwrap();
    }

    #[test]
    fn test_mismatch_is_reported() {
        let err = Scenario::new("mismatch")
            .step("wrong", |_| Ok(()), |a| a.graph("$A").empty())
            .run()
            .unwrap_err();
        assert!(matches!(err, TestError::AssertionFailed { ref step, .. } if step == "wrong"));
    }
}
