//! Test synthesis: turning a (test, solver) pair into a runnable test, a
//! skip-stub, or nothing.

use crate::catalog::{TestBody, TestDescriptor};
use crate::solver::SolverUnderTest;
use crate::support::SupportRegistry;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// What a generated test does when executed.
#[derive(Clone)]
pub enum TestAction {
    /// Invoke the test body against the solver.
    Run {
        body: TestBody,
        solver: Arc<dyn SolverUnderTest>,
    },
    /// Report "skipped" with an explanatory reason.
    Skip { reason: String },
}

impl fmt::Debug for TestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run { solver, .. } => f
                .debug_struct("Run")
                .field("solver", &solver.name())
                .finish_non_exhaustive(),
            Self::Skip { reason } => f.debug_struct("Skip").field("reason", reason).finish(),
        }
    }
}

/// A synthesized, attachable test unit. Ephemeral — created per
/// orchestrator invocation, never cached.
#[derive(Debug, Clone)]
pub struct GeneratedTest {
    /// `<test identity>_<solver name>`.
    pub name: String,
    pub action: TestAction,
}

impl GeneratedTest {
    /// Whether this is a skip-stub.
    pub fn is_skip(&self) -> bool {
        matches!(self.action, TestAction::Skip { .. })
    }

    /// The skip reason, if this is a skip-stub.
    pub fn skip_reason(&self) -> Option<&str> {
        match &self.action {
            TestAction::Skip { reason } => Some(reason),
            TestAction::Run { .. } => None,
        }
    }
}

/// Combines availability, capability support, and policy flags into a
/// generation decision for each (test, solver) pair.
///
/// | can run | available | emit                                  |
/// |---------|-----------|---------------------------------------|
/// | yes     | yes       | runnable test                         |
/// | yes     | no        | skip-stub iff `warn_unavailable`      |
/// | no      | —         | skip-stub iff `warn_unsupported`      |
#[derive(Debug, Clone, Copy)]
pub struct TestSynthesizer {
    warn_unsupported: bool,
    warn_unavailable: bool,
}

impl TestSynthesizer {
    pub fn new(warn_unsupported: bool, warn_unavailable: bool) -> Self {
        Self {
            warn_unsupported,
            warn_unavailable,
        }
    }

    /// Synthesize a test for the pair, or `None` to omit it.
    pub fn build(
        &self,
        solver: &Arc<dyn SolverUnderTest>,
        descriptor: &TestDescriptor,
        support: &SupportRegistry,
    ) -> Option<GeneratedTest> {
        let available = probe_available(solver.as_ref());
        let skip_reason = descriptor.skip_reason_for(solver.name(), support);
        let name = format!("{}_{}", descriptor.name, solver.name());

        match (skip_reason, available) {
            (None, true) => Some(GeneratedTest {
                name,
                action: TestAction::Run {
                    body: Arc::clone(&descriptor.body),
                    solver: Arc::clone(solver),
                },
            }),
            (None, false) if self.warn_unavailable => Some(GeneratedTest {
                name,
                action: TestAction::Skip {
                    reason: format!("Solver {} is not available", solver.name()),
                },
            }),
            (Some(reason), _) if self.warn_unsupported => Some(GeneratedTest {
                name,
                action: TestAction::Skip { reason },
            }),
            _ => None,
        }
    }
}

/// Probe solver availability, downgrading every failure mode (an `Err`
/// from the probe or a panic inside it) to "not available".
fn probe_available(solver: &dyn SolverUnderTest) -> bool {
    catch_unwind(AssertUnwindSafe(|| solver.available()))
        .map(|result| result.unwrap_or(false))
        .unwrap_or(false)
}
