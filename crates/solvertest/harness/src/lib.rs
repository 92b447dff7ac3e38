//! Capability-driven conformance test synthesis for solver interfaces.
//!
//! Given solvers that each claim a subset of the capability vocabulary
//! (see `solvertest-capability`) and a catalog of reusable test cases that
//! each require a subset of it, the harness decides per (solver, test)
//! pair whether to generate a runnable test, a skip-stub with a reason, or
//! nothing, and attaches the generated tests to an explicit suite table.
//!
//! All registries are explicitly constructed and passed by reference:
//! populate them at startup, then hand them to [`add_tests`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use solvertest_capability::{Capability, CapabilityCatalog};
//! use solvertest_harness::{
//!     add_tests, body, AddTestsOptions, SolverUnderTest, SupportRegistry,
//!     TestCatalog, TestSuite,
//! };
//!
//! struct Cbc;
//!
//! impl SolverUnderTest for Cbc {
//!     fn name(&self) -> &str {
//!         "cbc"
//!     }
//!     fn available(&self) -> anyhow::Result<bool> {
//!         Ok(true)
//!     }
//! }
//!
//! let mut catalog = TestCatalog::new();
//! catalog
//!     .annotate("test_linear_equality", body(|solver| {
//!         // domain assertions against the solver go here
//!         assert_eq!(solver.name(), "cbc");
//!     }))
//!     .requires([Capability::ObjectiveLinear, Capability::ConstraintLinearEq])
//!     .tags(["linear", "basic"]);
//!
//! let mut support = SupportRegistry::new(Arc::new(CapabilityCatalog::standard()));
//! support.register("cbc", [Capability::ObjectiveQuadratic, Capability::ConstraintLinear]);
//!
//! let mut suite = TestSuite::new();
//! add_tests(&mut suite, Arc::new(Cbc), &catalog, &support, &AddTestsOptions::default())?;
//!
//! assert_eq!(suite.len(), 1);
//! assert!(suite.run().all_passed());
//! # Ok::<(), solvertest_harness::HarnessError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod solver;
pub mod suite;
pub mod support;
pub mod synth;

pub use catalog::{body, TestAnnotation, TestBody, TestCatalog, TestDescriptor};
pub use error::{HarnessError, Result};
pub use filter::SelectionFilter;
pub use solver::SolverUnderTest;
pub use suite::{ReportSummary, SuiteReport, TestResult, TestStatus, TestSuite};
pub use support::SupportRegistry;
pub use synth::{GeneratedTest, TestAction, TestSynthesizer};

use std::sync::Arc;

/// Selection and policy options for [`add_tests`].
///
/// The default selects every cataloged test and emits no skip-stubs
/// (unsupported and unavailable pairs are silently omitted).
#[derive(Debug, Clone, Default)]
pub struct AddTestsOptions {
    /// Name patterns (prefix-anchored regexes); `None` means no name filter.
    pub include: Option<Vec<String>>,
    /// Name patterns excluding tests; exclusion wins over inclusion.
    pub exclude: Vec<String>,
    /// Tag whitelist; `None` means no tag filter.
    pub include_tags: Option<Vec<String>>,
    /// Tag blacklist.
    pub exclude_tags: Vec<String>,
    /// Emit skip-stubs for tests the solver lacks capabilities for.
    pub warn_unsupported: bool,
    /// Emit skip-stubs for tests against an unavailable solver.
    pub warn_unavailable: bool,
}

/// Synthesize the selected catalog tests for one solver and attach them to
/// the suite.
///
/// Flow: build the [`SelectionFilter`] from the options, walk the filtered
/// catalog in name order, let the [`TestSynthesizer`] decide per test, and
/// attach whatever it emits. Generated names are
/// `<test name>_<solver name>`; attaching a name the suite already holds
/// is an error.
pub fn add_tests(
    suite: &mut TestSuite,
    solver: Arc<dyn SolverUnderTest>,
    catalog: &TestCatalog,
    support: &SupportRegistry,
    options: &AddTestsOptions,
) -> Result<()> {
    let filter = SelectionFilter::new(
        options.include.as_deref(),
        &options.exclude,
        options.include_tags.as_deref(),
        &options.exclude_tags,
    )?;
    let synthesizer = TestSynthesizer::new(options.warn_unsupported, options.warn_unavailable);

    for descriptor in catalog.filtered(&filter) {
        match synthesizer.build(&solver, descriptor, support) {
            Some(test) => {
                tracing::debug!(test = %test.name, skip = test.is_skip(), "synthesized test");
                suite.attach(test)?;
            }
            None => {
                tracing::debug!(
                    test = %descriptor.name,
                    solver = %solver.name(),
                    "omitted test"
                );
            }
        }
    }

    Ok(())
}
