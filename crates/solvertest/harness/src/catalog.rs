//! Test catalog and annotation builder.
//!
//! The source-of-truth record for each reusable test case: its body, the
//! capabilities it requires, its tags, and an optional unconditional skip
//! reason. Metadata accumulates through independent annotation calls that
//! may target the same test name multiple times; annotations commute.

use crate::filter::SelectionFilter;
use crate::solver::SolverUnderTest;
use crate::support::SupportRegistry;
use solvertest_capability::Capability;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// A test procedure, invoked with the solver under test.
///
/// Bodies signal failure by panicking (ordinary `assert!` macros); the
/// suite runner catches the panic and records it.
pub type TestBody = Arc<dyn Fn(&dyn SolverUnderTest) + Send + Sync>;

/// Wrap a closure as a [`TestBody`].
pub fn body<F>(f: F) -> TestBody
where
    F: Fn(&dyn SolverUnderTest) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Metadata for one cataloged test case.
#[derive(Clone)]
pub struct TestDescriptor {
    /// Unique identity within the catalog; the join key across
    /// independent annotation calls.
    pub name: String,

    /// The executable test procedure.
    pub body: TestBody,

    /// Capabilities the test exercises. A solver must support all of them
    /// (after closure expansion on the registry side) for the test to run.
    pub requirements: BTreeSet<Capability>,

    /// Free-form labels for coarse-grained selection.
    pub tags: BTreeSet<String>,

    /// Unconditional skip reason, set by a triggered `skip_if`.
    pub skip_reason: Option<String>,
}

impl TestDescriptor {
    fn new(name: String, body: TestBody) -> Self {
        Self {
            name,
            body,
            requirements: BTreeSet::new(),
            tags: BTreeSet::new(),
            skip_reason: None,
        }
    }

    /// Why this test cannot run against the named solver, or `None` if it
    /// can.
    ///
    /// An unconditional skip reason wins over the capability check; the
    /// capability failure message enumerates the unmet capabilities.
    pub fn skip_reason_for(&self, solver: &str, support: &SupportRegistry) -> Option<String> {
        if let Some(reason) = &self.skip_reason {
            return Some(reason.clone());
        }

        if support.supports(solver, self.requirements.iter().copied()) {
            return None;
        }

        let missing = support.missing(solver, self.requirements.iter().copied());
        let listed = missing
            .iter()
            .map(Capability::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "Solver {solver} does not support required capabilities: {listed}"
        ))
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .field("requirements", &self.requirements)
            .field("tags", &self.tags)
            .field("skip_reason", &self.skip_reason)
            .finish_non_exhaustive()
    }
}

/// Catalog of reusable test cases, keyed by test name.
#[derive(Default, Clone)]
pub struct TestCatalog {
    tests: BTreeMap<String, TestDescriptor>,
}

impl TestCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve or create the descriptor for `name` and return an
    /// annotation builder for it.
    ///
    /// The first call for a given name binds the body; later calls for the
    /// same name reuse the existing descriptor. A bare `annotate` with no
    /// chained calls is itself a registration — a test that is never
    /// annotated does not exist.
    pub fn annotate(&mut self, name: impl Into<String>, body: TestBody) -> TestAnnotation<'_> {
        let name = name.into();
        let descriptor = self
            .tests
            .entry(name.clone())
            .or_insert_with(|| TestDescriptor::new(name, body));
        TestAnnotation { descriptor }
    }

    /// Look up a cataloged test by name.
    pub fn get(&self, name: &str) -> Option<&TestDescriptor> {
        self.tests.get(name)
    }

    /// Number of cataloged tests.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The cataloged tests that pass the selection filter, in name order.
    pub fn filtered<'a>(
        &'a self,
        filter: &'a SelectionFilter,
    ) -> impl Iterator<Item = &'a TestDescriptor> {
        self.tests
            .values()
            .filter(|descriptor| filter.should_include(&descriptor.name, descriptor))
    }
}

impl fmt::Debug for TestCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCatalog")
            .field("tests", &self.tests.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Chainable annotation builder for one test descriptor.
///
/// Each method merges data into the underlying record: requirements and
/// tags union, so annotations applied in any order yield the same final
/// descriptor. The skip reason is overwritten by each triggered
/// `skip_if`/`skip_when` (last one wins, by explicit policy).
pub struct TestAnnotation<'a> {
    descriptor: &'a mut TestDescriptor,
}

impl TestAnnotation<'_> {
    /// Add required capabilities.
    pub fn requires(self, caps: impl IntoIterator<Item = Capability>) -> Self {
        self.descriptor.requirements.extend(caps);
        self
    }

    /// Add tags.
    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptor
            .tags
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Unconditionally skip this test when `condition` holds.
    ///
    /// Evaluated eagerly, at annotation time. An empty reason defaults to
    /// "Conditional skip".
    pub fn skip_if(self, condition: bool, reason: &str) -> Self {
        if condition {
            self.descriptor.skip_reason = Some(if reason.is_empty() {
                "Conditional skip".to_string()
            } else {
                reason.to_string()
            });
        }
        self
    }

    /// [`skip_if`](Self::skip_if) with a predicate, invoked immediately.
    pub fn skip_when(self, condition: impl FnOnce() -> bool, reason: &str) -> Self {
        let triggered = condition();
        self.skip_if(triggered, reason)
    }
}
