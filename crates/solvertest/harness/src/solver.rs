//! The contract a solver under test must satisfy.

/// A solver being validated against the test catalog.
///
/// This is the harness-facing boundary of a solver: construction, domain
/// behavior, and output correctness live entirely on the other side of it.
/// The harness only needs a stable identifier and an availability probe.
pub trait SolverUnderTest: Send + Sync {
    /// Stable identifier for this solver.
    ///
    /// Used to key capability registrations in
    /// [`crate::SupportRegistry`] and as the suffix of generated test
    /// names, so it must be unique across the solvers fed to one suite.
    fn name(&self) -> &str;

    /// Probe whether the backing solver can actually run (binary present,
    /// license valid, and so on).
    ///
    /// Errors are treated by the synthesizer as "not available" and never
    /// propagated; the same holds for a panicking probe.
    fn available(&self) -> anyhow::Result<bool>;
}
