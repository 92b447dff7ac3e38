//! Per-solver capability support registry.

use solvertest_capability::{Capability, CapabilityCatalog};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Records which capabilities each solver under test supports.
///
/// Stored sets are always implication closures: `register` expands its
/// arguments through the catalog before unioning them in, so a membership
/// query never has to chase implication edges. Registration is additive —
/// repeated calls for the same solver accumulate.
#[derive(Debug, Clone)]
pub struct SupportRegistry {
    catalog: Arc<CapabilityCatalog>,
    supported: BTreeMap<String, BTreeSet<Capability>>,
}

impl SupportRegistry {
    /// Create an empty registry over the given capability catalog.
    pub fn new(catalog: Arc<CapabilityCatalog>) -> Self {
        Self {
            catalog,
            supported: BTreeMap::new(),
        }
    }

    /// Declare that a solver supports the given capabilities (and,
    /// implicitly, everything they imply).
    ///
    /// Idempotent and commutative across repeated or partial calls:
    /// registering `{A}` then `{B}` stores the same set as registering
    /// `{A, B}` once.
    pub fn register(
        &mut self,
        solver: impl Into<String>,
        caps: impl IntoIterator<Item = Capability>,
    ) {
        let resolved = self.catalog.resolve_implications(caps);
        self.supported.entry(solver.into()).or_default().extend(resolved);
    }

    /// Whether the solver supports every requested capability.
    ///
    /// An unregistered solver supports nothing, including the empty
    /// request.
    pub fn supports(
        &self,
        solver: &str,
        caps: impl IntoIterator<Item = Capability>,
    ) -> bool {
        match self.supported.get(solver) {
            Some(set) => caps.into_iter().all(|cap| set.contains(&cap)),
            None => false,
        }
    }

    /// The subset of requested capabilities the solver lacks.
    ///
    /// Returns the full requested set when the solver is unregistered.
    pub fn missing(
        &self,
        solver: &str,
        caps: impl IntoIterator<Item = Capability>,
    ) -> BTreeSet<Capability> {
        match self.supported.get(solver) {
            Some(set) => caps.into_iter().filter(|cap| !set.contains(cap)).collect(),
            None => caps.into_iter().collect(),
        }
    }

    /// The full (closed) supported set for a solver, if registered.
    pub fn supported(&self, solver: &str) -> Option<&BTreeSet<Capability>> {
        self.supported.get(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solvertest_capability::Capability::*;

    fn registry() -> SupportRegistry {
        SupportRegistry::new(Arc::new(CapabilityCatalog::standard()))
    }

    #[test]
    fn test_registration_stores_the_closure() {
        let mut reg = registry();
        reg.register("ipopt", [ObjectiveQuadratic]);

        assert!(reg.supports("ipopt", [ObjectiveQuadratic]));
        assert!(reg.supports("ipopt", [ObjectiveLinear]));
        assert!(reg.supports("ipopt", [ObjectiveSense]));
    }

    #[test]
    fn test_unregistered_solver_supports_nothing() {
        let reg = registry();
        assert!(!reg.supports("ghost", [ObjectiveSense]));
        assert_eq!(reg.missing("ghost", [ObjectiveSense, VariableBinary]).len(), 2);
    }

    #[test]
    fn test_registration_is_additive_and_commutative() {
        let mut split = registry();
        split.register("cbc", [ConstraintLinear]);
        split.register("cbc", [VariableInteger]);

        let mut joined = registry();
        joined.register("cbc", [VariableInteger, ConstraintLinear]);

        assert_eq!(split.supported("cbc"), joined.supported("cbc"));
    }

    #[test]
    fn test_missing_reports_unmet_subset() {
        let mut reg = registry();
        reg.register("cbc", [ConstraintLinear]);

        let missing = reg.missing("cbc", [ConstraintLinearEq, ConstraintConic]);
        assert_eq!(missing, [ConstraintConic].into_iter().collect());
    }

    #[test]
    fn test_quadratic_equality_grants_linear_equality() {
        let mut reg = registry();
        reg.register("knitro", [ConstraintQuadraticEq]);
        assert!(reg.supports("knitro", [ConstraintLinearEq]));
    }
}
