//! Capability descriptors and the implication graph.
//!
//! The catalog is an explicitly constructed registry, not an ambient
//! global: callers build one (usually via [`CapabilityCatalog::standard`])
//! and pass it to whatever needs closure expansion. Tests can build
//! isolated catalogs with synthetic implication tables.

use crate::capability::{Capability, CapabilityCategory};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Metadata about one capability: human-readable naming plus the set of
/// capabilities automatically granted alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    /// Human-readable name, e.g. "Constraint Linear Range".
    pub name: &'static str,

    /// One-line description of what a supporting solver can do.
    pub description: &'static str,

    /// High-level grouping.
    pub category: CapabilityCategory,

    /// Capabilities implied by this one. May contain redundant edges;
    /// closure computation is idempotent under redundancy.
    pub implies: BTreeSet<Capability>,
}

/// Directory of capability descriptors and their implication edges.
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    descriptors: BTreeMap<Capability, CapabilityDescriptor>,
}

impl CapabilityCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor for a capability.
    ///
    /// Each capability is registered exactly once; a second registration
    /// replaces the first.
    pub fn register(
        &mut self,
        cap: Capability,
        name: &'static str,
        description: &'static str,
        category: CapabilityCategory,
        implies: impl IntoIterator<Item = Capability>,
    ) {
        self.descriptors.insert(
            cap,
            CapabilityDescriptor {
                name,
                description,
                category,
                implies: implies.into_iter().collect(),
            },
        );
    }

    /// Look up the descriptor for a capability, if registered.
    pub fn descriptor(&self, cap: Capability) -> Option<&CapabilityDescriptor> {
        self.descriptors.get(&cap)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Compute the transitive closure of implications for a starting set.
    ///
    /// Work-list expansion: every popped capability contributes its direct
    /// implications, and a capability already in the result is never
    /// re-pushed, so cycles and redundant edges are harmless and the loop
    /// terminates once no new capability can be added. The result is
    /// independent of processing order. Capabilities with no registered
    /// descriptor expand to nothing.
    pub fn resolve_implications(
        &self,
        caps: impl IntoIterator<Item = Capability>,
    ) -> BTreeSet<Capability> {
        let mut resolved: BTreeSet<Capability> = caps.into_iter().collect();
        let mut pending: Vec<Capability> = resolved.iter().copied().collect();

        while let Some(current) = pending.pop() {
            if let Some(descriptor) = self.descriptors.get(&current) {
                for &implied in &descriptor.implies {
                    if resolved.insert(implied) {
                        pending.push(implied);
                    }
                }
            }
        }

        resolved
    }

    /// The standard solver capability vocabulary with its fixed
    /// implication table. This table is part of the external contract:
    /// solver registrations are only meaningful relative to it.
    pub fn standard() -> Self {
        use crate::capability::Capability::*;
        use crate::capability::CapabilityCategory::*;

        let mut catalog = Self::new();

        catalog.register(
            ObjectiveSense,
            "Objective Sense",
            "Supports having an objective sense.",
            Objective,
            [],
        );
        catalog.register(
            ObjectiveLinear,
            "Objective Linear",
            "Supports having a linear objective.",
            Objective,
            [ObjectiveSense],
        );
        catalog.register(
            ObjectiveQuadratic,
            "Objective Quadratic",
            "Supports having a quadratic objective.",
            Objective,
            [ObjectiveLinear],
        );
        catalog.register(
            ObjectiveNonlinear,
            "Objective Nonlinear",
            "Supports having a nonlinear objective.",
            Objective,
            [ObjectiveQuadratic],
        );
        catalog.register(
            ObjectiveMulti,
            "Objective Multi",
            "Supports having a multi-objective.",
            Objective,
            [],
        );

        catalog.register(
            VariableContinuous,
            "Variable Continuous",
            "Supports continuous variables.",
            Variable,
            [],
        );
        catalog.register(
            VariableBinary,
            "Variable Binary",
            "Supports binary variables.",
            Variable,
            [],
        );
        catalog.register(
            VariableInteger,
            "Variable Integer",
            "Supports integer variables.",
            Variable,
            [],
        );
        catalog.register(
            VariableSemicontinuous,
            "Variable Semicontinuous",
            "Supports semicontinuous variables.",
            Variable,
            [],
        );
        catalog.register(
            VariableSemiinteger,
            "Variable Semiinteger",
            "Supports semi-integer variables.",
            Variable,
            [],
        );

        catalog.register(
            ConstraintLinearEq,
            "Constraint Linear Equality",
            "Supports linear equality constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintLinearLe,
            "Constraint Linear Less Than or Equal",
            "Supports linear less than or equal constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintLinearGe,
            "Constraint Linear Greater Than or Equal",
            "Supports linear greater than or equal constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintLinearRange,
            "Constraint Linear Range",
            "Supports linear range constraints.",
            Constraint,
            [ConstraintLinearLe, ConstraintLinearGe],
        );
        catalog.register(
            ConstraintLinear,
            "Constraint Linear",
            "Supports linear constraints.",
            Constraint,
            [ConstraintLinearEq, ConstraintLinearRange],
        );

        catalog.register(
            ConstraintQuadraticEq,
            "Constraint Quadratic Equality",
            "Supports quadratic equality constraints.",
            Constraint,
            [ConstraintLinearEq],
        );
        catalog.register(
            ConstraintQuadraticLe,
            "Constraint Quadratic Less Than or Equal",
            "Supports quadratic less than or equal constraints.",
            Constraint,
            [ConstraintLinearLe],
        );
        catalog.register(
            ConstraintQuadraticGe,
            "Constraint Quadratic Greater Than or Equal",
            "Supports quadratic greater than or equal constraints.",
            Constraint,
            [ConstraintLinearGe],
        );
        catalog.register(
            ConstraintQuadraticRange,
            "Constraint Quadratic Range",
            "Supports quadratic range constraints.",
            Constraint,
            [
                ConstraintLinearRange,
                ConstraintQuadraticLe,
                ConstraintQuadraticGe,
            ],
        );
        catalog.register(
            ConstraintQuadratic,
            "Constraint Quadratic",
            "Supports quadratic constraints.",
            Constraint,
            [
                ConstraintLinear,
                ConstraintQuadraticEq,
                ConstraintQuadraticRange,
            ],
        );

        catalog.register(
            ConstraintNonlinearEq,
            "Constraint Nonlinear Equality",
            "Supports nonlinear equality constraints.",
            Constraint,
            [ConstraintQuadraticEq],
        );
        catalog.register(
            ConstraintNonlinearLe,
            "Constraint Nonlinear Less Than or Equal",
            "Supports nonlinear less than or equal constraints.",
            Constraint,
            [ConstraintQuadraticLe],
        );
        catalog.register(
            ConstraintNonlinearGe,
            "Constraint Nonlinear Greater Than or Equal",
            "Supports nonlinear greater than or equal constraints.",
            Constraint,
            [ConstraintQuadraticGe],
        );
        catalog.register(
            ConstraintNonlinearRange,
            "Constraint Nonlinear Range",
            "Supports nonlinear range constraints.",
            Constraint,
            [
                ConstraintQuadraticRange,
                ConstraintNonlinearLe,
                ConstraintNonlinearGe,
            ],
        );
        catalog.register(
            ConstraintNonlinear,
            "Constraint Nonlinear",
            "Supports nonlinear constraints.",
            Constraint,
            [
                ConstraintQuadratic,
                ConstraintNonlinearRange,
                ConstraintNonlinearEq,
            ],
        );

        catalog.register(
            ConstraintSosOne,
            "Constraint SOS1",
            "Supports SOS1 constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintSosTwo,
            "Constraint SOS2",
            "Supports SOS2 constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintSos,
            "Constraint SOS",
            "Supports SOS constraints.",
            Constraint,
            [ConstraintSosOne, ConstraintSosTwo],
        );

        catalog.register(
            ConstraintConic,
            "Constraint Conic",
            "Supports conic constraints.",
            Constraint,
            [],
        );
        catalog.register(
            ConstraintComplementarity,
            "Constraint Complementarity",
            "Supports complementarity constraints.",
            Constraint,
            [],
        );

        catalog.register(
            SolutionVariablePrimal,
            "Solution Variable Primal",
            "Supports primal variable solutions.",
            Solution,
            [],
        );
        catalog.register(
            SolutionVariableDual,
            "Solution Variable Dual",
            "Supports dual variable solutions.",
            Solution,
            [],
        );
        catalog.register(
            SolutionVariableReducedCost,
            "Solution Variable Reduced Cost",
            "Supports reduced cost for variable solutions.",
            Solution,
            [],
        );
        catalog.register(
            SolutionConstraintDual,
            "Solution Constraint Dual",
            "Supports dual constraint solutions.",
            Solution,
            [],
        );
        catalog.register(
            SolutionConstraintSlack,
            "Solution Constraint Slack",
            "Supports slack for constraint solutions.",
            Solution,
            [],
        );

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability::*;

    #[test]
    fn test_standard_covers_whole_vocabulary() {
        let catalog = CapabilityCatalog::standard();
        for &cap in Capability::all() {
            assert!(
                catalog.descriptor(cap).is_some(),
                "missing descriptor for {cap}"
            );
        }
        assert_eq!(catalog.len(), Capability::all().len());
    }

    #[test]
    fn test_objective_chain_resolves_transitively() {
        let catalog = CapabilityCatalog::standard();
        let closure = catalog.resolve_implications([ObjectiveQuadratic]);

        assert!(closure.contains(&ObjectiveQuadratic));
        assert!(closure.contains(&ObjectiveLinear));
        assert!(closure.contains(&ObjectiveSense));
        assert_eq!(closure.len(), 3);
    }

    #[test]
    fn test_range_constraint_implies_both_directions() {
        let catalog = CapabilityCatalog::standard();
        let closure = catalog.resolve_implications([ConstraintLinearRange]);

        assert!(closure.contains(&ConstraintLinearLe));
        assert!(closure.contains(&ConstraintLinearGe));
    }

    #[test]
    fn test_nonlinear_constraint_reaches_linear_leaves() {
        let catalog = CapabilityCatalog::standard();
        let closure = catalog.resolve_implications([ConstraintNonlinear]);

        // Deepest chain: nonlinear -> quadratic -> linear -> eq/range -> le/ge.
        for cap in [
            ConstraintQuadratic,
            ConstraintLinear,
            ConstraintLinearEq,
            ConstraintLinearRange,
            ConstraintLinearLe,
            ConstraintLinearGe,
            ConstraintQuadraticEq,
            ConstraintQuadraticRange,
            ConstraintNonlinearEq,
            ConstraintNonlinearRange,
        ] {
            assert!(closure.contains(&cap), "closure missing {cap}");
        }
    }

    #[test]
    fn test_closure_is_superset_of_input() {
        let catalog = CapabilityCatalog::standard();
        let input = [VariableBinary, ConstraintConic];
        let closure = catalog.resolve_implications(input);
        for cap in input {
            assert!(closure.contains(&cap));
        }
    }

    #[test]
    fn test_closure_is_idempotent() {
        let catalog = CapabilityCatalog::standard();
        let once = catalog.resolve_implications([ConstraintNonlinear, ObjectiveQuadratic]);
        let twice = catalog.resolve_implications(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unregistered_capability_is_a_leaf() {
        let catalog = CapabilityCatalog::new();
        let closure = catalog.resolve_implications([ObjectiveNonlinear]);
        assert_eq!(closure.len(), 1);
        assert!(closure.contains(&ObjectiveNonlinear));
    }

    #[test]
    fn test_cycles_terminate() {
        let mut catalog = CapabilityCatalog::new();
        catalog.register(ObjectiveSense, "A", "a", CapabilityCategory::Objective, [
            ObjectiveLinear,
        ]);
        catalog.register(ObjectiveLinear, "B", "b", CapabilityCategory::Objective, [
            ObjectiveQuadratic,
        ]);
        // Cycle back to the start, plus a self-loop.
        catalog.register(
            ObjectiveQuadratic,
            "C",
            "c",
            CapabilityCategory::Objective,
            [ObjectiveSense, ObjectiveQuadratic],
        );

        let closure = catalog.resolve_implications([ObjectiveSense]);
        assert_eq!(closure.len(), 3);
    }

    #[test]
    fn test_redundant_edges_are_harmless() {
        let mut catalog = CapabilityCatalog::new();
        // A implies B implies C, and A also lists C directly.
        catalog.register(ObjectiveNonlinear, "A", "a", CapabilityCategory::Objective, [
            ObjectiveQuadratic,
            ObjectiveSense,
        ]);
        catalog.register(
            ObjectiveQuadratic,
            "B",
            "b",
            CapabilityCategory::Objective,
            [ObjectiveSense],
        );
        catalog.register(ObjectiveSense, "C", "c", CapabilityCategory::Objective, []);

        let closure = catalog.resolve_implications([ObjectiveNonlinear]);
        assert_eq!(
            closure,
            [ObjectiveNonlinear, ObjectiveQuadratic, ObjectiveSense]
                .into_iter()
                .collect()
        );
    }
}
