//! The closed capability vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One feature a solver may or may not support.
///
/// The vocabulary is closed and versioned: solver registrations and test
/// requirements are only meaningful relative to this enumeration and the
/// implication table in [`crate::CapabilityCatalog::standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ObjectiveSense,
    ObjectiveLinear,
    ObjectiveQuadratic,
    ObjectiveNonlinear,
    ObjectiveMulti,

    VariableContinuous,
    VariableBinary,
    VariableInteger,
    VariableSemicontinuous,
    VariableSemiinteger,

    ConstraintLinearEq,
    ConstraintLinearGe,
    ConstraintLinearLe,
    ConstraintLinearRange,
    ConstraintLinear,

    ConstraintQuadraticEq,
    ConstraintQuadraticGe,
    ConstraintQuadraticLe,
    ConstraintQuadraticRange,
    ConstraintQuadratic,

    ConstraintNonlinearEq,
    ConstraintNonlinearGe,
    ConstraintNonlinearLe,
    ConstraintNonlinearRange,
    ConstraintNonlinear,

    ConstraintSosOne,
    ConstraintSosTwo,
    ConstraintSos,

    ConstraintConic,
    ConstraintComplementarity,

    SolutionVariablePrimal,
    SolutionVariableDual,
    SolutionVariableReducedCost,
    SolutionConstraintDual,
    SolutionConstraintSlack,
}

impl Capability {
    /// Every capability in the vocabulary, in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::ObjectiveSense,
            Self::ObjectiveLinear,
            Self::ObjectiveQuadratic,
            Self::ObjectiveNonlinear,
            Self::ObjectiveMulti,
            Self::VariableContinuous,
            Self::VariableBinary,
            Self::VariableInteger,
            Self::VariableSemicontinuous,
            Self::VariableSemiinteger,
            Self::ConstraintLinearEq,
            Self::ConstraintLinearGe,
            Self::ConstraintLinearLe,
            Self::ConstraintLinearRange,
            Self::ConstraintLinear,
            Self::ConstraintQuadraticEq,
            Self::ConstraintQuadraticGe,
            Self::ConstraintQuadraticLe,
            Self::ConstraintQuadraticRange,
            Self::ConstraintQuadratic,
            Self::ConstraintNonlinearEq,
            Self::ConstraintNonlinearGe,
            Self::ConstraintNonlinearLe,
            Self::ConstraintNonlinearRange,
            Self::ConstraintNonlinear,
            Self::ConstraintSosOne,
            Self::ConstraintSosTwo,
            Self::ConstraintSos,
            Self::ConstraintConic,
            Self::ConstraintComplementarity,
            Self::SolutionVariablePrimal,
            Self::SolutionVariableDual,
            Self::SolutionVariableReducedCost,
            Self::SolutionConstraintDual,
            Self::SolutionConstraintSlack,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// High-level grouping of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityCategory {
    Objective,
    Variable,
    Constraint,
    Solution,
}

impl fmt::Display for CapabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Objective => write!(f, "objective"),
            Self::Variable => write!(f, "variable"),
            Self::Constraint => write!(f, "constraint"),
            Self::Solution => write!(f, "solution"),
        }
    }
}
