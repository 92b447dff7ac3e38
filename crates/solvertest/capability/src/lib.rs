//! Solver capability vocabulary and implication graph.
//!
//! Conformance tests declare the capabilities they exercise and solvers
//! declare the capabilities they support, both drawn from the closed
//! vocabulary defined here. Many capabilities entail others (a solver that
//! handles quadratic objectives necessarily handles linear ones), so
//! support sets are always expanded to their implication closure before
//! any membership question is asked.
//!
//! # Example
//!
//! ```rust
//! use solvertest_capability::{Capability, CapabilityCatalog};
//!
//! let catalog = CapabilityCatalog::standard();
//! let closure = catalog.resolve_implications([Capability::ObjectiveQuadratic]);
//!
//! assert!(closure.contains(&Capability::ObjectiveLinear));
//! assert!(closure.contains(&Capability::ObjectiveSense));
//! ```

pub mod capability;
pub mod catalog;

pub use capability::{Capability, CapabilityCategory};
pub use catalog::{CapabilityCatalog, CapabilityDescriptor};
