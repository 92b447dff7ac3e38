//! Property tests for the implication-closure algebra.

use proptest::prelude::*;
use solvertest_capability::{Capability, CapabilityCatalog};
use std::collections::BTreeSet;

fn arb_capability_set() -> impl Strategy<Value = BTreeSet<Capability>> {
    let all = Capability::all();
    proptest::collection::btree_set(
        (0..all.len()).prop_map(move |i| all[i]),
        0..=all.len(),
    )
}

proptest! {
    #[test]
    fn closure_contains_its_input(caps in arb_capability_set()) {
        let catalog = CapabilityCatalog::standard();
        let closure = catalog.resolve_implications(caps.iter().copied());
        prop_assert!(closure.is_superset(&caps));
    }

    #[test]
    fn closure_is_a_fixed_point(caps in arb_capability_set()) {
        let catalog = CapabilityCatalog::standard();
        let once = catalog.resolve_implications(caps.iter().copied());
        let twice = catalog.resolve_implications(once.iter().copied());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closure_is_order_independent(caps in arb_capability_set()) {
        let catalog = CapabilityCatalog::standard();
        let forward = catalog.resolve_implications(caps.iter().copied());
        let reverse = catalog.resolve_implications(caps.iter().rev().copied());
        prop_assert_eq!(forward, reverse);
    }

    #[test]
    fn closure_is_monotone(caps in arb_capability_set(), extra in arb_capability_set()) {
        let catalog = CapabilityCatalog::standard();
        let small = catalog.resolve_implications(caps.iter().copied());
        let large = catalog.resolve_implications(caps.union(&extra).copied());
        prop_assert!(large.is_superset(&small));
    }
}
