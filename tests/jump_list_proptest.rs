// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Property-based tests: a jump list behaves like a `BTreeSet<String>` and
//! keeps its fast lane consistent after every mutation.

use std::collections::BTreeSet;

use proptest::prelude::*;
use jumplist::{JumpList, MAX_GAP_SIZE};

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum ListOp {
    Insert(String),
    Erase(String),
}

/// Short keys over a small alphabet so inserts and erases collide often.
fn arbitrary_key() -> impl Strategy<Value = String> {
    return "[a-e]{0,3}";
}

fn arbitrary_op() -> impl Strategy<Value = ListOp> {
    return prop_oneof![
        3 => arbitrary_key().prop_map(ListOp::Insert),
        2 => arbitrary_key().prop_map(ListOp::Erase),
    ];
}

/// Apply `op` to both the list and the model, checking that they agree on
/// the outcome.
fn apply(list: &mut JumpList, model: &mut BTreeSet<String>, op: &ListOp) -> Result<(), TestCaseError> {
    match op {
        ListOp::Insert(value) => {
            prop_assert_eq!(list.insert(value.clone()), model.insert(value.clone()));
        }
        ListOp::Erase(value) => {
            prop_assert_eq!(list.erase(value), model.remove(value));
        }
    }
    prop_assert_eq!(list.verify(), Ok(()));
    return Ok(());
}

// =============================================================================
// Model equivalence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every inserted value is found and size counts distinct values.
    #[test]
    fn inserts_are_all_found(values in prop::collection::vec(arbitrary_key(), 0..60)) {
        let mut list = JumpList::new();
        for value in &values {
            list.insert(value.as_str());
        }

        let distinct: BTreeSet<&String> = values.iter().collect();
        prop_assert_eq!(list.size(), distinct.len());
        prop_assert_eq!(list.len(), distinct.len());
        for value in &values {
            prop_assert!(list.find(value));
        }
    }

    /// get(i) is the i-th smallest surviving value after any mix of edits.
    #[test]
    fn get_matches_sorted_model(ops in prop::collection::vec(arbitrary_op(), 1..120)) {
        let mut list = JumpList::new();
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;
        }

        prop_assert_eq!(list.size(), model.len());
        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(list.get(i), Some(expected.as_str()));
        }
        prop_assert_eq!(list.get(model.len()), None);
        prop_assert_eq!(list.iter().collect::<Vec<_>>(), model.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// find agrees with the model for present and absent keys alike.
    #[test]
    fn find_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 1..120),
        probes in prop::collection::vec(arbitrary_key(), 1..30),
    ) {
        let mut list = JumpList::new();
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;
        }

        for probe in &probes {
            prop_assert_eq!(list.find(probe), model.contains(probe));
        }
    }

    /// A duplicate insert and an absent erase leave the list untouched.
    #[test]
    fn failed_mutations_change_nothing(
        ops in prop::collection::vec(arbitrary_op(), 1..80),
        probe in arbitrary_key(),
    ) {
        let mut list = JumpList::new();
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;
        }

        let before = list.render();
        if model.contains(&probe) {
            prop_assert!(!list.insert(probe.clone()));
        } else {
            prop_assert!(!list.erase(&probe));
        }
        prop_assert_eq!(list.render(), before);
    }

    /// Gaps stay within bounds and sum to the list size.
    #[test]
    fn fast_lane_is_bounded(
        ops in prop::collection::vec(arbitrary_op(), 1..150),
        max_gap in 1u32..8,
    ) {
        let mut list = JumpList::with_max_gap(max_gap).unwrap();
        let mut model = BTreeSet::new();
        for op in &ops {
            apply(&mut list, &mut model, op)?;

            let lane = list.fast_lane();
            prop_assert!(lane.iter().all(|&(_, gap)| gap >= 1 && gap <= max_gap));
            prop_assert_eq!(lane.iter().map(|&(_, gap)| gap as usize).sum::<usize>(), list.len());
        }
    }

    /// Bulk construction agrees with repeated inserts on contents.
    #[test]
    fn from_sorted_matches_inserts(values in prop::collection::btree_set(arbitrary_key(), 0..60)) {
        let built = JumpList::from_sorted(values.iter().cloned()).unwrap();
        let inserted: JumpList = values.iter().cloned().collect();

        prop_assert_eq!(built.verify(), Ok(()));
        prop_assert_eq!(built.iter().collect::<Vec<_>>(), inserted.iter().collect::<Vec<_>>());
        prop_assert!(built.fast_lane().iter().all(|&(_, gap)| gap <= MAX_GAP_SIZE));
    }
}
