//! Integration test: model-based fuzzing against a `Vec<i32>` reference.
//!
//! Random operation sequences, including out-of-range indices and inserts
//! into a full list, are applied to both an [`ArenaList`] and a
//! [`ModelList`]. Every result, and the resulting list order, must agree,
//! and the arena's structural invariants must hold after every step.

use proptest::prelude::*;
use slotlist::{ArenaList, ListError};
use slotlist_test_utils::{assert_list_invariants, list_ops, ListOp, ModelList};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arena_list_matches_model(
        capacity in 1usize..12,
        ops in list_ops(14, 80),
    ) {
        let mut list = ArenaList::empty(capacity).unwrap();
        let mut model = ModelList::new(capacity);

        for op in ops {
            let got = op.apply(&mut list);
            let want = op.apply_model(&mut model);
            prop_assert_eq!(&got, &want, "op {:?}", op);
            prop_assert_eq!(list.to_vec(), model.values().to_vec());
            assert_list_invariants(&list);
        }
    }

    #[test]
    fn failed_ops_leave_list_untouched(
        capacity in 1usize..8,
        ops in list_ops(10, 40),
    ) {
        let mut list = ArenaList::empty(capacity).unwrap();
        for op in ops {
            let before = list.clone();
            if op.apply(&mut list).is_err() {
                prop_assert_eq!(list.to_vec(), before.to_vec());
                prop_assert_eq!(list.root(), before.root());
                prop_assert_eq!(list.free_count(), before.free_count());
            }
        }
    }

    #[test]
    fn insert_then_delete_first_restores_root(
        values in proptest::collection::vec(any::<i32>(), 0..15),
        extra in any::<i32>(),
    ) {
        let mut list = slotlist_test_utils::list_from(16, &values);
        let root = list.root();
        let count = list.count();

        list.insert_first(extra).unwrap();
        prop_assert_eq!(list.delete_first(), Ok(extra));
        prop_assert_eq!(list.root(), root);
        prop_assert_eq!(list.count(), count);
    }

    #[test]
    fn delete_then_insert_reuses_freed_slot(
        values in proptest::collection::vec(any::<i32>(), 1..16),
        pick in any::<prop::sample::Index>(),
        extra in any::<i32>(),
    ) {
        let mut list = slotlist_test_utils::list_from(16, &values);
        let index = pick.index(values.len());

        // List order equals slot order after appends only.
        let freed = list.slot(index).map(|view| view.index);
        list.delete_at(index).unwrap();
        let reused = list.insert_first(extra).unwrap();
        prop_assert_eq!(Some(reused), freed);
    }
}

#[test]
fn insert_into_full_list_is_reported_not_dropped() {
    let mut list = ArenaList::empty(1).unwrap();
    ListOp::InsertLast(1).apply(&mut list).unwrap();
    assert_eq!(
        ListOp::InsertFirst(2).apply(&mut list),
        Err(ListError::Full { capacity: 1 })
    );
    assert_eq!(list.to_vec(), vec![1]);
}
