//! Test utilities for slotlist development.
//!
//! Provides a [`ModelList`] reference implementation backed by a plain
//! `Vec<i32>`, a [`ListOp`] enum describing one list mutation, proptest
//! strategies that generate operation sequences, and
//! [`assert_list_invariants`] for checking an [`ArenaList`] after each step.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use slotlist::{ArenaList, ListError};

/// Reference list with the same contract as [`ArenaList`] and no arena.
///
/// Error results mirror [`ArenaList`] exactly, so the two can be driven in
/// lockstep and compared after each operation.
#[derive(Clone, Debug, Default)]
pub struct ModelList {
    values: Vec<i32>,
    capacity: usize,
}

impl ModelList {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn insert_at(&mut self, value: i32, index: usize) -> Result<(), ListError> {
        if index > self.values.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                bound: self.values.len() + 1,
            });
        }
        if self.values.len() == self.capacity {
            return Err(ListError::Full {
                capacity: self.capacity,
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    pub fn delete_at(&mut self, index: usize) -> Result<i32, ListError> {
        if index >= self.values.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                bound: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    pub fn delete_first(&mut self) -> Result<i32, ListError> {
        if self.values.is_empty() {
            return Err(ListError::EmptyList);
        }
        Ok(self.values.remove(0))
    }

    pub fn delete_last(&mut self) -> Result<i32, ListError> {
        self.values.pop().ok_or(ListError::EmptyList)
    }
}

/// One list mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOp {
    InsertFirst(i32),
    InsertAt(i32, usize),
    InsertLast(i32),
    DeleteFirst,
    DeleteAt(usize),
    DeleteLast,
}

/// Outcome of one operation, comparable across list and model.
///
/// Inserts report `Ok(None)`, deletes report the removed value.
pub type OpResult = Result<Option<i32>, ListError>;

impl ListOp {
    /// Run this operation against the arena list.
    pub fn apply(self, list: &mut ArenaList) -> OpResult {
        match self {
            Self::InsertFirst(v) => list.insert_first(v).map(|_| None),
            Self::InsertAt(v, i) => list.insert_at(v, i).map(|_| None),
            Self::InsertLast(v) => list.insert_last(v).map(|_| None),
            Self::DeleteFirst => list.delete_first().map(Some),
            Self::DeleteAt(i) => list.delete_at(i).map(Some),
            Self::DeleteLast => list.delete_last().map(Some),
        }
    }

    /// Run this operation against the reference model.
    pub fn apply_model(self, model: &mut ModelList) -> OpResult {
        match self {
            Self::InsertFirst(v) => model.insert_at(v, 0).map(|_| None),
            Self::InsertAt(v, i) => model.insert_at(v, i).map(|_| None),
            Self::InsertLast(v) => {
                let end = model.count();
                model.insert_at(v, end).map(|_| None)
            }
            Self::DeleteFirst => model.delete_first().map(Some),
            Self::DeleteAt(i) => model.delete_at(i).map(Some),
            Self::DeleteLast => model.delete_last().map(Some),
        }
    }

    /// Whether this operation adds a node.
    pub fn is_insert(self) -> bool {
        matches!(
            self,
            Self::InsertFirst(_) | Self::InsertAt(..) | Self::InsertLast(_)
        )
    }
}

/// Any single operation. Indices range up to `max_index` inclusive, so
/// sequences include both valid and out-of-range positions.
pub fn list_op(max_index: usize) -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i32>().prop_map(ListOp::InsertFirst),
        (any::<i32>(), 0..=max_index).prop_map(|(v, i)| ListOp::InsertAt(v, i)),
        any::<i32>().prop_map(ListOp::InsertLast),
        Just(ListOp::DeleteFirst),
        (0..=max_index).prop_map(ListOp::DeleteAt),
        Just(ListOp::DeleteLast),
    ]
}

/// A sequence of up to `max_len` operations.
pub fn list_ops(max_index: usize, max_len: usize) -> impl Strategy<Value = Vec<ListOp>> {
    proptest::collection::vec(list_op(max_index), 0..max_len)
}

/// Panic unless the list's structural invariants hold.
///
/// Checks, beyond [`ArenaList::validate`], that the free count matches the
/// live count and that a traversal yields exactly `count` values.
pub fn assert_list_invariants(list: &ArenaList) {
    if let Err(e) = list.validate() {
        panic!("list invariant violated: {e}");
    }
    assert!(list.count() <= list.capacity(), "count exceeds capacity");
    assert_eq!(
        list.count(),
        list.capacity() - list.free_count(),
        "count != capacity - free slots"
    );
    assert_eq!(list.iter().count(), list.count(), "traversal length != count");

    let occupied = (0..list.capacity())
        .filter_map(|i| list.slot(i))
        .filter(|view| view.occupied)
        .count();
    assert_eq!(occupied, list.count(), "occupied slots != count");
}

/// Build a list of the given capacity holding `values` in order.
pub fn list_from(capacity: usize, values: &[i32]) -> ArenaList {
    let mut list = match ArenaList::empty(capacity) {
        Ok(list) => list,
        Err(e) => panic!("cannot build list of capacity {capacity}: {e}"),
    };
    for &v in values {
        if let Err(e) = list.insert_last(v) {
            panic!("cannot append {v}: {e}");
        }
    }
    list
}
