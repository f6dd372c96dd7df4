//! Forward traversal over an [`ArenaList`].

use std::iter::FusedIterator;

use crate::handle::SlotIndex;
use crate::list::ArenaList;

/// Lazy forward cursor from the root to the end of the list.
///
/// Borrows the list, so the list cannot be mutated while a cursor is
/// alive. Not restartable: call [`ArenaList::begin`] again to re-traverse.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    list: &'a ArenaList,
    current: Option<SlotIndex>,
    /// Nodes not yet yielded.
    remaining: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(list: &'a ArenaList) -> Self {
        Self {
            list,
            current: list.root(),
            remaining: list.count(),
        }
    }

    /// Whether another value is available.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Slot the cursor is positioned at, `None` once exhausted.
    pub fn position(&self) -> Option<SlotIndex> {
        self.current
    }
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let slot = self.current?;
        self.current = self.list.link(slot);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.list.value(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

impl FusedIterator for Cursor<'_> {}
