//! Slot handles and read-only slot views.
//!
//! A [`SlotIndex`] is the arena's stand-in for a node pointer: a plain
//! position in the list's backing arrays. "No node" is spelled
//! `Option::<SlotIndex>::None` rather than a reserved index value.

use std::fmt;

/// Position of a slot within a list's backing storage.
///
/// Only meaningful for the list that produced it, and only while that slot
/// is occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    /// The raw array index.
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SlotIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Snapshot of one raw slot, as shown by the verbose dump.
///
/// For a free slot `value` and `link` are whatever the last occupant left
/// behind and carry no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotView {
    /// Which slot this is.
    pub index: SlotIndex,
    /// Stored value.
    pub value: i32,
    /// Successor slot, `None` if this node is last.
    pub link: Option<SlotIndex>,
    /// Whether the slot currently holds a live node.
    pub occupied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_index() {
        assert_eq!(SlotIndex(7).to_string(), "7");
    }

    #[test]
    fn from_usize_round_trip() {
        let slot = SlotIndex::from(12);
        assert_eq!(slot.get(), 12);
    }
}
