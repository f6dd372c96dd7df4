//! The arena-backed singly-linked list.
//!
//! [`ArenaList`] keeps node values and successor links in two parallel
//! `Vec`s sized to the list capacity. Inserting claims a slot from the
//! [`SlotAllocator`]; deleting hands it back. Positional operations walk
//! the link chain from the root, so they cost O(index).

use tracing::debug;

use crate::allocator::SlotAllocator;
use crate::config::ListConfig;
use crate::cursor::Cursor;
use crate::error::ListError;
use crate::handle::{SlotIndex, SlotView};

/// Fixed-capacity singly-linked list of `i32` values.
///
/// The list owns all slot storage. A node is just the pair
/// `(values[slot], links[slot])` for an occupied slot.
///
/// Inserting into a full list fails with [`ListError::Full`]; nothing is
/// silently dropped.
#[derive(Clone, Debug)]
pub struct ArenaList {
    /// Stored value per slot. Stale for free slots.
    values: Vec<i32>,
    /// Successor per slot, `None` for the last node. Stale for free slots.
    links: Vec<Option<SlotIndex>>,
    /// First node in list order.
    root: Option<SlotIndex>,
    /// Live node count.
    count: usize,
    slots: SlotAllocator,
}

impl ArenaList {
    /// Create an empty list with room for `capacity` nodes.
    ///
    /// Returns `Err(ListError::Config)` if `capacity` is zero.
    pub fn empty(capacity: usize) -> Result<Self, ListError> {
        Self::with_config(ListConfig::new(capacity))
    }

    /// Create an empty list from a validated config.
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;
        let capacity = config.capacity;
        debug!(capacity, "creating arena list");
        Ok(Self {
            values: vec![0; capacity],
            links: vec![None; capacity],
            root: None,
            count: 0,
            slots: SlotAllocator::new(capacity),
        })
    }

    /// Whether the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of live nodes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Alias of [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Maximum number of nodes.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Number of slots still available.
    pub fn free_count(&self) -> usize {
        self.slots.free_count()
    }

    /// Slot of the first node, `None` when empty.
    pub fn root(&self) -> Option<SlotIndex> {
        self.root
    }

    /// Prepend `value`.
    pub fn insert_first(&mut self, value: i32) -> Result<SlotIndex, ListError> {
        let slot = self.acquire_slot()?;
        self.values[slot.0] = value;
        self.links[slot.0] = self.root;
        self.root = Some(slot);
        self.count += 1;
        Ok(slot)
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// `index` may equal [`count`](Self::count), which appends. Returns the
    /// slot the new node occupies.
    pub fn insert_at(&mut self, value: i32, index: usize) -> Result<SlotIndex, ListError> {
        if index > self.count {
            return Err(ListError::IndexOutOfRange {
                index,
                bound: self.count + 1,
            });
        }
        if index == 0 {
            return self.insert_first(value);
        }

        let prev = self.slot_at(index - 1)?;
        let slot = self.acquire_slot()?;
        self.values[slot.0] = value;
        self.links[slot.0] = self.links[prev.0];
        self.links[prev.0] = Some(slot);
        self.count += 1;
        Ok(slot)
    }

    /// Append `value`.
    pub fn insert_last(&mut self, value: i32) -> Result<SlotIndex, ListError> {
        self.insert_at(value, self.count)
    }

    /// Remove the first node and return its value.
    pub fn delete_first(&mut self) -> Result<i32, ListError> {
        let first = self.root.ok_or(ListError::EmptyList)?;
        self.slots.release(first)?;
        self.root = self.links[first.0];
        self.count -= 1;
        Ok(self.values[first.0])
    }

    /// Remove the node at position `index` and return its value.
    pub fn delete_at(&mut self, index: usize) -> Result<i32, ListError> {
        if index >= self.count {
            return Err(ListError::IndexOutOfRange {
                index,
                bound: self.count,
            });
        }
        if index == 0 {
            return self.delete_first();
        }

        let prev = self.slot_at(index - 1)?;
        let doomed = self.links[prev.0].ok_or_else(|| ListError::InvalidState {
            reason: format!("link chain ends at position {index} of {}", self.count),
        })?;
        self.slots.release(doomed)?;
        self.links[prev.0] = self.links[doomed.0];
        self.count -= 1;
        Ok(self.values[doomed.0])
    }

    /// Remove the last node and return its value.
    pub fn delete_last(&mut self) -> Result<i32, ListError> {
        if self.count == 0 {
            return Err(ListError::EmptyList);
        }
        self.delete_at(self.count - 1)
    }

    /// Start a traversal at the root.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Iterate values in list order. Same as [`begin`](Self::begin).
    pub fn iter(&self) -> Cursor<'_> {
        self.begin()
    }

    /// Collect the values in list order.
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Raw contents of slot `index`, or `None` if `index >= capacity`.
    pub fn slot(&self, index: usize) -> Option<SlotView> {
        let value = *self.values.get(index)?;
        Some(SlotView {
            index: SlotIndex(index),
            value,
            link: self.links[index],
            occupied: self.slots.is_occupied(SlotIndex(index)),
        })
    }

    /// Highest occupied slot, `None` when the list is empty.
    pub fn last_occupied_index(&self) -> Option<SlotIndex> {
        self.slots.last_occupied()
    }

    /// Walk the whole structure and check that the link chain and the
    /// allocator agree.
    ///
    /// Returns [`ListError::InvalidState`] describing the first violation.
    /// O(capacity).
    pub fn validate(&self) -> Result<(), ListError> {
        let invalid = |reason: String| Err(ListError::InvalidState { reason });

        if self.count != self.slots.occupied_count() {
            return invalid(format!(
                "count {} but {} slots occupied",
                self.count,
                self.slots.occupied_count()
            ));
        }

        let mut seen = vec![false; self.capacity()];
        let mut current = self.root;
        for position in 0..self.count {
            let Some(slot) = current else {
                return invalid(format!(
                    "link chain ends after {position} of {} nodes",
                    self.count
                ));
            };
            if !self.slots.is_occupied(slot) {
                return invalid(format!("position {position} links to free slot {slot}"));
            }
            if std::mem::replace(&mut seen[slot.0], true) {
                return invalid(format!("slot {slot} reached twice"));
            }
            current = self.links[slot.0];
        }
        if let Some(slot) = current {
            return invalid(format!(
                "link chain continues to slot {slot} after {} nodes",
                self.count
            ));
        }
        Ok(())
    }

    /// Drop the list and its backing storage.
    ///
    /// Equivalent to letting it go out of scope; consuming `self` makes a
    /// second release impossible.
    pub fn release(self) {
        debug!(
            capacity = self.capacity(),
            count = self.count,
            "releasing arena list"
        );
    }

    pub(crate) fn value(&self, slot: SlotIndex) -> i32 {
        self.values[slot.0]
    }

    pub(crate) fn link(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.links[slot.0]
    }

    /// Slot holding the node at `index`. Caller guarantees `index < count`.
    fn slot_at(&self, index: usize) -> Result<SlotIndex, ListError> {
        let mut current = self.root;
        for _ in 0..index {
            current = current.and_then(|slot| self.links[slot.0]);
        }
        current.ok_or_else(|| ListError::InvalidState {
            reason: format!("link chain ends before position {index}"),
        })
    }

    fn acquire_slot(&mut self) -> Result<SlotIndex, ListError> {
        self.slots.acquire().map_err(|e| match e {
            ListError::OutOfCapacity { capacity } => {
                debug!(capacity, "insert rejected: list is full");
                ListError::Full { capacity }
            }
            other => other,
        })
    }
}

impl<'a> IntoIterator for &'a ArenaList {
    type Item = i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
