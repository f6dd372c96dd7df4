//! Fixed-pool slot allocator backed by a stack of free indices.
//!
//! [`SlotAllocator`] hands out indices in `0..capacity` and takes them
//! back. Free indices live on a LIFO stack, so both directions are O(1)
//! and the most recently released slot is the next one handed out.

use tracing::trace;

use crate::error::ListError;
use crate::handle::SlotIndex;

/// Bounded pool of slot indices with O(1) acquire and release.
///
/// Invariant: `free_slots` holds each index of `0..capacity` that is not
/// occupied, exactly once. `occupied[i]` is true iff `i` is not on the
/// stack.
///
/// Release is checked: returning a slot that is out of range or already
/// free fails with [`ListError::InvalidState`] instead of corrupting the
/// stack.
#[derive(Clone, Debug)]
pub struct SlotAllocator {
    /// Free indices; the top of the stack (last element) is acquired next.
    free_slots: Vec<SlotIndex>,
    /// Occupancy per slot.
    occupied: Vec<bool>,
}

impl SlotAllocator {
    /// Create an allocator over `capacity` slots, all free.
    ///
    /// The stack is seeded in descending order so slot 0 is acquired
    /// first, then 1, 2, and so on.
    pub fn new(capacity: usize) -> Self {
        Self {
            free_slots: (0..capacity).rev().map(SlotIndex).collect(),
            occupied: vec![false; capacity],
        }
    }

    /// Claim a free slot.
    ///
    /// Returns `Err(ListError::OutOfCapacity)` when every slot is in use.
    pub fn acquire(&mut self) -> Result<SlotIndex, ListError> {
        let slot = self.free_slots.pop().ok_or(ListError::OutOfCapacity {
            capacity: self.capacity(),
        })?;
        self.occupied[slot.0] = true;
        trace!(slot = slot.0, free = self.free_slots.len(), "acquired slot");
        Ok(slot)
    }

    /// Return a previously acquired slot to the pool.
    ///
    /// Fails with [`ListError::InvalidState`], leaving the allocator
    /// untouched, if `slot` is out of range or not currently occupied.
    pub fn release(&mut self, slot: SlotIndex) -> Result<(), ListError> {
        match self.occupied.get_mut(slot.0) {
            Some(occupied) if *occupied => {
                *occupied = false;
                self.free_slots.push(slot);
                trace!(slot = slot.0, free = self.free_slots.len(), "released slot");
                Ok(())
            }
            Some(_) => Err(ListError::InvalidState {
                reason: format!("slot {slot} released while already free"),
            }),
            None => Err(ListError::InvalidState {
                reason: format!(
                    "slot {slot} released but capacity is {}",
                    self.capacity()
                ),
            }),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.occupied.len()
    }

    /// Number of slots available for acquisition.
    pub fn free_count(&self) -> usize {
        self.free_slots.len()
    }

    /// Number of slots currently handed out.
    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.free_count()
    }

    /// Whether no slot is left to acquire.
    pub fn is_exhausted(&self) -> bool {
        self.free_slots.is_empty()
    }

    /// Whether `slot` is currently handed out. Out-of-range slots are not.
    pub fn is_occupied(&self, slot: SlotIndex) -> bool {
        self.occupied.get(slot.0).copied().unwrap_or(false)
    }

    /// Highest occupied slot, or `None` if every slot is free. O(capacity).
    pub fn last_occupied(&self) -> Option<SlotIndex> {
        self.occupied.iter().rposition(|&o| o).map(SlotIndex)
    }

    /// Free slots in the order they would be acquired.
    pub fn free_slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.free_slots.iter().rev().copied()
    }
}
