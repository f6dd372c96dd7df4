//! Benchmark profiles and the demo sequence for slotlist.
//!
//! - [`filled_profile`]: a list appended to capacity
//! - [`half_full_profile`]: every other slot freed, for churn benchmarks
//! - [`demo_sequence`]: the operations the demo driver performs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slotlist::{ArenaList, ListError};

/// Build a list of `capacity` slots with `0..capacity` appended in order.
pub fn filled_profile(capacity: usize) -> Result<ArenaList, ListError> {
    let mut list = ArenaList::empty(capacity)?;
    for v in 0..capacity {
        list.insert_last(v as i32)?;
    }
    Ok(list)
}

/// Build a full list, then delete every other node so the free stack is
/// interleaved with occupied slots.
pub fn half_full_profile(capacity: usize) -> Result<ArenaList, ListError> {
    let mut list = filled_profile(capacity)?;
    let mut index = 0;
    while index < list.count() {
        list.delete_at(index)?;
        index += 1;
    }
    Ok(list)
}

/// Run the demo operation sequence on a fresh 64-slot list.
///
/// Ends with `[23, 64, 42]`.
pub fn demo_sequence() -> Result<ArenaList, ListError> {
    let mut list = ArenaList::empty(64)?;
    list.insert_first(23)?;
    list.insert_last(64)?;
    list.insert_last(42)?;
    list.insert_first(16)?;
    list.insert_at(420, 2)?;
    list.delete_first()?;
    list.delete_at(1)?;
    Ok(list)
}
