//! Human-readable renderings of a list for debugging.
//!
//! Neither format is a stable schema. Both only read the list.
//!
//! - [`ArenaList::dump`] (also the `Display` impl): one value per line in
//!   list order.
//! - [`ArenaList::dump_debug`]: a header with capacity, count and root,
//!   followed by the raw slot table up to the highest occupied slot.

use std::fmt;

use crate::handle::SlotIndex;
use crate::list::ArenaList;

impl ArenaList {
    /// Values in list order, one per line.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Header plus raw slot table. Renders lazily via `Display`.
    pub fn dump_debug(&self) -> DebugDump<'_> {
        DebugDump { list: self }
    }
}

impl fmt::Display for ArenaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Verbose view of a list's slot table. See [`ArenaList::dump_debug`].
pub struct DebugDump<'a> {
    list: &'a ArenaList,
}

struct Link(Option<SlotIndex>);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(slot) => write!(f, "{slot}"),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for DebugDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.list;
        writeln!(
            f,
            "capacity = {}; count = {}; root = {}",
            list.capacity(),
            list.count(),
            Link(list.root())
        )?;

        let Some(last) = list.last_occupied_index() else {
            return Ok(());
        };
        for view in (0..=last.get()).filter_map(|i| list.slot(i)) {
            writeln!(
                f,
                "[{}] Value: {}, Link: {}, Occupied: {}",
                view.index,
                view.value,
                Link(view.link),
                view.occupied
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_prints_one_value_per_line() {
        let mut list = ArenaList::empty(4).unwrap();
        list.insert_last(-1).unwrap();
        list.insert_last(2).unwrap();
        assert_eq!(list.dump(), "-1\n2\n");
    }

    #[test]
    fn empty_dump_is_blank() {
        let list = ArenaList::empty(4).unwrap();
        assert_eq!(list.dump(), "");
        assert_eq!(
            list.dump_debug().to_string(),
            "capacity = 4; count = 0; root = -\n"
        );
    }

    #[test]
    fn debug_dump_shows_free_slots_below_highest_occupied() {
        let mut list = ArenaList::empty(8).unwrap();
        for v in [10, 20, 30] {
            list.insert_last(v).unwrap();
        }
        list.delete_at(1).unwrap();

        let expected = "\
capacity = 8; count = 2; root = 0
[0] Value: 10, Link: 2, Occupied: true
[1] Value: 20, Link: 2, Occupied: false
[2] Value: 30, Link: -, Occupied: true
";
        assert_eq!(list.dump_debug().to_string(), expected);
    }

    #[test]
    fn dumping_does_not_mutate() {
        let mut list = ArenaList::empty(4).unwrap();
        list.insert_last(1).unwrap();
        let before = list.to_vec();
        let _ = list.dump();
        let _ = list.dump_debug().to_string();
        assert_eq!(list.to_vec(), before);
        assert_eq!(list.free_count(), 3);
    }
}
