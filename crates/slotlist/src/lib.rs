//! Fixed-capacity singly-linked list stored in a slot arena.
//!
//! Nodes are not individually heap-allocated. A list owns two parallel
//! arrays (values and successor links) sized once at construction, and a
//! node is identified by its [`SlotIndex`] into those arrays. Free slots
//! are tracked by a LIFO stack so that both claiming and returning a slot
//! are O(1).
//!
//! # Architecture
//!
//! ```text
//! ArenaList (owner of all slot storage)
//! ├── values: Vec<i32>              one entry per slot
//! ├── links:  Vec<Option<SlotIndex>> successor of each slot, None = last
//! ├── root:   Option<SlotIndex>      first node, None when empty
//! └── SlotAllocator
//!     ├── free_slots: Vec<SlotIndex> LIFO stack, top acquired next
//!     └── occupied:   Vec<bool>      live-slot map for checked release
//! ```
//!
//! Readers walk the list with a [`Cursor`], which borrows the list and
//! therefore cannot observe a mutation mid-traversal.
//!
//! # Example
//!
//! ```rust
//! use slotlist::ArenaList;
//!
//! let mut list = ArenaList::empty(8).unwrap();
//! list.insert_last(1).unwrap();
//! list.insert_last(3).unwrap();
//! list.insert_at(2, 1).unwrap();
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(list.delete_first().unwrap(), 1);
//! assert_eq!(list.count(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod cursor;
pub mod dump;
pub mod error;
pub mod handle;
pub mod list;

// Public re-exports for the primary API surface.
pub use allocator::SlotAllocator;
pub use config::{ConfigError, ListConfig};
pub use cursor::Cursor;
pub use error::ListError;
pub use handle::{SlotIndex, SlotView};
pub use list::ArenaList;
