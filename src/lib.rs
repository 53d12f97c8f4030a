//! Compact interval map with canonical form.
//!
//! An [`IntervalMap<K, V>`] maps *every* key of a bounded, totally ordered
//! domain to a value, but stores only the breakpoints where the value
//! changes. Memory is proportional to the number of runs, not to the size of
//! the key space.
//!
//! # Key properties
//!
//! - **Total**: a breakpoint always sits at `K::min_value()`, so
//!   [`lookup`](IntervalMap::lookup) is defined for every key
//! - **Canonical form**: consecutive breakpoints never hold equal values, so
//!   equal mappings have identical breakpoint sequences
//! - **Local assign**: [`assign`](IntervalMap::assign) edits only the two
//!   interval boundaries and the breakpoints strictly inside the interval,
//!   O(log n + removed)
//! - **Checkpoint / rollback**: values live in an append-only arena and
//!   breakpoint edits are journaled while a checkpoint is held, so any
//!   earlier state can be restored
//! - **Bounded footprint**: with no checkpoint held, dead values are
//!   reclaimed by compaction, so memory stays proportional to the runs
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use compact_interval_map::IntervalMap;
//!
//! let mut map = IntervalMap::<u32, char>::new('A');
//! map.assign(1, 2, 'c');
//! assert_eq!(map.lookup(&0), &'A');
//! assert_eq!(map.lookup(&1), &'c');
//! assert_eq!(map.lookup(&2), &'A');
//! assert_eq!(map.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;
use std::marker::PhantomData;

use safe_bump::Checkpoint;

pub mod arena;
pub mod arena_sync;
pub mod bounded;
pub mod error;
pub mod iter;
pub mod store;

mod journal;
mod map;
mod map_sync;
mod ops;

#[cfg(test)]
mod tests;

pub use arena::ValueArena;
pub use arena_sync::ValueArenaSync;
pub use bounded::Bounded;
pub use error::BreakpointError;
pub use iter::{Iter, Run, Runs};
pub use map::IntervalMap;
pub use map_sync::IntervalMapSync;

/// Saved map state for rollback.
///
/// Created by [`IntervalMap::checkpoint`] or [`IntervalMapSync::checkpoint`].
/// Restoring via `rollback` discards every assign made after the checkpoint.
///
/// A checkpoint stays valid until the map is rolled back to an earlier
/// checkpoint or [`commit`](IntervalMap::commit)ted. Rolling back to an
/// invalid checkpoint leaves the map unchanged.
pub struct IntervalCheckpoint<K, V> {
    /// Value arena checkpoint.
    pub values: Checkpoint<V>,
    /// Journal length at checkpoint time.
    pub journal_len: usize,
    id: u64,
    key: PhantomData<fn() -> K>,
}

impl<K, V> IntervalCheckpoint<K, V> {
    const fn new(values: Checkpoint<V>, journal_len: usize, id: u64) -> Self {
        Self {
            values,
            journal_len,
            id,
            key: PhantomData,
        }
    }
}

// IntervalCheckpoint contains only a Checkpoint<V> (Copy) and two integers, no K/V data.

impl<K, V> Clone for IntervalCheckpoint<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for IntervalCheckpoint<K, V> {}

impl<K, V> fmt::Debug for IntervalCheckpoint<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalCheckpoint")
            .field("id", &self.id)
            .field("journal_len", &self.journal_len)
            .finish_non_exhaustive()
    }
}
