//! Storage abstraction for run values.

use safe_bump::{Checkpoint, Idx};

/// Storage backend for the values of an interval map.
///
/// Breakpoints hold [`Idx`] handles into the store rather than values, so a
/// run split in two shares one slot. Storage is append-only: values of runs
/// that were overwritten stay allocated until a rollback truncates them.
///
/// Abstracts over [`Arena`](safe_bump::Arena) (single-thread) and
/// [`SharedArena`](safe_bump::SharedArena) (multi-thread) backends.
pub trait ValueStore<V> {
    /// Allocates a single value, returning its index.
    fn alloc_value(&mut self, value: V) -> Idx<V>;

    /// Returns a reference to the value at `idx`.
    fn get_value(&self, idx: Idx<V>) -> &V;

    /// Saves the current allocation state.
    fn checkpoint(&self) -> Checkpoint<V>;

    /// Discards every value allocated after `cp`.
    fn rollback(&mut self, cp: Checkpoint<V>);

    /// Returns the total number of allocated values.
    ///
    /// Includes values of overwritten runs, so it reflects true memory footprint.
    fn arena_len(&self) -> usize;
}
