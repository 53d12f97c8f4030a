//! Compaction: rebuild the value store from live breakpoints only.

use std::collections::BTreeMap;

use safe_bump::Idx;

use crate::store::ValueStore;

/// Arena slack tolerated before an unpinned map compacts itself.
pub const SLACK: usize = 16;

/// Returns `true` once dead values outnumber live breakpoints by more than
/// [`SLACK`]. Compacting at that point keeps the arena within
/// `2 · len + SLACK + 1` values at amortized O(1) cost per assign.
#[must_use]
pub const fn needs_compaction(arena_len: usize, len: usize) -> bool {
    arena_len > 2 * len + SLACK
}

/// Copies every live value into a fresh store and repoints `breakpoints` at
/// it. Runs sharing a slot each get their own copy.
pub fn compact<K, V, S>(store: &S, breakpoints: &mut BTreeMap<K, Idx<V>>) -> S
where
    V: Clone,
    S: ValueStore<V> + Default,
{
    let mut fresh = S::default();
    for idx in breakpoints.values_mut() {
        *idx = fresh.alloc_value(store.get_value(*idx).clone());
    }
    fresh
}
