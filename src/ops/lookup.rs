//! Lookup operation: predecessor search over the breakpoint tree.

use std::collections::BTreeMap;

use safe_bump::Idx;

use crate::store::ValueStore;

/// Returns the breakpoint with the greatest key `<= key`, if any.
pub fn predecessor<'a, K: Ord, V>(
    breakpoints: &'a BTreeMap<K, Idx<V>>,
    key: &K,
) -> Option<(&'a K, Idx<V>)> {
    breakpoints.range(..=key).next_back().map(|(k, &idx)| (k, idx))
}

/// Returns the breakpoint with the greatest key `< key`, if any.
pub fn strict_predecessor<'a, K: Ord, V>(
    breakpoints: &'a BTreeMap<K, Idx<V>>,
    key: &K,
) -> Option<(&'a K, Idx<V>)> {
    breakpoints.range(..key).next_back().map(|(k, &idx)| (k, idx))
}

/// Resolves `key` to the value of the run covering it.
///
/// # Panics
///
/// Panics if `breakpoints` has no entry `<= key`. Every constructor inserts a
/// breakpoint at `K::min_value()` and `assign` never removes it (the begin
/// boundary at the minimum has no predecessor to merge with), so a tree owned
/// by a map always satisfies this.
pub fn lookup<'a, K, V, S>(store: &'a S, breakpoints: &BTreeMap<K, Idx<V>>, key: &K) -> &'a V
where
    K: Ord,
    S: ValueStore<V>,
{
    let (_, idx) = predecessor(breakpoints, key).expect("breakpoint at the domain minimum");
    store.get_value(idx)
}
