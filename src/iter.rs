//! Iterator types for interval maps.

use std::collections::btree_map;
use std::fmt;
use std::iter::{FusedIterator, Peekable};

use safe_bump::Idx;

use crate::store::ValueStore;

/// Iterator over breakpoints of an [`IntervalMap`](crate::IntervalMap) in
/// ascending key order.
///
/// Each item `(k, v)` means: `v` holds from `k` (inclusive) up to the next
/// breakpoint's key (exclusive).
pub struct Iter<'a, K, V, S> {
    inner: btree_map::Iter<'a, K, Idx<V>>,
    store: &'a S,
}

impl<'a, K, V, S: ValueStore<V>> Iter<'a, K, V, S> {
    /// Creates an iterator resolving each breakpoint through `store`.
    #[must_use]
    pub const fn new(store: &'a S, inner: btree_map::Iter<'a, K, Idx<V>>) -> Self {
        Self { inner, store }
    }
}

impl<'a, K, V: 'a, S: ValueStore<V>> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, &idx) = self.inner.next()?;
        Some((key, self.store.get_value(idx)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S: ValueStore<V>> DoubleEndedIterator for Iter<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, &idx) = self.inner.next_back()?;
        Some((key, self.store.get_value(idx)))
    }
}

impl<K, V, S: ValueStore<V>> ExactSizeIterator for Iter<'_, K, V, S> {}

impl<K, V, S: ValueStore<V>> FusedIterator for Iter<'_, K, V, S> {}

/// A maximal run of equal values.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Run<'a, K, V> {
    /// First key of the run.
    pub start: &'a K,
    /// First key after the run, or `None` if the run extends to the end of
    /// the domain.
    pub end: Option<&'a K>,
    /// Value held by every key of the run.
    pub value: &'a V,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Run<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{:?}, {:?}) => {:?}", self.start, end, self.value),
            None => write!(f, "[{:?}, ..] => {:?}", self.start, self.value),
        }
    }
}

/// Iterator over the maximal runs of an [`IntervalMap`](crate::IntervalMap).
///
/// Consecutive runs always hold different values.
pub struct Runs<'a, K, V, S: ValueStore<V>> {
    inner: Peekable<Iter<'a, K, V, S>>,
}

impl<'a, K, V, S: ValueStore<V>> Runs<'a, K, V, S> {
    /// Creates a run iterator over breakpoints.
    #[must_use]
    pub fn new(breakpoints: Iter<'a, K, V, S>) -> Self {
        Self {
            inner: breakpoints.peekable(),
        }
    }
}

impl<'a, K, V: 'a, S: ValueStore<V>> Iterator for Runs<'a, K, V, S> {
    type Item = Run<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, value) = self.inner.next()?;
        let end = self.inner.peek().map(|&(key, _)| key);
        Some(Run { start, end, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S: ValueStore<V>> ExactSizeIterator for Runs<'_, K, V, S> {}

impl<K, V, S: ValueStore<V>> FusedIterator for Runs<'_, K, V, S> {}
