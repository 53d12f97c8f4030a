//! Multi-threaded interval map.

use std::collections::BTreeMap;
use std::fmt;
use std::ops;

use safe_bump::Idx;
use tracing::{debug, trace};

use crate::IntervalCheckpoint;
use crate::arena_sync::ValueArenaSync;
use crate::bounded::Bounded;
use crate::error::BreakpointError;
use crate::iter::{Iter, Runs};
use crate::journal::Journal;
use crate::ops::assign::assign;
use crate::ops::build::build;
use crate::ops::compact::{compact, needs_compaction};
use crate::ops::lookup::lookup;
use crate::store::ValueStore;

/// Compact interval map, multi-threaded.
///
/// Identical API to [`IntervalMap`](crate::IntervalMap) but backed by
/// [`SharedArena`](safe_bump::SharedArena) for `Send + Sync` support.
pub struct IntervalMapSync<K, V> {
    store: ValueArenaSync<V>,
    breakpoints: BTreeMap<K, Idx<V>>,
    journal: Journal<K, V>,
}

// ---------------------------------------------------------------------------
// Construction (K: Bounded)
// ---------------------------------------------------------------------------

impl<K: Bounded, V> IntervalMapSync<K, V> {
    /// Creates a map resolving every key to `initial`.
    #[must_use]
    pub fn new(initial: V) -> Self {
        let mut store = ValueArenaSync::new();
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(K::min_value(), store.alloc_value(initial));
        Self {
            store,
            breakpoints,
            journal: Journal::new(),
        }
    }
}

impl<K: Bounded, V: PartialEq> IntervalMapSync<K, V> {
    /// Builds a map from an explicit list of `(breakpoint, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`BreakpointError`] if the list is empty, does not start at
    /// `K::min_value()`, is not strictly increasing by key, or repeats a
    /// value in consecutive positions.
    pub fn from_breakpoints<I>(iter: I) -> Result<Self, BreakpointError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut store = ValueArenaSync::new();
        let breakpoints = build(&mut store, iter)?;
        Ok(Self {
            store,
            breakpoints,
            journal: Journal::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Accessors & checkpoints (no trait bounds)
// ---------------------------------------------------------------------------

impl<K, V> IntervalMapSync<K, V> {
    /// Returns the number of breakpoints, which is also the number of
    /// maximal runs. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Always `false`: every key of the domain is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Returns the number of allocated values.
    ///
    /// Includes values of overwritten runs not yet reclaimed, so it reflects
    /// true memory footprint.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.arena_len()
    }

    /// Returns the number of breakpoint edits recorded for rollback.
    ///
    /// Zero whenever no checkpoint is held.
    #[must_use]
    pub const fn journal_len(&self) -> usize {
        self.journal.len()
    }

    /// Saves the current map state for later rollback.
    ///
    /// Until the checkpoint is released by [`commit`](Self::commit) or by a
    /// rollback to an earlier checkpoint, breakpoint edits are journaled and
    /// dead values are kept, so memory grows with every assign.
    #[must_use]
    pub fn checkpoint(&mut self) -> IntervalCheckpoint<K, V> {
        let id = self.journal.pin();
        IntervalCheckpoint::new(self.store.checkpoint(), self.journal.len(), id)
    }

    /// Returns an iterator over breakpoints as `(&K, &V)` pairs, in
    /// ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, ValueArenaSync<V>> {
        Iter::new(&self.store, self.breakpoints.iter())
    }

    /// Returns an iterator over the maximal runs of equal values.
    #[must_use]
    pub fn runs(&self) -> Runs<'_, K, V, ValueArenaSync<V>> {
        Runs::new(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Read operations & rollback (K: Ord)
// ---------------------------------------------------------------------------

impl<K: Ord, V> IntervalMapSync<K, V> {
    /// Returns the value of the run covering `key`.
    ///
    /// That is the value of the greatest breakpoint `<= key`. A breakpoint
    /// always sits at `K::min_value()` and no operation removes it, so every
    /// key has one and the call never panics.
    #[must_use]
    pub fn lookup(&self, key: &K) -> &V {
        lookup(&self.store, &self.breakpoints, key)
    }

    /// Restores the map to a previously saved checkpoint.
    ///
    /// All assigns made after the checkpoint are discarded and every
    /// checkpoint taken after it is released. `cp` itself stays valid.
    ///
    /// A checkpoint already released (by [`commit`](Self::commit) or
    /// by a rollback to an earlier checkpoint) leaves the map unchanged.
    pub fn rollback(&mut self, cp: IntervalCheckpoint<K, V>) {
        if !self.journal.unpin_after(cp.id) {
            debug!(id = cp.id, "ignored rollback to released checkpoint");
            return;
        }
        let undone = self.journal.undo_to(cp.journal_len, &mut self.breakpoints);
        self.store.rollback(cp.values);
        debug!(undone, len = self.breakpoints.len(), "rolled back interval map");
    }
}

// ---------------------------------------------------------------------------
// Reclaiming memory (V: Clone)
// ---------------------------------------------------------------------------

impl<K, V: Clone> IntervalMapSync<K, V> {
    /// Releases every checkpoint and reclaims dead values.
    ///
    /// Rolling back to a checkpoint taken before the commit leaves the map
    /// unchanged.
    pub fn commit(&mut self) {
        let released = self.journal.len();
        self.journal.clear();
        debug!(released, "committed interval map");
        self.compact();
    }

    /// Copies the live values into a fresh arena, dropping dead ones.
    ///
    /// Does nothing while a checkpoint is held. Assigns compact on their own
    /// once dead values dominate, so calling this is only needed to trim
    /// memory eagerly.
    pub fn compact(&mut self) {
        if self.journal.is_recording() {
            return;
        }
        let before = self.store.arena_len();
        self.store = compact(&self.store, &mut self.breakpoints);
        trace!(before, after = self.store.arena_len(), "compacted interval map");
    }
}

// ---------------------------------------------------------------------------
// Write operations (K: Bounded + Clone, V: PartialEq + Clone)
// ---------------------------------------------------------------------------

impl<K: Bounded + Clone, V: PartialEq + Clone> IntervalMapSync<K, V> {
    /// Assigns `value` to every key in `[begin, end)`.
    ///
    /// Keys outside the interval keep their value. An empty or inverted
    /// interval (`!(begin < end)`) leaves the map untouched. If `end` is
    /// `K::max_value()`, the run extends to the end of the domain.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if let Some(outcome) = assign(
            &mut self.store,
            &mut self.breakpoints,
            &mut self.journal,
            begin,
            end,
            value,
        ) {
            trace!(
                end = ?outcome.end,
                begin = ?outcome.begin,
                removed = outcome.removed,
                len = self.breakpoints.len(),
                "assigned interval"
            );
            if needs_compaction(self.store.arena_len(), self.breakpoints.len()) {
                self.compact();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K: Bounded, V: Default> Default for IntervalMapSync<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K: Clone, V: Clone> Clone for IntervalMapSync<K, V> {
    /// Copies live values only; the clone holds no checkpoints.
    fn clone(&self) -> Self {
        let mut breakpoints = self.breakpoints.clone();
        let store = compact(&self.store, &mut breakpoints);
        Self {
            store,
            breakpoints,
            journal: Journal::new(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalMapSync<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMapSync")
            .field("len", &self.breakpoints.len())
            .field("breakpoints", &DebugBreakpoints(self))
            .finish()
    }
}

struct DebugBreakpoints<'a, K, V>(&'a IntervalMapSync<K, V>);

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for DebugBreakpoints<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for IntervalMapSync<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for IntervalMapSync<K, V> {}

impl<K: Bounded + Clone, V: PartialEq + Clone> Extend<(ops::Range<K>, V)>
    for IntervalMapSync<K, V>
{
    fn extend<I: IntoIterator<Item = (ops::Range<K>, V)>>(&mut self, iter: I) {
        for (range, value) in iter {
            self.assign(range.start, range.end, value);
        }
    }
}

impl<K: Ord, V> ops::Index<&K> for IntervalMapSync<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.lookup(key)
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMapSync<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, ValueArenaSync<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
