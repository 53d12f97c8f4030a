//! Undo log of breakpoint edits.
//!
//! While at least one checkpoint is pinned, every structural change `assign`
//! makes to the breakpoint tree is recorded here together with what it
//! displaced. Rolling back replays the log in reverse, which restores the
//! tree key for key; the value arena is then truncated separately by the
//! store. With no pinned checkpoint nothing is recorded.

use std::collections::BTreeMap;

use safe_bump::Idx;

/// One recorded change to the breakpoint tree.
pub enum Edit<K, V> {
    /// A breakpoint was created at this key.
    Inserted(K),
    /// The breakpoint at this key previously pointed at the given value.
    Replaced(K, Idx<V>),
    /// The breakpoint at this key, pointing at the given value, was removed.
    Removed(K, Idx<V>),
}

/// Append-only list of [`Edit`]s plus the ids of the checkpoints it serves.
///
/// Pinned ids are strictly increasing; a rollback to one of them unpins every
/// later id, and [`clear`](Self::clear) unpins all of them.
pub struct Journal<K, V> {
    edits: Vec<Edit<K, V>>,
    pins: Vec<u64>,
    next_pin: u64,
}

impl<K, V> Journal<K, V> {
    /// Creates an empty journal with no pinned checkpoints.
    pub const fn new() -> Self {
        Self {
            edits: Vec::new(),
            pins: Vec::new(),
            next_pin: 0,
        }
    }

    /// Returns the number of recorded edits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` while at least one checkpoint is pinned.
    #[must_use]
    pub const fn is_recording(&self) -> bool {
        !self.pins.is_empty()
    }

    /// Pins a new checkpoint and starts recording, returning its id.
    pub fn pin(&mut self) -> u64 {
        let id = self.next_pin;
        self.next_pin += 1;
        self.pins.push(id);
        id
    }

    /// Keeps `id` pinned and unpins every later checkpoint.
    ///
    /// Returns `false` if `id` is not pinned (released by a commit, or
    /// invalidated by a rollback to an earlier checkpoint).
    pub fn unpin_after(&mut self, id: u64) -> bool {
        match self.pins.binary_search(&id) {
            Ok(pos) => {
                self.pins.truncate(pos + 1);
                true
            }
            Err(_) => false,
        }
    }

    /// Records one edit if a checkpoint is pinned.
    pub fn record(&mut self, edit: Edit<K, V>) {
        if self.is_recording() {
            self.edits.push(edit);
        }
    }

    /// Drops all edits and unpins every checkpoint.
    pub fn clear(&mut self) {
        self.edits.clear();
        self.pins.clear();
    }
}

impl<K: Ord, V> Journal<K, V> {
    /// Undoes edits newest-first until only `len` remain.
    ///
    /// Returns the number of edits undone. A `len` at or past the current
    /// length undoes nothing.
    pub fn undo_to(&mut self, len: usize, breakpoints: &mut BTreeMap<K, Idx<V>>) -> usize {
        if len >= self.edits.len() {
            return 0;
        }
        let undone = self.edits.len() - len;
        for edit in self.edits.drain(len..).rev() {
            match edit {
                Edit::Inserted(key) => {
                    breakpoints.remove(&key);
                }
                Edit::Replaced(key, idx) | Edit::Removed(key, idx) => {
                    breakpoints.insert(key, idx);
                }
            }
        }
        undone
    }
}

impl<K, V> Default for Journal<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
