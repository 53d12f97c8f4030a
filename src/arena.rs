//! Arena-backed value storage (single-threaded).

use safe_bump::{Arena, Checkpoint, Idx};

use crate::store::ValueStore;

/// Single-threaded value storage using one [`Arena`].
pub struct ValueArena<V> {
    values: Arena<V>,
}

impl<V> ValueArena<V> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Arena::new(),
        }
    }
}

impl<V> Default for ValueArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ValueStore<V> for ValueArena<V> {
    fn alloc_value(&mut self, value: V) -> Idx<V> {
        self.values.alloc(value)
    }

    fn get_value(&self, idx: Idx<V>) -> &V {
        self.values.get(idx)
    }

    fn checkpoint(&self) -> Checkpoint<V> {
        self.values.checkpoint()
    }

    fn rollback(&mut self, cp: Checkpoint<V>) {
        self.values.rollback(cp);
    }

    fn arena_len(&self) -> usize {
        self.values.len()
    }
}
