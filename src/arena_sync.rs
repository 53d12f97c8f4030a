//! Shared-arena-backed value storage (multi-threaded).

use safe_bump::{Checkpoint, Idx, SharedArena};

use crate::store::ValueStore;

/// Thread-safe value storage using one [`SharedArena`].
pub struct ValueArenaSync<V> {
    values: SharedArena<V>,
}

impl<V> ValueArenaSync<V> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: SharedArena::new(),
        }
    }
}

impl<V> Default for ValueArenaSync<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ValueStore<V> for ValueArenaSync<V> {
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
