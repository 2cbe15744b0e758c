//! Handle-keyed collections used by the model containers

use slotmap::{Key, SlotMap};

slotmap::new_key_type! {
    /// Generational key of a level inside its world
    pub struct LevelKey;

    /// Generational key of a layer inside its level
    pub struct LayerKey;
}

/// Slot map that also remembers insertion order
///
/// Lookups go through the generational key, so stale keys never alias a newer
/// entry. Iteration follows `order`, which callers may rearrange with
/// [`OrderedSlots::insert_at_with_key`], [`OrderedSlots::move_to`] and
/// [`OrderedSlots::remove`].
#[derive(Debug, Clone)]
pub struct OrderedSlots<K: Key, V> {
    slots: SlotMap<K, V>,
    order: Vec<K>,
}

impl<K: Key, V> OrderedSlots<K, V> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check if `key` refers to a live entry
    pub fn contains_key(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    /// Insert at position `index`, building the value from its key
    ///
    /// `index` must be `<= len()`; callers validate it beforehand.
    pub fn insert_at_with_key(&mut self, index: usize, f: impl FnOnce(K) -> V) -> K {
        debug_assert!(index <= self.order.len());
        let key = self.slots.insert_with_key(f);
        self.order.insert(index, key);
        key
    }

    /// Append a value built from its key
    pub fn push_with_key(&mut self, f: impl FnOnce(K) -> V) -> K {
        let index = self.order.len();
        self.insert_at_with_key(index, f)
    }

    /// Remove an entry, returning its former position and value
    pub fn remove(&mut self, key: K) -> Option<(usize, V)> {
        let position = self.position(key)?;
        let value = self.slots.remove(key)?;
        self.order.remove(position);
        Some((position, value))
    }

    /// Move an entry to position `index`, keeping its key
    ///
    /// Returns the entry's former position. `index` must be `< len()`.
    pub fn move_to(&mut self, key: K, index: usize) -> Option<usize> {
        let from = self.position(key)?;
        debug_assert!(index < self.order.len());
        let key = self.order.remove(from);
        self.order.insert(index, key);
        Some(from)
    }

    /// Position of `key` in iteration order
    pub fn position(&self, key: K) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    /// Get an entry by key
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots.get(key)
    }

    /// Get a mutable entry by key
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots.get_mut(key)
    }

    /// Get the entry at `index` in iteration order
    pub fn get_at(&self, index: usize) -> Option<&V> {
        self.order.get(index).and_then(|key| self.slots.get(*key))
    }

    /// Iterate values in order
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter().filter_map(|key| self.slots.get(*key))
    }

    /// Iterate `(position, value)` pairs mutably in order
    pub fn for_each_mut(&mut self, mut f: impl FnMut(usize, &mut V)) {
        for (position, key) in self.order.iter().enumerate() {
            if let Some(value) = self.slots.get_mut(*key) {
                f(position, value);
            }
        }
    }

    /// Iterate in order starting at `from`, mutably
    pub fn for_each_mut_from(&mut self, from: usize, mut f: impl FnMut(usize, &mut V)) {
        for (position, key) in self.order.iter().enumerate().skip(from) {
            if let Some(value) = self.slots.get_mut(*key) {
                f(position, value);
            }
        }
    }

    /// Remove every entry, yielding values in order
    pub fn drain(&mut self) -> Vec<V> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|key| self.slots.remove(key))
            .collect()
    }
}

impl<K: Key, V> Default for OrderedSlots<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
