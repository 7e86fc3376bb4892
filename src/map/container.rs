//! Multi-order map for multiorder
//!
//! Maintains one key/value population and every named order over it.
//!
//! # API
//!
//! - `insert(key, value)` - Insert or overwrite in the default order
//! - `insert_in(key, value, orders)` - Insert and place into listed orders
//! - `push_front(key, value, orders)` - Insert at the head of the default order
//! - `remove(key)` - Remove from the population and every order
//! - `register(order, strategy)` - Create or reset a named order
//! - `keys(order)` / `values(order)` - Read one order's sequence
//! - `snapshot()` / `restore(snapshot)` - Capture and reload whole-map state

use std::collections::HashMap;
use std::fmt;
use std::ops::ControlFlow;

use crate::order::{OrderRegistry, OrderStrategy, DEFAULT_ORDER};
use crate::snapshot::{OrderMembership, Snapshot};
use crate::sort::sort_keys;

use super::errors::{MapError, MapResult};

/// An insertion-ordered map that can maintain any number of additional
/// named orders (sorted or filtered) over the same keys.
pub struct MultiOrderMap<V> {
    /// Backing key/value table
    pub(super) entries: HashMap<String, V>,
    /// Named order sequences over the keys of `entries`
    pub(super) registry: OrderRegistry<V>,
}

impl<V> MultiOrderMap<V> {
    /// Creates an empty map with only the default order registered
    pub fn new() -> Self {
        MultiOrderMap {
            entries: HashMap::new(),
            registry: OrderRegistry::new(),
        }
    }

    // ==================
    // Registration
    // ==================

    /// Registers `strategy` under `order`.
    ///
    /// Re-registering an existing order replaces its strategy and discards
    /// its current sequence; keys only re-enter it through later
    /// insertions. The default order is reserved and cannot be registered.
    pub fn register(
        &mut self,
        order: impl Into<String>,
        strategy: OrderStrategy<V>,
    ) -> MapResult<&mut Self> {
        self.registry.register(order.into(), strategy)?;
        Ok(self)
    }

    /// Registers a sorted order from a strict less-than comparator
    pub fn register_sorted<F>(&mut self, order: impl Into<String>, less: F) -> MapResult<&mut Self>
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        self.register(order, OrderStrategy::sorted(less))
    }

    /// Registers a filtered order from a membership predicate
    pub fn register_filtered<F>(
        &mut self,
        order: impl Into<String>,
        include: F,
    ) -> MapResult<&mut Self>
    where
        F: Fn(&V, &str) -> bool + Send + Sync + 'static,
    {
        self.register(order, OrderStrategy::filtered(include))
    }

    /// Strategy registered under `order`. `None` for the default order and
    /// for names never registered.
    pub fn strategy(&self, order: &str) -> Option<&OrderStrategy<V>> {
        self.registry.strategy(order)
    }

    /// Every order name, default included, in lexicographic sequence
    pub fn orders(&self) -> Vec<&str> {
        self.registry.names()
    }

    // ==================
    // Insertion
    // ==================

    /// Inserts or overwrites `key` in the default order only.
    ///
    /// A new key is appended to the default sequence. An existing key has
    /// its value replaced and keeps every position it already holds.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> &mut Self {
        let key = key.into();
        if self.entries.insert(key.clone(), value).is_none() {
            self.registry.default_keys_mut().push(key);
        }
        self
    }

    /// Inserts or overwrites `key`, additionally placing a new key into
    /// each listed order under that order's strategy.
    ///
    /// Fails with [`MapError::MissingComparator`] before touching anything
    /// if any listed order was never registered. Overwrites replace the
    /// value only; no order is re-evaluated for the key.
    pub fn insert_in(
        &mut self,
        key: impl Into<String>,
        value: V,
        orders: &[&str],
    ) -> MapResult<&mut Self> {
        self.ensure_registered(orders)?;
        let key = key.into();
        let is_new = !self.entries.contains_key(&key);
        self.entries.insert(key.clone(), value);
        if is_new {
            self.registry.default_keys_mut().push(key.clone());
            self.admit(&key, orders, false);
        }
        Ok(self)
    }

    /// Inserts or overwrites `key`, prepending a new key to the default
    /// order instead of appending it.
    ///
    /// Listed sorted orders take the key and re-sort in full; a head slot
    /// has no meaning under a comparator. Listed filtered orders place
    /// exactly as [`MultiOrderMap::insert_in`] does. Overwrites replace
    /// the value only.
    pub fn push_front(
        &mut self,
        key: impl Into<String>,
        value: V,
        orders: &[&str],
    ) -> MapResult<&mut Self> {
        self.ensure_registered(orders)?;
        let key = key.into();
        let is_new = !self.entries.contains_key(&key);
        self.entries.insert(key.clone(), value);
        if is_new {
            self.registry.default_keys_mut().insert(0, key.clone());
            self.admit(&key, orders, true);
        }
        Ok(self)
    }

    /// Errors unless every listed order is registered
    fn ensure_registered(&self, orders: &[&str]) -> MapResult<()> {
        for name in orders {
            if !self.registry.is_registered(name) {
                return Err(MapError::MissingComparator((*name).to_string()));
            }
        }
        Ok(())
    }

    /// Places a new key into each listed user order. The default order is
    /// skipped (the caller already spliced it) and repeated names place
    /// only once.
    fn admit(&mut self, key: &str, orders: &[&str], front: bool) {
        for (seen, name) in orders.iter().enumerate() {
            if *name == DEFAULT_ORDER || orders[..seen].contains(name) {
                continue;
            }
            if let Some(entry) = self.registry.entry_mut(name) {
                if front {
                    entry.place_front(key, &self.entries);
                } else {
                    entry.place(key, &self.entries);
                }
            }
        }
    }

    // ==================
    // Removal
    // ==================

    /// Removes `key` and returns its value. The key leaves every order
    /// that held it. `None` when the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.registry.remove_key_everywhere(key);
        Some(value)
    }

    /// Removes the key at `index` of `order`. `None` for an unknown order
    /// or an out-of-range index.
    pub fn remove_at(&mut self, index: usize, order: &str) -> Option<V> {
        let key = self.registry.keys(order)?.get(index)?.clone();
        self.remove(&key)
    }

    /// Removes the first key of `order` and returns its value
    pub fn pop_front(&mut self, order: &str) -> Option<V> {
        let key = self.registry.keys(order)?.first()?.clone();
        self.remove(&key)
    }

    /// Removes the last key of `order` and returns its value
    pub fn pop_back(&mut self, order: &str) -> Option<V> {
        let key = self.registry.keys(order)?.last()?.clone();
        self.remove(&key)
    }

    /// Empties the map back to its constructed state.
    ///
    /// User orders are dropped along with their strategies and must be
    /// registered again before use.
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self.registry = OrderRegistry::new();
        self
    }

    // ==================
    // Lookup
    // ==================

    /// Value stored under `key`
    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Mutable value stored under `key`.
    ///
    /// Mutating through this handle does not re-place the key in any
    /// sorted or filtered order.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns true when `key` is present in the map
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true when `key` participates in `order`. The default order
    /// holds every key, so it delegates to the backing table.
    pub fn contains_key_in(&self, key: &str, order: &str) -> bool {
        if order == DEFAULT_ORDER {
            return self.entries.contains_key(key);
        }
        self.registry
            .keys(order)
            .map_or(false, |keys| keys.iter().any(|k| k == key))
    }

    /// Key at `index` of `order`
    pub fn key_at(&self, index: usize, order: &str) -> Option<&str> {
        self.registry.keys(order)?.get(index).map(String::as_str)
    }

    /// Value at `index` of `order`
    pub fn value_at(&self, index: usize, order: &str) -> Option<&V> {
        self.entries.get(self.key_at(index, order)?)
    }

    /// Position of `key` within `order`
    pub fn index_of(&self, key: &str, order: &str) -> Option<usize> {
        self.registry.keys(order)?.iter().position(|k| k == key)
    }

    /// Key immediately after `key` in `order`. `None` at the tail, for a
    /// key outside the order, and for an unknown order.
    pub fn key_after(&self, key: &str, order: &str) -> Option<&str> {
        let keys = self.registry.keys(order)?;
        let index = keys.iter().position(|k| k == key)?;
        keys.get(index + 1).map(String::as_str)
    }

    /// Key immediately before `key` in `order`. `None` at the head, for a
    /// key outside the order, and for an unknown order.
    pub fn key_before(&self, key: &str, order: &str) -> Option<&str> {
        let keys = self.registry.keys(order)?;
        let index = keys.iter().position(|k| k == key)?;
        keys.get(index.checked_sub(1)?).map(String::as_str)
    }

    /// Value stored under the key after `key` in `order`
    pub fn value_after(&self, key: &str, order: &str) -> Option<&V> {
        self.entries.get(self.key_after(key, order)?)
    }

    /// Value stored under the key before `key` in `order`
    pub fn value_before(&self, key: &str, order: &str) -> Option<&V> {
        self.entries.get(self.key_before(key, order)?)
    }

    // ==================
    // Views
    // ==================

    /// Key sequence of `order`, borrowed read-only. Empty for an unknown
    /// order.
    pub fn keys(&self, order: &str) -> &[String] {
        self.registry.keys(order).unwrap_or(&[])
    }

    /// Values of `order` in its sequence
    pub fn values(&self, order: &str) -> Vec<&V> {
        self.keys(order)
            .iter()
            .filter_map(|key| self.entries.get(key))
            .collect()
    }

    /// Iterates `(key, value)` pairs of `order` in its sequence
    pub fn iter<'a>(&'a self, order: &str) -> impl Iterator<Item = (&'a str, &'a V)> + 'a {
        self.keys(order)
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (key.as_str(), value)))
    }

    /// Visits each listed order front to back, passing every value with
    /// its key. `Break` ends the current order and moves to the next one.
    pub fn for_each<F>(&self, orders: &[&str], mut visit: F)
    where
        F: FnMut(&V, &str) -> ControlFlow<()>,
    {
        for name in orders {
            for key in self.keys(name) {
                if let Some(value) = self.entries.get(key) {
                    if visit(value, key).is_break() {
                        break;
                    }
                }
            }
        }
    }

    /// Visits `order` back to front. `Break` stops the walk.
    pub fn for_each_reverse<F>(&self, order: &str, mut visit: F)
    where
        F: FnMut(&V, &str) -> ControlFlow<()>,
    {
        for key in self.keys(order).iter().rev() {
            if let Some(value) = self.entries.get(key) {
                if visit(value, key).is_break() {
                    break;
                }
            }
        }
    }

    /// Builds a new map from the entries of `order` that the predicate
    /// accepts, inserted in that order's sequence.
    ///
    /// The result carries only its own default order; strategies are not
    /// carried over.
    pub fn filter<F>(&self, order: &str, include: F) -> MultiOrderMap<V>
    where
        V: Clone,
        F: Fn(&V, &str) -> bool,
    {
        let mut out = MultiOrderMap::new();
        for key in self.keys(order) {
            if let Some(value) = self.entries.get(key) {
                if include(value, key) {
                    out.insert(key.clone(), value.clone());
                }
            }
        }
        out
    }

    // ==================
    // Size
    // ==================

    /// Number of keys in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map holds no keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys participating in `order`. Zero for an unknown
    /// order.
    pub fn order_len(&self, order: &str) -> usize {
        self.keys(order).len()
    }

    // ==================
    // Sorting
    // ==================

    /// Re-sorts `order` in full with its registered comparator.
    ///
    /// Fails with [`MapError::NoSortFunction`] when the order is unknown,
    /// filtered, or the default; none of those carries a comparator.
    pub fn sort(&mut self, order: &str) -> MapResult<&mut Self> {
        match self.registry.strategy(order) {
            Some(OrderStrategy::Sorted(_)) => {}
            _ => return Err(MapError::NoSortFunction(order.to_string())),
        }
        if let Some(entry) = self.registry.entry_mut(order) {
            entry.rebuild(&self.entries);
        }
        Ok(self)
    }

    /// Re-sorts `order` once with a caller-supplied comparator, leaving
    /// the registered strategy untouched.
    ///
    /// Works on any registered order, the default included. Fails with
    /// [`MapError::MissingComparator`] for an unknown order.
    pub fn sort_by<F>(&mut self, order: &str, less: F) -> MapResult<&mut Self>
    where
        F: Fn(&V, &V) -> bool,
    {
        let entries = &self.entries;
        let seq = match self.registry.seq_mut(order) {
            Some(seq) => seq,
            None => return Err(MapError::MissingComparator(order.to_string())),
        };
        let keys = std::mem::take(seq);
        *seq = sort_keys(keys, |a, b| match (entries.get(a), entries.get(b)) {
            (Some(x), Some(y)) => less(x, y),
            _ => false,
        });
        Ok(self)
    }

    // ==================
    // Snapshots
    // ==================

    /// Captures the whole map: entries in default sequence plus every
    /// user order's membership.
    pub fn snapshot(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        let entries = self
            .registry
            .default_keys()
            .iter()
            .filter_map(|key| self.entries.get(key).map(|value| (key.clone(), value.clone())))
            .collect();
        let orders = self
            .registry
            .user_orders()
            .map(|(name, keys)| OrderMembership {
                order: name.to_string(),
                keys: keys.to_vec(),
            })
            .collect();
        Snapshot { entries, orders }
    }

    /// Replaces the map's contents with `snapshot`.
    ///
    /// Every order named by the snapshot must already be registered here;
    /// strategies do not travel with snapshots. Fails with
    /// [`MapError::MissingComparator`] before touching anything otherwise.
    /// Memberships are applied verbatim, except that keys absent from the
    /// snapshot's entries are dropped.
    pub fn restore(&mut self, snapshot: Snapshot<V>) -> MapResult<&mut Self> {
        for membership in &snapshot.orders {
            if !self.registry.is_registered(&membership.order) {
                return Err(MapError::MissingComparator(membership.order.clone()));
            }
        }
        self.entries.clear();
        self.registry.clear_keys();
        for (key, value) in snapshot.entries {
            self.insert(key, value);
        }
        for membership in snapshot.orders {
            let keys = membership
                .keys
                .into_iter()
                .filter(|key| self.entries.contains_key(key))
                .collect();
            self.registry.set_keys(&membership.order, keys);
        }
        Ok(self)
    }
}

impl<V> Default for MultiOrderMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Strategies hold closures, so Debug reports population and order names
// rather than field contents.
impl<V> fmt::Debug for MultiOrderMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiOrderMap")
            .field("len", &self.len())
            .field("orders", &self.orders())
            .finish()
    }
}
