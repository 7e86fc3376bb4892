//! # Order Registry
//!
//! Bookkeeping for every named order over one key population.
//!
//! The reserved insertion order lives in its own field, so it exists from
//! construction and no registration path can replace it. User orders sit
//! in a `BTreeMap` for deterministic traversal: listing and snapshotting
//! walk them in lexicographic name sequence. Each entry owns its placement
//! rule and admits keys under it; callers only hand it the backing value
//! table.

use std::collections::{BTreeMap, HashMap};

use crate::map::{MapError, MapResult};
use crate::sort::{insertion_point, sort_keys};

use super::strategy::{Comparator, OrderStrategy, DEFAULT_ORDER};

/// One registered user order: its placement rule and its key sequence
pub(crate) struct OrderEntry<V> {
    strategy: OrderStrategy<V>,
    keys: Vec<String>,
}

impl<V> OrderEntry<V> {
    fn new(strategy: OrderStrategy<V>) -> Self {
        OrderEntry {
            strategy,
            keys: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn strategy(&self) -> &OrderStrategy<V> {
        &self.strategy
    }

    #[inline]
    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Admits a freshly inserted key under this entry's rule.
    ///
    /// Sorted orders binary-insert against the backing values; filtered
    /// orders append when the predicate accepts, and skip otherwise.
    pub(crate) fn place(&mut self, key: &str, values: &HashMap<String, V>) {
        match &self.strategy {
            OrderStrategy::Sorted(less) => {
                let pos = insertion_point(&self.keys, key, |a, b| value_less(values, less, a, b));
                self.keys.insert(pos, key.to_string());
            }
            OrderStrategy::Filtered(include) => {
                if let Some(value) = values.get(key) {
                    if include(value, key) {
                        self.keys.push(key.to_string());
                    }
                }
            }
        }
    }

    /// Admits a key arriving through a head insertion.
    ///
    /// A sorted order has no meaningful head slot, so the key is appended
    /// and the whole sequence re-sorted. Filtered orders place exactly as
    /// they do for tail insertion.
    pub(crate) fn place_front(&mut self, key: &str, values: &HashMap<String, V>) {
        match &self.strategy {
            OrderStrategy::Sorted(less) => {
                self.keys.push(key.to_string());
                let keys = std::mem::take(&mut self.keys);
                self.keys = sort_keys(keys, |a, b| value_less(values, less, a, b));
            }
            OrderStrategy::Filtered(_) => self.place(key, values),
        }
    }

    /// Rebuilds the sequence with this entry's own comparator. No-op for
    /// filtered orders; callers gate on the strategy kind first.
    pub(crate) fn rebuild(&mut self, values: &HashMap<String, V>) {
        if let OrderStrategy::Sorted(less) = &self.strategy {
            let keys = std::mem::take(&mut self.keys);
            self.keys = sort_keys(keys, |a, b| value_less(values, less, a, b));
        }
    }
}

/// Lifts a value comparator to a key comparator over the backing table.
/// A key with no backing value never sorts before anything.
fn value_less<V>(values: &HashMap<String, V>, less: &Comparator<V>, a: &str, b: &str) -> bool {
    match (values.get(a), values.get(b)) {
        (Some(x), Some(y)) => less(x, y),
        _ => false,
    }
}

/// All named orders: the built-in default plus user registrations
pub(crate) struct OrderRegistry<V> {
    /// Insertion-ordered key sequence of the reserved default order
    default_keys: Vec<String>,
    /// User-registered orders, keyed by name
    entries: BTreeMap<String, OrderEntry<V>>,
}

impl<V> OrderRegistry<V> {
    pub(crate) fn new() -> Self {
        OrderRegistry {
            default_keys: Vec::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Registers `strategy` under `name`, replacing any previous
    /// registration and discarding its sequence.
    pub(crate) fn register(&mut self, name: String, strategy: OrderStrategy<V>) -> MapResult<()> {
        if name == DEFAULT_ORDER {
            return Err(MapError::ReservedOrder(name));
        }
        self.entries.insert(name, OrderEntry::new(strategy));
        Ok(())
    }

    #[inline]
    pub(crate) fn is_registered(&self, name: &str) -> bool {
        name == DEFAULT_ORDER || self.entries.contains_key(name)
    }

    /// Strategy registered under `name`. The default order carries none.
    pub(crate) fn strategy(&self, name: &str) -> Option<&OrderStrategy<V>> {
        self.entries.get(name).map(OrderEntry::strategy)
    }

    /// Every order name, default included, in lexicographic sequence.
    pub(crate) fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = std::iter::once(DEFAULT_ORDER)
            .chain(self.entries.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }

    /// User orders and their sequences, in name sequence. The default
    /// order is excluded; its sequence is the insertion log itself.
    pub(crate) fn user_orders(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.keys()))
    }

    /// Key sequence of `name`, or `None` when no such order exists
    pub(crate) fn keys(&self, name: &str) -> Option<&[String]> {
        if name == DEFAULT_ORDER {
            return Some(self.default_keys.as_slice());
        }
        self.entries.get(name).map(OrderEntry::keys)
    }

    /// Mutable key sequence of `name`, default included
    pub(crate) fn seq_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        if name == DEFAULT_ORDER {
            return Some(&mut self.default_keys);
        }
        self.entries.get_mut(name).map(|entry| &mut entry.keys)
    }

    #[inline]
    pub(crate) fn default_keys(&self) -> &[String] {
        &self.default_keys
    }

    #[inline]
    pub(crate) fn default_keys_mut(&mut self) -> &mut Vec<String> {
        &mut self.default_keys
    }

    /// Entry for a user order; the default order has no entry
    pub(crate) fn entry_mut(&mut self, name: &str) -> Option<&mut OrderEntry<V>> {
        self.entries.get_mut(name)
    }

    /// Drops `key` from every sequence that holds it
    pub(crate) fn remove_key_everywhere(&mut self, key: &str) {
        remove_key(&mut self.default_keys, key);
        for entry in self.entries.values_mut() {
            remove_key(&mut entry.keys, key);
        }
    }

    /// Empties every sequence while keeping all registrations
    pub(crate) fn clear_keys(&mut self) {
        self.default_keys.clear();
        for entry in self.entries.values_mut() {
            entry.keys.clear();
        }
    }

    /// Replaces the sequence of a registered user order outright
    pub(crate) fn set_keys(&mut self, name: &str, keys: Vec<String>) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.keys = keys;
        }
    }
}

/// A key appears at most once per sequence, so one splice suffices.
fn remove_key(keys: &mut Vec<String>, key: &str) {
    if let Some(pos) = keys.iter().position(|k| k == key) {
        keys.remove(pos);
    }
}
