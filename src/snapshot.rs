//! # Snapshot
//!
//! A portable, self-contained copy of map state.
//!
//! A snapshot freezes the key/value population in default (insertion)
//! sequence plus the exact membership of every user order. Strategies are
//! deliberately absent: closures do not serialize, so restoring a snapshot
//! requires a map whose orders were registered up front. Serialization
//! itself is delegated to serde; any serde format works.

use serde::{Deserialize, Serialize};

/// Frozen membership of one user order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMembership {
    /// Order name
    pub order: String,
    /// Keys in the order's sequence at capture time
    pub keys: Vec<String>,
}

/// Full map state at capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<V> {
    /// Key/value pairs in default-order sequence
    pub entries: Vec<(String, V)>,
    /// User-order memberships in lexicographic name sequence
    pub orders: Vec<OrderMembership>,
}

impl<V> Snapshot<V> {
    /// Number of captured entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the snapshot holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership captured for `order`, if that order existed
    pub fn membership(&self, order: &str) -> Option<&OrderMembership> {
        self.orders.iter().find(|m| m.order == order)
    }
}
