//! # Map Errors
//!
//! Error types for the multi-order map.
//!
//! Only structural misconfiguration is an error: naming an order that was
//! never registered in a mutating call, sorting an order that carries no
//! comparator, or trying to re-register the reserved default order. Missing
//! data (unknown key, out-of-range index, unknown order in a read) is never
//! an error; those paths return sentinels instead.

use thiserror::Error;

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;

/// Structural errors raised by map operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    // ==================
    // Registration Errors
    // ==================

    /// An insertion or restore named an order with no registered strategy
    #[error("No strategy registered for order '{0}'")]
    MissingComparator(String),

    /// A full re-sort was requested on an order without a comparator
    #[error("No sort function registered for order '{0}'")]
    NoSortFunction(String),

    /// The reserved default order cannot be re-registered
    #[error("Order name '{0}' is reserved")]
    ReservedOrder(String),
}

impl MapError {
    /// Returns the order name the failed operation targeted
    pub fn order(&self) -> &str {
        match self {
            MapError::MissingComparator(order) => order,
            MapError::NoSortFunction(order) => order,
            MapError::ReservedOrder(order) => order,
        }
    }

    /// Returns whether registering a strategy for the order would fix this
    pub fn is_registration_gap(&self) -> bool {
        matches!(
            self,
            MapError::MissingComparator(_) | MapError::NoSortFunction(_)
        )
    }
}
