//! Named orders over the map's key population
//!
//! A strategy is the public placement rule a caller registers for an
//! order: sorted by a comparator, or filtered by a predicate. The
//! registry is the internal bookkeeping of every order's key sequence,
//! with the reserved insertion order built in.

mod registry;
mod strategy;

pub use strategy::{Comparator, OrderStrategy, Predicate, DEFAULT_ORDER};

pub(crate) use registry::OrderRegistry;
