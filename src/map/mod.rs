//! Multi-order map subsystem for multiorder
//!
//! One key/value population carrying an insertion-ordered default
//! sequence plus any number of registered sorted or filtered orders.
//!
//! # Design Principles
//!
//! - One population: orders hold keys only; values live in a single
//!   backing table every order reads through
//! - Strict mutation, soft reads: mutating calls that name an
//!   unregistered order fail with an error; reads against an unknown
//!   order return empty sentinels
//! - Validation before mutation: a failed call leaves the map untouched
//!
//! # Invariants
//!
//! - The default order always exists and lists every key exactly once,
//!   in insertion sequence
//! - Every key held by any order is present in the backing table
//! - A key appears at most once per order sequence

mod container;
mod errors;
mod moves;

pub use container::MultiOrderMap;
pub use errors::{MapError, MapResult};
