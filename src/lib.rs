//! multiorder - A strict, deterministic in-memory map with multiple
//! named orders over one key/value population

pub mod map;
pub mod order;
pub mod snapshot;
pub mod sort;
