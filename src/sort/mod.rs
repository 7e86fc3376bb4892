//! Placement algorithms behind sorted orders
//!
//! Binary search finds the slot for one new key in an already-ordered
//! sequence; the merge sort rebuilds a whole sequence from scratch.
//! Both are driven by the same strict less-than comparators the order
//! strategies carry.

mod binary;
mod merge;

pub use binary::insertion_point;
pub use merge::sort_keys;
