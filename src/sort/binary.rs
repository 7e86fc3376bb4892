//! # Binary Insertion Point
//!
//! Upper-bound search over an already-ordered key sequence.
//!
//! The comparator is a strict less-than, so a candidate that compares equal
//! to the new key reports `false` and the window moves right. The returned
//! slot therefore sits after every equal predecessor, which is what keeps
//! repeated insertions of equal values stable.

/// Returns the slot where `key` belongs in `keys`, assuming `keys` is
/// already ordered under `less`.
///
/// `less(a, b)` answers whether the key `a` sorts strictly before the key
/// `b`. The result is in `0..=keys.len()` and inserting at it preserves
/// the ordering.
pub fn insertion_point<F>(keys: &[String], key: &str, mut less: F) -> usize
where
    F: FnMut(&str, &str) -> bool,
{
    let mut lo = 0;
    let mut hi = keys.len();

    // Half-open [lo, hi): lo is the answer when the window empties.
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if less(key, &keys[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}
