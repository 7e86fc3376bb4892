//! # Full Re-Sort
//!
//! Stable bottom-up merge sort over a key sequence.
//!
//! Runs of doubling width are merged iteratively, so the pass structure is
//! identical for every input and recursion depth never depends on the data.
//! The merge is run over a scratch table of indices; the owned keys are
//! moved into their final slots once at the end, and the output is always
//! a permutation of the input.

/// Sorts `keys` under the strict less-than `less` and returns the new
/// sequence. Equal keys keep their relative input positions.
pub fn sort_keys<F>(mut keys: Vec<String>, mut less: F) -> Vec<String>
where
    F: FnMut(&str, &str) -> bool,
{
    let len = keys.len();
    if len <= 1 {
        return keys;
    }

    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch: Vec<usize> = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = usize::min(start + width, len);
            let end = usize::min(start + 2 * width, len);
            merge_runs(&keys, &order, &mut scratch, (start, mid, end), &mut less);
            start = end;
        }
        order.copy_from_slice(&scratch);
        width *= 2;
    }

    order
        .into_iter()
        .map(|slot| std::mem::take(&mut keys[slot]))
        .collect()
}

/// Merges the ordered runs `[start, mid)` and `[mid, end)` of `order`
/// into the same span of `scratch`.
fn merge_runs<F>(
    keys: &[String],
    order: &[usize],
    scratch: &mut [usize],
    (start, mid, end): (usize, usize, usize),
    less: &mut F,
) where
    F: FnMut(&str, &str) -> bool,
{
    let mut left = start;
    let mut right = mid;
    let mut out = start;

    while left < mid && right < end {
        // Take from the left run unless the right head is strictly smaller,
        // which is what keeps equal keys in input sequence.
        if less(&keys[order[right]], &keys[order[left]]) {
            scratch[out] = order[right];
            right += 1;
        } else {
            scratch[out] = order[left];
            left += 1;
        }
        out += 1;
    }
    while left < mid {
        scratch[out] = order[left];
        left += 1;
        out += 1;
    }
    while right < end {
        scratch[out] = order[right];
        right += 1;
        out += 1;
    }
}
