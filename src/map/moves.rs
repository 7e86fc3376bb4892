//! # Positional Moves
//!
//! Index- and key-addressed rearrangement within one order's sequence.
//!
//! Every operation here is a soft no-op when it cannot apply: unknown
//! order, out-of-range index, or a key outside the order. Stepped moves
//! clamp at the sequence ends instead of failing. Rearranging touches key
//! positions only; values and other orders never change.

use super::container::MultiOrderMap;

impl<V> MultiOrderMap<V> {
    /// Reverses the sequence of `order` in place
    pub fn reverse(&mut self, order: &str) -> &mut Self {
        if let Some(seq) = self.registry.seq_mut(order) {
            seq.reverse();
        }
        self
    }

    /// Swaps the keys at `i` and `j` of `order`
    pub fn index_swap(&mut self, i: usize, j: usize, order: &str) -> &mut Self {
        if let Some(seq) = self.registry.seq_mut(order) {
            if i < seq.len() && j < seq.len() {
                seq.swap(i, j);
            }
        }
        self
    }

    /// Moves the key at `from` so it ends up at `to`, shifting the keys
    /// between them. `to` addresses the sequence after the key has been
    /// taken out. No-op when either index is out of range or they are
    /// equal.
    pub fn index_move(&mut self, from: usize, to: usize, order: &str) -> &mut Self {
        if let Some(seq) = self.registry.seq_mut(order) {
            if from != to && from < seq.len() && to < seq.len() {
                let key = seq.remove(from);
                seq.insert(to, key);
            }
        }
        self
    }

    /// Moves the key at `index` to the head of `order`
    pub fn index_to_first(&mut self, index: usize, order: &str) -> &mut Self {
        self.index_move(index, 0, order)
    }

    /// Moves the key at `index` to the tail of `order`
    pub fn index_to_last(&mut self, index: usize, order: &str) -> &mut Self {
        let last = match self.registry.keys(order) {
            Some(keys) if !keys.is_empty() => keys.len() - 1,
            _ => return self,
        };
        self.index_move(index, last, order)
    }

    /// Moves the key at `index` up to `step` positions toward the head,
    /// clamping at position zero
    pub fn index_to_front(&mut self, index: usize, step: usize, order: &str) -> &mut Self {
        self.index_move(index, index.saturating_sub(step), order)
    }

    /// Moves the key at `index` up to `step` positions toward the tail,
    /// clamping at the last position
    pub fn index_to_back(&mut self, index: usize, step: usize, order: &str) -> &mut Self {
        let last = match self.registry.keys(order) {
            Some(keys) if !keys.is_empty() => keys.len() - 1,
            _ => return self,
        };
        let to = usize::min(index.saturating_add(step), last);
        self.index_move(index, to, order)
    }

    /// Moves `key` to the head of `order`. No-op when the key is not in
    /// the order.
    pub fn key_to_first(&mut self, key: &str, order: &str) -> &mut Self {
        match self.index_of(key, order) {
            Some(index) => self.index_to_first(index, order),
            None => self,
        }
    }

    /// Moves `key` to the tail of `order`
    pub fn key_to_last(&mut self, key: &str, order: &str) -> &mut Self {
        match self.index_of(key, order) {
            Some(index) => self.index_to_last(index, order),
            None => self,
        }
    }

    /// Moves `key` up to `step` positions toward the head of `order`
    pub fn key_to_front(&mut self, key: &str, step: usize, order: &str) -> &mut Self {
        match self.index_of(key, order) {
            Some(index) => self.index_to_front(index, step, order),
            None => self,
        }
    }

    /// Moves `key` up to `step` positions toward the tail of `order`
    pub fn key_to_back(&mut self, key: &str, step: usize, order: &str) -> &mut Self {
        match self.index_of(key, order) {
            Some(index) => self.index_to_back(index, step, order),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::DEFAULT_ORDER;

    fn abc() -> MultiOrderMap<i32> {
        let mut map = MultiOrderMap::new();
        map.insert("a", 1).insert("b", 2).insert("c", 3);
        map
    }

    fn rendered(keys: &[String]) -> Vec<&str> {
        keys.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_index_move_shifts_between_positions() {
        let mut map = abc();
        map.index_move(0, 2, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "c", "a"]);

        map.index_move(2, 0, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_index_move_no_ops() {
        let mut map = abc();
        map.index_move(1, 1, DEFAULT_ORDER);
        map.index_move(9, 0, DEFAULT_ORDER);
        map.index_move(0, 9, DEFAULT_ORDER);
        map.index_move(0, 2, "ghost");
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_index_swap() {
        let mut map = abc();
        map.index_swap(0, 2, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["c", "b", "a"]);

        // Out-of-range swaps change nothing.
        map.index_swap(0, 9, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ends_and_stepped_moves_clamp() {
        let mut map = abc();
        map.index_to_last(0, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "c", "a"]);

        map.index_to_first(2, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["a", "b", "c"]);

        // A step past either end stops at that end.
        map.index_to_back(1, 10, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["a", "c", "b"]);

        map.index_to_front(2, 10, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_moves_on_empty_sequences_are_safe() {
        let mut map: MultiOrderMap<i32> = MultiOrderMap::new();
        map.index_to_last(0, DEFAULT_ORDER);
        map.index_to_back(0, 3, DEFAULT_ORDER);
        map.index_to_front(0, 3, DEFAULT_ORDER);
        map.reverse(DEFAULT_ORDER);
        assert!(map.keys(DEFAULT_ORDER).is_empty());
    }

    #[test]
    fn test_key_moves_address_by_key() {
        let mut map = abc();
        map.key_to_last("a", DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "c", "a"]);

        map.key_to_first("c", DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["c", "b", "a"]);

        map.key_to_back("c", 1, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "c", "a"]);

        map.key_to_front("a", 1, DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "a", "c"]);

        // Unknown keys move nothing.
        map.key_to_first("zz", DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_moves_apply_to_one_order_only() {
        let mut map = MultiOrderMap::new();
        map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();
        map.insert_in("a", 1, &["num"]).unwrap();
        map.insert_in("b", 2, &["num"]).unwrap();

        map.reverse("num");
        assert_eq!(rendered(map.keys("num")), vec!["b", "a"]);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["a", "b"]);
    }

    #[test]
    fn test_reverse_is_an_explicit_rearrangement() {
        let mut map = abc();
        map.reverse(DEFAULT_ORDER);
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["c", "b", "a"]);

        // Unknown orders reverse nothing.
        map.reverse("ghost");
        assert_eq!(rendered(map.keys(DEFAULT_ORDER)), vec!["c", "b", "a"]);
    }
}
