//! Container Scenario Tests
//!
//! End-to-end walks of the core container behaviors:
//! - Insertion sequence is the default order
//! - Sorted orders place by comparator at insert time
//! - Removal sweeps every order
//! - Empty-container reads are sentinels
//! - Structural misuse fails with typed errors

use multiorder::map::{MapError, MultiOrderMap};
use multiorder::order::{OrderStrategy, DEFAULT_ORDER};

// =============================================================================
// Helper Functions
// =============================================================================

fn keys_of<V>(map: &MultiOrderMap<V>, order: &str) -> Vec<String> {
    map.keys(order).to_vec()
}

// =============================================================================
// Default Order Tests
// =============================================================================

/// Plain insertion lands keys in arrival sequence with aligned values.
#[test]
fn test_arrival_sequence_is_the_default_order() {
    let mut map = MultiOrderMap::new();
    map.insert("a", 1).insert("b", 2).insert("c", 3);

    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "b", "c"]);
    assert_eq!(map.values(DEFAULT_ORDER), vec![&1, &2, &3]);
    assert_eq!(map.len(), 3);
}

/// Head insertion prepends to the default order.
#[test]
fn test_head_insertion_prepends_to_default() {
    let mut map = MultiOrderMap::new();
    map.insert("a", 1);
    map.push_front("z", 0, &[]).unwrap();

    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["z", "a"]);
    assert_eq!(map.values(DEFAULT_ORDER), vec![&0, &1]);
}

/// Moving the head to the tail rotates the other keys forward.
#[test]
fn test_index_move_head_to_tail() {
    let mut map = MultiOrderMap::new();
    map.insert("a", 1).insert("b", 2).insert("c", 3);
    map.index_move(0, 2, DEFAULT_ORDER);

    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["b", "c", "a"]);
}

// =============================================================================
// Sorted Order Tests
// =============================================================================

/// A sorted order keeps itself ordered as keys arrive.
#[test]
fn test_sorted_order_places_at_insert_time() {
    let mut map = MultiOrderMap::new();
    map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();

    map.insert_in("a", 3, &["num"]).unwrap();
    map.insert_in("b", 1, &["num"]).unwrap();
    map.insert_in("c", 2, &["num"]).unwrap();

    assert_eq!(keys_of(&map, "num"), ["b", "c", "a"]);
    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "b", "c"]);
}

/// Removing a key drops it from the population and every order.
#[test]
fn test_removal_sweeps_every_order() {
    let mut map = MultiOrderMap::new();
    map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();
    map.insert_in("a", 3, &["num"]).unwrap();
    map.insert_in("b", 1, &["num"]).unwrap();
    map.insert_in("c", 2, &["num"]).unwrap();

    assert_eq!(map.remove("b"), Some(1));
    assert!(!map.contains_key("b"));
    assert!(!map.contains_key_in("b", DEFAULT_ORDER));
    assert!(!map.contains_key_in("b", "num"));
    assert_eq!(keys_of(&map, "num"), ["c", "a"]);
    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "c"]);
}

/// One population can carry sorted and filtered orders at once.
#[test]
fn test_mixed_orders_share_one_population() {
    let mut map = MultiOrderMap::new();
    map.register_sorted("rank", |a: &i32, b: &i32| b < a).unwrap();
    map.register_filtered("evens", |v: &i32, _| v % 2 == 0).unwrap();

    for (key, value) in [("a", 4), ("b", 7), ("c", 2), ("d", 5)] {
        map.insert_in(key, value, &["rank", "evens"]).unwrap();
    }

    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "b", "c", "d"]);
    assert_eq!(keys_of(&map, "rank"), ["b", "d", "a", "c"]);
    assert_eq!(keys_of(&map, "evens"), ["a", "c"]);
    assert_eq!(map.orders(), vec!["default", "evens", "rank"]);

    map.remove("a");
    assert_eq!(keys_of(&map, "rank"), ["b", "d", "c"]);
    assert_eq!(keys_of(&map, "evens"), ["c"]);
}

// =============================================================================
// Sentinel Tests
// =============================================================================

/// Head and tail removal on an empty container are sentinels.
#[test]
fn test_empty_container_pops_are_sentinels() {
    let mut map: MultiOrderMap<i32> = MultiOrderMap::new();

    assert_eq!(map.pop_front(DEFAULT_ORDER), None);
    assert_eq!(map.pop_back(DEFAULT_ORDER), None);
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
}

/// Mutations naming unknown orders fail; reads return sentinels.
#[test]
fn test_structural_errors_versus_sentinels() {
    let mut map = MultiOrderMap::new();
    map.insert("a", 1);

    assert!(matches!(
        map.insert_in("b", 2, &["ghost"]),
        Err(MapError::MissingComparator(_))
    ));
    assert!(matches!(map.sort("ghost"), Err(MapError::NoSortFunction(_))));
    assert!(matches!(
        map.sort_by("ghost", |a, b| a < b),
        Err(MapError::MissingComparator(_))
    ));
    assert!(matches!(
        map.register("default", OrderStrategy::sorted(|a: &i32, b| a < b)),
        Err(MapError::ReservedOrder(_))
    ));

    assert!(map.keys("ghost").is_empty());
    assert!(map.values("ghost").is_empty());
    assert_eq!(map.order_len("ghost"), 0);
    assert!(!map.contains_key_in("a", "ghost"));
    assert_eq!(map.key_at(0, "ghost"), None);
    assert_eq!(map.index_of("a", "ghost"), None);
}

// =============================================================================
// Registration Tests
// =============================================================================

/// Strategy introspection reports kind for user orders, none for default.
#[test]
fn test_strategy_introspection() {
    let mut map: MultiOrderMap<i32> = MultiOrderMap::new();
    map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();
    map.register_filtered("odd", |v: &i32, _| v % 2 == 1).unwrap();

    assert_eq!(map.strategy("num").map(|s| s.kind_name()), Some("sorted"));
    assert_eq!(map.strategy("odd").map(|s| s.kind_name()), Some("filtered"));
    assert!(map.strategy(DEFAULT_ORDER).is_none());
    assert!(map.strategy("ghost").is_none());
}

/// Re-registering an order discards its sequence; keys re-enter only
/// through later insertions.
#[test]
fn test_reregistration_resets_the_order() {
    let mut map = MultiOrderMap::new();
    map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();
    map.insert_in("a", 2, &["num"]).unwrap();
    map.insert_in("b", 1, &["num"]).unwrap();
    assert_eq!(keys_of(&map, "num"), ["b", "a"]);

    map.register_sorted("num", |a: &i32, b: &i32| b < a).unwrap();
    assert!(map.keys("num").is_empty());

    // Existing keys stay out; only new insertions re-enter.
    map.insert_in("c", 3, &["num"]).unwrap();
    assert_eq!(keys_of(&map, "num"), ["c"]);
    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "b", "c"]);
}

/// Overwriting a value never moves the key in any order.
#[test]
fn test_value_overwrite_keeps_all_positions() {
    let mut map = MultiOrderMap::new();
    map.register_sorted("num", |a: &i32, b: &i32| a < b).unwrap();
    map.insert_in("a", 1, &["num"]).unwrap();
    map.insert_in("b", 2, &["num"]).unwrap();

    map.insert_in("a", 99, &["num"]).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&99));
    assert_eq!(keys_of(&map, "num"), ["a", "b"]);
    assert_eq!(keys_of(&map, DEFAULT_ORDER), ["a", "b"]);
}
