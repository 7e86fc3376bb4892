//! # Order Strategies
//!
//! The placement rule attached to a registered order.
//!
//! An order is either **sorted** (a comparator decides where each new key
//! lands) or **filtered** (a predicate decides whether a new key is admitted
//! at the tail). The reserved default order follows neither; it records pure
//! insertion sequence and is built into the registry rather than expressed
//! as a strategy.

use std::fmt;

/// Name of the reserved insertion order. Always registered, always complete,
/// never re-registrable.
pub const DEFAULT_ORDER: &str = "default";

/// Strict less-than over two values. `true` means the first argument sorts
/// before the second.
pub type Comparator<V> = Box<dyn Fn(&V, &V) -> bool + Send + Sync>;

/// Membership test for a filtered order, given a value and its key.
/// `true` admits the key.
pub type Predicate<V> = Box<dyn Fn(&V, &str) -> bool + Send + Sync>;

/// Placement rule for a user-registered order
pub enum OrderStrategy<V> {
    /// Keys are kept sorted by a strict less-than comparator over values.
    /// New keys are placed by binary insertion; ties land after their
    /// equal predecessors.
    Sorted(Comparator<V>),

    /// Keys are admitted in arrival sequence when the predicate accepts
    /// the (value, key) pair, and skipped otherwise.
    Filtered(Predicate<V>),
}

impl<V> OrderStrategy<V> {
    /// Builds a sorted strategy from a strict less-than comparator
    pub fn sorted<F>(less: F) -> Self
    where
        F: Fn(&V, &V) -> bool + Send + Sync + 'static,
    {
        OrderStrategy::Sorted(Box::new(less))
    }

    /// Builds a filtered strategy from a membership predicate
    pub fn filtered<F>(include: F) -> Self
    where
        F: Fn(&V, &str) -> bool + Send + Sync + 'static,
    {
        OrderStrategy::Filtered(Box::new(include))
    }

    /// Returns true for a sorted strategy
    #[inline]
    pub fn is_sorted(&self) -> bool {
        matches!(self, OrderStrategy::Sorted(_))
    }

    /// Returns true for a filtered strategy
    #[inline]
    pub fn is_filtered(&self) -> bool {
        matches!(self, OrderStrategy::Filtered(_))
    }

    /// Stable name of the strategy kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            OrderStrategy::Sorted(_) => "sorted",
            OrderStrategy::Filtered(_) => "filtered",
        }
    }
}

// The boxed closures are opaque, so Debug only reports the kind.
impl<V> fmt::Debug for OrderStrategy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrderStrategy")
            .field(&self.kind_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_constructor_wraps_comparator() {
        let strategy: OrderStrategy<i32> = OrderStrategy::sorted(|a, b| a < b);
        assert!(strategy.is_sorted());
        assert!(!strategy.is_filtered());
        assert_eq!(strategy.kind_name(), "sorted");

        match strategy {
            OrderStrategy::Sorted(less) => {
                assert!(less(&1, &2));
                assert!(!less(&2, &1));
                assert!(!less(&2, &2));
            }
            OrderStrategy::Filtered(_) => panic!("expected sorted strategy"),
        }
    }

    #[test]
    fn test_filtered_constructor_wraps_predicate() {
        let strategy: OrderStrategy<i32> = OrderStrategy::filtered(|v, key| *v > 0 && key != "x");
        assert!(strategy.is_filtered());
        assert_eq!(strategy.kind_name(), "filtered");

        match strategy {
            OrderStrategy::Filtered(include) => {
                assert!(include(&1, "a"));
                assert!(!include(&1, "x"));
                assert!(!include(&0, "a"));
            }
            OrderStrategy::Sorted(_) => panic!("expected filtered strategy"),
        }
    }

    #[test]
    fn test_debug_reports_kind_only() {
        let strategy: OrderStrategy<i32> = OrderStrategy::sorted(|a, b| a < b);
        assert_eq!(format!("{:?}", strategy), "OrderStrategy(\"sorted\")");
    }
}
