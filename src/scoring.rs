//! Harvest potential of a single source.
//!
//! Given a source, the pool of still-unclaimed item values, and the
//! periods left on the clock, decides which items the source would ship
//! and what they are worth.
//!
//! # Algorithm
//! 1. Keep held items still in the pool with a positive value.
//! 2. Stable-sort them by value, descending (declared order breaks ties).
//! 3. Truncate to `max(0, remaining - setup) * throughput` items.

use crate::error::HarvestError;
use crate::models::{ItemId, Periods, Source, Value, ValuePool};

/// Items `source` would ship within `remaining` periods, best first.
///
/// Never fails: a source that cannot finish setup yields an empty list.
///
/// # Example
///
/// ```
/// use u_harvest::models::{Source, ValuePool};
/// use u_harvest::scoring::harvestable_items;
///
/// let pool = ValuePool::from_values(&[1, 2, 3]);
/// let source = Source::new(0, 0, 1, vec![0, 1, 2]);
/// assert_eq!(harvestable_items(&source, &pool, 2), vec![2, 1]);
/// ```
pub fn harvestable_items(source: &Source, pool: &ValuePool, remaining: Periods) -> Vec<ItemId> {
    let capacity = source.capacity(remaining);
    if capacity == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(ItemId, Value)> = source
        .items
        .iter()
        .filter_map(|&item| pool.get(item).filter(|&v| v > 0).map(|v| (item, v)))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(capacity);

    candidates.into_iter().map(|(item, _)| item).collect()
}

/// Total pool value of [`harvestable_items`].
///
/// Fails only if the sum overflows [`Value`].
pub fn harvestable_value(
    source: &Source,
    pool: &ValuePool,
    remaining: Periods,
) -> Result<Value, HarvestError> {
    harvestable_items(source, pool, remaining)
        .iter()
        .filter_map(|&item| pool.get(item))
        .try_fold(0, |acc: Value, v| acc.checked_add(v))
        .ok_or_else(|| HarvestError::overflow(format!("source {} potential", source.id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_value_descending() {
        let pool = ValuePool::from_values(&[4, 9, 1, 7]);
        let s = Source::new(0, 1, 10, vec![0, 1, 2, 3]);
        assert_eq!(harvestable_items(&s, &pool, 5), vec![1, 3, 0, 2]);
        assert_eq!(harvestable_value(&s, &pool, 5).unwrap(), 21);
    }

    #[test]
    fn test_ties_keep_declared_order() {
        let pool = ValuePool::from_values(&[5, 5, 5, 8]);
        let s = Source::new(0, 0, 10, vec![2, 0, 3, 1]);
        assert_eq!(harvestable_items(&s, &pool, 1), vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_capacity_truncates() {
        let pool = ValuePool::from_values(&[1, 2, 3, 4, 5]);
        // (3 - 1) * 2 = 4 slots
        let s = Source::new(0, 1, 2, vec![0, 1, 2, 3, 4]);
        assert_eq!(harvestable_items(&s, &pool, 3), vec![4, 3, 2, 1]);
        assert_eq!(harvestable_value(&s, &pool, 3).unwrap(), 14);
    }

    #[test]
    fn test_setup_exceeds_remaining_yields_empty() {
        let pool = ValuePool::from_values(&[1, 2]);
        let s = Source::new(0, 5, 3, vec![0, 1]);
        assert!(harvestable_items(&s, &pool, 5).is_empty());
        assert!(harvestable_items(&s, &pool, 2).is_empty());
        assert_eq!(harvestable_value(&s, &pool, 2).unwrap(), 0);
    }

    #[test]
    fn test_skips_claimed_and_zero_value_items() {
        let mut pool = ValuePool::from_values(&[0, 3, 6]);
        pool.claim(2);
        let s = Source::new(0, 0, 10, vec![0, 1, 2]);
        assert_eq!(harvestable_items(&s, &pool, 1), vec![1]);
        assert_eq!(harvestable_value(&s, &pool, 1).unwrap(), 3);
    }

    #[test]
    fn test_unknown_items_are_excluded() {
        let pool = ValuePool::from_values(&[3]);
        let s = Source::new(0, 0, 10, vec![7, 0]);
        assert_eq!(harvestable_items(&s, &pool, 1), vec![0]);
    }

    #[test]
    fn test_potential_overflow() {
        let pool = ValuePool::from_values(&[Value::MAX, 1]);
        let s = Source::new(3, 0, 1, vec![0, 1]);
        // Capacity 1 ships only the top item.
        assert_eq!(harvestable_value(&s, &pool, 1).unwrap(), Value::MAX);
        assert!(matches!(
            harvestable_value(&s, &pool, 2),
            Err(HarvestError::ValueOverflow { .. })
        ));
    }
}
