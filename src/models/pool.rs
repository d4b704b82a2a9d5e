//! Remaining-value pool.
//!
//! Working copy of the item values owned by a single scheduler run.
//! Claiming an item removes it for every subsequent lookup, which is how
//! the re-ranking strategy keeps activations from shipping the same item.

use super::{ItemId, Problem, Value};

/// Mutable map of unclaimed item values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePool {
    values: Vec<Option<Value>>,
    remaining: usize,
}

impl ValuePool {
    /// Creates a pool holding every item of the problem.
    pub fn from_problem(problem: &Problem) -> Self {
        Self::from_values(&problem.values)
    }

    /// Creates a pool from a dense value table.
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            values: values.iter().copied().map(Some).collect(),
            remaining: values.len(),
        }
    }

    /// Value of an unclaimed item. `None` if claimed or unknown.
    #[inline]
    pub fn get(&self, item: ItemId) -> Option<Value> {
        self.values.get(item).copied().flatten()
    }

    /// Whether the item is still available.
    #[inline]
    pub fn contains(&self, item: ItemId) -> bool {
        self.get(item).is_some()
    }

    /// Removes an item from the pool, returning its value if it was present.
    pub fn claim(&mut self, item: ItemId) -> Option<Value> {
        let taken = self.values.get_mut(item).and_then(Option::take);
        if taken.is_some() {
            self.remaining -= 1;
        }
        taken
    }

    /// Claims every item in `items`.
    pub fn claim_all(&mut self, items: &[ItemId]) {
        for &item in items {
            self.claim(item);
        }
    }

    /// Number of unclaimed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    /// Whether every item has been claimed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}
