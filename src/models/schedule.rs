//! Schedule (solution) model.
//!
//! A schedule is an ordered list of activations. Each activation signs
//! up one source and lists the items it ships, in shipping order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ItemId, Periods, SourceId};

/// A complete schedule (solution to a harvest problem).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Activations in signup order.
    pub activations: Vec<Activation>,
}

/// A scheduled use of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// Activated source.
    pub source_id: SourceId,
    /// Item ids shipped by this source, in shipping order.
    pub items: Vec<ItemId>,
    /// Periods already consumed when this source was selected.
    pub start: Periods,
    /// Setup latency charged for this source.
    pub setup: Periods,
}

impl Activation {
    /// Creates a new activation starting at period 0.
    pub fn new(source_id: SourceId, items: Vec<ItemId>) -> Self {
        Self {
            source_id,
            items,
            start: 0,
            setup: 0,
        }
    }

    /// Sets the selection time and setup latency.
    pub fn with_timing(mut self, start: Periods, setup: Periods) -> Self {
        self.start = start;
        self.setup = setup;
        self
    }

    /// Number of shipped items.
    #[inline]
    pub fn shipped_count(&self) -> usize {
        self.items.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an activation.
    pub fn add_activation(&mut self, activation: Activation) {
        self.activations.push(activation);
    }

    /// Number of activations.
    pub fn activation_count(&self) -> usize {
        self.activations.len()
    }

    /// Whether the schedule activates nothing.
    pub fn is_empty(&self) -> bool {
        self.activations.is_empty()
    }

    /// Finds the activation of a given source.
    pub fn activation_for_source(&self, source_id: SourceId) -> Option<&Activation> {
        self.activations.iter().find(|a| a.source_id == source_id)
    }

    /// Total shipped items, counting cross-activation duplicates.
    pub fn shipped_count(&self) -> usize {
        self.activations.iter().map(Activation::shipped_count).sum()
    }

    /// Distinct item ids shipped anywhere in the schedule.
    pub fn distinct_items(&self) -> HashSet<ItemId> {
        self.activations
            .iter()
            .flat_map(|a| a.items.iter().copied())
            .collect()
    }

    /// Whether any source is activated more than once.
    pub fn has_duplicate_activation(&self) -> bool {
        let mut seen = HashSet::new();
        self.activations.iter().any(|a| !seen.insert(a.source_id))
    }

    /// Whether any item is shipped by more than one activation.
    pub fn has_duplicate_claim(&self) -> bool {
        self.shipped_count() != self.distinct_items().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_activation(Activation::new(1, vec![5, 2, 3]).with_timing(0, 2));
        s.add_activation(Activation::new(0, vec![0, 4]).with_timing(2, 3));
        s
    }

    #[test]
    fn test_schedule_counts() {
        let s = sample_schedule();
        assert_eq!(s.activation_count(), 2);
        assert_eq!(s.shipped_count(), 5);
        assert_eq!(s.distinct_items().len(), 5);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_activation_for_source() {
        let s = sample_schedule();
        let a = s.activation_for_source(0).unwrap();
        assert_eq!(a.items, vec![0, 4]);
        assert_eq!(a.start, 2);
        assert_eq!(a.setup, 3);
        assert!(s.activation_for_source(9).is_none());
    }

    #[test]
    fn test_duplicate_claim_detection() {
        let mut s = sample_schedule();
        assert!(!s.has_duplicate_claim());
        s.add_activation(Activation::new(2, vec![4]));
        assert!(s.has_duplicate_claim());
        assert!(!s.has_duplicate_activation());
    }

    #[test]
    fn test_duplicate_activation_detection() {
        let mut s = sample_schedule();
        s.add_activation(Activation::new(1, vec![]));
        assert!(s.has_duplicate_activation());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.shipped_count(), 0);
        assert!(!s.has_duplicate_claim());
    }
}
