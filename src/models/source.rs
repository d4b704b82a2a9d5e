//! Source model.
//!
//! A source holds a set of items and releases them at a fixed rate once
//! its setup latency has elapsed.

use serde::{Deserialize, Serialize};

use super::{ItemId, Periods, SourceId};

/// A provider of items.
///
/// Sources are immutable once built; schedulers only reorder references
/// to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Source identifier (position in the input).
    pub id: SourceId,
    /// Declared number of held items.
    pub item_count: usize,
    /// Periods consumed before any item can be harvested.
    pub setup_latency: Periods,
    /// Items harvestable per period once active.
    pub throughput: u64,
    /// Held item ids, in declared order.
    pub items: Vec<ItemId>,
}

impl Source {
    /// Creates a source holding `items`; the declared count is taken from
    /// the holdings.
    pub fn new(id: SourceId, setup_latency: Periods, throughput: u64, items: Vec<ItemId>) -> Self {
        Self {
            id,
            item_count: items.len(),
            setup_latency,
            throughput,
            items,
        }
    }

    /// Overrides the declared item count.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Periods needed to sign up and ship every held item:
    /// `setup_latency + ceil(item_count / throughput)`.
    ///
    /// A source with zero throughput and at least one item never finishes;
    /// this returns `Periods::MAX`.
    pub fn full_harvest_duration(&self) -> Periods {
        if self.item_count == 0 {
            return self.setup_latency;
        }
        if self.throughput == 0 {
            return Periods::MAX;
        }
        let shipping = (self.item_count as u64).div_ceil(self.throughput);
        let shipping = Periods::try_from(shipping).unwrap_or(Periods::MAX);
        self.setup_latency.saturating_add(shipping)
    }

    /// Number of items this source can ship within `periods` once setup
    /// is complete: `max(0, periods - setup_latency) * throughput`.
    pub fn capacity(&self, periods: Periods) -> usize {
        let active = periods.saturating_sub(self.setup_latency);
        if active <= 0 {
            return 0;
        }
        let cap = (active as u64).saturating_mul(self.throughput);
        usize::try_from(cap).unwrap_or(usize::MAX)
    }
}
