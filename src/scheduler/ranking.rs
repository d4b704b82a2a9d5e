//! Rank key for the re-ranking strategy.
//!
//! Each source is scored as `42 - setup / potential`, scaled by 1000 and
//! truncated to an integer so that comparisons are exact. A source with
//! no harvestable value gets no rank and sorts after every ranked source.
//!
//! Ordering: rank descending, then setup latency ascending, then input
//! order (stable sort).

use std::cmp::Ordering;

use crate::error::HarvestError;
use crate::models::{Periods, Source, Value, ValuePool};
use crate::scoring::harvestable_value;

/// Scaled rank. `None` marks a source with zero potential value.
pub type RankScore = Option<i64>;

const RANK_BASE: f64 = 42.0;
const RANK_SCALE: f64 = 1000.0;

/// Computes the rank of a source with the given setup latency and
/// potential value.
pub fn rank_score(setup_latency: Periods, potential: Value) -> RankScore {
    if potential == 0 {
        return None;
    }
    let raw = RANK_BASE - setup_latency as f64 / potential as f64;
    Some((raw * RANK_SCALE) as i64)
}

/// Rank and tie-break key of one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    /// Scaled rank (higher is better).
    pub score: RankScore,
    /// Setup latency (lower is better).
    pub setup_latency: Periods,
}

impl RankKey {
    /// Evaluates a source against the current pool and clock.
    pub fn evaluate(
        source: &Source,
        pool: &ValuePool,
        remaining: Periods,
    ) -> Result<Self, HarvestError> {
        let potential = harvestable_value(source, pool, remaining)?;
        Ok(Self {
            score: rank_score(source.setup_latency, potential),
            setup_latency: source.setup_latency,
        })
    }

    /// Priority ordering: `Less` means `self` is selected first.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        // None < Some(_), so reversing puts unranked sources last.
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.setup_latency.cmp(&other.setup_latency))
    }
}

/// Sorts candidates by priority (highest priority first).
///
/// Returns indices into `sources`; ties keep slice order.
pub fn sort_indices(
    sources: &[&Source],
    pool: &ValuePool,
    remaining: Periods,
) -> Result<Vec<usize>, HarvestError> {
    let keys = sources
        .iter()
        .map(|s| RankKey::evaluate(s, pool, remaining))
        .collect::<Result<Vec<_>, _>>()?;
    let mut indices: Vec<usize> = (0..sources.len()).collect();
    indices.sort_by(|&a, &b| keys[a].priority_cmp(&keys[b]));
    Ok(indices)
}

/// Returns the index of the highest-priority candidate.
pub fn select_best(
    sources: &[&Source],
    pool: &ValuePool,
    remaining: Periods,
) -> Result<Option<usize>, HarvestError> {
    Ok(sort_indices(sources, pool, remaining)?.first().copied())
}
