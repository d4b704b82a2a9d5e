//! Iterative re-ranking scheduler.
//!
//! # Algorithm
//!
//! While sources remain and the clock has periods left:
//! 1. Drop every source whose setup latency is at least the remaining periods.
//! 2. Rank the rest against the current value pool (see [`ranking`](super::ranking)).
//! 3. Activate the best source with its harvestable items.
//! 4. Claim those items in the pool so no later source ships them.
//! 5. Charge the clock per [`TimeAccounting`].
//!
//! Terminates after at most `min(sources, deadline)` activations when
//! every setup latency is positive.
//!
//! # Complexity
//! O(k * s * i log i) where k=activations, s=sources, i=items per source.

use super::{ranking, Scheduler, TimeAccounting};
use crate::error::HarvestError;
use crate::models::{Activation, Problem, Schedule, Source, ValuePool};
use crate::scoring::harvestable_items;

/// Greedy scheduler that re-ranks every remaining source after each
/// activation.
///
/// # Example
///
/// ```
/// use u_harvest::models::{Problem, Source};
/// use u_harvest::scheduler::{RerankingScheduler, Scheduler};
///
/// let problem = Problem::new(
///     vec![1, 2, 3],
///     vec![Source::new(0, 0, 1, vec![0, 1, 2]), Source::new(1, 1, 1, vec![2])],
///     1,
/// );
/// let schedule = RerankingScheduler::new().schedule(&problem).unwrap();
/// assert_eq!(schedule.activation_count(), 1);
/// assert_eq!(schedule.activations[0].items, vec![2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RerankingScheduler {
    time_accounting: TimeAccounting,
}

impl RerankingScheduler {
    /// Creates a scheduler charging setup latency only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clock charging rule.
    pub fn with_time_accounting(mut self, time_accounting: TimeAccounting) -> Self {
        self.time_accounting = time_accounting;
        self
    }
}

impl Scheduler for RerankingScheduler {
    fn name(&self) -> &'static str {
        "reranking"
    }

    fn schedule(&self, problem: &Problem) -> Result<Schedule, HarvestError> {
        problem.check_item_refs()?;

        let mut pool = ValuePool::from_problem(problem);
        let mut working: Vec<&Source> = problem.sources.iter().collect();
        let mut remaining = problem.deadline;
        let mut schedule = Schedule::new();

        while !working.is_empty() && remaining > 0 {
            working.retain(|s| {
                let keep = s.setup_latency < remaining;
                if !keep {
                    tracing::trace!(source = s.id, remaining, "setup overruns deadline, dropped");
                }
                keep
            });

            let Some(best) = ranking::select_best(&working, &pool, remaining)? else {
                break;
            };
            let source = working.remove(best);

            let shipped = harvestable_items(source, &pool, remaining);
            pool.claim_all(&shipped);

            let start = problem.deadline - remaining;
            remaining -= self.time_accounting.charge(source, shipped.len());

            tracing::debug!(
                source = source.id,
                shipped = shipped.len(),
                remaining,
                "activated"
            );
            schedule.add_activation(
                Activation::new(source.id, shipped).with_timing(start, source.setup_latency),
            );
        }

        tracing::info!(
            activations = schedule.activation_count(),
            unclaimed = pool.len(),
            "reranking schedule complete"
        );
        Ok(schedule)
    }
}
