//! One-pass greedy scheduler.
//!
//! # Algorithm
//!
//! 1. Score every source by the sum of its held item values (no overlap
//!    accounting).
//! 2. Stable-sort sources by score, descending.
//! 3. Walk the sorted list with a running period counter:
//!    - full harvest fits → activate with every held item;
//!    - setup alone overruns → skip the source;
//!    - otherwise ship the first `remaining * throughput` held items and
//!      stop, the budget is exhausted.
//!
//! Items are not deduplicated across activations; the scorer pays each
//! distinct item once.
//!
//! # Complexity
//! O(s log s + i) where s=sources, i=held item references.

use super::Scheduler;
use crate::error::HarvestError;
use crate::models::{Activation, Periods, Problem, Schedule, Value};

/// Sort-once greedy scheduler.
///
/// # Example
///
/// ```
/// use u_harvest::models::{Problem, Source};
/// use u_harvest::scheduler::{OnePassScheduler, Scheduler};
///
/// let problem = Problem::new(
///     vec![1, 2, 3],
///     vec![Source::new(0, 1, 1, vec![0, 1, 2]), Source::new(1, 1, 1, vec![2])],
///     4,
/// );
/// let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
/// assert_eq!(schedule.activation_count(), 1);
/// assert_eq!(schedule.activations[0].items, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OnePassScheduler;

impl OnePassScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Returns source indices sorted by static score (descending, stable).
    fn sort_sources(problem: &Problem) -> Result<Vec<usize>, HarvestError> {
        let scores: Vec<Value> = problem
            .sources
            .iter()
            .map(|s| problem.static_score(s))
            .collect::<Result<_, _>>()?;
        let mut indices: Vec<usize> = (0..problem.sources.len()).collect();
        indices.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
        Ok(indices)
    }
}

impl Scheduler for OnePassScheduler {
    fn name(&self) -> &'static str {
        "one-pass"
    }

    fn schedule(&self, problem: &Problem) -> Result<Schedule, HarvestError> {
        let order = Self::sort_sources(problem)?;
        let deadline = problem.deadline;
        let mut schedule = Schedule::new();
        let mut consumed: Periods = 0;

        for idx in order {
            if consumed >= deadline {
                break;
            }
            let source = &problem.sources[idx];

            if consumed.saturating_add(source.full_harvest_duration()) <= deadline {
                schedule.add_activation(
                    Activation::new(source.id, source.items.clone())
                        .with_timing(consumed, source.setup_latency),
                );
                tracing::debug!(
                    source = source.id,
                    shipped = source.items.len(),
                    consumed,
                    "full harvest"
                );
                consumed += source.full_harvest_duration();
            } else if consumed.saturating_add(source.setup_latency) > deadline {
                tracing::trace!(source = source.id, consumed, "setup overruns deadline, skipped");
            } else {
                let remaining = deadline - consumed;
                let take = usize::try_from((remaining as u64).saturating_mul(source.throughput))
                    .unwrap_or(usize::MAX)
                    .min(source.items.len());
                schedule.add_activation(
                    Activation::new(source.id, source.items[..take].to_vec())
                        .with_timing(consumed, source.setup_latency),
                );
                tracing::debug!(
                    source = source.id,
                    shipped = take,
                    consumed,
                    "partial harvest, budget exhausted"
                );
                consumed = deadline;
            }
        }

        tracing::info!(
            activations = schedule.activation_count(),
            consumed,
            "one-pass schedule complete"
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    #[test]
    fn test_sorts_by_static_score() {
        let problem = Problem::new(
            vec![1, 1, 10],
            vec![
                Source::new(0, 1, 2, vec![0, 1]),
                Source::new(1, 1, 1, vec![2]),
            ],
            10,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        let ids: Vec<_> = schedule.activations.iter().map(|a| a.source_id).collect();
        assert_eq!(ids, vec![1, 0]);
        // Source 1: 1 + 1 = 2 periods, source 0 starts at 2
        assert_eq!(schedule.activations[1].start, 2);
    }

    #[test]
    fn test_static_score_ties_keep_input_order() {
        let problem = Problem::new(
            vec![5, 5],
            vec![Source::new(0, 1, 1, vec![0]), Source::new(1, 1, 1, vec![1])],
            10,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert_eq!(schedule.activations[0].source_id, 0);
        assert_eq!(schedule.activations[1].source_id, 1);
    }

    #[test]
    fn test_skips_source_whose_setup_overruns() {
        let problem = Problem::new(
            vec![100, 1],
            vec![Source::new(0, 6, 1, vec![0]), Source::new(1, 1, 1, vec![1])],
            5,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert_eq!(schedule.activation_count(), 1);
        assert_eq!(schedule.activations[0].source_id, 1);
    }

    #[test]
    fn test_partial_harvest_takes_declared_prefix() {
        // Full harvest: 1 + ceil(9 / 2) = 6 > 3 → partial.
        let problem = Problem::new(
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            vec![Source::new(0, 1, 2, vec![8, 7, 6, 5, 4, 3, 2, 1, 0])],
            3,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert_eq!(schedule.activation_count(), 1);
        // remaining 3 × throughput 2 = 6 items, declared order
        assert_eq!(schedule.activations[0].items, vec![8, 7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_partial_harvest_stops_loop() {
        let problem = Problem::new(
            vec![10, 10, 10, 1],
            vec![
                Source::new(0, 1, 1, vec![0, 1, 2]),
                Source::new(1, 0, 1, vec![3]),
            ],
            2,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert_eq!(schedule.activation_count(), 1);
        assert_eq!(schedule.activations[0].source_id, 0);
        assert_eq!(schedule.activations[0].items, vec![0, 1]);
    }

    #[test]
    fn test_duplicates_across_activations_allowed() {
        let problem = Problem::new(
            vec![3, 4],
            vec![Source::new(0, 1, 2, vec![0, 1]), Source::new(1, 1, 1, vec![1])],
            10,
        );
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert_eq!(schedule.activation_count(), 2);
        assert!(schedule.has_duplicate_claim());
    }

    #[test]
    fn test_declared_count_drives_duration() {
        // Source 0 repeats item 0: two ids kept, three declared, so its
        // full harvest takes 1 + 3 = 4 periods and fills the budget.
        let problem =
            crate::io::parse_problem("3 2 4\n5 5 1\n3 1 1\n0 0 1\n1 0 1\n2\n").unwrap();
        assert_eq!(problem.sources[0].full_harvest_duration(), 4);

        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        let ids: Vec<_> = schedule.activations.iter().map(|a| a.source_id).collect();
        assert_eq!(ids, vec![0]);
        assert_eq!(schedule.activations[0].items, vec![0, 1]);
    }

    #[test]
    fn test_zero_deadline() {
        let problem = Problem::new(vec![1], vec![Source::new(0, 0, 1, vec![0])], 0);
        let schedule = OnePassScheduler::new().schedule(&problem).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_unknown_item_is_fatal() {
        let problem = Problem::new(vec![1], vec![Source::new(0, 0, 1, vec![3])], 5);
        let err = OnePassScheduler::new().schedule(&problem).unwrap_err();
        assert!(matches!(err, HarvestError::UnknownItem { item_id: 3, .. }));
    }
}
