//! Schedule scoring and quality metrics.
//!
//! The score of a schedule is the sum of the values of the *distinct*
//! items it ships; an item claimed by several activations is paid once.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Score | Sum of distinct shipped item values |
//! | Activations | Number of activated sources |
//! | Shipped | Shipped item references, duplicates included |
//! | Distinct | Distinct shipped items |
//! | Duplicate claims | Shipped - Distinct |
//! | Setup periods | Sum of setup latencies of activated sources |
//! | Value capture | Score / total instance value |

use std::collections::HashSet;

use crate::error::HarvestError;
use crate::models::{Periods, Problem, Schedule, Value};

/// Realized value of a schedule.
///
/// Fails if the schedule ships an item with no value entry or the
/// distinct values overflow [`Value`].
///
/// # Example
/// ```
/// use u_harvest::models::{Activation, Problem, Schedule, Source};
/// use u_harvest::scheduler::score;
///
/// let problem = Problem::new(vec![1, 2, 3], vec![Source::new(0, 0, 1, vec![0, 1, 2])], 1);
/// let mut schedule = Schedule::new();
/// schedule.add_activation(Activation::new(0, vec![2, 2]));
/// assert_eq!(score(&problem, &schedule).unwrap(), 3);
/// ```
pub fn score(problem: &Problem, schedule: &Schedule) -> Result<Value, HarvestError> {
    let mut seen = HashSet::new();
    let mut total: Value = 0;
    for activation in &schedule.activations {
        for &item in &activation.items {
            if !seen.insert(item) {
                continue;
            }
            let value = problem.value_of(item).ok_or(HarvestError::UnknownItem {
                source_id: activation.source_id,
                item_id: item,
            })?;
            total = total
                .checked_add(value)
                .ok_or_else(|| HarvestError::overflow("schedule score"))?;
        }
    }
    Ok(total)
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Sum of distinct shipped item values.
    pub score: Value,
    /// Number of activations.
    pub activations: usize,
    /// Shipped item references, duplicates included.
    pub shipped_items: usize,
    /// Distinct shipped items.
    pub distinct_items: usize,
    /// Item references paid zero because another activation already shipped them.
    pub duplicate_claims: usize,
    /// Sum of setup latencies over activations.
    pub setup_periods: Periods,
    /// Fraction of the instance's total value captured (0.0..1.0).
    pub value_capture: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a problem and a schedule for it.
    pub fn calculate(problem: &Problem, schedule: &Schedule) -> Result<Self, HarvestError> {
        let score = score(problem, schedule)?;
        let shipped_items = schedule.shipped_count();
        let distinct_items = schedule.distinct_items().len();
        let setup_periods: Periods = schedule.activations.iter().map(|a| a.setup).sum();

        let total = problem.total_value()?;
        let value_capture = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64
        };

        Ok(Self {
            score,
            activations: schedule.activation_count(),
            shipped_items,
            distinct_items,
            duplicate_claims: shipped_items - distinct_items,
            setup_periods,
            value_capture,
        })
    }
}
