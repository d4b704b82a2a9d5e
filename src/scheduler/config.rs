//! Scheduler configuration.

use serde::{Deserialize, Serialize};

use super::{OnePassScheduler, RerankingScheduler, Scheduler};
use crate::models::{Periods, Source};

/// Scheduling strategy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Sort once by static value, consume greedily.
    OnePass,
    /// Re-rank every remaining source against the depleting value pool.
    #[default]
    Reranking,
}

/// How the re-ranking strategy charges the global clock per activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeAccounting {
    /// Charge setup latency only; shipping overlaps later signups.
    #[default]
    SetupOnly,
    /// Charge setup latency plus `ceil(shipped / throughput)` periods.
    SetupAndHarvest,
}

impl TimeAccounting {
    /// Periods charged for activating `source` and shipping `shipped` items.
    pub fn charge(&self, source: &Source, shipped: usize) -> Periods {
        match self {
            TimeAccounting::SetupOnly => source.setup_latency,
            TimeAccounting::SetupAndHarvest => {
                let shipping = if shipped == 0 || source.throughput == 0 {
                    0
                } else {
                    Periods::try_from((shipped as u64).div_ceil(source.throughput))
                        .unwrap_or(Periods::MAX)
                };
                source.setup_latency.saturating_add(shipping)
            }
        }
    }
}

/// Scheduler selection and tuning.
///
/// # Example
/// ```
/// use u_harvest::scheduler::{Policy, Scheduler, SchedulerConfig};
///
/// let scheduler = SchedulerConfig::new()
///     .with_policy(Policy::OnePass)
///     .build();
/// assert_eq!(scheduler.name(), "one-pass");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Strategy to run.
    pub policy: Policy,
    /// Clock charging rule for the re-ranking strategy.
    pub time_accounting: TimeAccounting,
}

impl SchedulerConfig {
    /// Creates the default configuration (re-ranking, setup-only charging).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the clock charging rule.
    pub fn with_time_accounting(mut self, time_accounting: TimeAccounting) -> Self {
        self.time_accounting = time_accounting;
        self
    }

    /// Instantiates the configured strategy.
    pub fn build(&self) -> Box<dyn Scheduler> {
        match self.policy {
            Policy::OnePass => Box::new(OnePassScheduler::new()),
            Policy::Reranking => {
                Box::new(RerankingScheduler::new().with_time_accounting(self.time_accounting))
            }
        }
    }
}
