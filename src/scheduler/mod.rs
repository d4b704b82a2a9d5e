//! Greedy harvest schedulers and schedule scoring.
//!
//! Two strategies share the [`Scheduler`] trait:
//!
//! - [`OnePassScheduler`] sorts sources once by static value and consumes
//!   them greedily. Fast, but may ship an item from several sources.
//! - [`RerankingScheduler`] re-evaluates every remaining source after each
//!   activation against a depleting value pool. Never ships an item twice.
//!
//! Neither is optimal; both are deterministic for a given input.
//!
//! # KPI
//!
//! [`score`] pays each distinct shipped item once. [`ScheduleKpi`] adds
//! counts and value capture on top.

mod config;
mod kpi;
mod one_pass;
pub mod ranking;
mod reranking;

pub use config::{Policy, SchedulerConfig, TimeAccounting};
pub use kpi::{score, ScheduleKpi};
pub use one_pass::OnePassScheduler;
pub use reranking::RerankingScheduler;

use std::fmt::Debug;

use crate::error::HarvestError;
use crate::models::{Problem, Schedule};

/// A strategy that turns a problem into a schedule.
pub trait Scheduler: Debug {
    /// Strategy name (e.g., "one-pass").
    fn name(&self) -> &'static str;

    /// Builds a schedule for the problem.
    ///
    /// Fails only on malformed instances (unknown item references).
    fn schedule(&self, problem: &Problem) -> Result<Schedule, HarvestError>;
}

/// Runs the configured strategy on a problem.
pub fn solve(problem: &Problem, config: &SchedulerConfig) -> Result<Schedule, HarvestError> {
    let scheduler = config.build();
    tracing::info!(
        strategy = scheduler.name(),
        sources = problem.source_count(),
        items = problem.item_count(),
        deadline = problem.deadline,
        "scheduling"
    );
    scheduler.schedule(problem)
}
