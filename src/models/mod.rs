//! Harvest scheduling domain models.
//!
//! Provides the core data types for representing a harvest problem
//! instance and its solution. A problem is a set of valued items spread
//! over sources, each with a setup latency and a per-period throughput,
//! bounded by one global deadline.
//!
//! # Domain Mappings
//!
//! | u-harvest | Book scanning | Data ingestion | Logistics |
//! |-----------|---------------|----------------|-----------|
//! | Item | Book | Record | Parcel |
//! | Source | Library | Shard/Endpoint | Depot |
//! | Activation | Library signup + scan | Connector run | Pickup route |
//! | Schedule | Submission | Ingestion plan | Dispatch plan |

mod pool;
mod problem;
mod schedule;
mod source;

pub use pool::ValuePool;
pub use problem::Problem;
pub use schedule::{Activation, Schedule};
pub use source::Source;

/// Dense item identifier in `[0, item_count)`.
pub type ItemId = usize;

/// Source identifier (0-based position among source blocks).
pub type SourceId = usize;

/// Point value of an item, and sums of point values.
pub type Value = u64;

/// Time measured in scheduling periods (days).
///
/// Signed so that remaining-budget arithmetic can go below zero
/// before being clamped.
pub type Periods = i64;
