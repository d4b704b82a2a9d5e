//! Deadline-bounded harvest scheduling.
//!
//! Sources hold valued items and ship them at a fixed rate once their
//! setup latency has elapsed. Given one global deadline, the schedulers
//! here pick which sources to activate, in what order, and which items
//! each ships, so that the total value of distinct shipped items is high.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Source`, `Problem`, `ValuePool`,
//!   `Activation`, `Schedule`
//! - **`scoring`**: What a single source can ship within a time budget
//! - **`scheduler`**: One-pass and re-ranking strategies, rank keys, scoring/KPIs
//! - **`validation`**: Input integrity checks (unknown items, duplicates, throughput)
//! - **`io`**: Text problem parser and schedule serializer
//!
//! # Example
//!
//! ```
//! use u_harvest::io::parse_problem;
//! use u_harvest::scheduler::{score, solve, SchedulerConfig};
//!
//! let problem = parse_problem("3 2 1\n1 2 3\n3 0 1\n0 1 2\n1 1 1\n2\n").unwrap();
//! let schedule = solve(&problem, &SchedulerConfig::new()).unwrap();
//! assert_eq!(score(&problem, &schedule).unwrap(), 3);
//! ```

pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;

pub use error::HarvestError;
