//! Text input and output.
//!
//! Reads problem instances and writes schedules in the plain
//! whitespace-separated submission format.

mod parser;
mod writer;

pub use parser::{parse_problem, read_problem};
pub use writer::{default_output_path, save_schedule, write_schedule};
