//! Schedule serializer.
//!
//! # Format
//!
//! ```text
//! <activation count>
//! <source id> <shipped count>     ─┐ once per activation
//! <shipped item id> ...           ─┘
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::HarvestError;
use crate::models::Schedule;

/// Renders a schedule in submission format.
///
/// # Example
/// ```
/// use u_harvest::io::write_schedule;
/// use u_harvest::models::{Activation, Schedule};
///
/// let mut schedule = Schedule::new();
/// schedule.add_activation(Activation::new(1, vec![5, 2, 3]));
/// assert_eq!(write_schedule(&schedule), "1\n1 3\n5 2 3\n");
/// ```
pub fn write_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", schedule.activation_count());
    for activation in &schedule.activations {
        let _ = writeln!(
            out,
            "{} {}",
            activation.source_id,
            activation.shipped_count()
        );
        let ids: Vec<String> = activation.items.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "{}", ids.join(" "));
    }
    out
}

/// Writes a schedule to `path`, replacing any existing file.
pub fn save_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<(), HarvestError> {
    std::fs::write(path, write_schedule(schedule))?;
    Ok(())
}

/// Output path derived from an input path: `<input>.solution.txt`.
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let mut name = input.as_ref().as_os_str().to_os_string();
    name.push(".solution.txt");
    PathBuf::from(name)
}
