//! Input validation for harvest problems.
//!
//! Checks structural integrity of a problem before scheduling. Detects:
//! - Item references without a value entry
//! - Items held twice by the same source
//! - Sources that hold items but never ship any (zero throughput)
//! - Holdings longer than the declared item count
//! - Negative deadlines or setup latencies

use std::collections::HashSet;

use crate::models::Problem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A source references an item id outside the value table.
    UnknownItem,
    /// A source holds the same item id twice.
    DuplicateItem,
    /// A source holds items but ships zero per period.
    ZeroThroughput,
    /// A source holds more ids than its declared item count.
    ///
    /// Fewer is allowed: the parser drops repeated ids but keeps the
    /// declared count for timing.
    ItemCountMismatch,
    /// The global deadline is negative.
    NegativeDeadline,
    /// A source has a negative setup latency.
    NegativeSetup,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.deadline < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDeadline,
            format!("Deadline is negative: {}", problem.deadline),
        ));
    }

    for source in &problem.sources {
        if source.setup_latency < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeSetup,
                format!(
                    "Source {} has negative setup latency {}",
                    source.id, source.setup_latency
                ),
            ));
        }

        if source.throughput == 0 && !source.items.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroThroughput,
                format!("Source {} holds items but has zero throughput", source.id),
            ));
        }

        if source.items.len() > source.item_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::ItemCountMismatch,
                format!(
                    "Source {} declares {} items but holds {}",
                    source.id,
                    source.item_count,
                    source.items.len()
                ),
            ));
        }

        let mut held = HashSet::new();
        for &item in &source.items {
            if item >= problem.item_count() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownItem,
                    format!("Source {} references unknown item {}", source.id, item),
                ));
            }
            if !held.insert(item) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateItem,
                    format!("Source {} holds item {} more than once", source.id, item),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
