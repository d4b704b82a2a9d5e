//! Crate error type.

use thiserror::Error;

use crate::models::{ItemId, SourceId};
use crate::validation::ValidationError;

/// Errors raised while loading, validating, or scheduling a problem.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// A source holds an item with no value entry.
    #[error("source {source_id} references unknown item {item_id}")]
    UnknownItem { source_id: SourceId, item_id: ItemId },
    /// Malformed input text.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// The problem failed structural validation.
    #[error("invalid problem: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
    /// A sum of item values does not fit in [`Value`](crate::models::Value).
    #[error("value overflow while summing {what}")]
    ValueOverflow { what: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HarvestError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn overflow(what: impl Into<String>) -> Self {
        Self::ValueOverflow { what: what.into() }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
