//! Problem instance model.

use serde::{Deserialize, Serialize};

use super::{ItemId, Periods, Source, Value};
use crate::error::HarvestError;

/// An immutable harvest problem instance.
///
/// Item values are stored densely: the value of item `i` is `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Point value per item id.
    pub values: Vec<Value>,
    /// Sources in input order.
    pub sources: Vec<Source>,
    /// Total periods available.
    pub deadline: Periods,
}

impl Problem {
    /// Creates a new problem instance.
    pub fn new(values: Vec<Value>, sources: Vec<Source>, deadline: Periods) -> Self {
        Self {
            values,
            sources,
            deadline,
        }
    }

    /// Number of distinct items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.values.len()
    }

    /// Number of sources.
    #[inline]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Value of an item, if the id is known.
    #[inline]
    pub fn value_of(&self, item: ItemId) -> Option<Value> {
        self.values.get(item).copied()
    }

    /// Sum of every item value in the instance.
    pub fn total_value(&self) -> Result<Value, HarvestError> {
        self.values
            .iter()
            .try_fold(0, |acc: Value, &v| acc.checked_add(v))
            .ok_or_else(|| HarvestError::overflow("instance values"))
    }

    /// Sum of the values of every item a source holds, ignoring overlap
    /// with other sources.
    pub fn static_score(&self, source: &Source) -> Result<Value, HarvestError> {
        source.items.iter().try_fold(0, |acc: Value, &item| {
            let value = self.value_of(item).ok_or(HarvestError::UnknownItem {
                source_id: source.id,
                item_id: item,
            })?;
            acc.checked_add(value)
                .ok_or_else(|| HarvestError::overflow(format!("source {} values", source.id)))
        })
    }

    /// Fails with the first held item id that has no value entry.
    pub fn check_item_refs(&self) -> Result<(), HarvestError> {
        for source in &self.sources {
            if let Some(&item) = source.items.iter().find(|&&i| i >= self.values.len()) {
                return Err(HarvestError::UnknownItem {
                    source_id: source.id,
                    item_id: item,
                });
            }
        }
        Ok(())
    }
}
