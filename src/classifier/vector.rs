use std::collections::BTreeMap;

use super::error::ClassifierError;

/// Fixed-capacity sparse vector over feature ids.
///
/// Capacity is fixed at construction and setting an index at or past it is
/// an error. Nonzero entries iterate in ascending index order so scoring
/// sums in the same order on every run.
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    cardinality: usize,
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn new(cardinality: usize) -> Self {
        Self {
            cardinality,
            entries: BTreeMap::new(),
        }
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn num_nonzero(&self) -> usize {
        self.entries.len()
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), ClassifierError> {
        if index >= self.cardinality {
            return Err(ClassifierError::IndexOutOfBounds {
                index,
                cardinality: self.cardinality,
            });
        }
        self.entries.insert(index, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&index, &value)| (index, value))
    }
}
