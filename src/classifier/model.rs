use std::path::Path;

use ndarray::{Array1, Array2, Axis};

use super::error::ClassifierError;
use super::vector::SparseVector;
use crate::seqfile::{self, SequenceFileReader};

/// Additive smoothing used by the trainer.
const DEFAULT_ALPHA_I: f64 = 1.0;

/// Pretrained Naive Bayes weight matrix: one row per label, one column per
/// dictionary feature. Opaque to the rest of the pipeline: rows are
/// materialized from the model artifact and only ever read.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    weights: Array2<f64>,
    label_weights: Array1<f64>,
    alpha_i: f64,
}

impl NaiveBayesModel {
    pub fn new(weights: Array2<f64>, alpha_i: f64) -> Self {
        let label_weights = weights.sum_axis(Axis(1));
        Self {
            weights,
            label_weights,
            alpha_i,
        }
    }

    /// Materializes the model from its sequence-file artifact: one record
    /// per label, keyed by label id, valued with a sparse weight row.
    /// A duplicate label id overwrites earlier values cell by cell; cells
    /// the later row leaves out keep their earlier values.
    pub fn materialize(path: &Path) -> Result<Self, ClassifierError> {
        let mut reader = SequenceFileReader::open(path)?;
        let mut rows: Vec<(usize, Vec<(i32, f64)>)> = Vec::new();
        let mut num_labels = 0usize;
        let mut num_features = 0usize;

        while let Some((key, value)) = reader.next_record()? {
            let label_id = seqfile::decode_int(&key)?;
            let label = usize::try_from(label_id).map_err(|_| {
                ClassifierError::Model(format!("negative label id {label_id} in model artifact"))
            })?;
            let row = seqfile::decode_weight_row(&value)?;
            for &(index, _) in &row {
                let index = usize::try_from(index).map_err(|_| {
                    ClassifierError::Model(format!(
                        "negative feature index {index} in weight row for label {label}"
                    ))
                })?;
                num_features = num_features.max(index + 1);
            }
            num_labels = num_labels.max(label + 1);
            rows.push((label, row));
        }

        if rows.is_empty() {
            return Err(ClassifierError::Model(
                "model artifact holds no weight rows".into(),
            ));
        }

        let mut weights = Array2::<f64>::zeros((num_labels, num_features));
        for (label, row) in rows {
            for (index, value) in row {
                weights[[label, index as usize]] = value;
            }
        }
        Ok(Self::new(weights, DEFAULT_ALPHA_I))
    }

    pub fn num_labels(&self) -> usize {
        self.weights.nrows()
    }

    pub fn num_features(&self) -> usize {
        self.weights.ncols()
    }

    /// Scores the instance against every label:
    /// `score(l, x) = sum_f x_f * ln((W_lf + alpha) / (W_l + alpha * N))`.
    /// Features beyond the materialized matrix carry zero weight before
    /// smoothing.
    pub fn classify_full(&self, instance: &SparseVector) -> Array1<f64> {
        let num_features = self.num_features();
        let mut scores = Array1::<f64>::zeros(self.num_labels());
        for label in 0..self.num_labels() {
            let denominator =
                self.label_weights[label] + self.alpha_i * num_features as f64;
            let mut score = 0.0;
            for (index, value) in instance.iter_nonzero() {
                let weight = if index < num_features {
                    self.weights[[label, index]]
                } else {
                    0.0
                };
                score += value * ((weight + self.alpha_i) / denominator).ln();
            }
            scores[label] = score;
        }
        scores
    }
}
