use std::collections::{BTreeMap, HashMap};

use log::debug;
use ndarray::Array1;

use super::error::ClassifierError;
use super::model::NaiveBayesModel;
use super::tfidf;
use super::vector::SparseVector;
use crate::analyzer::StandardAnalyzer;

/// Capacity of the per-line feature vector. Fixed by the trained artifacts
/// this program consumes; dictionary ids at or beyond it cannot be scored.
pub const VECTOR_CARDINALITY: usize = 10_000;

/// Scoring outcome for a single line.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Class id of the winning label.
    pub label_id: i32,
    /// Human-readable name of the winning label.
    pub label: String,
    /// One score per label, indexed by class id.
    pub scores: Array1<f64>,
}

/// Classifies single lines of text against a pretrained Naive Bayes model.
///
/// All fields are read-only after construction; each call to [`classify`]
/// builds a fresh feature vector and discards it after scoring.
///
/// [`classify`]: LineClassifier::classify
#[derive(Debug)]
pub struct LineClassifier {
    pub model: NaiveBayesModel,
    pub labels: HashMap<i32, String>,
    pub dictionary: HashMap<String, i32>,
    pub document_frequency: HashMap<i32, i64>,
    pub num_documents: u64,
    pub analyzer: StandardAnalyzer,
}

impl LineClassifier {
    /// Creates a builder taking the four artifact paths.
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    pub fn num_labels(&self) -> usize {
        self.labels.len()
    }

    /// Tokenizes the line, builds its TF-IDF feature vector over the
    /// dictionary, scores it against every label, and picks the label with
    /// the strictly greatest score (first label wins ties).
    ///
    /// A line with no in-dictionary tokens yields an empty vector, an
    /// all-zero score vector, and the degenerate argmax of label id 0.
    pub fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let tokens = self.analyzer.tokenize(text);

        // Sorted map keeps vector construction order-independent of hash
        // state, so identical inputs always score identically.
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        let mut kept = 0u32;
        for token in &tokens {
            if self.dictionary.contains_key(token.as_str()) {
                *counts.entry(token.as_str()).or_insert(0) += 1;
                kept += 1;
            }
        }

        let mut vector = SparseVector::new(VECTOR_CARDINALITY);
        for (token, count) in counts {
            let id = self.dictionary[token];
            let index =
                usize::try_from(id).map_err(|_| ClassifierError::InvalidDictionaryId(id))?;
            let frequency = *self
                .document_frequency
                .get(&id)
                .ok_or(ClassifierError::MissingDocumentFrequency(id))?;
            let weight = tfidf::calculate(count, frequency, kept, self.num_documents);
            vector.set(index, weight)?;
        }
        debug!(
            "vectorized line: {} tokens, {} kept, {} distinct features",
            tokens.len(),
            kept,
            vector.num_nonzero()
        );

        let scores = self.model.classify_full(&vector);
        let mut best_id: i32 = -1;
        let mut best_score = f64::MIN;
        for (id, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_id = id as i32;
            }
        }

        let label = self
            .labels
            .get(&best_id)
            .cloned()
            .ok_or(ClassifierError::UnknownLabel(best_id))?;
        Ok(Classification {
            label_id: best_id,
            label,
            scores,
        })
    }
}
