use std::path::{Path, PathBuf};

use log::info;

use super::classifier::LineClassifier;
use super::error::ClassifierError;
use super::model::NaiveBayesModel;
use crate::analyzer::StandardAnalyzer;
use crate::artifacts::{self, DOCUMENT_COUNT_KEY};

/// Fluent construction of a [`LineClassifier`] from its four artifact
/// paths.
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use docreview::LineClassifier;
///
/// let classifier = LineClassifier::builder()
///     .with_model("model.seq")
///     .with_label_index("labelindex.seq")
///     .with_dictionary("dictionary.seq")
///     .with_document_frequency("df-count.seq")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    model_path: Option<PathBuf>,
    label_index_path: Option<PathBuf>,
    dictionary_path: Option<PathBuf>,
    document_frequency_path: Option<PathBuf>,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, path: impl AsRef<Path>) -> Self {
        self.model_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_label_index(mut self, path: impl AsRef<Path>) -> Self {
        self.label_index_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_dictionary(mut self, path: impl AsRef<Path>) -> Self {
        self.dictionary_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_document_frequency(mut self, path: impl AsRef<Path>) -> Self {
        self.document_frequency_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Loads all four artifacts and assembles the classifier.
    ///
    /// Fails if any path is unset, any artifact cannot be read, or the
    /// document-frequency table lacks its total-document-count sentinel.
    pub fn build(self) -> Result<LineClassifier, ClassifierError> {
        let model_path = self
            .model_path
            .ok_or_else(|| ClassifierError::Build("model path must be set".into()))?;
        let label_index_path = self
            .label_index_path
            .ok_or_else(|| ClassifierError::Build("label index path must be set".into()))?;
        let dictionary_path = self
            .dictionary_path
            .ok_or_else(|| ClassifierError::Build("dictionary path must be set".into()))?;
        let document_frequency_path = self.document_frequency_path.ok_or_else(|| {
            ClassifierError::Build("document frequency path must be set".into())
        })?;

        let model = NaiveBayesModel::materialize(&model_path)?;
        info!(
            "model materialized: {} labels, {} features",
            model.num_labels(),
            model.num_features()
        );

        let labels = artifacts::read_label_index(&label_index_path)?;
        let dictionary = artifacts::read_dictionary(&dictionary_path)?;
        let document_frequency = artifacts::read_document_frequency(&document_frequency_path)?;

        let num_documents = *document_frequency.get(&DOCUMENT_COUNT_KEY).ok_or_else(|| {
            ClassifierError::Build(
                "document-frequency artifact is missing the total document count entry".into(),
            )
        })?;
        let num_documents = u64::try_from(num_documents).map_err(|_| {
            ClassifierError::Build(format!(
                "total document count {num_documents} is negative"
            ))
        })?;

        Ok(LineClassifier {
            model,
            labels,
            dictionary,
            document_frequency,
            num_documents,
            analyzer: StandardAnalyzer::new(),
        })
    }
}
