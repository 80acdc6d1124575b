use crate::seqfile::SeqFileError;

/// Errors produced while loading artifacts or classifying lines.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// A sequence-file artifact could not be read or decoded.
    #[error("artifact error: {0}")]
    Artifact(#[from] SeqFileError),
    /// The classifier could not be assembled from its artifacts.
    #[error("build error: {0}")]
    Build(String),
    /// The model artifact holds weights the classifier cannot use.
    #[error("model error: {0}")]
    Model(String),
    /// A feature landed at or beyond the fixed vector capacity.
    #[error("vector index {index} out of bounds for cardinality {cardinality}")]
    IndexOutOfBounds { index: usize, cardinality: usize },
    /// A dictionary id cannot be used as a feature index.
    #[error("dictionary id {0} is not a valid feature index")]
    InvalidDictionaryId(i32),
    /// A dictionary term has no entry in the document-frequency table.
    #[error("no document frequency recorded for dictionary id {0}")]
    MissingDocumentFrequency(i32),
    /// The argmax label id is absent from the label index.
    #[error("label id {0} has no entry in the label index")]
    UnknownLabel(i32),
    /// A staged row did not carry the `id,text` shape.
    #[error("malformed staging row: {0}")]
    Staging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
