//! Batch inference over a pretrained Naive Bayes text classifier.
//!
//! The crate loads four training artifacts (model weights, label index,
//! dictionary, and document-frequency table) from binary key-value
//! sequence files, tokenizes each line of an input file, builds a TF-IDF
//! weighted sparse feature vector per line, and assigns the
//! highest-scoring label. The `docreview` binary wires the pieces into the
//! staging / scoring / report pipeline.
//!
//! # Basic usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docreview::LineClassifier;
//!
//! let classifier = LineClassifier::builder()
//!     .with_model("model.seq")
//!     .with_label_index("labelindex.seq")
//!     .with_dictionary("dictionary.seq")
//!     .with_document_frequency("df-count.seq")
//!     .build()?;
//!
//! let result = classifier.classify("The parties agree to the terms below.")?;
//! println!("{} scored {:?}", result.label, result.scores);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod artifacts;
pub mod classifier;
pub mod pipeline;
pub mod seqfile;

pub use analyzer::StandardAnalyzer;
pub use classifier::{
    Classification, ClassifierBuilder, ClassifierError, LineClassifier, NaiveBayesModel,
    SparseVector, VECTOR_CARDINALITY,
};
pub use seqfile::{SeqFileError, SequenceFileReader};

pub fn init_logger() {
    env_logger::init();
}
