//! Naive Bayes line classification: model weights, feature vectors, TF-IDF
//! weighting, and the per-line scoring loop.

pub mod builder;
#[allow(clippy::module_inception)]
pub mod classifier;
pub mod error;
pub mod model;
pub mod tfidf;
pub mod vector;

pub use builder::ClassifierBuilder;
pub use classifier::{Classification, LineClassifier, VECTOR_CARDINALITY};
pub use error::ClassifierError;
pub use model::NaiveBayesModel;
pub use vector::SparseVector;
