//! TF-IDF weighting matching the vectorizer that produced the
//! document-frequency artifact.

/// Computes `sqrt(tf) * (ln(num_docs / (df + 1)) + 1)`.
///
/// `doc_len` is the number of in-dictionary tokens in the line being
/// vectorized; the trainer's weight interface takes it, but this weighting
/// does not use it, and neither do we.
pub fn calculate(tf: u32, df: i64, _doc_len: u32, num_docs: u64) -> f64 {
    let tf_weight = f64::from(tf).sqrt();
    let idf = (num_docs as f64 / (df as f64 + 1.0)).ln() + 1.0;
    tf_weight * idf
}
