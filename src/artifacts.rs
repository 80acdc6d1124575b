//! Loaders for the label-index, dictionary, and document-frequency
//! artifacts.
//!
//! Each loader streams one sequence file into a plain in-memory map. Entry
//! contents are taken at face value: a duplicate key silently overwrites
//! the earlier value, exactly as the training job's own readers behave.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::classifier::ClassifierError;
use crate::seqfile::{self, SequenceFileReader};

/// Dictionary id under which the document-frequency artifact records the
/// total number of training documents.
pub const DOCUMENT_COUNT_KEY: i32 = -1;

/// Reads (label, id) records into an id-keyed map of label names.
pub fn read_label_index(path: &Path) -> Result<HashMap<i32, String>, ClassifierError> {
    let mut reader = SequenceFileReader::open(path)?;
    let mut labels = HashMap::new();
    while let Some((key, value)) = reader.next_record()? {
        let label = seqfile::decode_text(&key)?;
        let id = seqfile::decode_int(&value)?;
        labels.insert(id, label);
    }
    debug!("label index loaded: {} labels", labels.len());
    Ok(labels)
}

/// Reads (token, id) records into a token-keyed dictionary.
pub fn read_dictionary(path: &Path) -> Result<HashMap<String, i32>, ClassifierError> {
    let mut reader = SequenceFileReader::open(path)?;
    let mut dictionary = HashMap::new();
    while let Some((key, value)) = reader.next_record()? {
        let token = seqfile::decode_text(&key)?;
        let id = seqfile::decode_int(&value)?;
        dictionary.insert(token, id);
    }
    debug!("dictionary loaded: {} tokens", dictionary.len());
    Ok(dictionary)
}

/// Reads (id, count) records into the document-frequency table. The
/// [`DOCUMENT_COUNT_KEY`] sentinel rides along with the real entries; the
/// builder resolves it.
pub fn read_document_frequency(path: &Path) -> Result<HashMap<i32, i64>, ClassifierError> {
    let mut reader = SequenceFileReader::open(path)?;
    let mut frequencies = HashMap::new();
    while let Some((key, value)) = reader.next_record()? {
        let id = seqfile::decode_int(&key)?;
        let count = seqfile::decode_long(&value)?;
        frequencies.insert(id, count);
    }
    debug!(
        "document-frequency table loaded: {} entries",
        frequencies.len()
    );
    Ok(frequencies)
}
