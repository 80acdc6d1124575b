//! Batch staging and scoring over whole files.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::classifier::{Classification, ClassifierError, LineClassifier};

/// Stages non-empty input lines as CRLF-terminated `id,text` rows,
/// numbering from 1. Returns the number of staged lines.
pub fn stage_lines(input: &Path, staging: &Path) -> Result<usize, ClassifierError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(staging)?);
    let mut id = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        id += 1;
        write!(writer, "{id},{line}\r\n")?;
    }
    writer.flush()?;
    info!("staged {} lines to {}", id, staging.display());
    Ok(id)
}

/// Scores every staged row and writes the review report to `report` in one
/// shot. Per-label scores for each row go to the log; the report carries
/// only the row number, the original text, and the winning label.
pub fn classify_file(
    classifier: &LineClassifier,
    staging: &Path,
    report: &Path,
) -> Result<(), ClassifierError> {
    let reader = BufReader::new(File::open(staging)?);
    let mut buffer = String::new();
    for line in reader.lines() {
        let line = line?;
        let (id, text) = line
            .split_once(',')
            .ok_or_else(|| ClassifierError::Staging(format!("row without separator: {line:?}")))?;

        let result = classifier.classify(text)?;
        info!("paragraph {}: {}", id, format_scores(classifier, &result));

        buffer.push_str("Paragraph no: ");
        buffer.push_str(id);
        buffer.push_str("\r\n");
        buffer.push_str("Paragraph: ");
        buffer.push_str(text);
        buffer.push_str("\r\n\r\n");
        buffer.push_str("Heading: ");
        buffer.push_str(&result.label);
        buffer.push_str("\r\n\r\n");
    }
    fs::write(report, buffer)?;
    info!("report written to {}", report.display());
    Ok(())
}

fn format_scores(classifier: &LineClassifier, result: &Classification) -> String {
    let mut parts = Vec::with_capacity(result.scores.len());
    for (id, score) in result.scores.iter().enumerate() {
        let name = classifier
            .labels
            .get(&(id as i32))
            .map(String::as_str)
            .unwrap_or("?");
        parts.push(format!("{name}: {score:.6}"));
    }
    format!("{} => {}", parts.join("  "), result.label)
}
