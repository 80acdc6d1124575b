use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use docreview::{pipeline, LineClassifier};

/// Staged `id,text` rows land here before scoring.
const STAGING_PATH: &str = "/tmp/docreview/staged.csv";
/// The finished review report is written here in one shot.
const REPORT_PATH: &str = "/tmp/docreview/review_report.txt";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classifies each line of a text file with a pretrained Naive Bayes model",
    long_about = None
)]
struct Args {
    /// Path to the trained model artifact
    model: PathBuf,
    /// Path to the label index artifact
    label_index: PathBuf,
    /// Path to the dictionary artifact
    dictionary: PathBuf,
    /// Path to the document-frequency artifact
    document_frequency: PathBuf,
    /// Text file to classify, one paragraph per line
    input: PathBuf,
}

fn main() -> Result<()> {
    docreview::init_logger();
    let args = Args::parse();

    if let Some(parent) = Path::new(STAGING_PATH).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    // A staging failure leaves a partial or absent staging file behind;
    // scoring then fails on its own terms when it opens that file.
    if let Err(e) = pipeline::stage_lines(&args.input, Path::new(STAGING_PATH)) {
        warn!("staging failed: {e}");
    }

    let classifier = LineClassifier::builder()
        .with_model(&args.model)
        .with_label_index(&args.label_index)
        .with_dictionary(&args.dictionary)
        .with_document_frequency(&args.document_frequency)
        .build()
        .context("failed to load classifier artifacts")?;

    info!("Number of labels: {}", classifier.num_labels());
    info!(
        "Number of documents in training set: {}",
        classifier.num_documents
    );

    pipeline::classify_file(
        &classifier,
        Path::new(STAGING_PATH),
        Path::new(REPORT_PATH),
    )
    .context("classification run failed")?;

    println!("Review report written to {REPORT_PATH}");
    Ok(())
}
