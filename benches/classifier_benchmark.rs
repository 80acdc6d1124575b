use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

use docreview::{LineClassifier, NaiveBayesModel, StandardAnalyzer};

fn build_classifier(num_features: usize) -> LineClassifier {
    let num_labels = 4;
    let mut weights = Array2::<f64>::zeros((num_labels, num_features));
    for label in 0..num_labels {
        for feature in 0..num_features {
            weights[[label, feature]] = ((label * 31 + feature) % 17) as f64;
        }
    }

    let mut dictionary = HashMap::new();
    let mut document_frequency = HashMap::new();
    document_frequency.insert(-1, 50_000);
    for feature in 0..num_features {
        dictionary.insert(format!("term{feature}"), feature as i32);
        document_frequency.insert(feature as i32, (feature as i64 % 97) + 1);
    }

    let mut labels = HashMap::new();
    for label in 0..num_labels {
        labels.insert(label as i32, format!("label{label}"));
    }

    LineClassifier {
        model: NaiveBayesModel::new(weights, 1.0),
        labels,
        dictionary,
        document_frequency,
        num_documents: 50_000,
        analyzer: StandardAnalyzer::new(),
    }
}

fn benchmark_classify(c: &mut Criterion) {
    let classifier = build_classifier(1_000);
    let line = (0..40)
        .map(|i| format!("term{}", i * 7 % 1_000))
        .collect::<Vec<_>>()
        .join(" ");

    c.bench_function("classify_line", |b| {
        b.iter(|| classifier.classify(black_box(&line)).unwrap())
    });
}

fn benchmark_tokenize(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new();
    let line = "The Receiving Party shall hold and maintain the Confidential \
                Information in strictest confidence for the sole and exclusive \
                benefit of the Disclosing Party."
        .repeat(4);

    c.bench_function("tokenize_line", |b| {
        b.iter(|| analyzer.tokenize(black_box(&line)))
    });
}

criterion_group!(benches, benchmark_classify, benchmark_tokenize);
criterion_main!(benches);
