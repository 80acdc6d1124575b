//! Shared fixture support: writes the sequence-file artifacts the crate
//! consumes, in the same binary layout the training job produces.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const TEXT_CLASS: &str = "org.apache.hadoop.io.Text";
pub const INT_CLASS: &str = "org.apache.hadoop.io.IntWritable";
pub const LONG_CLASS: &str = "org.apache.hadoop.io.LongWritable";
pub const VECTOR_CLASS: &str = "org.apache.mahout.math.VectorWritable";

const SYNC: [u8; 16] = [
    0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0xF6, 0x07, 0x18, 0x29, 0x3A, 0x4B, 0x5C, 0x6D, 0x7E, 0x8F,
    0x90,
];

pub fn encode_vlong(mut value: i64) -> Vec<u8> {
    if (-112..=127).contains(&value) {
        return vec![value as u8];
    }
    let mut len: i64 = -112;
    if value < 0 {
        value = !value;
        len = -120;
    }
    let mut tmp = value;
    while tmp != 0 {
        tmp >>= 8;
        len -= 1;
    }
    let mut out = vec![len as u8];
    let count = if len < -120 { -(len + 120) } else { -(len + 112) };
    for idx in (1..=count).rev() {
        out.push(((value >> ((idx - 1) * 8)) & 0xFF) as u8);
    }
    out
}

pub fn encode_text(s: &str) -> Vec<u8> {
    let mut out = encode_vlong(s.len() as i64);
    out.extend_from_slice(s.as_bytes());
    out
}

pub fn encode_int(value: i32) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub fn encode_long(value: i64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub fn encode_weight_row(entries: &[(i32, f64)]) -> Vec<u8> {
    let mut out = (entries.len() as i32).to_be_bytes().to_vec();
    for &(index, value) in entries {
        out.extend(index.to_be_bytes());
        out.extend(value.to_be_bytes());
    }
    out
}

pub fn write_seq_file(
    path: &Path,
    key_class: &str,
    value_class: &str,
    records: &[(Vec<u8>, Vec<u8>)],
) {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"SEQ");
    buf.push(6);
    buf.extend(encode_text(key_class));
    buf.extend(encode_text(value_class));
    buf.push(0); // value compression
    buf.push(0); // block compression
    buf.extend(0i32.to_be_bytes()); // metadata pair count
    buf.extend_from_slice(&SYNC);
    for (key, value) in records {
        buf.extend(((key.len() + value.len()) as i32).to_be_bytes());
        buf.extend((key.len() as i32).to_be_bytes());
        buf.extend_from_slice(key);
        buf.extend_from_slice(value);
    }
    fs::write(path, buf).unwrap();
}

/// A full artifact set for a two-label legal-review model.
///
/// Dictionary: agreement=0, party=1, terminate=2, notify=3, deadline=4.
/// Label 0 ("contract") weighs the first three terms; label 1 ("notice")
/// weighs the last two. 100 training documents.
pub struct Fixture {
    pub dir: TempDir,
    pub model: PathBuf,
    pub label_index: PathBuf,
    pub dictionary: PathBuf,
    pub document_frequency: PathBuf,
}

pub fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("model.seq");
    let label_index = dir.path().join("labelindex.seq");
    let dictionary = dir.path().join("dictionary.seq");
    let document_frequency = dir.path().join("df-count.seq");

    write_seq_file(
        &model,
        INT_CLASS,
        VECTOR_CLASS,
        &[
            (
                encode_int(0),
                encode_weight_row(&[(0, 12.0), (1, 9.0), (2, 6.0)]),
            ),
            (encode_int(1), encode_weight_row(&[(3, 11.0), (4, 7.0)])),
        ],
    );

    write_seq_file(
        &label_index,
        TEXT_CLASS,
        INT_CLASS,
        &[
            (encode_text("contract"), encode_int(0)),
            (encode_text("notice"), encode_int(1)),
        ],
    );

    write_seq_file(
        &dictionary,
        TEXT_CLASS,
        INT_CLASS,
        &[
            (encode_text("agreement"), encode_int(0)),
            (encode_text("party"), encode_int(1)),
            (encode_text("terminate"), encode_int(2)),
            (encode_text("notify"), encode_int(3)),
            (encode_text("deadline"), encode_int(4)),
        ],
    );

    write_seq_file(
        &document_frequency,
        INT_CLASS,
        LONG_CLASS,
        &[
            (encode_int(-1), encode_long(100)),
            (encode_int(0), encode_long(30)),
            (encode_int(1), encode_long(40)),
            (encode_int(2), encode_long(10)),
            (encode_int(3), encode_long(20)),
            (encode_int(4), encode_long(5)),
        ],
    );

    Fixture {
        dir,
        model,
        label_index,
        dictionary,
        document_frequency,
    }
}

pub fn build_classifier(fixture: &Fixture) -> docreview::LineClassifier {
    docreview::LineClassifier::builder()
        .with_model(&fixture.model)
        .with_label_index(&fixture.label_index)
        .with_dictionary(&fixture.dictionary)
        .with_document_frequency(&fixture.document_frequency)
        .build()
        .unwrap()
}
