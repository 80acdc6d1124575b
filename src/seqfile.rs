//! Reader for the record-oriented binary key-value sequence format the
//! training artifacts are stored in.
//!
//! Only uncompressed, record-layout files are supported; that is the only
//! form the training job emits. Records are surfaced as raw key/value byte
//! payloads and decoded by the caller with the codec helpers below.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Leading magic bytes of every sequence file.
pub const MAGIC: [u8; 3] = *b"SEQ";

/// The only header version the reader accepts.
pub const VERSION: u8 = 6;

/// Record length announcing an inline sync marker instead of a record.
const SYNC_ESCAPE: i32 = -1;

const SYNC_SIZE: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum SeqFileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("not a sequence file: bad magic")]
    BadMagic,
    #[error("unsupported sequence file version: {0}")]
    UnsupportedVersion(u8),
    #[error("compressed sequence files are not supported")]
    Compressed,
    #[error("corrupt sequence file: {0}")]
    Corrupt(String),
    #[error("invalid utf-8 in text payload: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Streaming reader over the records of one sequence file.
pub struct SequenceFileReader<R: Read> {
    reader: R,
    key_class: String,
    value_class: String,
    sync: [u8; SYNC_SIZE],
}

impl SequenceFileReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SeqFileError> {
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R: Read> SequenceFileReader<R> {
    /// Parses the file header and positions the reader at the first record.
    pub fn new(mut reader: R) -> Result<Self, SeqFileError> {
        let mut magic = [0u8; 3];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(SeqFileError::BadMagic);
        }
        let version = read_u8(&mut reader)?;
        if version != VERSION {
            return Err(SeqFileError::UnsupportedVersion(version));
        }

        let key_class = read_string(&mut reader)?;
        let value_class = read_string(&mut reader)?;

        let value_compressed = read_u8(&mut reader)? != 0;
        let block_compressed = read_u8(&mut reader)? != 0;
        if value_compressed || block_compressed {
            return Err(SeqFileError::Compressed);
        }

        // Metadata pairs carry nothing the loaders need.
        let metadata_pairs = read_i32(&mut reader)?;
        if metadata_pairs < 0 {
            return Err(SeqFileError::Corrupt(format!(
                "negative metadata pair count {metadata_pairs}"
            )));
        }
        for _ in 0..metadata_pairs {
            read_string(&mut reader)?;
            read_string(&mut reader)?;
        }

        let mut sync = [0u8; SYNC_SIZE];
        reader.read_exact(&mut sync)?;

        Ok(Self {
            reader,
            key_class,
            value_class,
            sync,
        })
    }

    /// Class name the file declares for its keys.
    pub fn key_class(&self) -> &str {
        &self.key_class
    }

    /// Class name the file declares for its values.
    pub fn value_class(&self) -> &str {
        &self.value_class
    }

    /// Returns the next record's raw key and value payloads, or `None` at
    /// end of file. Inline sync markers are verified and skipped.
    pub fn next_record(&mut self) -> Result<Option<(Vec<u8>, Vec<u8>)>, SeqFileError> {
        loop {
            let record_len = match self.try_read_i32()? {
                None => return Ok(None),
                Some(len) => len,
            };

            if record_len == SYNC_ESCAPE {
                let mut marker = [0u8; SYNC_SIZE];
                self.reader.read_exact(&mut marker)?;
                if marker != self.sync {
                    return Err(SeqFileError::Corrupt("sync marker mismatch".into()));
                }
                continue;
            }

            if record_len < 0 {
                return Err(SeqFileError::Corrupt(format!(
                    "negative record length {record_len}"
                )));
            }
            let key_len = read_i32(&mut self.reader)?;
            if key_len < 0 || key_len > record_len {
                return Err(SeqFileError::Corrupt(format!(
                    "key length {key_len} exceeds record length {record_len}"
                )));
            }

            let mut key = vec![0u8; key_len as usize];
            self.reader.read_exact(&mut key)?;
            let mut value = vec![0u8; (record_len - key_len) as usize];
            self.reader.read_exact(&mut value)?;
            return Ok(Some((key, value)));
        }
    }

    /// Reads a big-endian i32, distinguishing clean end-of-file (no bytes at
    /// all) from truncation mid-field.
    fn try_read_i32(&mut self) -> Result<Option<i32>, SeqFileError> {
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.reader.read(&mut buf[filled..])?;
            if n == 0 {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(SeqFileError::Corrupt("truncated record length".into()));
            }
            filled += n;
        }
        Ok(Some(i32::from_be_bytes(buf)))
    }
}

/// Decodes a text payload: variable-length byte count followed by UTF-8.
pub fn decode_text(bytes: &[u8]) -> Result<String, SeqFileError> {
    read_string(&mut &bytes[..])
}

/// Decodes a fixed-width big-endian i32 payload.
pub fn decode_int(bytes: &[u8]) -> Result<i32, SeqFileError> {
    read_i32(&mut &bytes[..]).map_err(SeqFileError::from)
}

/// Decodes a fixed-width big-endian i64 payload.
pub fn decode_long(bytes: &[u8]) -> Result<i64, SeqFileError> {
    let mut buf = [0u8; 8];
    (&mut &bytes[..]).read_exact(&mut buf)?;
    Ok(i64::from_be_bytes(buf))
}

/// Decodes a sparse weight row: entry count, then (index, f64) pairs.
pub fn decode_weight_row(bytes: &[u8]) -> Result<Vec<(i32, f64)>, SeqFileError> {
    let mut cur = &bytes[..];
    let count = read_i32(&mut cur)?;
    if count < 0 {
        return Err(SeqFileError::Corrupt(format!(
            "negative weight row entry count {count}"
        )));
    }
    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let index = read_i32(&mut cur)?;
        let mut buf = [0u8; 8];
        cur.read_exact(&mut buf)?;
        entries.push((index, f64::from_be_bytes(buf)));
    }
    Ok(entries)
}

/// Decodes the variable-length integer encoding used for string lengths:
/// one byte for -112..=127, otherwise a length-describing first byte
/// followed by big-endian magnitude bytes, with negatives stored
/// one's-complemented.
pub fn read_vlong<R: Read>(reader: &mut R) -> Result<i64, SeqFileError> {
    let first = read_u8(reader)? as i8;
    if first >= -112 {
        return Ok(i64::from(first));
    }
    let (len, negative) = if first < -120 {
        ((-120 - i32::from(first)) as usize, true)
    } else {
        ((-112 - i32::from(first)) as usize, false)
    };
    let mut value: i64 = 0;
    for _ in 0..len {
        value = (value << 8) | i64::from(read_u8(reader)?);
    }
    Ok(if negative { !value } else { value })
}

fn read_string<R: Read>(reader: &mut R) -> Result<String, SeqFileError> {
    let len = read_vlong(reader)?;
    if len < 0 {
        return Err(SeqFileError::Corrupt(format!("negative string length {len}")));
    }
    let mut bytes = vec![0u8; len as usize];
    reader.read_exact(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

fn read_u8<R: Read>(reader: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_i32<R: Read>(reader: &mut R) -> io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}
