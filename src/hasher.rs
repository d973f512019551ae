//! Multi-Digest Hasher
//!
//! Computes several digests of one file while reading it exactly once. Every
//! requested algorithm gets its own accumulator and all of them are fed the
//! same chunks, in request order. Results come back in request order.

pub mod accumulator;
pub mod algorithm;
pub mod progress;

pub use accumulator::{Accumulator, DigestAccumulator};
pub use algorithm::Algorithm;
pub use progress::{HashObserver, HashProgress, NoopObserver, TracingObserver};

use crate::error::HashError;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read chunk size used when the remaining source length is unknown or larger.
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Result of one digest computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashResult {
    #[serde(serialize_with = "crate::tree::path::serialize_lossy")]
    pub path: PathBuf,
    pub algorithm: Algorithm,
    #[serde(serialize_with = "serialize_hex")]
    pub digest: Vec<u8>,
}

impl HashResult {
    /// Lowercase hex rendering of the digest
    pub fn hex(&self) -> String {
        hex::encode(&self.digest)
    }
}

fn serialize_hex<S>(digest: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(digest))
}

/// An accumulator acknowledged a different byte count than it was fed.
#[derive(Debug)]
pub struct WriteMismatch {
    pub algorithm: Algorithm,
    pub read: usize,
    pub written: usize,
    /// Write error reported by the accumulator, if any
    pub source: Option<io::Error>,
}

struct Slot {
    algorithm: Algorithm,
    accumulator: Box<dyn Accumulator>,
}

/// Ordered set of independent accumulators sharing one byte stream.
pub struct MultiHasher {
    slots: Vec<Slot>,
}

impl MultiHasher {
    /// Validate identifiers and create one accumulator per entry.
    ///
    /// Fails before anything is allocated if the list is empty or any
    /// identifier is unsupported.
    pub fn new<S: AsRef<str>>(algorithms: &[S]) -> Result<Self, HashError> {
        let parsed = Algorithm::parse_all(algorithms)?;
        Self::from_algorithms(&parsed)
    }

    pub fn from_algorithms(algorithms: &[Algorithm]) -> Result<Self, HashError> {
        if algorithms.is_empty() {
            return Err(HashError::NoAlgorithms);
        }

        let slots = algorithms
            .iter()
            .map(|&algorithm| Slot {
                algorithm,
                accumulator: algorithm.accumulator(),
            })
            .collect();
        Ok(Self { slots })
    }

    /// Append a caller-provided accumulator reported under `algorithm`.
    pub fn push(&mut self, algorithm: Algorithm, accumulator: Box<dyn Accumulator>) {
        self.slots.push(Slot {
            algorithm,
            accumulator,
        });
    }

    /// Requested algorithms, in request order
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.slots.iter().map(|s| s.algorithm).collect()
    }

    /// Feed one chunk to every accumulator in request order.
    ///
    /// Every accumulator must accept exactly `data.len()` bytes. An accumulator
    /// that errors counts as having accepted nothing and its error is kept.
    pub fn update(&mut self, data: &[u8]) -> Result<(), WriteMismatch> {
        for slot in &mut self.slots {
            let (written, source) = match slot.accumulator.feed(data) {
                Ok(n) => (n, None),
                Err(e) => (0, Some(e)),
            };
            if written != data.len() || source.is_some() {
                return Err(WriteMismatch {
                    algorithm: slot.algorithm,
                    read: data.len(),
                    written,
                    source,
                });
            }
        }
        Ok(())
    }

    /// Finalize every accumulator, results in request order.
    pub fn finalize(self, path: &Path) -> Vec<HashResult> {
        self.slots
            .into_iter()
            .map(|slot| HashResult {
                path: path.to_path_buf(),
                algorithm: slot.algorithm,
                digest: slot.accumulator.finalize(),
            })
            .collect()
    }
}

/// Pick the read buffer size.
///
/// Defaults to [`DEFAULT_BUFFER_SIZE`]; a source with fewer bytes remaining
/// gets a buffer of exactly that size, never less than one byte.
pub fn buffer_size(remaining: Option<u64>) -> usize {
    match remaining {
        Some(n) if n < DEFAULT_BUFFER_SIZE as u64 => n.max(1) as usize,
        _ => DEFAULT_BUFFER_SIZE,
    }
}

/// Hash a file with every requested algorithm in a single read pass.
///
/// Progress is logged through `tracing`.
pub fn hash<S: AsRef<str>>(path: &Path, algorithms: &[S]) -> Result<Vec<HashResult>, HashError> {
    hash_with_observer(path, algorithms, &TracingObserver)
}

/// Same as [`hash`] with an explicit progress sink.
pub fn hash_with_observer<S: AsRef<str>>(
    path: &Path,
    algorithms: &[S],
    observer: &dyn HashObserver,
) -> Result<Vec<HashResult>, HashError> {
    let hasher = MultiHasher::new(algorithms)?;

    let file = File::open(path).map_err(|source| HashError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    hash_stream(path, file, None, hasher, observer)
}

/// Hash any reader. `remaining` is the known number of bytes left in the
/// source, if bounded, and only affects buffer sizing.
pub fn hash_reader<R: Read, S: AsRef<str>>(
    label: &Path,
    reader: R,
    remaining: Option<u64>,
    algorithms: &[S],
    observer: &dyn HashObserver,
) -> Result<Vec<HashResult>, HashError> {
    let hasher = MultiHasher::new(algorithms)?;
    hash_stream(label, reader, remaining, hasher, observer)
}

/// Drive a prepared [`MultiHasher`] over a reader until end of stream.
pub fn hash_stream<R: Read>(
    label: &Path,
    mut reader: R,
    remaining: Option<u64>,
    mut hasher: MultiHasher,
    observer: &dyn HashObserver,
) -> Result<Vec<HashResult>, HashError> {
    let algorithms = hasher.algorithms();
    let mut buf = vec![0u8; buffer_size(remaining)];
    let mut processed: u64 = 0;

    loop {
        let nread = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(HashError::StreamReadFailed {
                    path: label.to_path_buf(),
                    source,
                })
            }
        };

        hasher
            .update(&buf[..nread])
            .map_err(|m| HashError::AccumulatorWriteMismatch {
                path: label.to_path_buf(),
                algorithm: m.algorithm.to_string(),
                read: m.read,
                written: m.written,
                source: m.source,
            })?;
        processed += nread as u64;

        observer.on_progress(&HashProgress {
            algorithms: &algorithms,
            file: label,
            bytes_processed: processed,
        });
    }

    debug!(file = %label.display(), size = processed, "Digest complete");
    Ok(hasher.finalize(label))
}
