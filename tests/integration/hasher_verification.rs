//! Hasher Implementation Verification Tests
//!
//! Checks the single-pass hasher against known vectors and against the
//! RustCrypto digests used one-shot.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use unifiler::error::HashError;
use unifiler::hasher::{
    self, hash_with_observer, Algorithm, HashObserver, HashProgress, DEFAULT_BUFFER_SIZE,
};

fn hex_of(results: &[hasher::HashResult]) -> Vec<String> {
    results.iter().map(|r| r.hex()).collect()
}

#[derive(Default)]
struct Recorder {
    counts: Mutex<Vec<u64>>,
}

impl HashObserver for Recorder {
    fn on_progress(&self, progress: &HashProgress<'_>) {
        self.counts.lock().unwrap().push(progress.bytes_processed);
    }
}

#[test]
fn test_empty_file_md5() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty");
    fs::write(&file, b"").unwrap();

    let results = hasher::hash(&file, &["md5"]).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].algorithm, Algorithm::Md5);
    assert_eq!(results[0].path, file);
    assert_eq!(results[0].hex(), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn test_known_vectors_for_abc() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("abc.txt");
    fs::write(&file, b"abc").unwrap();

    let results = hasher::hash(&file, &["md5", "sha1", "sha256"]).unwrap();
    assert_eq!(
        hex_of(&results),
        vec![
            "900150983cd24fb0d6963f7d28e17f72",
            "a9993e364706816aba3e25717850c26c9cd0d89d",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ]
    );
}

#[test]
fn test_empty_input_vectors() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty");
    fs::write(&file, b"").unwrap();

    let results = hasher::hash(&file, &["sha1", "sha256"]).unwrap();
    assert_eq!(
        hex_of(&results),
        vec![
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ]
    );
}

#[test]
fn test_unsupported_algorithm_fails_before_io() {
    let missing = Path::new("/definitely/not/here/file.bin");
    let err = hasher::hash(missing, &["sha256", "crc32"]).unwrap_err();
    match err {
        HashError::UnsupportedAlgorithm(name) => assert_eq!(name, "crc32"),
        other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
    }
}

#[test]
fn test_empty_algorithm_list_is_rejected() {
    let none: [&str; 0] = [];
    assert!(matches!(
        hasher::hash(Path::new("whatever"), &none),
        Err(HashError::NoAlgorithms)
    ));
}

#[test]
fn test_missing_file_is_open_failed() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.bin");

    match hasher::hash(&missing, &["md5"]) {
        Err(HashError::OpenFailed { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected OpenFailed, got {other:?}"),
    }
}

#[test]
fn test_result_order_follows_request_order() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("data.txt");
    fs::write(&file, b"ordering matters").unwrap();

    let forward = hasher::hash(&file, &["md5", "sha1"]).unwrap();
    let reverse = hasher::hash(&file, &["sha1", "md5"]).unwrap();

    assert_eq!(forward[0].algorithm, Algorithm::Md5);
    assert_eq!(forward[1].algorithm, Algorithm::Sha1);
    assert_eq!(reverse[0].algorithm, Algorithm::Sha1);
    assert_eq!(reverse[1].algorithm, Algorithm::Md5);
    assert_eq!(forward[0].digest, reverse[1].digest);
    assert_eq!(forward[1].digest, reverse[0].digest);
}

#[test]
fn test_duplicate_algorithms_are_computed_independently() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("dup.txt");
    fs::write(&file, b"twice").unwrap();

    let results = hasher::hash(&file, &["sha256", "sha256"]).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], results[1]);
}

#[test]
fn test_large_file_matches_one_shot_digests() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let size = DEFAULT_BUFFER_SIZE * 3 + 123;
    let content: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    fs::write(&file, &content).unwrap();

    let recorder = Recorder::default();
    let results = hash_with_observer(&file, &["md5", "sha1", "sha256"], &recorder).unwrap();

    assert_eq!(results[0].digest, Md5::digest(&content).to_vec());
    assert_eq!(results[1].digest, Sha1::digest(&content).to_vec());
    assert_eq!(results[2].digest, Sha256::digest(&content).to_vec());

    let counts = recorder.counts.lock().unwrap();
    assert!(counts.len() >= 4, "expected several buffers, got {}", counts.len());
    assert!(counts.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*counts.last().unwrap(), size as u64);
}
