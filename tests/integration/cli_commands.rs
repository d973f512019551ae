//! CLI command tests: parse arguments and execute through the route table

use super::test_utils::sample_tree;
use clap::Parser;
use std::fs;
use tempfile::TempDir;
use unifiler::cli::{Cli, RunContext};
use unifiler::config::UnifilerConfig;
use unifiler::error::{ApiError, HashError};

fn run(args: &[&str]) -> Result<String, ApiError> {
    let mut argv = vec!["unifiler"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    RunContext::new(UnifilerConfig::default()).execute(&cli.command)
}

#[test]
fn test_file_list_json() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let root_str = root.to_str().unwrap();

    let out = run(&["file", "list", "-i", root_str, "--recursive", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["root", "a.txt", "sub", "b.txt", "c.txt"]);
    assert_eq!(value[2]["is_dir"], true);
}

#[test]
fn test_file_list_files_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let out = run(&[
        "file",
        "list",
        "-i",
        root.to_str().unwrap(),
        "--depth",
        "-1",
        "--files-only",
    ])
    .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("a.txt"));
    assert!(lines[2].ends_with("c.txt"));
}

#[test]
fn test_hash_directory_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let out = run(&["hash", "-i", root.to_str().unwrap(), "-r", "-a", "md5"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    // md5("alpha")
    assert!(lines[0].starts_with("2c1743a391305fbf367df8e4f069f9f9 *"));
    assert!(lines[0].ends_with("a.txt"));
}

#[test]
fn test_hash_non_recursive_skips_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let out = run(&["hash", "-i", root.to_str().unwrap()]).unwrap();
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_hash_json_with_checksum_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let prefix = temp_dir.path().join("sums");

    let out = run(&[
        "hash",
        "-i",
        root.to_str().unwrap(),
        "-r",
        "-a",
        "sha1,sha256",
        "-o",
        prefix.to_str().unwrap(),
        "--format",
        "json",
    ])
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 6);
    assert_eq!(value["results"][0]["algorithm"], "sha1");
    assert_eq!(value["results"][1]["algorithm"], "sha256");
    assert!(value["failures"].as_array().unwrap().is_empty());

    let sha1 = fs::read_to_string(temp_dir.path().join("sums.sha1")).unwrap();
    let sha256 = fs::read_to_string(temp_dir.path().join("sums.sha256")).unwrap();
    assert_eq!(sha1.lines().count(), 3);
    assert_eq!(sha256.lines().count(), 3);
    assert!(sha256.lines().all(|l| l.contains(" *")));
}

#[test]
fn test_hash_unknown_algorithm() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let err = run(&["hash", "-i", root.to_str().unwrap(), "-a", "sha256,crc32"]).unwrap_err();
    assert!(matches!(err, ApiError::Hash(HashError::UnsupportedAlgorithm(_))));
}

#[test]
fn test_hash_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = run(&["hash", "-i", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, ApiError::Fs(_)));
}

#[test]
fn test_mirror_with_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let target = temp_dir.path().join("copy");

    let out = run(&[
        "mirror",
        "-i",
        root.to_str().unwrap(),
        "-o",
        target.to_str().unwrap(),
        "--with-files",
    ])
    .unwrap();

    assert!(out.contains("1 directories and 3 files"));
    assert_eq!(
        fs::read_to_string(target.join("sub").join("c.txt")).unwrap(),
        "charlie"
    );
}

#[test]
fn test_mirror_reuses_existing_target() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let target = temp_dir.path().join("copy");
    fs::create_dir_all(target.join("sub")).unwrap();

    run(&["mirror", "-i", root.to_str().unwrap(), "-o", target.to_str().unwrap()]).unwrap();
    assert!(target.join("sub").is_dir());
    assert!(!target.join("a.txt").exists());
}

#[test]
fn test_version_command() {
    let out = run(&["version"]).unwrap();
    assert!(out.starts_with(&format!("{}.", env!("CARGO_PKG_VERSION_MAJOR"))));
}

#[test]
fn test_config_command_shows_tool_paths() {
    let out = run(&["config"]).unwrap();
    assert!(out.contains("path.x265_path"));
    assert!(out.contains("portable"));
}

#[cfg(unix)]
#[test]
fn test_json_output_with_non_utf8_file_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    if fs::write(root.join(OsStr::from_bytes(b"bad\xffname.txt")), b"abc").is_err() {
        return;
    }
    let root_str = root.to_str().unwrap();

    let listing = run(&["file", "list", "-i", root_str, "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(value[1]["name"], "bad\u{fffd}name.txt");
    assert!(value[1]["relative_path"]
        .as_str()
        .unwrap()
        .ends_with("bad\u{fffd}name.txt"));

    let hashed = run(&["hash", "-i", root_str, "-a", "md5", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&hashed).unwrap();
    assert_eq!(
        value["results"][0]["digest"],
        "900150983cd24fb0d6963f7d28e17f72"
    );
    assert!(value["results"][0]["path"]
        .as_str()
        .unwrap()
        .ends_with("bad\u{fffd}name.txt"));
}
