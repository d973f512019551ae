//! Tree enumeration tests: pre-order, depth bounding and root handling

use super::test_utils::sample_tree;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use unifiler::error::FsError;
use unifiler::tree::{self, list, list_with_depth, FsEntries};

fn relative(entries: &FsEntries, base: &std::path::Path) -> Vec<PathBuf> {
    entries
        .iter()
        .map(|e| e.relative_path.strip_prefix(base).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_recursive_listing_is_preorder() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let entries = list(&[&root], true).unwrap();
    assert_eq!(
        relative(&entries, temp_dir.path()),
        vec![
            PathBuf::from("root"),
            PathBuf::from("root/a.txt"),
            PathBuf::from("root/sub"),
            PathBuf::from("root/sub/b.txt"),
            PathBuf::from("root/sub/c.txt"),
        ]
    );
}

#[test]
fn test_non_recursive_lists_root_and_children() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let entries = list(&[&root], false).unwrap();
    assert_eq!(
        relative(&entries, temp_dir.path()),
        vec![
            PathBuf::from("root"),
            PathBuf::from("root/a.txt"),
            PathBuf::from("root/sub"),
        ]
    );
}

#[test]
fn test_depth_bound_limits_expansion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("r");
    fs::create_dir_all(root.join("l1").join("l2").join("l3")).unwrap();
    fs::write(root.join("l1").join("l2").join("l3").join("f"), "f").unwrap();

    let names = |max_depth: i32| -> Vec<String> {
        list_with_depth(&[&root], max_depth)
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    };

    assert_eq!(names(0), vec!["r", "l1"]);
    assert_eq!(names(1), vec!["r", "l1", "l2"]);
    assert_eq!(names(2), vec!["r", "l1", "l2", "l3"]);
    assert_eq!(names(-1), vec!["r", "l1", "l2", "l3", "f"]);
}

#[test]
fn test_single_file_root() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("single.bin");
    fs::write(&file, [1u8, 2, 3]).unwrap();

    for recursive in [false, true] {
        let entries = list(&[&file], recursive).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = entries.iter().next().unwrap();
        assert!(!entry.is_dir);
        assert_eq!(entry.name, "single.bin");
        assert!(entry.absolute_path.is_absolute());
    }
}

#[test]
fn test_multiple_roots_keep_supplied_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let loose = temp_dir.path().join("loose.txt");
    fs::write(&loose, "x").unwrap();

    let entries = list(&[loose.clone(), root.clone()], false).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["loose.txt", "root", "a.txt", "sub"]);
}

#[test]
fn test_missing_root_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    match list(&[&missing], true) {
        Err(FsError::NotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_files_filter_skips_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());

    let entries = tree::list(&[&root], true).unwrap();
    let files: Vec<&str> = entries.files().map(|e| e.name.as_str()).collect();
    assert_eq!(files, vec!["a.txt", "b.txt", "c.txt"]);
    assert_eq!(entries.directories().count(), 2);
}

#[test]
fn test_dot_segments_are_cleaned() {
    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let dotted = root.join("sub").join("..").join(".");

    let entries = list(&[&dotted], false).unwrap();
    let first = entries.iter().next().unwrap();
    assert_eq!(first.relative_path, root);
    assert_eq!(first.name, "root");
}

#[cfg(unix)]
#[test]
fn test_nested_failure_returns_no_partial_tree() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = sample_tree(temp_dir.path());
    let locked = root.join("sub").join("locked");
    fs::create_dir(&locked).unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&locked).is_ok();
    let recursive = list(&[&root], true);
    let shallow = list(&[&root], false);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    match recursive {
        Err(FsError::PermissionDenied { path }) => assert_eq!(path, locked),
        other => panic!("expected PermissionDenied, got {other:?}"),
    }
    // The locked directory is never opened when the depth bound stops above it
    assert_eq!(shallow.unwrap().len(), 3);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names_are_listed() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    fs::create_dir(&root).unwrap();
    let odd = root.join(OsStr::from_bytes(b"bad\xffname.txt"));
    if fs::write(&odd, "x").is_err() {
        // Some file systems reject non-UTF-8 names
        return;
    }

    let entries = list(&[&root], false).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.iter().nth(1).unwrap().relative_path, odd);
}
