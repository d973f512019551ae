//! Enumerated file-system nodes

use crate::tree::path::serialize_lossy;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One node produced by an enumeration call.
///
/// `relative_path` is the root as supplied with child names joined onto it. It is
/// the traversal key: directories are re-read through it while descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FsEntry {
    #[serde(serialize_with = "serialize_lossy")]
    pub absolute_path: PathBuf,
    #[serde(serialize_with = "serialize_lossy")]
    pub relative_path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        &self.relative_path
    }
}

/// Ordered result of one enumeration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FsEntries(Vec<FsEntry>);

impl FsEntries {
    pub fn new(entries: Vec<FsEntry>) -> Self {
        Self(entries)
    }

    /// Relative paths in enumeration order
    pub fn paths(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|e| e.relative_path.to_string_lossy().into_owned())
            .collect()
    }

    /// Non-directory entries, in enumeration order
    pub fn files(&self) -> impl Iterator<Item = &FsEntry> {
        self.0.iter().filter(|e| !e.is_dir)
    }

    pub fn directories(&self) -> impl Iterator<Item = &FsEntry> {
        self.0.iter().filter(|e| e.is_dir)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FsEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for FsEntries {
    type Item = FsEntry;
    type IntoIter = std::vec::IntoIter<FsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FsEntries {
    type Item = &'a FsEntry;
    type IntoIter = std::slice::Iter<'a, FsEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
