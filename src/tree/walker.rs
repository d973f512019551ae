//! Filesystem walker producing pre-order, depth-bounded entry sequences

use crate::error::FsError;
use crate::tree::entry::{FsEntries, FsEntry};
use crate::tree::path::{absolute_path, clean_path};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Depth bound meaning "expand every level"
pub const UNBOUNDED: i32 = -1;

/// Check whether a path is a directory without following symbolic links.
pub fn is_directory(path: &Path) -> Result<bool, FsError> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(metadata.is_dir())
}

/// List the immediate children of a directory.
///
/// Children are returned in file-name order, one level only. Each child's
/// relative path is `path` joined with its name. If the absolute path of any
/// child cannot be resolved the whole listing fails.
pub fn list_directory(path: &Path) -> Result<Vec<FsEntry>, FsError> {
    let mut contents = Vec::new();

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(path, e))?;

        let relative_path = clean_path(&path.join(entry.file_name()));
        let absolute_path =
            absolute_path(&relative_path).map_err(|source| FsError::PathResolutionFailed {
                path: relative_path.clone(),
                source,
            })?;

        contents.push(FsEntry {
            absolute_path,
            relative_path,
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_dir(),
        });
    }

    Ok(contents)
}

/// Expand entries recursively, directory first and then its contents.
///
/// An entry is expanded only if it is a directory and `depth < max_depth`, or
/// `max_depth` is negative. Children are expanded at `depth + 1`. The first
/// error at any level aborts the whole expansion.
pub fn list_entries(
    entries: Vec<FsEntry>,
    max_depth: i32,
    depth: i32,
) -> Result<Vec<FsEntry>, FsError> {
    let mut contents = Vec::with_capacity(entries.len());

    for entry in entries {
        let expand = entry.is_dir && !(max_depth >= 0 && depth >= max_depth);
        let dir = entry.relative_path.clone();
        contents.push(entry);
        if !expand {
            continue;
        }

        let children = list_directory(&dir)?;
        let sub_contents = list_entries(children, max_depth, depth + 1)?;
        contents.extend(sub_contents);
    }

    Ok(contents)
}

/// Enumerate roots. `recursive` expands every level, otherwise only the
/// immediate children of directory roots are listed.
pub fn list<P: AsRef<Path>>(roots: &[P], recursive: bool) -> Result<FsEntries, FsError> {
    let max_depth = if recursive { UNBOUNDED } else { 0 };
    list_with_depth(roots, max_depth)
}

/// Enumerate roots with an explicit depth bound.
///
/// A file root yields exactly one entry. A directory root yields itself
/// followed by its children expanded from depth 0. Results are concatenated
/// in the order roots were supplied.
pub fn list_with_depth<P: AsRef<Path>>(roots: &[P], max_depth: i32) -> Result<FsEntries, FsError> {
    let mut contents = Vec::new();

    for root in roots {
        let root = root.as_ref();
        let entry = root_entry(root)?;
        debug!(root = %root.display(), is_dir = entry.is_dir, max_depth, "Listing root");

        if entry.is_dir {
            let children = list_directory(&entry.relative_path)?;
            contents.push(entry);
            contents.extend(list_entries(children, max_depth, 0)?);
        } else {
            contents.push(entry);
        }
    }

    debug!(entries = contents.len(), "Listing complete");
    Ok(FsEntries::new(contents))
}

fn root_entry(root: &Path) -> Result<FsEntry, FsError> {
    let is_dir = is_directory(root)?;
    let relative_path = clean_path(root);
    let absolute_path =
        absolute_path(&relative_path).map_err(|source| FsError::PathResolutionFailed {
            path: relative_path.clone(),
            source,
        })?;
    let name = absolute_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute_path.to_string_lossy().into_owned());

    Ok(FsEntry {
        absolute_path,
        relative_path,
        name,
        is_dir,
    })
}

fn walk_error(dir: &Path, err: walkdir::Error) -> FsError {
    let path: PathBuf = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    match err.into_io_error() {
        Some(source) => FsError::from_io(path, source),
        None => FsError::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, "filesystem loop detected"),
        },
    }
}
