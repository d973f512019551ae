//! Path resolution and lexical normalization utilities

use serde::Serializer;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve a path to an absolute, cleaned form without touching the file system
/// beyond reading the current directory.
///
/// This function:
/// 1. Joins relative paths onto the current working directory
/// 2. Removes `.` components and folds `..` lexically
/// 3. Strips Windows verbatim prefixes where a plain path is equivalent
///
/// Symbolic links are not resolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Ok(dunce::simplified(&clean_path(&joined)).to_path_buf())
}

/// Lexically clean a path: drop `.` components, fold `name/..` pairs and
/// collapse `..` directly under the root. Leading `..` of a relative path are
/// kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    let cleaned: PathBuf = components.iter().collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Serialize a path as a string, replacing invalid UTF-8 the way
/// `Path::display` does so JSON and text output agree.
pub fn serialize_lossy<P, S>(path: P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
