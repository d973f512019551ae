//! Tree Enumerator
//!
//! Expands caller-supplied roots into a flat, pre-order, depth-bounded sequence
//! of file-system entries. Directories are emitted before their contents.

pub mod entry;
pub mod path;
pub mod walker;

pub use entry::{FsEntries, FsEntry};
pub use walker::{is_directory, list, list_directory, list_entries, list_with_depth};
