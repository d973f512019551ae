//! Unifiler: File-System Bookkeeping
//!
//! Enumerates directory trees, computes several digests of a file in a single
//! read pass, and mirrors directory structures.

pub mod cli;
pub mod config;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod tree;
pub mod version;
