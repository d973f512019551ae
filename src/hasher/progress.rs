//! Progress observability for digest computation

use crate::hasher::algorithm::Algorithm;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Emitted once per processed buffer.
#[derive(Debug, Clone, Serialize)]
pub struct HashProgress<'a> {
    pub algorithms: &'a [Algorithm],
    pub file: &'a Path,
    pub bytes_processed: u64,
}

/// Sink for hashing progress. Shared across concurrent hashing calls.
pub trait HashObserver: Send + Sync {
    fn on_progress(&self, progress: &HashProgress<'_>);
}

/// Logs progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl HashObserver for TracingObserver {
    fn on_progress(&self, progress: &HashProgress<'_>) {
        let algos: Vec<&str> = progress.algorithms.iter().map(Algorithm::as_str).collect();
        debug!(
            algos = ?algos,
            file = %progress.file.display(),
            size = progress.bytes_processed,
            "Hashed '{}' ({} bytes)",
            progress.file.display(),
            progress.bytes_processed
        );
    }
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl HashObserver for NoopObserver {
    fn on_progress(&self, _progress: &HashProgress<'_>) {}
}
