//! CLI presentation: formatting of listings, digests and configuration for
//! terminal and JSON output.

use crate::config::UnifilerConfig;
use crate::error::ApiError;
use crate::hasher::{Algorithm, HashResult};
use crate::tree::path::serialize_lossy;
use crate::tree::FsEntries;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::path::PathBuf;

/// A file that could not be hashed
#[derive(Debug, Clone, Serialize)]
pub struct HashFailure {
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of hashing a batch of files
#[derive(Debug, Clone, Default, Serialize)]
pub struct HashReport {
    /// Per-file results, files in enumeration order, algorithms in request order
    pub results: Vec<HashResult>,
    pub failures: Vec<HashFailure>,
}

impl HashReport {
    /// Results for one algorithm, in file order
    pub fn for_algorithm(&self, algorithm: Algorithm) -> impl Iterator<Item = &HashResult> {
        self.results
            .iter()
            .filter(move |r| r.algorithm == algorithm)
    }

    /// Checksum file body for one algorithm: `<hex> *<path>` per line
    pub fn checksum_lines(&self, algorithm: Algorithm) -> String {
        let mut out = String::new();
        for result in self.for_algorithm(algorithm) {
            out.push_str(&format!("{} *{}\n", result.hex(), result.path.display()));
        }
        out
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One relative path per line; directories carry a trailing separator.
pub fn format_entries_text(entries: &FsEntries) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_dir {
            lines.push(format!(
                "{}{}",
                entry.relative_path.display(),
                std::path::MAIN_SEPARATOR
            ));
        } else {
            lines.push(entry.relative_path.display().to_string());
        }
    }
    lines.join("\n")
}

pub fn format_entries_json(entries: &FsEntries) -> Result<String, ApiError> {
    to_json(entries)
}

pub fn format_entries_table(entries: &FsEntries) -> String {
    if entries.is_empty() {
        return "No entries.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Type", "Name", "Path"]);
    for entry in entries {
        let kind = if entry.is_dir { "dir" } else { "file" };
        table.add_row(vec![
            kind.to_string(),
            entry.name.clone(),
            entry.relative_path.display().to_string(),
        ]);
    }

    let dirs = entries.directories().count();
    format!(
        "{}\n\n{} entries ({} directories, {} files)",
        table,
        entries.len(),
        dirs,
        entries.len() - dirs
    )
}

/// Checksum lines grouped per algorithm, each group under a `# <algorithm>`
/// heading when more than one algorithm was requested.
pub fn format_hash_text(report: &HashReport, algorithms: &[Algorithm]) -> String {
    let mut sections = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let body = report.checksum_lines(algorithm);
        if algorithms.len() > 1 {
            sections.push(format!("# {}\n{}", algorithm, body));
        } else {
            sections.push(body);
        }
    }
    sections.join("\n").trim_end().to_string()
}

pub fn format_hash_json(report: &HashReport) -> Result<String, ApiError> {
    to_json(report)
}

pub fn format_config_text(config: &UnifilerConfig) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);

    let rows = [
        ("config file", config.config_file.display().to_string()),
        ("config dir", config.config_dir.display().to_string()),
        ("portable", config.is_portable.to_string()),
        ("path.ffmpeg_path", config.path.ffmpeg_path.clone()),
        ("path.imagemagick_path", config.path.imagemagick_path.clone()),
        ("path.mediainfo_path", config.path.mediainfo_path.clone()),
        ("path.x264_path", config.path.x264_path.clone()),
        ("path.x265_path", config.path.x265_path.clone()),
        ("logging.level", config.logging.level.clone()),
        ("logging.format", config.logging.format.clone()),
        ("logging.output", config.logging.output.clone()),
    ];
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }

    table.to_string()
}
