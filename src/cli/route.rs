//! CLI route: single route table and run context. Dispatches to the
//! enumerator, the hasher and presentation.

use crate::cli::parse::{Commands, FileCommands, HashArgs, ListArgs, MirrorArgs};
use crate::cli::presentation::{
    format_config_text, format_entries_json, format_entries_table, format_entries_text,
    format_hash_json, format_hash_text, HashFailure, HashReport,
};
use crate::config::UnifilerConfig;
use crate::error::{ApiError, FsError, HashError};
use crate::hasher::{self, Algorithm, TracingObserver};
use crate::tree::{self, is_directory, FsEntries};
use crate::version;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runtime context for CLI execution. Holds the loaded configuration.
pub struct RunContext {
    config: UnifilerConfig,
}

impl RunContext {
    pub fn new(config: UnifilerConfig) -> Self {
        Self { config }
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let name = command_name(command);
        debug!(command = name, "Executing command");

        let result = match command {
            Commands::File {
                command: FileCommands::List(args),
            } => self.list_files(args),
            Commands::Hash(args) => self.hash_files(args),
            Commands::Mirror(args) => self.mirror(args),
            Commands::Config => Ok(format_config_text(&self.config)),
            Commands::Version => Ok(version::version()),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = name, duration_ms, "Command completed"),
            Err(e) => warn!(command = name, duration_ms, error = %e, "Command failed"),
        }
        result
    }

    fn list_files(&self, args: &ListArgs) -> Result<String, ApiError> {
        let entries = match args.depth {
            Some(depth) => tree::list_with_depth(&args.inputs, depth)?,
            None => tree::list(&args.inputs, args.recursive)?,
        };
        let entries = if args.files_only {
            FsEntries::new(entries.files().cloned().collect())
        } else {
            entries
        };

        match args.format.as_str() {
            "text" => Ok(format_entries_text(&entries)),
            "json" => format_entries_json(&entries),
            "table" => Ok(format_entries_table(&entries)),
            other => Err(invalid_format(other, "text, json or table")),
        }
    }

    fn hash_files(&self, args: &HashArgs) -> Result<String, ApiError> {
        if args.format != "text" && args.format != "json" {
            return Err(invalid_format(&args.format, "text or json"));
        }

        let algorithms = Algorithm::parse_all(&args.algorithms)?;
        if algorithms.is_empty() {
            return Err(HashError::NoAlgorithms.into());
        }

        let entries = tree::list(&args.inputs, args.recursive)?;
        let files: Vec<&Path> = entries.files().map(|e| e.path()).collect();
        info!(
            files = files.len(),
            algorithms = ?algorithms.iter().map(Algorithm::as_str).collect::<Vec<_>>(),
            "Hashing files"
        );

        let mut report = HashReport::default();
        for path in &files {
            match hasher::hash_with_observer(path, &algorithms, &TracingObserver) {
                Ok(results) => report.results.extend(results),
                Err(e) if args.fail_fast => return Err(e.into()),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to hash file");
                    report.failures.push(HashFailure {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    });
                }
            }
        }

        if !report.failures.is_empty() {
            warn!(
                failed = report.failures.len(),
                total = files.len(),
                "Some files could not be hashed"
            );
        }

        if let Some(prefix) = &args.output {
            self.write_checksum_files(prefix, &report, &algorithms)?;
        }

        match args.format.as_str() {
            "json" => format_hash_json(&report),
            _ => Ok(format_hash_text(&report, &algorithms)),
        }
    }

    fn write_checksum_files(
        &self,
        prefix: &Path,
        report: &HashReport,
        algorithms: &[Algorithm],
    ) -> Result<(), ApiError> {
        for &algorithm in algorithms {
            let path = checksum_file_path(prefix, algorithm);
            fs::write(&path, report.checksum_lines(algorithm))
                .map_err(|source| ApiError::Output {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), algorithm = %algorithm, "Wrote checksum file");
        }
        Ok(())
    }

    fn mirror(&self, args: &MirrorArgs) -> Result<String, ApiError> {
        if !is_directory(&args.input)? {
            return Err(ApiError::InvalidArguments(format!(
                "Mirror source is not a directory: {}",
                args.input.display()
            )));
        }

        let entries = tree::list(&[&args.input], true)?;
        let mut root = entries.iter();
        let source_root = match root.next() {
            Some(entry) => entry.absolute_path.clone(),
            None => return Ok(String::new()),
        };

        create_dir(&args.output)?;
        let mut dirs = 0usize;
        let mut files = 0usize;

        for entry in root {
            let relative = entry
                .absolute_path
                .strip_prefix(&source_root)
                .map_err(|_| {
                    ApiError::InvalidArguments(format!(
                        "{} is outside {}",
                        entry.absolute_path.display(),
                        source_root.display()
                    ))
                })?;
            let target = args.output.join(relative);

            if entry.is_dir {
                create_dir(&target)?;
                dirs += 1;
            } else if args.with_files {
                if is_symlink(entry.path())? {
                    debug!(path = %entry.path().display(), "Skipping symbolic link");
                    continue;
                }
                debug!(from = %entry.path().display(), to = %target.display(), "Copying file");
                fs::copy(entry.path(), &target).map_err(|source| ApiError::Output {
                    path: target.clone(),
                    source,
                })?;
                files += 1;
            }
        }

        info!(
            source = %args.input.display(),
            target = %args.output.display(),
            dirs,
            files,
            "Mirror complete"
        );
        Ok(format!(
            "Mirrored {} directories and {} files into {}",
            dirs,
            files,
            args.output.display()
        ))
    }
}

/// `<prefix>.<algorithm>`, e.g. `checksums.sha256`
pub fn checksum_file_path(prefix: &Path, algorithm: Algorithm) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(".");
    name.push(algorithm.as_str());
    PathBuf::from(name)
}

fn is_symlink(path: &Path) -> Result<bool, ApiError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(metadata.file_type().is_symlink())
}

fn create_dir(path: &Path) -> Result<(), ApiError> {
    fs::create_dir_all(path).map_err(|source| ApiError::Output {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid_format(format: &str, expected: &str) -> ApiError {
    ApiError::InvalidArguments(format!(
        "Unknown format '{}' (expected {})",
        format, expected
    ))
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::File { .. } => "file.list",
        Commands::Hash(_) => "hash",
        Commands::Mirror(_) => "mirror",
        Commands::Config => "config",
        Commands::Version => "version",
    }
}
