//! CLI parse: clap types for Unifiler. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Unifiler CLI - file listing, hashing and directory mirroring
#[derive(Parser, Debug)]
#[command(name = "unifiler")]
#[command(about = "File-system bookkeeping: list trees, compute digests, mirror directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files and run in portable mode
    #[arg(long, global = true)]
    pub no_config_file: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// File listing commands
    File {
        #[command(subcommand)]
        command: FileCommands,
    },
    /// Compute digests of files in a single read pass per file
    Hash(HashArgs),
    /// Recreate the directory structure of a source under a target
    Mirror(MirrorArgs),
    /// Show the resolved configuration
    Config,
    /// Print the version string
    Version,
}

#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// List files and directories under the given roots
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Root files or directories
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Expand every directory level
    #[arg(short, long)]
    pub recursive: bool,

    /// Explicit depth bound; negative means unbounded (overrides --recursive)
    #[arg(long, allow_hyphen_values = true)]
    pub depth: Option<i32>,

    /// Show only non-directory entries
    #[arg(long)]
    pub files_only: bool,

    /// Output format (text, json or table)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files or directories to hash
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Digest algorithms (md5, sha1, sha256), comma separated
    #[arg(
        short = 'a',
        long = "algorithm",
        value_delimiter = ',',
        default_value = "sha256"
    )]
    pub algorithms: Vec<String>,

    /// Descend into subdirectories of directory inputs
    #[arg(short, long)]
    pub recursive: bool,

    /// Write one checksum file per algorithm as <prefix>.<algorithm>
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Abort on the first file that cannot be hashed
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Args, Debug)]
pub struct MirrorArgs {
    /// Source directory
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Target directory
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Copy regular files as well as directories
    #[arg(long)]
    pub with_files: bool,
}
