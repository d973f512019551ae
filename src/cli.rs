//! CLI domain: parse, route, output and presentation only.
//! Composition of the enumerator and the hasher happens in the route table.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, FileCommands, HashArgs, ListArgs, MirrorArgs};
pub use presentation::{
    format_config_text, format_entries_json, format_entries_table, format_entries_text,
    format_hash_json, format_hash_text, HashFailure, HashReport,
};
pub use route::{checksum_file_path, RunContext};
