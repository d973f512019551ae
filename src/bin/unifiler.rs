//! Unifiler CLI Binary
//!
//! Command-line interface for the Unifiler file-system bookkeeping tool.

use chrono::Datelike;
use clap::Parser;
use std::process;
use tracing::{error, info};
use unifiler::cli::{map_error, Cli, RunContext};
use unifiler::config::{paths, ConfigLoader, UnifilerConfig};
use unifiler::error::{ApiError, ConfigError};
use unifiler::logging::{init_logging, resolve_log_file, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let loaded = load_config(&cli);

    // Build logging config from CLI args and the config file
    let logging_config = build_logging_config(&cli, loaded.as_ref().ok());

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let e = ApiError::from(e);
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    log_banner(&config);

    let context = RunContext::new(config);
    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<UnifilerConfig, ConfigError> {
    match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load_with(!cli.no_config_file),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, loaded: Option<&UnifilerConfig>) -> LoggingConfig {
    let mut config = loaded.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    if config.enabled && config.output == "file" {
        let config_dir = loaded
            .map(|c| c.config_dir.clone())
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        config.file = Some(resolve_log_file(&config, &config_dir));
    }

    config
}

fn log_banner(config: &UnifilerConfig) {
    info!(
        "Unifiler v{} (c) {} Unifiler authors",
        unifiler::version::version(),
        unifiler::version::build_date().year()
    );
    info!(
        working_dir = %std::env::current_dir().map(|p| p.display().to_string()).unwrap_or_default(),
        config_dir = %config.config_dir.display(),
        executable = %paths::executable_dir().map(|p| p.display().to_string()).unwrap_or_default(),
        portable = config.is_portable,
        "Environment"
    );
}
