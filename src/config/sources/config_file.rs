//! YAML config file source: unifiler.yml in the resolved config directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

/// Add the config file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    config_file: &Path,
) -> ConfigBuilder<DefaultState> {
    if !config_file.is_file() {
        debug!(config_file = %config_file.display(), "Config file not found, using defaults");
        return builder;
    }

    let canonical = dunce::canonicalize(config_file).unwrap_or_else(|_| config_file.to_path_buf());
    builder.add_source(File::from(canonical).format(FileFormat::Yaml).required(false))
}

/// Add a config file that must exist.
pub fn add_required_to_builder(
    builder: ConfigBuilder<DefaultState>,
    config_file: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        File::from(config_file.to_path_buf())
            .format(FileFormat::Yaml)
            .required(true),
    )
}
