//! Config loading facade: resolves the config location and merges sources.

use super::merge::merge_policy;
use super::paths;
use super::sources::{config_file, environment};
use super::UnifilerConfig;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default location.
    pub fn load() -> Result<UnifilerConfig, ConfigError> {
        Self::load_with(true)
    }

    /// Load configuration; `use_fs = false` skips the config file entirely and
    /// forces portable mode.
    pub fn load_with(use_fs: bool) -> Result<UnifilerConfig, ConfigError> {
        let (file, is_portable) = paths::resolve_config_file(use_fs);
        let mut config = Self::build(use_fs, &file)?;
        config.is_portable = is_portable;
        Self::attach_location(&mut config, file);
        Ok(config)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<UnifilerConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = config_file::add_required_to_builder(builder, path);
        let builder = environment::add_to_builder(builder);

        let mut config: UnifilerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Self::attach_location(&mut config, path.to_path_buf());
        Ok(config)
    }

    /// Merge defaults, the YAML file at `file` (only if `use_fs` and it
    /// exists) and environment variables. Later sources win.
    pub fn build(use_fs: bool, file: &Path) -> Result<UnifilerConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if use_fs {
            builder = config_file::add_to_builder(builder, file);
        }
        builder = environment::add_to_builder(builder);

        let config: UnifilerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(config_file = %file.display(), use_fs, "Configuration built");
        Ok(config)
    }

    fn attach_location(config: &mut UnifilerConfig, file: PathBuf) {
        config.config_dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.config_file = file;
    }
}
