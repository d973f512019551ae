//! Configuration System
//!
//! Layered configuration: built-in defaults, then the YAML config file, then
//! `UNIFILER_` environment variables. The loaded value is passed explicitly to
//! whoever needs it; there is no process-wide instance.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifilerConfig {
    /// External tool locations
    #[serde(default)]
    pub path: PathConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Directory holding the config file (and the default log file)
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Resolved config file path, whether or not it exists
    #[serde(skip)]
    pub config_file: PathBuf,

    #[serde(skip)]
    pub is_portable: bool,
}

/// Locations of external media tools. Recorded for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    #[serde(default = "default_imagemagick_path")]
    pub imagemagick_path: String,

    #[serde(default = "default_mediainfo_path")]
    pub mediainfo_path: String,

    #[serde(default = "default_x264_path")]
    pub x264_path: String,

    #[serde(default = "default_x265_path")]
    pub x265_path: String,
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_imagemagick_path() -> String {
    "magick".to_string()
}

fn default_mediainfo_path() -> String {
    "mediainfo".to_string()
}

fn default_x264_path() -> String {
    "x264".to_string()
}

fn default_x265_path() -> String {
    "x265".to_string()
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            imagemagick_path: default_imagemagick_path(),
            mediainfo_path: default_mediainfo_path(),
            x264_path: default_x264_path(),
            x265_path: default_x265_path(),
        }
    }
}

impl PathConfig {
    /// Validate tool paths are not empty
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("ffmpeg_path", &self.ffmpeg_path),
            ("imagemagick_path", &self.imagemagick_path),
            ("mediainfo_path", &self.mediainfo_path),
            ("x264_path", &self.x264_path),
            ("x265_path", &self.x265_path),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(format!("path.{} cannot be empty", name));
            }
        }
        Ok(())
    }
}

impl Default for UnifilerConfig {
    fn default() -> Self {
        Self {
            path: PathConfig::default(),
            logging: LoggingConfig::default(),
            config_dir: PathBuf::from("."),
            config_file: PathBuf::from(paths::CONFIG_FILE_NAME),
            is_portable: false,
        }
    }
}

impl UnifilerConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.path.validate().map_err(ConfigError::Invalid)?;
        self.logging.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    /// Log file used when logging to a file and none is configured
    pub fn default_log_file(&self) -> PathBuf {
        self.config_dir.join(paths::LOG_FILE_NAME)
    }
}
