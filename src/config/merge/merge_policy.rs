//! Merge rules: defaults first, then the config file, then the environment.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("path.ffmpeg_path", "ffmpeg")?
        .set_default("path.imagemagick_path", "magick")?
        .set_default("path.mediainfo_path", "mediainfo")?
        .set_default("path.x264_path", "x264")?
        .set_default("path.x265_path", "x265")
}
