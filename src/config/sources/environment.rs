//! Environment variable source: UNIFILER_<SECTION>__<KEY>

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "UNIFILER";

/// Overlay environment variables on top of every other source.
///
/// Nested keys are separated by a double underscore so that field names
/// keep their single underscores: `UNIFILER_PATH__FFMPEG_PATH` sets
/// `path.ffmpeg_path`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
