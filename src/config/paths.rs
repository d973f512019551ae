//! Config location resolution and portable-mode detection

use crate::tree::path::absolute_path;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "unifiler.yml";
pub const PORTABLE_MARKER: &str = "unifiler.portable";
pub const LOG_FILE_NAME: &str = "unifiler.log";

/// Directory containing the running executable.
pub fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = absolute_path(&exe).ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Portable mode is signalled by a marker file next to the executable.
pub fn is_portable() -> bool {
    executable_dir()
        .map(|dir| is_portable_in(&dir))
        .unwrap_or(false)
}

pub fn is_portable_in(dir: &Path) -> bool {
    dir.join(PORTABLE_MARKER).is_file()
}

/// Per-user config file.
///
/// `$HOME/.config/unifiler/unifiler.yml` on Unix-likes (macOS included),
/// `%APPDATA%\Unifiler\unifiler.yml` on Windows.
pub fn user_config_file() -> Option<PathBuf> {
    if cfg!(windows) {
        BaseDirs::new().map(|dirs| {
            dirs.config_dir()
                .join("Unifiler")
                .join(CONFIG_FILE_NAME)
        })
    } else {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("unifiler")
                .join(CONFIG_FILE_NAME)
        })
    }
}

/// Resolve the config file location and whether portable mode is active.
///
/// Portable mode applies when file-system config is disabled or the portable
/// marker is present; the config then lives next to the executable.
pub fn resolve_config_file(use_fs: bool) -> (PathBuf, bool) {
    let portable = !use_fs || is_portable();

    let file = if portable {
        executable_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    } else {
        user_config_file()
    };

    (file.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)), portable)
}
