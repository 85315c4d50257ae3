//! Configuration management for valbar.

mod preferences;
mod settings;

#[cfg(test)]
pub use preferences::MockPreferenceStore;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use settings::{ApiConfig, Config, KeyBindings, Palette, ThemeConfig, UiConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "valbar", "valbar")
        .ok_or_else(|| Error::config("Could not determine home directory"))
}

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path.
pub fn data_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
