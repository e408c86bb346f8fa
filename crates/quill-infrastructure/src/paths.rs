//! Unified path management for Quill configuration files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Quill.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/quill/             # Config directory
/// └── config.toml              # Engine configuration
/// ```
///
/// The template catalog lives alongside the deployment (default
/// `templates/` in the working directory) and is configured via
/// `templates_dir` in config.toml rather than resolved here.
pub struct QuillPaths;

impl QuillPaths {
    /// Returns the Quill configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/quill/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("quill"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
