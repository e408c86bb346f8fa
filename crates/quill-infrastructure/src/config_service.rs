//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the engine configuration
//! from the configuration file (~/.config/quill/config.toml).

use crate::paths::QuillPaths;
use quill_core::config::QuillConfig;
use quill_core::error::{QuillError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the engine configuration.
///
/// This implementation reads the configuration from config.toml and caches
/// it to avoid repeated file I/O operations. A missing file is created with
/// defaults; an unreadable or unparsable file falls back to defaults with a
/// warning so a broken config never takes the engine down.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<QuillConfig>>>,
    /// Explicit config file location; `None` resolves the platform default.
    config_path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService using the platform config location.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            config_path: None,
        }
    }

    /// Creates a ConfigService reading from an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            config_path: Some(config_path.into()),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> QuillConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "failed to load config, using defaults");
                QuillConfig::default()
            }
        };

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads QuillConfig from the config file, creating it with defaults
    /// when missing.
    fn load_config(&self) -> Result<QuillConfig> {
        let config_path = self.resolve_config_path()?;

        if !config_path.exists() {
            let default_config = QuillConfig::default();
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, toml::to_string(&default_config)?)?;
            return Ok(default_config);
        }

        let raw = std::fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn resolve_config_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => QuillPaths::config_file().map_err(|e| QuillError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
