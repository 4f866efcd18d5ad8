//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory.
//! The data directory (for saved reports) comes from `directories`.

use crate::compare::{Algorithm, CompareOptions};
use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOOKAHEAD, FALLBACK_DATA_DIR,
};
use crate::export::ExportOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = confy::load_path(path)?;
        info!("Load config from {:?}", path);
        Ok(Self { settings })
    }

    /// Like [`Config::load`], but falls back to defaults when the file is unusable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default settings: {}", e);
            Self::default()
        })
    }

    /// Save current configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, &self.settings)?;
        info!("Save config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Directory for saved reports: the configured one, else the platform
    /// data dir, else a local "data" directory
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.settings.output_dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(FALLBACK_DATA_DIR)
        }
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions::default()
            .with_lookahead(self.settings.lookahead)
            .with_algorithm(self.settings.algorithm)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Tokens scanned ahead on the other text at a mismatch
    #[serde(default = "default_lookahead")]
    pub lookahead: usize,

    #[serde(default)]
    pub algorithm: Algorithm,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Where saved reports go (platform data dir when unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub export: ExportOptions,
}

fn default_lookahead() -> usize {
    DEFAULT_LOOKAHEAD
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            algorithm: Algorithm::Greedy,
            color: true,
            output_dir: None,
            export: ExportOptions::default(),
        }
    }
}
