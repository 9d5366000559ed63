//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::discovery;
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Root of the `artist/album/*.lrc` tree
    pub lyrics_root: PathBuf,
    /// Directory receiving the generated scene files
    pub output_dir: PathBuf,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Build a configuration for explicit directories.
    pub fn with_paths(lyrics_root: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            lyrics_root: lyrics_root.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_root: home.join(discovery::DEFAULT_LYRICS_DIR),
            output_dir: home.join(discovery::DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Some(root) = env_path(discovery::LYRICS_ROOT_VAR) {
            config.lyrics_root = root;
        }

        if let Some(out) = env_path(discovery::OUTPUT_DIR_VAR) {
            config.output_dir = out;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the lyrics root can be searched
    pub fn validate(&self) -> Result<()> {
        if !self.lyrics_root.is_dir() {
            return Err(Error::config(
                format!("lyrics root {} is not a directory", self.lyrics_root.display()),
                "Set LYRICS_ROOT to the folder containing <artist>/<album>/ subfolders",
            ));
        }
        Ok(())
    }
}

/// Read a path from the environment, expanding a leading `~`
fn env_path(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| PathBuf::from(shellexpand::tilde(&v).to_string()))
}
