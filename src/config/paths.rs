//! Where the sector mapper keeps its files on each platform.
//!
//! Config dir (settings, secrets, catalog override):
//!   Windows: %APPDATA%\sector-mapper\
//!   macOS:   ~/Library/Application Support/sector-mapper/
//!   Linux:   ~/.config/sector-mapper/
//!
//! Data dir (supplementary compliance CSV files):
//!   Windows: %LOCALAPPDATA%\sector-mapper\
//!   macOS:   ~/Library/Application Support/sector-mapper/
//!   Linux:   ~/.local/share/sector-mapper/

use std::path::PathBuf;

/// Resolved locations of every file the app reads.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`, `secrets.toml` and `catalog.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Full path to `secrets.toml` (API keys).
    pub secrets_file: PathBuf,
    /// Full path to the optional `catalog.toml` override.
    pub catalog_file: PathBuf,
    /// Directory searched for compliance CSV files.
    pub data_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "sector-mapper";

    /// Platform directories, or `./sector-mapper` when `dirs` has none.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        Self::rooted(config_dir, data_dir)
    }

    /// Build the layout under explicit directories (useful for tests).
    pub fn rooted(config_dir: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            settings_file: config_dir.join("settings.toml"),
            secrets_file: config_dir.join("secrets.toml"),
            catalog_file: config_dir.join("catalog.toml"),
            config_dir,
            data_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
