//! Configuration module for the sector mapper.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each subsystem,
//! `AppPaths` for cross-platform directories, TOML persistence via
//! `AppConfig::load` / `AppConfig::save`, and API key resolution.

pub mod paths;
pub mod secrets;
pub mod settings;

pub use paths::AppPaths;
pub use secrets::{resolve_api_key, resolve_api_key_with, ConfigError, API_KEY_ENV};
pub use settings::{AppConfig, DataConfig, LlmConfig, LlmProvider, UiConfig};
