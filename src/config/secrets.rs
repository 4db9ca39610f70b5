//! API key resolution.
//!
//! The key is never compiled in.  Lookup order:
//!
//! 1. `llm.api_key` in `settings.toml`
//! 2. the `COHERE_API_KEY` environment variable
//! 3. `COHERE_API_KEY = "..."` in `secrets.toml`

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::LlmConfig;

pub const API_KEY_ENV: &str = "COHERE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No key in settings, environment or secrets file.
    #[error("API key not found. Set llm.api_key, the COHERE_API_KEY environment variable, or add it to {0}.")]
    MissingApiKey(String),
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "COHERE_API_KEY")]
    cohere_api_key: Option<String>,
}

/// Resolve the API key using the process environment.
pub fn resolve_api_key(config: &LlmConfig, secrets_file: &Path) -> Result<String, ConfigError> {
    resolve_api_key_with(config, std::env::var(API_KEY_ENV).ok(), secrets_file)
}

/// Resolve the API key with an explicit environment value (useful for tests).
pub fn resolve_api_key_with(
    config: &LlmConfig,
    env_value: Option<String>,
    secrets_file: &Path,
) -> Result<String, ConfigError> {
    let non_empty = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    if let Some(key) = non_empty(config.api_key.clone()) {
        return Ok(key);
    }
    if let Some(key) = non_empty(env_value) {
        return Ok(key);
    }
    if let Some(key) = non_empty(read_secrets(secrets_file).cohere_api_key) {
        return Ok(key);
    }
    Err(ConfigError::MissingApiKey(secrets_file.display().to_string()))
}

fn read_secrets(path: &Path) -> SecretsFile {
    if !path.exists() {
        return SecretsFile::default();
    }
    match std::fs::read_to_string(path).map(|s| toml::from_str::<SecretsFile>(&s)) {
        Ok(Ok(secrets)) => secrets,
        Ok(Err(e)) => {
            log::warn!("Ignoring malformed secrets file {}: {e}", path.display());
            SecretsFile::default()
        }
        Err(e) => {
            log::warn!("Could not read secrets file {}: {e}", path.display());
            SecretsFile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn config_key_wins() {
        let dir = tempdir().expect("temp dir");
        let config = LlmConfig {
            api_key: Some("from-config".into()),
            ..LlmConfig::default()
        };
        let key = resolve_api_key_with(&config, Some("from-env".into()), &dir.path().join("s.toml"))
            .expect("key");
        assert_eq!(key, "from-config");
    }

    #[test]
    fn env_used_when_config_blank() {
        let dir = tempdir().expect("temp dir");
        let config = LlmConfig {
            api_key: Some("   ".into()),
            ..LlmConfig::default()
        };
        let key = resolve_api_key_with(&config, Some("from-env".into()), &dir.path().join("s.toml"))
            .expect("key");
        assert_eq!(key, "from-env");
    }

    #[test]
    fn secrets_file_is_last_resort() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "COHERE_API_KEY = \"from-file\"\n").expect("write");

        let key = resolve_api_key_with(&LlmConfig::default(), None, &path).expect("key");
        assert_eq!(key, "from-file");
    }

    #[test]
    fn missing_everywhere_is_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("secrets.toml");

        let err = resolve_api_key_with(&LlmConfig::default(), None, &path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
        assert!(err.to_string().contains("API key not found"));
    }

    #[test]
    fn malformed_secrets_file_counts_as_missing() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "COHERE_API_KEY = ").expect("write");

        assert!(resolve_api_key_with(&LlmConfig::default(), None, &path).is_err());
    }
}
