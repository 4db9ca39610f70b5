//! `settings.toml`: AI endpoint, data locations and window options.
//!
//! Every section is `#[serde(default)]`, so a partial file fills the gaps
//! from the defaults below.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// LlmProvider
// ---------------------------------------------------------------------------

/// Wire format spoken by the text-generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// Cohere chat API (`/v1/chat`, completion in `text`).
    Cohere,
    /// Any OpenAI-compatible `/v1/chat/completions` endpoint.
    OpenAiCompatible,
}

impl Default for LlmProvider {
    fn default() -> Self {
        Self::Cohere
    }
}

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the AI sector classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Whether AI classification runs at all.  When `false` only the static
    /// matcher contributes a sector and no API key is required.
    pub enabled: bool,
    /// Which wire format to use.
    pub provider: LlmProvider,
    /// Base URL of the API endpoint.
    ///
    /// - Cohere: `https://api.cohere.ai`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key.  When `None` the key is taken from the `COHERE_API_KEY`
    /// environment variable or `secrets.toml`.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Maximum seconds to wait for a response before giving up.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: LlmProvider::default(),
            base_url: "https://api.cohere.ai".into(),
            api_key: None,
            model: "command-r-plus".into(),
            temperature: 0.3,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// DataConfig
// ---------------------------------------------------------------------------

/// Where optional reference data is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Catalog override; defaults to `catalog.toml` in the config dir.
    pub catalog_file: Option<PathBuf>,
    /// Directory holding the `bfsi_*.csv` files; defaults to the app data dir.
    pub data_dir: Option<PathBuf>,
    /// CSV replacing the built-in Cybersecurity Act mapping rows.
    pub cyber_act_csv: Option<PathBuf>,
}

impl DataConfig {
    pub fn catalog_file_or(&self, paths: &AppPaths) -> PathBuf {
        self.catalog_file
            .clone()
            .unwrap_or_else(|| paths.catalog_file.clone())
    }

    pub fn data_dir_or(&self, paths: &AppPaths) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| paths.data_dir.clone())
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Window and rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window size `(width, height)` in points.
    pub window_size: (f32, f32),
    /// TTF/OTF font with Thai glyphs, appended to egui's font fallbacks.
    pub thai_font: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_size: (960.0, 720.0),
            thai_font: None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use sector_mapper::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub data: DataConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert!(cfg.llm.enabled);
        assert_eq!(cfg.llm.provider, LlmProvider::Cohere);
        assert_eq!(cfg.llm.base_url, "https://api.cohere.ai");
        assert_eq!(cfg.llm.model, "command-r-plus");
        assert!((cfg.llm.temperature - 0.3).abs() < f32::EPSILON);
        assert!(cfg.llm.api_key.is_none());
        assert!(cfg.data.cyber_act_csv.is_none());
        assert!(cfg.ui.thai_font.is_none());
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config.llm.model, AppConfig::default().llm.model);
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.llm.provider = LlmProvider::OpenAiCompatible;
        cfg.llm.base_url = "https://api.openai.com".into();
        cfg.llm.api_key = Some("sk-test".into());
        cfg.llm.model = "gpt-4o-mini".into();
        cfg.llm.timeout_secs = 15;
        cfg.data.data_dir = Some(PathBuf::from("/srv/mapping"));
        cfg.ui.window_size = (1200.0, 800.0);

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.llm.provider, LlmProvider::OpenAiCompatible);
        assert_eq!(loaded.llm.base_url, "https://api.openai.com");
        assert_eq!(loaded.llm.api_key, Some("sk-test".into()));
        assert_eq!(loaded.llm.model, "gpt-4o-mini");
        assert_eq!(loaded.llm.timeout_secs, 15);
        assert_eq!(loaded.data.data_dir, Some(PathBuf::from("/srv/mapping")));
        assert_eq!(loaded.ui.window_size, (1200.0, 800.0));
    }

    #[test]
    fn partial_file_fills_remaining_sections() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[data]
cyber_act_csv = "/srv/cyber_act.csv"
"#,
        )
        .expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg.data.cyber_act_csv, Some(PathBuf::from("/srv/cyber_act.csv")));
        assert_eq!(cfg.llm.model, "command-r-plus");
    }

    #[test]
    fn provider_is_snake_case_in_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
[llm]
provider = "open_ai_compatible"
base_url = "http://localhost:8080"
"#,
        )
        .expect("parse");
        assert_eq!(cfg.llm.provider, LlmProvider::OpenAiCompatible);
        assert_eq!(cfg.llm.temperature, 0.3);
    }

    #[test]
    fn data_paths_fall_back_to_app_paths() {
        let paths = AppPaths::rooted(PathBuf::from("/cfg"), PathBuf::from("/data"));
        let data = DataConfig::default();
        assert_eq!(data.catalog_file_or(&paths), PathBuf::from("/cfg/catalog.toml"));
        assert_eq!(data.data_dir_or(&paths), PathBuf::from("/data"));
    }
}
