//! AI sector classification.
//!
//! This module provides:
//! * [`SectorClassifier`]: async trait implemented by all classifier backends.
//! * [`ApiClassifier`]: Cohere / OpenAI-compatible REST classifier.
//! * [`FallbackClassifier`]: wraps any classifier; "no classification" on failure.
//! * [`DisabledClassifier`]: used when AI classification is switched off.
//! * [`PromptBuilder`]: renders the fixed instruction template.
//! * [`parse_verdict`]: pulls the JSON verdict out of a free-form completion.
//! * [`LlmError`]: error variants for LLM operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use sector_mapper::catalog::SectorTable;
//! use sector_mapper::config::AppConfig;
//! use sector_mapper::llm::{ApiClassifier, FallbackClassifier, SectorClassifier};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let classifier = FallbackClassifier::new(ApiClassifier::from_config(
//!         &config.llm,
//!         "api-key".into(),
//!         SectorTable::builtin(),
//!     ));
//!
//!     let result = classifier.classify("Bangkok Bank").await.unwrap();
//!     println!("{:?}", result.sector);
//! }
//! ```

pub mod classifier;
pub mod fallback;
pub mod prompt;
pub mod response;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use classifier::{ApiClassifier, DisabledClassifier, LlmError, SectorClassifier};
pub use fallback::FallbackClassifier;
pub use prompt::PromptBuilder;
pub use response::{parse_verdict, strip_code_fences, SectorVerdict};
