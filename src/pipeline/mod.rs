//! Pipeline orchestrator module for the sector mapper.
//!
//! This module wires static matching, AI classification and recommendation
//! merging, and defines the session/state types the UI keeps.
//!
//! # Architecture
//!
//! ```text
//! SectorMapperApp (egui, UI thread)
//!        │ PipelineCommand::Classify   (mpsc)
//!        ▼
//! PipelineOrchestrator::run()  ← async tokio task
//!        │ PipelineResult::{Started, Completed}   (mpsc)
//!        ▼
//! SectorMapperApp::poll_results(): every frame
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use sector_mapper::catalog::Catalog;
//! use sector_mapper::llm::DisabledClassifier;
//! use sector_mapper::pipeline::{PipelineCommand, PipelineOrchestrator};
//! use sector_mapper::recommend::ComplianceSource;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = Arc::new(Catalog::builtin());
//!     let compliance = ComplianceSource::new(catalog.cyber_act.clone(), None, ".".into());
//!     let orchestrator =
//!         PipelineOrchestrator::new(catalog, Arc::new(DisabledClassifier), compliance);
//!
//!     let (command_tx, command_rx) = mpsc::channel(16);
//!     let (result_tx, _result_rx) = mpsc::channel(16);
//!     tokio::spawn(orchestrator.run(command_rx, result_tx));
//!
//!     command_tx
//!         .send(PipelineCommand::Classify { org_name: "กองทัพบก".into() })
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{AnalysisReport, PipelineCommand, PipelineOrchestrator, PipelineResult};
pub use state::{PipelineState, Session};
