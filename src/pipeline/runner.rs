//! Pipeline orchestrator: static match → AI classification → merge.
//!
//! [`PipelineOrchestrator`] receives [`PipelineCommand`]s over a
//! `tokio::sync::mpsc` channel and answers each with a full
//! [`AnalysisReport`].  Requests are handled one at a time in arrival order.
//!
//! # Pipeline flow
//!
//! ```text
//! PipelineCommand::Classify { org_name }
//!   ├─▶ StaticMatcher::classify_result        (pure)
//!   ├─▶ SectorClassifier::classify            (HTTP, never fails when wrapped
//!   │                                           in FallbackClassifier)
//!   ├─▶ merge(static, ai)                     → Recommendation | NoSector
//!   └─▶ plan_supplements + ComplianceSource   → Cyber Act / BFSI tables
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::classify::{ClassificationResult, StaticMatcher};
use crate::llm::SectorClassifier;
use crate::recommend::{
    merge, plan_supplements, ComplianceSource, Recommendation, RecommendError, Supplement,
};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Commands sent from the UI thread to the orchestrator.
#[derive(Debug, Clone)]
pub enum PipelineCommand {
    Classify { org_name: String },
}

/// Events delivered from the orchestrator back to the UI.
#[derive(Debug, Clone)]
pub enum PipelineResult {
    /// The request was picked up.
    Started { org_name: String },
    /// The request finished.
    Completed(Box<AnalysisReport>),
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// Everything the result panel shows for one organisation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub org_name: String,
    /// Rule-based (official NCSA list) result.
    pub static_result: ClassificationResult,
    /// AI characterisation result.
    pub ai_result: ClassificationResult,
    pub recommendation: Result<Recommendation, RecommendError>,
    /// Supplementary compliance tables, in display order.
    pub supplements: Vec<Supplement>,
}

// ---------------------------------------------------------------------------
// PipelineOrchestrator
// ---------------------------------------------------------------------------

/// Drives the three classification steps for each request.
pub struct PipelineOrchestrator {
    catalog: Arc<Catalog>,
    matcher: StaticMatcher,
    classifier: Arc<dyn SectorClassifier>,
    compliance: ComplianceSource,
}

impl PipelineOrchestrator {
    /// * `catalog`   : read-only lookup tables.
    /// * `classifier`: AI backend (normally a `FallbackClassifier`).
    /// * `compliance`: where supplementary tables are read from.
    pub fn new(
        catalog: Arc<Catalog>,
        classifier: Arc<dyn SectorClassifier>,
        compliance: ComplianceSource,
    ) -> Self {
        let matcher = StaticMatcher::new(&catalog.reference);
        Self {
            catalog,
            matcher,
            classifier,
            compliance,
        }
    }

    /// Run the orchestrator until `command_rx` is closed.
    pub async fn run(
        self,
        mut command_rx: mpsc::Receiver<PipelineCommand>,
        result_tx: mpsc::Sender<PipelineResult>,
    ) {
        while let Some(cmd) = command_rx.recv().await {
            match cmd {
                PipelineCommand::Classify { org_name } => {
                    let _ = result_tx
                        .send(PipelineResult::Started {
                            org_name: org_name.clone(),
                        })
                        .await;

                    let report = self.analyse(&org_name).await;

                    if result_tx
                        .send(PipelineResult::Completed(Box::new(report)))
                        .await
                        .is_err()
                    {
                        log::debug!("pipeline: result receiver dropped");
                        break;
                    }
                }
            }
        }

        log::info!("pipeline: command channel closed, orchestrator shutting down");
    }

    /// Classify one organisation and build its report.
    pub async fn analyse(&self, org_name: &str) -> AnalysisReport {
        log::info!("pipeline: classifying organisation (len={})", org_name.len());

        let static_result = self.matcher.classify_result(org_name);

        let ai_result = match self.classifier.classify(org_name).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("pipeline: AI classification failed: {e}");
                ClassificationResult::none()
            }
        };

        let recommendation = merge(
            [static_result.sector.as_deref(), ai_result.sector.as_deref()],
            &self.catalog.sectors,
        );

        let supplements = match &recommendation {
            Ok(rec) => {
                let plan = plan_supplements(rec, org_name, &self.catalog.sub_industries);
                self.compliance.fetch_all(&plan)
            }
            Err(e) => {
                log::info!("pipeline: {e}");
                Vec::new()
            }
        };

        AnalysisReport {
            org_name: org_name.to_string(),
            static_result,
            ai_result,
            recommendation,
            supplements,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
