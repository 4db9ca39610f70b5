//! Sector mapper form: egui/eframe application.
//!
//! # Architecture
//!
//! [`SectorMapperApp`] is the top-level [`eframe::App`].  It owns the
//! [`Session`] (search keyword, suggestions, selection) and two channel
//! endpoints:
//!
//! * `command_tx`: sends [`PipelineCommand`] to the orchestrator.
//! * `result_rx` : receives [`PipelineResult`] from the orchestrator.
//!
//! Suggestion search runs synchronously on the UI thread (pure lookup); only
//! classification goes through the pipeline.
//!
//! # Panels
//!
//! | State         | Visual                                         |
//! |---------------|------------------------------------------------|
//! | `Idle`        | Search field, suggestions / direct-classify    |
//! | `Classifying` | Spinner + "Running classification..."          |
//! | `Result`      | Rule-based / AI columns, recommendations       |
//! | `Error`       | Configuration error only: nothing else drawn  |

use std::path::Path;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::classify::{ClassificationResult, StaticMatcher};
use crate::pipeline::{AnalysisReport, PipelineCommand, PipelineResult, PipelineState, Session};
use crate::recommend::{Recommendation, Supplement, SupplementContent};

const GREEN: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);
const BLUE: egui::Color32 = egui::Color32::from_rgb(68, 136, 255);
const ORANGE: egui::Color32 = egui::Color32::from_rgb(255, 136, 68);
const RED: egui::Color32 = egui::Color32::from_rgb(255, 80, 80);
const DIM: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

// ---------------------------------------------------------------------------
// PipelineLink
// ---------------------------------------------------------------------------

/// Channel pair connecting the UI to the orchestrator task.
pub struct PipelineLink {
    pub command_tx: mpsc::Sender<PipelineCommand>,
    pub result_rx: mpsc::Receiver<PipelineResult>,
}

// ---------------------------------------------------------------------------
// SectorMapperApp
// ---------------------------------------------------------------------------

/// eframe application: the sector classification form.
pub struct SectorMapperApp {
    pub state: PipelineState,
    pub session: Session,
    /// Last completed report.
    pub report: Option<AnalysisReport>,
    /// Organisation currently being classified.
    pub in_flight: Option<String>,
    /// Fatal configuration error; when set nothing else is rendered.
    pub fatal_error: Option<String>,

    matcher: StaticMatcher,
    link: Option<PipelineLink>,
}

impl SectorMapperApp {
    pub fn new(matcher: StaticMatcher, link: PipelineLink) -> Self {
        Self {
            state: PipelineState::Idle,
            session: Session::new(),
            report: None,
            in_flight: None,
            fatal_error: None,
            matcher,
            link: Some(link),
        }
    }

    /// An app that only shows `message` (e.g. missing API key).
    pub fn with_fatal_error(matcher: StaticMatcher, message: impl Into<String>) -> Self {
        Self {
            state: PipelineState::Error,
            session: Session::new(),
            report: None,
            in_flight: None,
            fatal_error: Some(message.into()),
            matcher,
            link: None,
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// "Search for Suggestions" pressed.
    pub fn search(&mut self) {
        self.session.search(&self.matcher);
        self.report = None;
        if self.state == PipelineState::Result {
            self.state = PipelineState::Idle;
        }
    }

    /// Queue `org_name` for classification.
    pub fn request_classification(&mut self, org_name: String) {
        let Some(link) = &self.link else {
            return;
        };
        match link.command_tx.try_send(PipelineCommand::Classify {
            org_name: org_name.clone(),
        }) {
            Ok(()) => {
                self.state = PipelineState::Classifying;
                self.in_flight = Some(org_name);
                self.report = None;
            }
            Err(e) => log::warn!("Could not queue classification: {e}"),
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending pipeline results (non-blocking).
    pub fn poll_results(&mut self) {
        let Some(link) = &mut self.link else {
            return;
        };
        while let Ok(result) = link.result_rx.try_recv() {
            match result {
                PipelineResult::Started { org_name } => {
                    self.in_flight = Some(org_name);
                }
                PipelineResult::Completed(report) => {
                    self.in_flight = None;
                    self.report = Some(*report);
                    self.state = PipelineState::Result;
                }
            }
        }
    }

    // ── Panels ───────────────────────────────────────────────────────────

    fn draw_fatal(&self, ui: &mut egui::Ui) {
        let msg = self.fatal_error.as_deref().unwrap_or("Configuration error");
        ui.add_space(12.0);
        ui.label(egui::RichText::new(msg).color(RED).size(14.0));
    }

    fn draw_search(&mut self, ui: &mut egui::Ui) {
        ui.label("🔍 Enter a keyword to search for an organization:");
        let busy = self.state.is_busy();

        ui.horizontal(|ui| {
            let field = ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(&mut self.session.keyword).desired_width(420.0),
            );
            let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(!busy, egui::Button::new("Search for Suggestions"))
                .clicked();
            if clicked || enter {
                self.search();
            }
        });

        if self.session.no_match {
            ui.label(
                egui::RichText::new(
                    "No matches found in the static lists. You can classify the entered text directly.",
                )
                .color(BLUE),
            );
        }
    }

    fn draw_suggestions(&mut self, ui: &mut egui::Ui) {
        if self.session.suggestions.is_empty() {
            return;
        }
        ui.separator();
        ui.heading("📝 Suggestions from Static Lists");
        ui.label(
            egui::RichText::new("Click an organization to classify, or refine your search.")
                .color(DIM)
                .size(11.0),
        );

        let mut clicked = None;
        for org in &self.session.suggestions {
            if ui.button(org.as_str()).clicked() {
                clicked = Some(org.clone());
            }
        }
        if let Some(org) = clicked {
            let name = self.session.select(&org);
            self.request_classification(name);
        }
    }

    fn draw_direct_classify(&mut self, ui: &mut egui::Ui) {
        if self.state.is_busy() || !self.session.can_classify_directly() {
            return;
        }
        ui.separator();
        let label = format!("Classify '{}' directly with AI", self.session.keyword.trim());
        if ui.button(label).clicked() {
            if let Some(name) = self.session.classify_directly() {
                self.request_classification(name);
            }
        }
    }

    fn draw_classifying(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.horizontal(|ui| {
            ui.spinner();
            let name = self.in_flight.as_deref().unwrap_or_default();
            ui.label(
                egui::RichText::new(format!("Running classification for {name}..."))
                    .color(BLUE),
            );
        });
    }

    fn draw_report(&self, ui: &mut egui::Ui, report: &AnalysisReport) {
        ui.separator();
        ui.heading(format!("📊 Classification Analysis for: {}", report.org_name));
        ui.add_space(4.0);

        ui.columns(2, |cols| {
            cols[0].label(egui::RichText::new("📜 Rule-Based (Official)").strong());
            draw_classification(
                &mut cols[0],
                &report.static_result,
                GREEN,
                "Not found in predefined NCSA lists.",
                "No Match",
            );

            cols[1].label(egui::RichText::new("🤖 AI-Based (Characterization)").strong());
            draw_classification(
                &mut cols[1],
                &report.ai_result,
                BLUE,
                "AI could not determine a sector.",
                "No AI Classification",
            );
        });

        ui.separator();

        match &report.recommendation {
            Ok(rec) => {
                draw_recommendation(ui, rec);
                for (idx, supplement) in report.supplements.iter().enumerate() {
                    ui.separator();
                    draw_supplement(ui, idx, supplement);
                }
            }
            Err(e) => {
                ui.label(egui::RichText::new(e.to_string()).color(RED));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Free-standing renderers
// ---------------------------------------------------------------------------

fn draw_classification(
    ui: &mut egui::Ui,
    result: &ClassificationResult,
    color: egui::Color32,
    empty_caption: &str,
    empty_label: &str,
) {
    match &result.sector {
        Some(sector) => {
            ui.label(egui::RichText::new(sector.as_str()).color(color).strong());
            if let Some(reason) = &result.rationale {
                ui.label(egui::RichText::new(format!("Reason: {reason}")).color(DIM).size(11.0));
            }
        }
        None => {
            ui.label(egui::RichText::new(empty_label).color(ORANGE).strong());
            ui.label(egui::RichText::new(empty_caption).color(DIM).size(11.0));
        }
    }
}

fn draw_bullets(ui: &mut egui::Ui, title: &str, items: &[String]) {
    ui.label(egui::RichText::new(title).strong());
    for item in items {
        ui.label(format!("• {item}"));
    }
}

fn draw_recommendation(ui: &mut egui::Ui, rec: &Recommendation) {
    ui.heading("🌟 Unified Recommendations");
    ui.label(
        egui::RichText::new("Based on the combined analysis of both rule-based and AI classifications.")
            .color(DIM),
    );
    ui.label(egui::RichText::new(format!("Sectors: {}", rec.sectors.join(", "))).color(DIM));
    if rec.iso27001_expected {
        ui.label(egui::RichText::new("ISO/IEC 27001 certification expected").color(GREEN));
    }
    ui.add_space(4.0);

    ui.columns(2, |cols| {
        draw_bullets(&mut cols[0], "✅ Key Services", &rec.key_services);
        draw_bullets(&mut cols[1], "💡 Secondary Opportunities", &rec.secondary_opportunities);
    });
    ui.separator();
    ui.columns(2, |cols| {
        draw_bullets(&mut cols[0], "📋 Compliance Drivers", &rec.compliance_drivers);
        draw_bullets(&mut cols[1], "🏩 Sector Regulators", &rec.regulators);
    });
}

fn draw_supplement(ui: &mut egui::Ui, idx: usize, supplement: &Supplement) {
    ui.heading(format!("📑 {}", supplement.title));
    match &supplement.content {
        SupplementContent::Rows(rows) => {
            egui::Grid::new(("supplement", idx))
                .striped(true)
                .num_columns(3)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("มาตรา (Section)").strong());
                    ui.label(egui::RichText::new("หัวข้อกฎหมาย (โดยย่อ)").strong());
                    ui.label(egui::RichText::new("Cybersecurity Service Mapping").strong());
                    ui.end_row();
                    for row in rows {
                        ui.label(row.section.as_str());
                        ui.label(row.summary.as_str());
                        ui.label(row.service_mapping.as_str());
                        ui.end_row();
                    }
                });
        }
        SupplementContent::NotFound(path) => {
            ui.label(
                egui::RichText::new(format!("File not found: {}", path.display())).color(ORANGE),
            );
        }
        SupplementContent::Invalid { path, message } => {
            ui.label(
                egui::RichText::new(format!("Could not read {}: {message}", path.display()))
                    .color(ORANGE),
            );
        }
    }
}

/// Append a Thai-capable font to egui's fallback chain.
pub fn install_thai_font(ctx: &egui::Context, path: &Path) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "thai".to_owned(),
        std::sync::Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("thai".to_owned());
    }
    ctx.set_fonts(fonts);
    Ok(())
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for SectorMapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        if self.state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🧠 AI Sector Classifier + Service Recommendations");

            if self.state == PipelineState::Error {
                self.draw_fatal(ui);
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.draw_search(ui);
                self.draw_suggestions(ui);
                self.draw_direct_classify(ui);

                match self.state {
                    PipelineState::Classifying => self.draw_classifying(ui),
                    PipelineState::Result => {
                        if let Some(report) = &self.report {
                            self.draw_report(ui, report);
                        }
                    }
                    PipelineState::Idle | PipelineState::Error => {}
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Sector mapper closing");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
