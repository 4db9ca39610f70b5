//! Application entry point: Sector Mapper.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the [`Catalog`] (built-in tables unless `catalog.toml` exists).
//! 4. Resolve the API key and build the AI classifier.  A missing key is a
//!    fatal configuration error: the window opens showing only that error.
//! 5. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 6. Create pipeline channels (`command`, `result`).
//! 7. Spawn the pipeline orchestrator on the tokio runtime.
//! 8. Run [`eframe::run_native`]: blocks the main thread until the window
//!    is closed.

use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;

use sector_mapper::{
    app::{install_thai_font, PipelineLink, SectorMapperApp},
    catalog::Catalog,
    classify::StaticMatcher,
    config::{resolve_api_key, AppConfig, AppPaths},
    llm::{ApiClassifier, DisabledClassifier, FallbackClassifier, SectorClassifier},
    pipeline::{PipelineCommand, PipelineOrchestrator, PipelineResult},
    recommend::ComplianceSource,
};

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let (w, h) = config.ui.window_size;
    let vp = egui::ViewportBuilder::default()
        .with_inner_size([w, h])
        .with_min_inner_size([480.0, 360.0]);

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

/// Build the AI backend.  `Err` carries the message for the error panel.
fn build_classifier(
    config: &AppConfig,
    paths: &AppPaths,
    catalog: &Catalog,
) -> Result<Arc<dyn SectorClassifier>, String> {
    if !config.llm.enabled {
        log::info!("AI classification disabled in config");
        return Ok(Arc::new(DisabledClassifier));
    }

    let api_key = resolve_api_key(&config.llm, &paths.secrets_file).map_err(|e| e.to_string())?;
    log::info!(
        "AI classifier: {:?} at {} (model {})",
        config.llm.provider,
        config.llm.base_url,
        config.llm.model
    );
    Ok(Arc::new(FallbackClassifier::new(ApiClassifier::from_config(
        &config.llm,
        api_key,
        catalog.sectors.clone(),
    ))))
}

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sector mapper starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    let paths = AppPaths::new();

    // 3. Catalog
    let catalog_file = config.data.catalog_file_or(&paths);
    let catalog = Catalog::load_from(&catalog_file).unwrap_or_else(|e| {
        log::warn!(
            "Failed to load catalog {} ({e}); using built-in tables",
            catalog_file.display()
        );
        Catalog::builtin()
    });
    let catalog = Arc::new(catalog);
    let matcher = StaticMatcher::new(&catalog.reference);
    let thai_font = config.ui.thai_font.clone();
    let options = native_options(&config);

    // 4. AI classifier
    let classifier = match build_classifier(&config, &paths, &catalog) {
        Ok(c) => c,
        Err(message) => {
            log::error!("{message}");
            let app = SectorMapperApp::with_fatal_error(matcher, message);
            return eframe::run_native(
                "Sector Mapper",
                options,
                Box::new(move |cc| {
                    load_font(&cc.egui_ctx, thai_font.as_deref());
                    Ok(Box::new(app))
                }),
            );
        }
    };

    // 5. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    // 6. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<PipelineCommand>(16);
    let (result_tx, result_rx) = mpsc::channel::<PipelineResult>(32);

    // 7. Orchestrator
    let compliance = ComplianceSource::new(
        catalog.cyber_act.clone(),
        config.data.cyber_act_csv.clone(),
        config.data.data_dir_or(&paths),
    );
    let orchestrator = PipelineOrchestrator::new(Arc::clone(&catalog), classifier, compliance);
    rt.spawn(orchestrator.run(command_rx, result_tx));

    // 8. UI (blocks until the window is closed)
    let app = SectorMapperApp::new(
        matcher,
        PipelineLink {
            command_tx,
            result_rx,
        },
    );

    eframe::run_native(
        "Sector Mapper",
        options,
        Box::new(move |cc| {
            load_font(&cc.egui_ctx, thai_font.as_deref());
            Ok(Box::new(app))
        }),
    )
}

fn load_font(ctx: &egui::Context, path: Option<&std::path::Path>) {
    let Some(path) = path else {
        return;
    };
    match install_thai_font(ctx, path) {
        Ok(()) => log::info!("Loaded Thai font {}", path.display()),
        Err(e) => log::warn!("Could not load Thai font {} ({e})", path.display()),
    }
}
