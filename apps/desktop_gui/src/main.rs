mod controller;
mod ui;

use eframe::egui;
use list_core::config::load_settings;
use tracing_subscriber::EnvFilter;

use crate::ui::ChecklistApp;

fn main() -> eframe::Result<()> {
    let loaded = load_settings();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "using default settings");
    }
    tracing::info!(
        seed = ?settings.shuffle_seed,
        highlight_ms = settings.highlight_ms,
        "starting checklist window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([360.0, 720.0])
            .with_min_inner_size([280.0, 400.0]),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(ChecklistApp::new(&settings)))),
    )
}
