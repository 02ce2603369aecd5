//! Trend Lens - Market Trend Analysis Dashboard
//!
//! Usage: `trend_lens <CSV>` or set `TREND_LENS_DATA`.

use clap::Parser;
use eframe::egui;
use log::info;
use trend_lens::config::AppConfig;
use trend_lens::gui::TrendLensApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::parse();
    info!("Starting with data source {}", config.data.display());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("📊 Market Trend Analysis"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Trend Lens",
        options,
        Box::new(move |cc| Ok(Box::new(TrendLensApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the dashboard: {}", e))
}
