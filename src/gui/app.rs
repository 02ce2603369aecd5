//! Trend Lens Main Application
//! Main window with control panel and report viewer.
//!
//! Everything runs on the UI thread: the dataset loads once at startup and
//! each analysis completes inside the frame that triggered it.

use crate::config::AppConfig;
use crate::data::columns::PREFERRED_PRODUCT_TYPE;
use crate::data::{DataLoader, LoaderError};
use crate::export::{self, ChartBundle};
use crate::gui::{ControlPanel, ControlPanelAction, ReportViewer, StatusKind};
use crate::report::{DemographicReporter, ReportOutcome};
use egui::{Color32, RichText, SidePanel};
use log::{error, info, warn};

/// Dataset lifecycle. `Failed` is terminal for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unloaded,
    Loaded,
    Failed(String),
}

/// Main application window.
pub struct TrendLensApp {
    loader: DataLoader,
    state: SessionState,
    control_panel: ControlPanel,
    report_viewer: ReportViewer,
}

impl TrendLensApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            state: SessionState::Unloaded,
            control_panel: ControlPanel::new(),
            report_viewer: ReportViewer::new(),
        };
        app.load(&config);
        app
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Load the configured dataset; any failure ends in `Failed`.
    fn load(&mut self, config: &AppConfig) {
        self.control_panel.data_path = Some(config.data.clone());

        let loaded = self.loader.load_csv(&config.data).map(|_| ());
        let result = loaded.and_then(|()| self.loader.require_column(PREFERRED_PRODUCT_TYPE));

        match result {
            Ok(()) => {
                let products = self.loader.unique_values(PREFERRED_PRODUCT_TYPE);
                self.control_panel.row_count = self.loader.row_count();
                self.control_panel.set_status(
                    StatusKind::Info,
                    &format!(
                        "Loaded {} rows, {} products",
                        self.loader.row_count(),
                        products.len()
                    ),
                );
                self.control_panel.update_products(products);
                self.state = SessionState::Loaded;
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, err: LoaderError) {
        error!("{}", err);
        self.control_panel.set_status(StatusKind::Error, &err.to_string());
        self.control_panel.analyze_enabled = false;
        self.state = SessionState::Failed(err.to_string());
    }

    fn handle_analyze(&mut self, ctx: &egui::Context) {
        let Some(df) = self.loader.dataframe() else {
            return;
        };
        let product = self.control_panel.selected_product.clone();

        match DemographicReporter::report(df, &product) {
            Ok(ReportOutcome::Ready(report)) => {
                let status = report.headline();
                self.report_viewer.set_report(ctx, *report);
                self.control_panel.set_status(StatusKind::Success, &status);
                self.control_panel.export_enabled = true;
            }
            Ok(outcome @ ReportOutcome::ProductNotFound { .. }) => {
                self.report_viewer.clear();
                self.control_panel.export_enabled = false;
                let message = outcome.warning().unwrap_or_default();
                self.control_panel.set_status(StatusKind::Warning, &message);
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                self.report_viewer.clear();
                self.control_panel.export_enabled = false;
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error: {}", e));
            }
        }
    }

    /// Save the filtered rows through a file dialog.
    fn handle_download_csv(&mut self) {
        let Some(report) = &self.report_viewer.report else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(export::subset_file_name(&report.product))
            .save_file()
        else {
            return; // User cancelled
        };

        match export::write_subset_csv(&report.subset, &path) {
            Ok(()) => self.control_panel.set_status(
                StatusKind::Success,
                &format!("Saved {}", path.display()),
            ),
            Err(e) => {
                error!("{}", e);
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error: {}", e));
            }
        }
    }

    /// Render every chart to PNG and write them with a summary into a folder.
    fn handle_export_charts(&mut self) {
        let Some(report) = &self.report_viewer.report else {
            return;
        };

        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        match ChartBundle::write(report, &dir) {
            Ok(manifest) => {
                let kind = if manifest.skipped.is_empty() {
                    StatusKind::Success
                } else {
                    StatusKind::Warning
                };
                self.control_panel.set_status(
                    kind,
                    &format!(
                        "Exported {} files ({} charts skipped)",
                        manifest.files.len(),
                        manifest.skipped.len()
                    ),
                );
                if let Err(e) = open::that(&dir) {
                    warn!("Could not open {}: {}", dir.display(), e);
                }
            }
            Err(e) => {
                error!("{}", e);
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Export error: {}", e));
            }
        }
    }
}

impl eframe::App for TrendLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::Analyze => {
                            info!(
                                "Analyze requested for '{}'",
                                self.control_panel.selected_product
                            );
                            self.handle_analyze(ctx);
                        }
                        ControlPanelAction::DownloadCsv => self.handle_download_csv(),
                        ControlPanelAction::ExportCharts => self.handle_export_charts(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Report Viewer
        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            SessionState::Failed(message) => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(message)
                            .size(18.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
            }
            SessionState::Unloaded => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
            SessionState::Loaded => self.report_viewer.show(ui),
        });
    }
}
