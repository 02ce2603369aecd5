//! Control Panel Widget
//! Left side panel with the product selector and action buttons.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Left side control panel.
pub struct ControlPanel {
    pub data_path: Option<PathBuf>,
    pub products: Vec<String>,
    pub selected_product: String,
    pub row_count: usize,
    pub status: String,
    pub status_kind: StatusKind,
    pub analyze_enabled: bool,
    pub export_enabled: bool,
}

/// How the status line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            data_path: None,
            products: Vec::new(),
            selected_product: String::new(),
            row_count: 0,
            status: "Ready".to_string(),
            status_kind: StatusKind::Info,
            analyze_enabled: false,
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the selector after the dataset loads.
    pub fn update_products(&mut self, products: Vec<String>) {
        if !products.contains(&self.selected_product) {
            self.selected_product = products.first().cloned().unwrap_or_default();
        }
        self.analyze_enabled = !products.is_empty();
        self.products = products;
    }

    pub fn set_status(&mut self, kind: StatusKind, status: &str) {
        self.status_kind = kind;
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Market Trend Analysis")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = self
                    .data_path
                    .as_ref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file".to_string());
                ui.label(RichText::new(&path_text).size(12.0));
                ui.label(
                    RichText::new(format!("{} rows", self.row_count))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Product Section =====
        ui.label(RichText::new("🧴 Product Analysis").size(14.0).strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_sized([110.0, 20.0], egui::Label::new("Select Product:"));
            ComboBox::from_id_salt("product_select")
                .width(160.0)
                .selected_text(self.selected_product.as_str())
                .show_ui(ui, |ui| {
                    for product in &self.products {
                        ui.selectable_value(&mut self.selected_product, product.clone(), product.as_str());
                    }
                });
        });

        ui.add_space(15.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.analyze_enabled, |ui| {
                let button = egui::Button::new(RichText::new("▶ Analyze").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Analyze;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.export_enabled, |ui| {
                let csv_button =
                    egui::Button::new(RichText::new("⬇ Download Data as CSV").size(14.0))
                        .min_size(egui::vec2(200.0, 30.0));
                if ui.add(csv_button).clicked() {
                    action = ControlPanelAction::DownloadCsv;
                }

                ui.add_space(4.0);

                let charts_button = egui::Button::new(RichText::new("🖼 Export Charts").size(14.0))
                    .min_size(egui::vec2(200.0, 30.0));
                if ui.add(charts_button).clicked() {
                    action = ControlPanelAction::ExportCharts;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = match self.status_kind {
            StatusKind::Info => Color32::GRAY,
            StatusKind::Success => Color32::from_rgb(40, 167, 69),
            StatusKind::Warning => Color32::from_rgb(255, 193, 7),
            StatusKind::Error => Color32::from_rgb(220, 53, 69),
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Analyze,
    DownloadCsv,
    ExportCharts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_defaults_to_first_product() {
        let mut panel = ControlPanel::new();
        panel.update_products(vec!["Serum".into(), "Cream".into()]);
        assert_eq!(panel.selected_product, "Serum");
        assert!(panel.analyze_enabled);
    }

    #[test]
    fn selector_keeps_existing_choice() {
        let mut panel = ControlPanel::new();
        panel.selected_product = "Cream".into();
        panel.update_products(vec!["Serum".into(), "Cream".into()]);
        assert_eq!(panel.selected_product, "Cream");
    }

    #[test]
    fn empty_dataset_disables_analysis() {
        let mut panel = ControlPanel::new();
        panel.update_products(Vec::new());
        assert!(!panel.analyze_enabled);
        assert!(panel.selected_product.is_empty());
    }
}
