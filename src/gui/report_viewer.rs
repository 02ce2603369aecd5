//! Report Viewer Widget
//! Central scrollable panel showing one demographic report section by section.

use crate::charts::{ChartPlotter, StaticChartRenderer, WordCloudLayout};
use crate::report::{DemographicReport, IngredientSection};
use egui::load::SizedTexture;
use egui::{Color32, RichText, ScrollArea};
use log::error;

const SECTION_SPACING: f32 = 18.0;
const WARNING_COLOR: Color32 = Color32::from_rgb(255, 193, 7);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

fn word_cloud_title(product: &str) -> String {
    format!("Word Cloud of Trending Ingredients for '{}'", product)
}

/// Displays the latest report. Replaced wholesale on every analysis.
#[derive(Default)]
pub struct ReportViewer {
    pub report: Option<DemographicReport>,
    /// Rendered once per report; holds the failure message otherwise.
    word_cloud: Option<Result<egui::TextureHandle, String>>,
}

impl ReportViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.report = None;
        self.word_cloud = None;
    }

    /// Show a new report, rendering its word cloud up front.
    pub fn set_report(&mut self, ctx: &egui::Context, report: DemographicReport) {
        self.word_cloud = report.ingredients.frequency().map(|freq| {
            StaticChartRenderer::render_word_cloud(freq, &WordCloudLayout::default())
                .map(|img| {
                    let size = [img.width() as usize, img.height() as usize];
                    let pixels = egui::ColorImage::from_rgb(size, img.as_raw());
                    ctx.load_texture("word_cloud", pixels, egui::TextureOptions::LINEAR)
                })
                .map_err(|e| {
                    error!("Error generating word cloud: {}", e);
                    format!("Error generating word cloud: {}", e)
                })
        });
        self.report = Some(report);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Select a product and press Analyze").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(RichText::new(report.headline()).size(22.0).strong());
                ui.add_space(SECTION_SPACING);

                for dist in &report.distributions {
                    ui.label(
                        RichText::new(format!("{} Distribution", dist.column))
                            .size(18.0)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ui.horizontal_top(|ui| {
                        ChartPlotter::draw_distribution_table(ui, dist);
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            ui.set_width(ui.available_width().min(640.0));
                            ChartPlotter::draw_count_bars(ui, dist);
                        });
                    });
                    ui.add_space(SECTION_SPACING);
                }

                if let Some(tab) = &report.cross_tab {
                    ui.label(
                        RichText::new(format!("Gender vs Age Group for '{}'", report.product))
                            .size(18.0)
                            .strong(),
                    );
                    ui.add_space(6.0);
                    ChartPlotter::draw_cross_tab_table(ui, tab);
                    ui.add_space(10.0);
                    ChartPlotter::draw_heatmap(ui, tab);
                    ui.add_space(SECTION_SPACING);
                }

                match &report.ingredients {
                    IngredientSection::Present(_) => {
                        ui.label(
                            RichText::new(format!(
                                "Trending Ingredients for '{}'",
                                report.product
                            ))
                            .size(18.0)
                            .strong(),
                        );
                        ui.add_space(6.0);
                        ui.label(RichText::new("Top 10 Trending Ingredients:").italics());

                        let top = report.top_ingredients();
                        ui.horizontal_top(|ui| {
                            ChartPlotter::draw_ingredient_table(ui, top);
                            ui.add_space(12.0);
                            ui.vertical(|ui| {
                                ui.set_width(ui.available_width().min(640.0));
                                ChartPlotter::draw_ingredient_bars(ui, top);
                            });
                        });

                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(word_cloud_title(&report.product))
                                .size(16.0)
                                .strong(),
                        );
                        ui.add_space(4.0);
                        match &self.word_cloud {
                            Some(Ok(texture)) => {
                                let sized = SizedTexture::new(texture.id(), texture.size_vec2());
                                ui.add(egui::Image::new(sized).max_width(ui.available_width()));
                            }
                            Some(Err(message)) => {
                                ui.label(RichText::new(message).color(ERROR_COLOR));
                            }
                            None => {}
                        }
                    }
                    IngredientSection::MissingColumn => {}
                }

                for warning in &report.warnings {
                    ui.label(RichText::new(format!("⚠ {}", warning)).color(WARNING_COLOR));
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_cloud_title_names_the_product() {
        assert_eq!(
            word_cloud_title("Serum"),
            "Word Cloud of Trending Ingredients for 'Serum'"
        );
    }

    #[test]
    fn new_viewer_has_no_report() {
        let mut viewer = ReportViewer::new();
        assert!(viewer.report.is_none());
        viewer.clear();
        assert!(viewer.word_cloud.is_none());
    }
}
