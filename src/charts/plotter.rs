//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::charts::palette;
use crate::report::{CrossTab, Distribution, IngredientCount};
use egui::{Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, Plot};

const TABLE_TEXT: f32 = 12.0;
const HEAT_CELL: egui::Vec2 = egui::vec2(90.0, 34.0);
const HEAT_ROW_LABEL_WIDTH: f32 = 80.0;

fn color((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Draws report sections inside egui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Two-column table: category value and its percentage.
    pub fn draw_distribution_table(ui: &mut egui::Ui, dist: &Distribution) {
        Self::framed(ui, |ui| {
            egui::Grid::new(ui.make_persistent_id(format!("dist_table_{}", dist.column)))
                .striped(true)
                .min_col_width(80.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new(&dist.column).strong().size(TABLE_TEXT));
                    ui.label(RichText::new("Count").strong().size(TABLE_TEXT));
                    ui.label(RichText::new("Percent").strong().size(TABLE_TEXT));
                    ui.end_row();

                    for share in &dist.shares {
                        ui.label(RichText::new(&share.value).size(TABLE_TEXT));
                        ui.label(RichText::new(share.count.to_string()).size(TABLE_TEXT));
                        ui.label(RichText::new(format!("{:.2}", share.percent)).size(TABLE_TEXT));
                        ui.end_row();
                    }
                });
        });
    }

    /// Vertical count bars, one per category.
    pub fn draw_count_bars(ui: &mut egui::Ui, dist: &Distribution) {
        let labels: Vec<String> = dist.shares.iter().map(|s| s.value.clone()).collect();

        let bars: Vec<Bar> = dist
            .shares
            .iter()
            .enumerate()
            .map(|(i, share)| {
                Bar::new(i as f64, share.count as f64)
                    .width(0.7)
                    .name(&share.value)
                    .fill(color(palette::set2(i)))
            })
            .collect();

        Plot::new(format!("count_bars_{}", dist.column))
            .height(260.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(dist.column.clone())
            .y_axis_label("Count")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Count"));
            });
    }

    /// Percentages of the cross-tabulation as a plain table.
    pub fn draw_cross_tab_table(ui: &mut egui::Ui, tab: &CrossTab) {
        Self::framed(ui, |ui| {
            egui::Grid::new(ui.make_persistent_id("cross_tab_table"))
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} \\ {}", tab.row_column, tab.col_column))
                            .strong()
                            .size(TABLE_TEXT),
                    );
                    for column in &tab.columns {
                        ui.label(RichText::new(column).strong().size(TABLE_TEXT));
                    }
                    ui.end_row();

                    for (row, percents) in tab.rows.iter().zip(&tab.percents) {
                        ui.label(RichText::new(row).size(TABLE_TEXT));
                        for pct in percents {
                            ui.label(RichText::new(format!("{:.2}", pct)).size(TABLE_TEXT));
                        }
                        ui.end_row();
                    }
                });
        });
    }

    /// Annotated heat map painted cell by cell.
    pub fn draw_heatmap(ui: &mut egui::Ui, tab: &CrossTab) {
        if tab.is_empty() || tab.columns.is_empty() {
            ui.label(RichText::new("No rows with both gender and age group").color(Color32::GRAY));
            return;
        }

        let (lo, hi) = tab
            .percents
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = if hi > lo { hi - lo } else { 1.0 };

        let width = HEAT_ROW_LABEL_WIDTH + HEAT_CELL.x * tab.columns.len() as f32;
        let height = HEAT_CELL.y * (tab.rows.len() + 1) as f32;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let font = FontId::proportional(13.0);

        for (r, row) in tab.percents.iter().enumerate() {
            let top = rect.top() + HEAT_CELL.y * r as f32;
            painter.text(
                egui::pos2(rect.left() + HEAT_ROW_LABEL_WIDTH - 8.0, top + HEAT_CELL.y / 2.0),
                Align2::RIGHT_CENTER,
                &tab.rows[r],
                font.clone(),
                text_color,
            );

            for (c, &pct) in row.iter().enumerate() {
                let min = egui::pos2(
                    rect.left() + HEAT_ROW_LABEL_WIDTH + HEAT_CELL.x * c as f32,
                    top,
                );
                let cell = egui::Rect::from_min_size(min, HEAT_CELL);
                let fill = palette::yl_gn_bu((pct - lo) / span);
                painter.rect_filled(cell, 0.0, color(fill));
                painter.text(
                    cell.center(),
                    Align2::CENTER_CENTER,
                    format!("{:.2}", pct),
                    font.clone(),
                    color(palette::text_on(fill)),
                );
            }
        }

        let label_top = rect.top() + HEAT_CELL.y * tab.rows.len() as f32;
        for (c, column) in tab.columns.iter().enumerate() {
            let x = rect.left() + HEAT_ROW_LABEL_WIDTH + HEAT_CELL.x * (c as f32 + 0.5);
            painter.text(
                egui::pos2(x, label_top + HEAT_CELL.y / 2.0),
                Align2::CENTER_CENTER,
                column,
                font.clone(),
                text_color,
            );
        }
    }

    /// Ranked ingredient table.
    pub fn draw_ingredient_table(ui: &mut egui::Ui, top: &[IngredientCount]) {
        Self::framed(ui, |ui| {
            egui::Grid::new(ui.make_persistent_id("ingredient_table"))
                .striped(true)
                .min_col_width(40.0)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("#").strong().size(TABLE_TEXT));
                    ui.label(RichText::new("Ingredient").strong().size(TABLE_TEXT));
                    ui.label(RichText::new("Count").strong().size(TABLE_TEXT));
                    ui.end_row();

                    for (rank, item) in top.iter().enumerate() {
                        ui.label(RichText::new((rank + 1).to_string()).size(TABLE_TEXT));
                        ui.label(RichText::new(&item.ingredient).size(TABLE_TEXT));
                        ui.label(RichText::new(item.count.to_string()).size(TABLE_TEXT));
                        ui.end_row();
                    }
                });
        });
    }

    /// Horizontal bars ordered by count, most frequent on top.
    pub fn draw_ingredient_bars(ui: &mut egui::Ui, top: &[IngredientCount]) {
        let n = top.len();
        // Bar at y = n - 1 is drawn highest
        let labels: Vec<String> = top.iter().rev().map(|c| c.ingredient.clone()).collect();

        let bars: Vec<Bar> = top
            .iter()
            .enumerate()
            .map(|(rank, item)| {
                Bar::new((n - 1 - rank) as f64, item.count as f64)
                    .width(0.7)
                    .name(&item.ingredient)
                    .fill(color(palette::viridis(rank, n)))
            })
            .collect();

        Plot::new("ingredient_bars")
            .height(300.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Count")
            .y_axis_label("Ingredient")
            .include_x(0.0)
            .y_axis_min_width(90.0)
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Count"));
            });
    }

    fn framed(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, add_contents);
    }
}
