//! Static Chart Renderer
//! Draws report charts into in-memory images with plotters.
//!
//! Charts:
//! 1. Count bars per demographic column
//! 2. Gender vs age group heat map, cells annotated with percentages
//! 3. Top ingredients as horizontal bars, largest at the top
//! 4. Ingredient word cloud

use crate::charts::palette;
use crate::charts::wordcloud::{WordCloudError, WordCloudLayout};
use crate::report::{CrossTab, Distribution, IngredientCount, IngredientFrequency};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::io::Cursor;
use thiserror::Error;

const FONT: &str = "sans-serif";

pub const BAR_CHART_SIZE: (u32, u32) = (800, 600);
pub const HEATMAP_SIZE: (u32, u32) = (1000, 600);
pub const INGREDIENT_CHART_SIZE: (u32, u32) = (1000, 600);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("drawing error: {0}")]
    Draw(String),
    #[error("nothing to draw for {0}")]
    NoData(String),
    #[error("image buffer does not match {0}x{1}")]
    Buffer(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("word cloud: {0}")]
    WordCloud(#[from] WordCloudError),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

fn blank_buffer((w, h): (u32, u32)) -> Vec<u8> {
    vec![255; (w * h * 3) as usize]
}

fn into_image(buffer: Vec<u8>, (w, h): (u32, u32)) -> Result<RgbImage, RenderError> {
    RgbImage::from_raw(w, h, buffer).ok_or(RenderError::Buffer(w, h))
}

fn segment_label(labels: &[String], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Renders report charts to images.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Encode an image as PNG bytes.
    pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Count bars for one demographic column.
    pub fn render_distribution(dist: &Distribution, product: &str) -> Result<RgbImage, RenderError> {
        if dist.is_empty() {
            return Err(RenderError::NoData(dist.column.clone()));
        }

        let labels: Vec<String> = dist.shares.iter().map(|s| s.value.clone()).collect();
        let counts: Vec<u32> = dist.shares.iter().map(|s| s.count as u32).collect();
        let title = format!("{} Distribution for '{}'", dist.column, product);

        let size = BAR_CHART_SIZE;
        let mut buffer = blank_buffer(size);
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            root.fill(&WHITE)?;

            let n = labels.len() as i32;
            let y_max = counts.iter().copied().max().unwrap_or(0);
            let y_top = y_max + (y_max / 10).max(1);

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, (FONT, 20.0).into_font())
                .margin(15)
                .x_label_area_size(60)
                .y_label_area_size(50)
                .build_cartesian_2d((0..n).into_segmented(), 0u32..y_top)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(labels.len())
                .x_label_formatter(&|v| segment_label(&labels, v))
                .x_desc(dist.column.as_str())
                .y_desc("Count")
                .draw()?;

            chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
                let x = i as i32;
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(x), 0), (SegmentValue::Exact(x + 1), count)],
                    rgb(palette::set2(i)).filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            }))?;

            root.present()?;
        }
        into_image(buffer, size)
    }

    /// Annotated heat map of row-normalised percentages.
    pub fn render_heatmap(tab: &CrossTab, product: &str) -> Result<RgbImage, RenderError> {
        if tab.is_empty() || tab.columns.is_empty() {
            return Err(RenderError::NoData(format!(
                "{} vs {}",
                tab.row_column, tab.col_column
            )));
        }

        let size = HEATMAP_SIZE;
        let mut buffer = blank_buffer(size);
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            root.fill(&WHITE)?;
            Self::draw_heatmap(&root, tab, product, size)?;
            root.present()?;
        }
        into_image(buffer, size)
    }

    fn draw_heatmap(
        root: &DrawingArea<BitMapBackend, Shift>,
        tab: &CrossTab,
        product: &str,
        (w, h): (u32, u32),
    ) -> Result<(), RenderError> {
        let (left, top, right, bottom) = (120i32, 60i32, 30i32, 80i32);
        let n_rows = tab.rows.len() as i32;
        let n_cols = tab.columns.len() as i32;
        let cell_w = (w as i32 - left - right) / n_cols;
        let cell_h = (h as i32 - top - bottom) / n_rows;

        let centered = Pos::new(HPos::Center, VPos::Center);
        let title = format!("Gender vs Age Group Heatmap for '{}'", product);
        root.draw(&Text::new(
            title,
            (w as i32 / 2, top / 2),
            (FONT, 20.0).into_font().color(&BLACK).pos(centered),
        ))?;

        let (lo, hi) = tab
            .percents
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let span = if hi > lo { hi - lo } else { 1.0 };

        for (r, row) in tab.percents.iter().enumerate() {
            let y0 = top + r as i32 * cell_h;
            for (c, &pct) in row.iter().enumerate() {
                let x0 = left + c as i32 * cell_w;
                let fill = palette::yl_gn_bu((pct - lo) / span);
                root.draw(&Rectangle::new(
                    [(x0, y0), (x0 + cell_w, y0 + cell_h)],
                    rgb(fill).filled(),
                ))?;
                root.draw(&Text::new(
                    format!("{:.2}", pct),
                    (x0 + cell_w / 2, y0 + cell_h / 2),
                    (FONT, 14.0).into_font().color(&rgb(palette::text_on(fill))).pos(centered),
                ))?;
            }

            root.draw(&Text::new(
                tab.rows[r].clone(),
                (left - 10, y0 + cell_h / 2),
                (FONT, 14.0)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Right, VPos::Center)),
            ))?;
        }

        let grid_bottom = top + n_rows * cell_h;
        for (c, label) in tab.columns.iter().enumerate() {
            root.draw(&Text::new(
                label.clone(),
                (left + c as i32 * cell_w + cell_w / 2, grid_bottom + 10),
                (FONT, 14.0)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Top)),
            ))?;
        }

        root.draw(&Text::new(
            "Age Group",
            (left + n_cols * cell_w / 2, grid_bottom + 45),
            (FONT, 16.0).into_font().color(&BLACK).pos(centered),
        ))?;
        root.draw(&Text::new(
            "Gender",
            (20, top + n_rows * cell_h / 2),
            (FONT, 16.0).into_font().color(&BLACK).pos(centered),
        ))?;

        Ok(())
    }

    /// Horizontal bars of the top ingredients, largest count at the top.
    pub fn render_top_ingredients(
        top: &[IngredientCount],
        product: &str,
    ) -> Result<RgbImage, RenderError> {
        if top.is_empty() {
            return Err(RenderError::NoData("ingredients".to_string()));
        }

        let n = top.len() as i32;
        // Segment 0 is the bottom row, so the ranking is reversed
        let labels: Vec<String> = top.iter().rev().map(|c| c.ingredient.clone()).collect();
        let title = format!("Top 10 Trending Ingredients for '{}'", product);

        let size = INGREDIENT_CHART_SIZE;
        let mut buffer = blank_buffer(size);
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            root.fill(&WHITE)?;

            let x_max = top.iter().map(|c| c.count as u32).max().unwrap_or(0);
            let x_top = x_max + (x_max / 10).max(1);

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, (FONT, 20.0).into_font())
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(160)
                .build_cartesian_2d(0u32..x_top, (0..n).into_segmented())?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(labels.len())
                .y_label_formatter(&|v| segment_label(&labels, v))
                .x_desc("Count")
                .y_desc("Ingredient")
                .draw()?;

            chart.draw_series(top.iter().enumerate().map(|(rank, c)| {
                let y = n - 1 - rank as i32;
                let mut bar = Rectangle::new(
                    [(0, SegmentValue::Exact(y)), (c.count as u32, SegmentValue::Exact(y + 1))],
                    rgb(palette::viridis(rank, top.len())).filled(),
                );
                bar.set_margin(4, 4, 0, 0);
                bar
            }))?;

            root.present()?;
        }
        into_image(buffer, size)
    }

    /// Frequency-weighted word cloud on a white canvas.
    pub fn render_word_cloud(
        freq: &IngredientFrequency,
        layout: &WordCloudLayout,
    ) -> Result<RgbImage, WordCloudError> {
        if freq.is_empty() {
            return Err(WordCloudError::Empty);
        }

        let size = (layout.width, layout.height);
        let draw_err = |e: DrawingAreaErrorKind<_>| WordCloudError::Draw(e.to_string());

        let mut buffer = blank_buffer(size);
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let placed = layout.place(&freq.counts, |text, font_size| {
                let style = TextStyle::from((FONT, font_size as f64).into_font());
                root.estimate_text_size(text, &style)
                    .map_err(|e| WordCloudError::Font(e.to_string()))
            })?;

            if placed.is_empty() {
                return Err(WordCloudError::NothingPlaced(layout.width, layout.height));
            }

            for (rank, word) in placed.iter().enumerate() {
                let color = rgb(palette::viridis(rank % palette::VIRIDIS.len(), palette::VIRIDIS.len()));
                root.draw(&Text::new(
                    word.text.clone(),
                    (word.x, word.y),
                    (FONT, word.font_size as f64).into_font().color(&color),
                ))
                .map_err(draw_err)?;
            }

            root.present().map_err(draw_err)?;
        }

        RgbImage::from_raw(size.0, size.1, buffer)
            .ok_or_else(|| WordCloudError::Draw("image buffer size mismatch".to_string()))
    }
}
