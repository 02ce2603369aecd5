//! Export Module
//! Writes the filtered rows as CSV and the rendered charts as a PNG bundle.

use crate::charts::{RenderError, StaticChartRenderer, WordCloudLayout};
use crate::report::DemographicReport;
use log::{info, warn};
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] PolarsError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Summary error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Replace characters that cannot appear in a file name.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Download name for the filtered rows of `product`.
pub fn subset_file_name(product: &str) -> String {
    format!("{}_demographics.csv", file_safe(product))
}

/// The frame as comma-separated UTF-8 with a header row and no index column.
pub fn subset_to_csv(df: &DataFrame) -> Result<Vec<u8>, ExportError> {
    let mut df = df.clone();
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)?;
    Ok(buf)
}

pub fn write_subset_csv(df: &DataFrame, path: &Path) -> Result<(), ExportError> {
    let bytes = subset_to_csv(df)?;
    fs::write(path, bytes)?;
    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

/// What a chart bundle export produced.
#[derive(Debug, Default)]
pub struct BundleManifest {
    pub files: Vec<PathBuf>,
    /// Charts that could not be rendered, with the reason.
    pub skipped: Vec<String>,
}

/// Writes every chart of a report plus a JSON summary into a folder.
pub struct ChartBundle;

impl ChartBundle {
    pub fn write(report: &DemographicReport, dir: &Path) -> Result<BundleManifest, ExportError> {
        fs::create_dir_all(dir)?;
        let mut manifest = BundleManifest::default();

        for dist in &report.distributions {
            let name = format!("{}_distribution.png", dist.column.to_lowercase());
            match StaticChartRenderer::render_distribution(dist, &report.product) {
                Ok(img) => Self::save_png(&img, &dir.join(name), &mut manifest)?,
                Err(e) => Self::skip(&mut manifest, &name, &e),
            }
        }

        if let Some(tab) = &report.cross_tab {
            let name = "gender_vs_age_group_heatmap.png";
            match StaticChartRenderer::render_heatmap(tab, &report.product) {
                Ok(img) => Self::save_png(&img, &dir.join(name), &mut manifest)?,
                Err(e) => Self::skip(&mut manifest, name, &e),
            }
        }

        if let Some(freq) = report.ingredients.frequency() {
            let name = "top_ingredients.png";
            match StaticChartRenderer::render_top_ingredients(report.top_ingredients(), &report.product) {
                Ok(img) => Self::save_png(&img, &dir.join(name), &mut manifest)?,
                Err(e) => Self::skip(&mut manifest, name, &e),
            }

            let name = "word_cloud.png";
            match StaticChartRenderer::render_word_cloud(freq, &WordCloudLayout::default()) {
                Ok(img) => Self::save_png(&img, &dir.join(name), &mut manifest)?,
                Err(e) => Self::skip(&mut manifest, name, &e),
            }
        }

        let summary_path = dir.join(SUMMARY_FILE);
        fs::write(&summary_path, serde_json::to_vec_pretty(report)?)?;
        manifest.files.push(summary_path);

        info!(
            "Exported {} files to {} ({} charts skipped)",
            manifest.files.len(),
            dir.display(),
            manifest.skipped.len()
        );
        Ok(manifest)
    }

    fn save_png(
        img: &image::RgbImage,
        path: &Path,
        manifest: &mut BundleManifest,
    ) -> Result<(), ExportError> {
        let bytes = StaticChartRenderer::encode_png(img)?;
        fs::write(path, bytes)?;
        manifest.files.push(path.to_path_buf());
        Ok(())
    }

    fn skip(manifest: &mut BundleManifest, name: &str, err: &dyn std::fmt::Display) {
        warn!("Skipping {}: {}", name, err);
        manifest.skipped.push(format!("{}: {}", name, err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_follows_product() {
        assert_eq!(subset_file_name("Face Serum"), "Face Serum_demographics.csv");
    }

    #[test]
    fn file_name_strips_path_separators() {
        assert_eq!(subset_file_name("Oil/Balm"), "Oil_Balm_demographics.csv");
    }

    #[test]
    fn csv_has_header_and_no_index() {
        let df = df!(
            "Gender" => ["F", "M"],
            "Region" => ["North", "South"],
        )
        .unwrap();
        let text = String::from_utf8(subset_to_csv(&df).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Gender,Region", "F,North", "M,South"]);
    }
}
