//! Word Cloud Layout
//! Frequency-weighted placement of words on a fixed canvas.
//!
//! Words are placed largest first along an Archimedean spiral that starts at
//! the canvas centre. A word that fits nowhere is dropped. Text measurement is
//! supplied by the caller so the layout does not depend on a font backend.

use crate::report::IngredientCount;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCloudError {
    #[error("no ingredients to draw")]
    Empty,
    #[error("no word fits on a {0}x{1} canvas")]
    NothingPlaced(u32, u32),
    #[error("font error: {0}")]
    Font(String),
    #[error("drawing error: {0}")]
    Draw(String),
}

/// A word with its final position (top-left corner) and size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: i32, y: i32, w: u32, h: u32, pad: i32) -> bool {
        x < self.x + self.width as i32 + pad
            && self.x < x + w as i32 + pad
            && y < self.y + self.height as i32 + pad
            && self.y < y + h as i32 + pad
    }
}

#[derive(Debug, Clone)]
pub struct WordCloudLayout {
    pub width: u32,
    pub height: u32,
    pub min_font: u32,
    pub max_font: u32,
    pub max_words: usize,
    /// Gap kept between neighbouring words.
    pub padding: i32,
}

impl Default for WordCloudLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            min_font: 14,
            max_font: 90,
            max_words: 200,
            padding: 2,
        }
    }
}

impl WordCloudLayout {
    /// Font size for a word seen `count` times when the most frequent word
    /// was seen `max_count` times.
    pub fn font_size(&self, count: usize, max_count: usize) -> u32 {
        if max_count == 0 {
            return self.min_font;
        }
        let ratio = count as f64 / max_count as f64;
        let span = self.max_font.saturating_sub(self.min_font) as f64;
        self.min_font + (span * ratio).round() as u32
    }

    /// Place `words`, measuring each candidate with `measure(text, font_size)`.
    pub fn place<F, E>(&self, words: &[IngredientCount], mut measure: F) -> Result<Vec<PlacedWord>, E>
    where
        F: FnMut(&str, u32) -> Result<(u32, u32), E>,
    {
        let mut ordered: Vec<&IngredientCount> = words.iter().filter(|w| w.count > 0).collect();
        ordered.sort_by(|a, b| b.count.cmp(&a.count));
        let max_count = ordered.first().map(|w| w.count).unwrap_or(0);

        let mut placed: Vec<PlacedWord> = Vec::new();
        for word in ordered.into_iter().take(self.max_words) {
            let font_size = self.font_size(word.count, max_count);
            let (w, h) = measure(&word.ingredient, font_size)?;
            if w > self.width || h > self.height {
                continue;
            }

            if let Some((x, y)) = self.find_slot(&placed, w, h) {
                placed.push(PlacedWord {
                    text: word.ingredient.clone(),
                    count: word.count,
                    font_size,
                    x,
                    y,
                    width: w,
                    height: h,
                });
            }
        }

        Ok(placed)
    }

    /// Walk the spiral outwards until a free, in-bounds slot turns up.
    fn find_slot(&self, placed: &[PlacedWord], w: u32, h: u32) -> Option<(i32, i32)> {
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        let aspect = self.height as f64 / self.width as f64;
        let max_radius = (cx * cx + cy * cy).sqrt();

        let step = 0.1_f64;
        let growth = 1.5_f64;
        let mut t = 0.0_f64;

        while growth * t <= max_radius {
            let r = growth * t;
            let x = (cx + r * t.cos() - w as f64 / 2.0).round() as i32;
            let y = (cy + r * t.sin() * aspect - h as f64 / 2.0).round() as i32;
            t += step;

            if x < 0 || y < 0 || x + w as i32 > self.width as i32 || y + h as i32 > self.height as i32
            {
                continue;
            }
            if placed.iter().any(|p| p.overlaps(x, y, w, h, self.padding)) {
                continue;
            }
            return Some((x, y));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn words(pairs: &[(&str, usize)]) -> Vec<IngredientCount> {
        pairs
            .iter()
            .map(|(w, c)| IngredientCount {
                ingredient: w.to_string(),
                count: *c,
            })
            .collect()
    }

    fn measure(text: &str, size: u32) -> Result<(u32, u32), Infallible> {
        Ok(((text.len() as u32 * size * 6) / 10, size))
    }

    #[test]
    fn most_frequent_word_gets_largest_font() {
        let layout = WordCloudLayout::default();
        let placed = layout
            .place(&words(&[("mint", 1), ("aloe", 4), ("rose", 2)]), measure)
            .unwrap();

        assert_eq!(placed[0].text, "aloe");
        assert_eq!(placed[0].font_size, layout.max_font);
        assert!(placed.iter().all(|p| p.font_size <= placed[0].font_size));
    }

    #[test]
    fn words_stay_inside_canvas_without_overlap() {
        let layout = WordCloudLayout::default();
        let input: Vec<(String, usize)> = (0..40).map(|i| (format!("word{}", i), 40 - i)).collect();
        let input: Vec<(&str, usize)> = input.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        let placed = layout.place(&words(&input), measure).unwrap();

        assert!(!placed.is_empty());
        for (i, a) in placed.iter().enumerate() {
            assert!(a.x >= 0 && a.y >= 0);
            assert!(a.x + a.width as i32 <= layout.width as i32);
            assert!(a.y + a.height as i32 <= layout.height as i32);
            for b in &placed[i + 1..] {
                assert!(!a.overlaps(b.x, b.y, b.width, b.height, 0), "{} overlaps {}", a.text, b.text);
            }
        }
    }

    #[test]
    fn oversized_words_are_dropped() {
        let layout = WordCloudLayout {
            width: 50,
            height: 20,
            ..WordCloudLayout::default()
        };
        let placed = layout.place(&words(&[("eucalyptus", 3)]), measure).unwrap();
        assert!(placed.is_empty());
    }

    #[test]
    fn font_size_scales_linearly() {
        let layout = WordCloudLayout {
            min_font: 10,
            max_font: 50,
            ..WordCloudLayout::default()
        };
        assert_eq!(layout.font_size(4, 4), 50);
        assert_eq!(layout.font_size(2, 4), 30);
        assert_eq!(layout.font_size(0, 4), 10);
        assert_eq!(layout.font_size(1, 0), 10);
    }

    #[test]
    fn measurement_errors_propagate() {
        let layout = WordCloudLayout::default();
        let result = layout.place(&words(&[("aloe", 1)]), |_, _| Err("no font"));
        assert_eq!(result.unwrap_err(), "no font");
    }
}
