//! Charts module - Chart rendering

pub mod palette;
mod plotter;
mod renderer;
pub mod wordcloud;

pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use wordcloud::{PlacedWord, WordCloudError, WordCloudLayout};
