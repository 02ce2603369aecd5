//! Data module - CSV loading and row selection

pub mod columns;
mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
