//! Trend Lens - Market Trend Analysis Dashboard
//!
//! Loads product-preference survey responses from CSV and reports the
//! demographic profile of the respondents who prefer a selected product.

pub mod charts;
pub mod config;
pub mod data;
pub mod export;
pub mod gui;
pub mod report;
