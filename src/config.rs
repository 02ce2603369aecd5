//! Startup configuration.
//! The data source location is injected here instead of living in code.

use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when no path is given on the command line.
pub const DATA_ENV_VAR: &str = "TREND_LENS_DATA";

/// Application configuration resolved once at startup.
#[derive(Parser, Debug, Clone)]
#[command(name = "trend_lens", version, about = "Market Trend Analysis Dashboard")]
pub struct AppConfig {
    /// CSV file with the survey responses
    #[arg(value_name = "CSV", env = DATA_ENV_VAR)]
    pub data: PathBuf,
}

impl AppConfig {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self { data: data.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_path_is_the_data_source() {
        let config = AppConfig::try_parse_from(["trend_lens", "survey.csv"]).unwrap();
        assert_eq!(config.data, PathBuf::from("survey.csv"));
    }

    #[test]
    fn rejects_extra_flags() {
        assert!(AppConfig::try_parse_from(["trend_lens", "a.csv", "--verbose"]).is_err());
    }
}
