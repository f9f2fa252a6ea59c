//! Renderers over a finished projection
//!
//! Each renderer reads an immutable `ProjectionResult`; on-screen formatting
//! (2 decimals) and export formatting (full precision) never share state.

mod chart;
mod csv_export;
mod table;

pub use chart::{ChartBand, ChartData, BAND_PALETTE};
pub use csv_export::{to_csv_string, write_csv, DEFAULT_CSV_FILENAME};
pub use table::DisplayTable;

use crate::error::ReportError;
use crate::projection::ProjectionResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output representation of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned text table, costs to 2 decimals
    #[default]
    Table,
    /// CSV with full-precision values
    Csv,
    /// The raw projection as JSON
    Json,
    /// Chart series as JSON
    Chart,
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Table => "text/plain; charset=utf-8",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json | OutputFormat::Chart => "application/json",
        }
    }
}

/// A rendered projection and how to serve it
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub content_type: &'static str,
    pub body: String,
}

/// Render a projection in the requested format
pub fn render(result: &ProjectionResult, format: OutputFormat) -> Result<Rendered, ReportError> {
    let body = match format {
        OutputFormat::Table => DisplayTable::from_result(result).render(),
        OutputFormat::Csv => to_csv_string(result)?,
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Chart => serde_json::to_string_pretty(&ChartData::from_result(result))?,
    };
    Ok(Rendered { content_type: format.content_type(), body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrowthConfig;
    use crate::pricing::{PricingConfig, Tier};
    use crate::projection::project;

    fn sample() -> ProjectionResult {
        let growth = GrowthConfig { initial_users: 10_000, growth_rate_percent: 5.0, horizon_months: 3 };
        let pricing = PricingConfig::Tiered {
            tiers: vec![Tier::new(5000, 1.0), Tier::new(5000, 0.5)],
            final_unit_price: 0.8,
        };
        project(&growth, &pricing).expect("valid config")
    }

    #[test]
    fn test_json_round_trips_records() {
        let result = sample();
        let rendered = render(&result, OutputFormat::Json).expect("json");

        assert_eq!(rendered.content_type, "application/json");
        let parsed: ProjectionResult = serde_json::from_str(&rendered.body).expect("parse back");
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_renderers_leave_result_untouched() {
        let result = sample();
        let before = result.clone();

        for format in [OutputFormat::Table, OutputFormat::Csv, OutputFormat::Json, OutputFormat::Chart] {
            render(&result, format).expect("render");
        }
        assert_eq!(result, before);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_str("csv", true), Ok(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("CHART", true), Ok(OutputFormat::Chart));
        assert!(OutputFormat::from_str("png", true).is_err());
    }
}
