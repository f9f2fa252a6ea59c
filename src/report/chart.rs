//! Series for the growth & pricing chart
//!
//! The chart itself is drawn by whatever front end consumes this data: a total
//! cost line over months and, for tiered pricing, one stacked band per cost column.

use crate::projection::{ProjectionResult, MONTH_LABEL};
use serde::{Deserialize, Serialize};

/// Fill colours for stacked bands, reused in order when there are more bands
pub const BAND_PALETTE: [&str; 4] = ["lightgreen", "lightcoral", "lightskyblue", "lightgoldenrodyellow"];

pub const CHART_TITLE: &str = "Projected Growth & Pricing";
pub const Y_AXIS_LABEL: &str = "Estimated Pricing ($)";
pub const TOTAL_SERIES_LABEL: &str = "Total Pricing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBand {
    pub label: String,
    pub color: String,
    /// Bottom edge per month (sum of the bands beneath)
    pub lower: Vec<f64>,
    /// Top edge per month
    pub upper: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub months: Vec<u32>,
    pub total_label: String,
    pub total: Vec<f64>,
    /// Empty for flat pricing
    pub bands: Vec<ChartBand>,
}

impl ChartData {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let months = result.records.iter().map(|r| r.month).collect();
        let total = result.records.iter().map(|r| r.total_cost).collect();

        let mut bands = Vec::new();
        if result.tiered {
            // Rows short of a labelled column contribute nothing to that band
            let mut bottom = vec![0.0; result.records.len()];
            for (i, label) in result.cost_labels.iter().enumerate() {
                let upper: Vec<f64> = result
                    .records
                    .iter()
                    .zip(&bottom)
                    .map(|(record, base)| {
                        base + record.tier_costs.get(i).copied().unwrap_or(0.0)
                    })
                    .collect();
                bands.push(ChartBand {
                    label: label.clone(),
                    color: BAND_PALETTE[i % BAND_PALETTE.len()].to_string(),
                    lower: std::mem::replace(&mut bottom, upper.clone()),
                    upper,
                });
            }
        }

        Self {
            title: CHART_TITLE.to_string(),
            x_label: MONTH_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            months,
            total_label: TOTAL_SERIES_LABEL.to_string(),
            total,
            bands,
        }
    }
}
