//! Per-month projection output

use serde::{Deserialize, Serialize};

pub const MONTH_LABEL: &str = "Month";
pub const USERS_LABEL: &str = "Projected Users";
pub const TOTAL_LABEL: &str = "Total Estimated Pricing ($)";

/// One row of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Month index, 0 is the starting point
    pub month: u32,
    pub projected_users: u64,
    /// Cost per pricing column, ending with the final tier
    pub tier_costs: Vec<f64>,
    pub total_cost: f64,
}

/// Complete projection from month 0 through the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Whether costs come from a tiered schedule (drives stacked charting)
    pub tiered: bool,
    /// Labels for the `tier_costs` columns
    pub cost_labels: Vec<String>,
    pub records: Vec<MonthRecord>,
}

impl ProjectionResult {
    /// Full column header list: month, users, each cost column, total
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.cost_labels.len() + 3);
        headers.push(MONTH_LABEL.to_string());
        headers.push(USERS_LABEL.to_string());
        headers.extend(self.cost_labels.iter().cloned());
        headers.push(TOTAL_LABEL.to_string());
        headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&MonthRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&MonthRecord> {
        self.records.last()
    }

    /// Sum of monthly totals across the whole horizon, month 0 included
    pub fn total_cost_over_horizon(&self) -> f64 {
        self.records.iter().map(|r| r.total_cost).sum()
    }
}
