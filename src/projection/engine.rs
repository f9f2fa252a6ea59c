//! Core projection loop

use super::records::{MonthRecord, ProjectionResult};
use crate::config::GrowthConfig;
use crate::error::ProjectionError;
use crate::pricing::PricingConfig;

/// Users per month, month 0 through `horizon_months`.
///
/// Each step truncates toward zero before the next month compounds, so small
/// populations can stall (1 user at 5% stays at 1). Counts past `u64::MAX`
/// saturate.
pub fn grow_users(initial_users: u64, growth_rate_percent: f64, horizon_months: u32) -> Vec<u64> {
    let factor = 1.0 + growth_rate_percent / 100.0;
    let mut users = Vec::with_capacity(horizon_months as usize + 1);
    users.push(initial_users);

    let mut current = initial_users;
    for _ in 0..horizon_months {
        current = (current as f64 * factor) as u64;
        users.push(current);
    }

    users
}

/// Validated projection inputs, ready to run
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    growth: GrowthConfig,
    pricing: PricingConfig,
}

impl ProjectionEngine {
    /// Validate both configs; nothing is computed if either is out of bounds
    pub fn new(growth: GrowthConfig, pricing: PricingConfig) -> Result<Self, ProjectionError> {
        growth.validate()?;
        pricing.validate()?;
        Ok(Self { growth, pricing })
    }

    pub fn growth(&self) -> &GrowthConfig {
        &self.growth
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Run the projection
    pub fn run(&self) -> ProjectionResult {
        let users = grow_users(
            self.growth.initial_users,
            self.growth.growth_rate_percent,
            self.growth.horizon_months,
        );

        let records: Vec<MonthRecord> = users
            .into_iter()
            .enumerate()
            .map(|(month, projected_users)| {
                let cost = self.pricing.evaluate(projected_users);
                MonthRecord {
                    month: month as u32,
                    projected_users,
                    tier_costs: cost.tier_costs,
                    total_cost: cost.total_cost,
                }
            })
            .collect();

        if let Some(last) = records.last() {
            log::debug!(
                "Projected {} months: {} -> {} users, final month cost {:.2}",
                self.growth.horizon_months,
                self.growth.initial_users,
                last.projected_users,
                last.total_cost
            );
        }

        ProjectionResult {
            tiered: matches!(self.pricing, PricingConfig::Tiered { .. }),
            cost_labels: self.pricing.cost_labels(),
            records,
        }
    }
}

/// Validate and project in one call
pub fn project(
    growth: &GrowthConfig,
    pricing: &PricingConfig,
) -> Result<ProjectionResult, ProjectionError> {
    let engine = ProjectionEngine::new(*growth, pricing.clone())?;
    Ok(engine.run())
}
