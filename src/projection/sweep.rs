//! Compare several growth rates under the same pricing

use super::engine::ProjectionEngine;
use crate::config::GrowthConfig;
use crate::error::ProjectionError;
use crate::pricing::PricingConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Summary of one growth-rate scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub growth_rate_percent: f64,
    /// Users in the last projected month
    pub final_users: u64,
    /// Cost of the last projected month
    pub final_total_cost: f64,
    /// Total cost summed over every month, month 0 included
    pub cumulative_cost: f64,
}

/// Project each growth rate in parallel, returning points in the order given.
///
/// Every scenario is validated before any projection runs.
pub fn sweep(
    growth: &GrowthConfig,
    rates: &[f64],
    pricing: &PricingConfig,
) -> Result<Vec<SweepPoint>, ProjectionError> {
    let engines = rates
        .iter()
        .map(|&growth_rate_percent| {
            let config = GrowthConfig { growth_rate_percent, ..*growth };
            ProjectionEngine::new(config, pricing.clone())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let points = engines
        .par_iter()
        .map(|engine| {
            let result = engine.run();
            let (final_users, final_total_cost) = result
                .last()
                .map(|r| (r.projected_users, r.total_cost))
                .unwrap_or((0, 0.0));
            SweepPoint {
                growth_rate_percent: engine.growth().growth_rate_percent,
                final_users,
                final_total_cost,
                cumulative_cost: result.total_cost_over_horizon(),
            }
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_matches_individual_projections() {
        let growth = GrowthConfig { initial_users: 10_000, growth_rate_percent: 0.0, horizon_months: 12 };
        let pricing = PricingConfig::Flat { price_per_user: 2.0 };
        let rates = [0.0, 2.5, 5.0, 10.0];

        let points = sweep(&growth, &rates, &pricing).expect("valid sweep");
        assert_eq!(points.len(), rates.len());

        for (point, &rate) in points.iter().zip(&rates) {
            assert_eq!(point.growth_rate_percent, rate);

            let single = project(&GrowthConfig { growth_rate_percent: rate, ..growth }, &pricing)
                .expect("valid config");
            let last = single.last().expect("records");
            assert_eq!(point.final_users, last.projected_users);
            assert_eq!(point.final_total_cost, last.total_cost);
            assert_relative_eq!(point.cumulative_cost, single.total_cost_over_horizon());
        }

        // Faster growth never costs less
        for pair in points.windows(2) {
            assert!(pair[1].cumulative_cost >= pair[0].cumulative_cost);
        }
    }

    #[test]
    fn test_sweep_rejects_any_invalid_rate() {
        let growth = GrowthConfig::default();
        let result = sweep(&growth, &[5.0, -2.0, 10.0], &PricingConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_growth_cumulative_cost() {
        let growth = GrowthConfig { initial_users: 100, growth_rate_percent: 0.0, horizon_months: 11 };
        let points = sweep(&growth, &[0.0], &PricingConfig::Flat { price_per_user: 1.5 })
            .expect("valid sweep");

        assert_relative_eq!(points[0].cumulative_cost, 100.0 * 1.5 * 12.0);
    }
}
