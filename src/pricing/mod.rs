//! Billing schedules: flat per-user rate or graduated tiers with an unbounded final rate

use crate::error::{Bound, ProjectionError};
use serde::{Deserialize, Serialize};

/// Column label for the final (overflow) tier, also used for flat pricing
pub const FINAL_TIER_LABEL: &str = "Final Tier Pricing ($)";

/// Default flat cost per user
pub const DEFAULT_FLAT_PRICE: f64 = 1.0;

/// Default price applied to users beyond all bounded tiers
pub const DEFAULT_FINAL_TIER_PRICE: f64 = 0.80;

/// A bounded block of users billed at one unit price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Number of users this tier can absorb
    pub capacity: u64,
    /// Price per user within this tier
    pub unit_price: f64,
}

impl Tier {
    pub fn new(capacity: u64, unit_price: f64) -> Self {
        Self { capacity, unit_price }
    }
}

/// How monthly users are turned into cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PricingConfig {
    /// Every user costs the same
    Flat {
        #[serde(default = "default_flat_price")]
        price_per_user: f64,
    },
    /// Tiers are filled in order; the remainder is billed at `final_unit_price`
    Tiered {
        #[serde(default = "default_tiers")]
        tiers: Vec<Tier>,
        #[serde(default = "default_final_tier_price")]
        final_unit_price: f64,
    },
}

fn default_flat_price() -> f64 { DEFAULT_FLAT_PRICE }
fn default_final_tier_price() -> f64 { DEFAULT_FINAL_TIER_PRICE }

/// Starting tiers when tiered mode is picked without a schedule: two blocks at 1.0
fn default_tiers() -> Vec<Tier> {
    vec![Tier::new(5000, 1.0), Tier::new(10_000, 1.0)]
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig::Flat { price_per_user: DEFAULT_FLAT_PRICE }
    }
}

/// Cost breakdown for a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCost {
    /// One entry per bounded tier plus the final tier (a single entry for flat pricing)
    pub tier_costs: Vec<f64>,
    pub total_cost: f64,
}

impl PricingConfig {
    /// Check capacities and prices against their bounds
    pub fn validate(&self) -> Result<(), ProjectionError> {
        match self {
            PricingConfig::Flat { price_per_user } => {
                check_price("price_per_user", *price_per_user)
            }
            PricingConfig::Tiered { tiers, final_unit_price } => {
                for (i, tier) in tiers.iter().enumerate() {
                    if tier.capacity == 0 {
                        return Err(ProjectionError::invalid(
                            format!("tiers[{i}].capacity"),
                            Bound::Positive,
                        ));
                    }
                    check_price(&format!("tiers[{i}].unit_price"), tier.unit_price)?;
                }
                check_price("final_unit_price", *final_unit_price)
            }
        }
    }

    /// Number of cost columns each month produces
    pub fn cost_columns(&self) -> usize {
        match self {
            PricingConfig::Flat { .. } => 1,
            PricingConfig::Tiered { tiers, .. } => tiers.len() + 1,
        }
    }

    /// Column labels for the per-tier costs, in the same order as `MonthCost::tier_costs`
    pub fn cost_labels(&self) -> Vec<String> {
        let mut labels = match self {
            PricingConfig::Flat { .. } => Vec::with_capacity(1),
            PricingConfig::Tiered { tiers, .. } => (1..=tiers.len())
                .map(|n| format!("Tier {n} Pricing ($)"))
                .collect(),
        };
        labels.push(FINAL_TIER_LABEL.to_string());
        labels
    }

    /// Cost of serving `users` for one month
    pub fn evaluate(&self, users: u64) -> MonthCost {
        match self {
            PricingConfig::Flat { price_per_user } => {
                let total_cost = users as f64 * price_per_user;
                MonthCost { tier_costs: vec![total_cost], total_cost }
            }
            PricingConfig::Tiered { tiers, final_unit_price } => {
                let mut tier_costs = Vec::with_capacity(tiers.len() + 1);
                let mut remaining = users;
                let mut total_cost = 0.0;

                for tier in tiers {
                    let charged = remaining.min(tier.capacity);
                    let cost = charged as f64 * tier.unit_price;
                    tier_costs.push(cost);
                    total_cost += cost;
                    remaining -= charged;
                }

                // The final tier always gets a column, even when nothing spills into it
                let overflow_cost = if remaining > 0 {
                    remaining as f64 * final_unit_price
                } else {
                    0.0
                };
                tier_costs.push(overflow_cost);
                total_cost += overflow_cost;

                MonthCost { tier_costs, total_cost }
            }
        }
    }
}

fn check_price(field: &str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, Bound::NonNegative))
    }
}
