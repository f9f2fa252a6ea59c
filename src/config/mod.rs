//! Growth parameters and projection requests
//!
//! A `ProjectionRequest` is what arrives from the outside world (a JSON file, an
//! HTTP body, or CLI flags). Missing fields fall back to the same defaults the
//! interactive form starts with.

use crate::error::{Bound, ConfigError, ProjectionError};
use crate::pricing::PricingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default starting population
pub const DEFAULT_INITIAL_USERS: u64 = 10_000;

/// Default monthly growth rate (percent)
pub const DEFAULT_GROWTH_RATE_PERCENT: f64 = 5.0;

/// Default projection horizon (months)
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Compounding growth parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Users at month 0
    #[serde(default = "default_initial_users")]
    pub initial_users: u64,

    /// Monthly growth in percent (5.0 = 5%)
    #[serde(default = "default_growth_rate_percent")]
    pub growth_rate_percent: f64,

    /// Months to project beyond month 0
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

fn default_initial_users() -> u64 { DEFAULT_INITIAL_USERS }
fn default_growth_rate_percent() -> f64 { DEFAULT_GROWTH_RATE_PERCENT }
fn default_horizon_months() -> u32 { DEFAULT_HORIZON_MONTHS }

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_users: DEFAULT_INITIAL_USERS,
            growth_rate_percent: DEFAULT_GROWTH_RATE_PERCENT,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.initial_users == 0 {
            return Err(ProjectionError::invalid("initial_users", Bound::Positive));
        }
        if self.horizon_months == 0 {
            return Err(ProjectionError::invalid("horizon_months", Bound::Positive));
        }
        if !(self.growth_rate_percent.is_finite() && self.growth_rate_percent >= 0.0) {
            return Err(ProjectionError::invalid("growth_rate_percent", Bound::NonNegative));
        }
        Ok(())
    }
}

/// Everything needed for one projection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub growth: GrowthConfig,

    #[serde(default)]
    pub pricing: PricingConfig,
}

impl ProjectionRequest {
    /// Parse a request from JSON text. Blank input yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        self.growth.validate()?;
        self.pricing.validate()
    }
}

/// Load a projection request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ProjectionRequest, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let request = ProjectionRequest::from_json(&text)?;
    log::debug!("Loaded projection request from {}", path.display());
    Ok(request)
}
