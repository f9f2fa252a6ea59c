//! Growth Projection - monthly user growth and billing cost estimates
//!
//! This library provides:
//! - Compounding user growth with per-month truncation
//! - Flat and tiered (graduated) pricing evaluation
//! - Display table, CSV, JSON and chart renderers over the result
//! - Parallel growth-rate sweeps for scenario comparison

pub mod config;
pub mod error;
pub mod pricing;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use config::{GrowthConfig, ProjectionRequest};
pub use error::{ConfigError, ProjectionError, ReportError};
pub use pricing::{PricingConfig, Tier};
pub use projection::{project, MonthRecord, ProjectionEngine, ProjectionResult};
pub use report::OutputFormat;
