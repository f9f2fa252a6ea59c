//! Projection engine: monthly user growth and the cost of serving those users

mod engine;
mod records;
mod sweep;

pub use engine::{grow_users, project, ProjectionEngine};
pub use records::{MonthRecord, ProjectionResult, MONTH_LABEL, TOTAL_LABEL, USERS_LABEL};
pub use sweep::{sweep, SweepPoint};
