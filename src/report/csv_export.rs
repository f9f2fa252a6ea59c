//! Full-precision CSV export

use crate::error::ReportError;
use crate::projection::ProjectionResult;
use std::io::Write;

/// File name offered for downloads
pub const DEFAULT_CSV_FILENAME: &str = "growth_projection.csv";

/// Write the projection as CSV: header row, then one row per month.
///
/// Costs are written with the shortest representation that round-trips, so
/// no precision is lost relative to the in-memory values.
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<W, ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(result.headers())?;

    for record in &result.records {
        let mut row = Vec::with_capacity(record.tier_costs.len() + 3);
        row.push(record.month.to_string());
        row.push(record.projected_users.to_string());
        row.extend(record.tier_costs.iter().map(|cost| cost.to_string()));
        row.push(record.total_cost.to_string());
        wtr.write_record(&row)?;
    }

    wtr.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

/// CSV export as an in-memory string
pub fn to_csv_string(result: &ProjectionResult) -> Result<String, ReportError> {
    let bytes = write_csv(result, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GrowthConfig;
    use crate::pricing::{PricingConfig, Tier};
    use crate::projection::project;

    #[test]
    fn test_tiered_export() {
        let growth = GrowthConfig { initial_users: 10_000, growth_rate_percent: 0.0, horizon_months: 1 };
        let pricing = PricingConfig::Tiered {
            tiers: vec![Tier::new(5000, 1.0), Tier::new(5000, 0.5)],
            final_unit_price: 0.8,
        };
        let result = project(&growth, &pricing).expect("valid config");

        let csv = to_csv_string(&result).expect("csv");
        assert_eq!(
            csv,
            "Month,Projected Users,Tier 1 Pricing ($),Tier 2 Pricing ($),Final Tier Pricing ($),Total Estimated Pricing ($)\n\
             0,10000,5000,2500,0,7500\n\
             1,10000,5000,2500,0,7500\n"
        );
    }

    #[test]
    fn test_export_keeps_full_precision() {
        let growth = GrowthConfig { initial_users: 3, growth_rate_percent: 0.0, horizon_months: 1 };
        let result = project(&growth, &PricingConfig::Flat { price_per_user: 0.1 }).expect("valid config");

        let csv = to_csv_string(&result).expect("csv");
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let row = reader.records().next().expect("first row").expect("parse");

        assert_eq!(&row[2], "0.30000000000000004");
        let total: f64 = row[3].parse().expect("float");
        assert_eq!(total, result.records[0].total_cost);
    }
}
