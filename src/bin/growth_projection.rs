//! Command-line front end: project growth and pricing, or compare growth rates
//!
//! Settings come from an optional JSON request file, overridden by flags.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use growth_projection::config::load_request;
use growth_projection::pricing::DEFAULT_FINAL_TIER_PRICE;
use growth_projection::projection::sweep;
use growth_projection::report::{render, DisplayTable};
use growth_projection::{OutputFormat, PricingConfig, ProjectionEngine, ProjectionRequest, Tier};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "growth_projection",
    version,
    about = "Project monthly user growth and estimated billing cost"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Project users and cost month by month
    Project {
        #[command(flatten)]
        settings: Settings,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare final users and cost across several growth rates
    Sweep {
        #[command(flatten)]
        settings: Settings,

        /// Growth rates to compare, in percent
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
}

#[derive(Args, Debug)]
struct Settings {
    /// JSON projection request to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Users at month 0
    #[arg(long)]
    initial_users: Option<u64>,

    /// Monthly growth rate in percent
    #[arg(long)]
    growth_rate: Option<f64>,

    /// Months to project (e.g. 12 or 24)
    #[arg(long)]
    months: Option<u32>,

    /// Bounded pricing tier as CAPACITY:PRICE, repeat for more tiers
    #[arg(long = "tier", value_parser = parse_tier)]
    tiers: Vec<Tier>,

    /// Flat cost per user, or the final tier price when tiers are given
    #[arg(long)]
    price: Option<f64>,
}

impl Settings {
    /// Merge flags over the request file (or defaults)
    fn resolve(&self) -> Result<ProjectionRequest> {
        let mut request = match &self.config {
            Some(path) => load_request(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ProjectionRequest::default(),
        };

        if let Some(users) = self.initial_users {
            request.growth.initial_users = users;
        }
        if let Some(rate) = self.growth_rate {
            request.growth.growth_rate_percent = rate;
        }
        if let Some(months) = self.months {
            request.growth.horizon_months = months;
        }

        if !self.tiers.is_empty() {
            let final_unit_price = match (self.price, &request.pricing) {
                (Some(price), _) => price,
                (None, PricingConfig::Tiered { final_unit_price, .. }) => *final_unit_price,
                (None, PricingConfig::Flat { .. }) => DEFAULT_FINAL_TIER_PRICE,
            };
            request.pricing = PricingConfig::Tiered { tiers: self.tiers.clone(), final_unit_price };
        } else if let Some(price) = self.price {
            match &mut request.pricing {
                PricingConfig::Flat { price_per_user } => *price_per_user = price,
                PricingConfig::Tiered { final_unit_price, .. } => *final_unit_price = price,
            }
        }

        Ok(request)
    }
}

fn parse_tier(s: &str) -> Result<Tier, String> {
    let (capacity, price) = s
        .split_once(':')
        .ok_or_else(|| format!("expected CAPACITY:PRICE, got '{s}'"))?;
    let capacity = capacity
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid tier capacity '{capacity}': {e}"))?;
    let unit_price = price
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid tier price '{price}': {e}"))?;
    Ok(Tier::new(capacity, unit_price))
}

fn run_project(settings: &Settings, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let request = settings.resolve()?;
    let engine = ProjectionEngine::new(request.growth, request.pricing)?;

    log::info!(
        "Projecting {} users at {}% for {} months",
        request.growth.initial_users,
        request.growth.growth_rate_percent,
        request.growth.horizon_months
    );
    let result = engine.run();
    let rendered = render(&result, format)?;

    match output {
        Some(path) => {
            fs::write(&path, &rendered.body)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Output written to {}", path.display());
        }
        None => print!("{}", rendered.body),
    }

    Ok(())
}

fn run_sweep(settings: &Settings, rates: &[f64]) -> Result<()> {
    let request = settings.resolve()?;
    log::info!("Sweeping {} growth rates over {} months", rates.len(), request.growth.horizon_months);

    let points = sweep(&request.growth, rates, &request.pricing)?;

    let table = DisplayTable {
        headers: vec![
            "Growth Rate (%)".to_string(),
            "Final Users".to_string(),
            "Final Month Pricing ($)".to_string(),
            "Cumulative Pricing ($)".to_string(),
        ],
        rows: points
            .iter()
            .map(|p| {
                vec![
                    format!("{:.2}", p.growth_rate_percent),
                    p.final_users.to_string(),
                    format!("{:.2}", p.final_total_cost),
                    format!("{:.2}", p.cumulative_cost),
                ]
            })
            .collect(),
    };
    print!("{}", table.render());

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Project { settings, format, output } => run_project(&settings, format, output),
        Commands::Sweep { settings, rates } => run_sweep(&settings, &rates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn settings() -> Settings {
        Settings {
            config: None,
            initial_users: None,
            growth_rate: None,
            months: None,
            tiers: Vec::new(),
            price: None,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{
                "initial_users": 2000,
                "growth_rate_percent": 3.0,
                "horizon_months": 24,
                "pricing": {"mode": "flat", "price_per_user": 2.5}
            }"#,
        )
        .unwrap();

        let request = Settings {
            config: Some(path),
            growth_rate: Some(7.5),
            ..settings()
        }
        .resolve()
        .unwrap();

        assert_eq!(request.growth.initial_users, 2000);
        assert_eq!(request.growth.growth_rate_percent, 7.5);
        assert_eq!(request.growth.horizon_months, 24);
        assert_eq!(request.pricing, PricingConfig::Flat { price_per_user: 2.5 });
    }

    #[test]
    fn test_price_sets_final_tier_when_tiers_given() {
        let request = Settings {
            tiers: vec![Tier::new(5000, 1.0), Tier::new(5000, 0.5)],
            price: Some(0.6),
            ..settings()
        }
        .resolve()
        .unwrap();

        assert_eq!(
            request.pricing,
            PricingConfig::Tiered {
                tiers: vec![Tier::new(5000, 1.0), Tier::new(5000, 0.5)],
                final_unit_price: 0.6,
            }
        );
    }

    #[test]
    fn test_tiers_without_price_use_default_final_price() {
        let request = Settings { tiers: vec![Tier::new(100, 2.0)], ..settings() }
            .resolve()
            .unwrap();

        assert_eq!(
            request.pricing,
            PricingConfig::Tiered { tiers: vec![Tier::new(100, 2.0)], final_unit_price: 0.80 }
        );
    }

    #[test]
    fn test_tiers_keep_final_price_from_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiered.json");
        fs::write(&path, r#"{"pricing": {"mode": "tiered", "final_unit_price": 0.4}}"#).unwrap();

        let request = Settings {
            config: Some(path),
            tiers: vec![Tier::new(100, 2.0)],
            ..settings()
        }
        .resolve()
        .unwrap();

        assert_eq!(
            request.pricing,
            PricingConfig::Tiered { tiers: vec![Tier::new(100, 2.0)], final_unit_price: 0.4 }
        );
    }

    #[test]
    fn test_price_alone_sets_flat_rate() {
        let request = Settings { price: Some(1.75), ..settings() }.resolve().unwrap();

        assert_eq!(request.growth, ProjectionRequest::default().growth);
        assert_eq!(request.pricing, PricingConfig::Flat { price_per_user: 1.75 });
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = Settings {
            config: Some(PathBuf::from("/nonexistent/request.json")),
            ..settings()
        }
        .resolve();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("loading /nonexistent/request.json"));
    }

    #[test]
    fn test_parse_tier() {
        assert_eq!(parse_tier("5000:1.25"), Ok(Tier::new(5000, 1.25)));
        assert_eq!(parse_tier(" 10 : 0.5 "), Ok(Tier::new(10, 0.5)));
        assert!(parse_tier("5000").is_err());
        assert!(parse_tier("many:1.0").is_err());
    }
}
