//! # Fawry Checkout CLI
//!
//! Runs the checkout demo scenarios against fawry-core.
//!
//! ## Usage
//! ```bash
//! # Run all five scenarios
//! cargo run -p fawry-checkout-cli
//!
//! # One scenario, receipts as JSON
//! cargo run -p fawry-checkout-cli -- --scenario normal-purchase --json
//!
//! # Custom config file
//! cargo run -p fawry-checkout-cli -- --config ./fawry.toml
//! ```
//!
//! Scenario failures are logged and the run moves on; only configuration
//! problems end the process with an error.

mod config;
mod scenarios;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fawry_core::{Checkout, ShipmentManifest, ShippingService};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::scenarios::Scenario;

#[derive(Parser)]
#[command(name = "fawry-checkout")]
#[command(author, version, about = "Fawry checkout demo")]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single scenario instead of all of them
    #[arg(short, long, value_enum)]
    scenario: Option<Scenario>,

    /// Print receipts as JSON
    #[arg(long)]
    json: bool,
}

/// Prints shipment notices to stdout.
struct ConsoleShipper;

impl ShippingService for ConsoleShipper {
    fn ship(&mut self, manifest: &ShipmentManifest) {
        println!("{}", manifest);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(config.log_filter()?);
    config.log_summary();

    let checkout = Checkout::new(config.checkout);
    let scenarios = match cli.scenario {
        Some(scenario) => vec![scenario],
        None => Scenario::ALL.to_vec(),
    };

    let mut shipper = ConsoleShipper;
    let mut failures = 0usize;

    for (i, scenario) in scenarios.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("--- {} ---", scenario.title());

        match scenario.run(&checkout, &mut shipper) {
            Ok(receipt) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            }
            Ok(receipt) => println!("{}", receipt),
            Err(err) => {
                failures += 1;
                error!(scenario = ?scenario, kind = ?err.kind(), "Checkout failed");
                println!("Error: {}", err);
            }
        }
    }

    info!(run = scenarios.len(), failures, "Scenarios finished");
    Ok(())
}

/// `RUST_LOG` wins when set and parseable; otherwise the configured filter.
fn init_tracing(configured: EnvFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
