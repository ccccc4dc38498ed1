//! bs-greeks CLI
//!
//! Prices a European call/put pair and prints both prices and their Greeks.
//!
//! ```text
//! bs-greeks --spot 100 --strike 100 --time 1 --rate 0.05 --vol 0.2 --preset desk
//! ```

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bs_greeks::{default_configs, price_and_greeks, report, MarketParams, PricingError, ReportConfig};

/// Exit status for rejected market inputs
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// Black-Scholes prices and Greeks for a European call/put pair
#[derive(Parser, Debug)]
#[command(name = "bs-greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Current underlying price
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    strike: f64,

    /// Time to expiration in years
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    time: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,

    /// Annualized volatility (0.2 for 20%)
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    vol: f64,

    /// Report configuration file (TOML); overrides --preset
    #[arg(short, long)]
    config: Option<String>,

    /// Reporting preset: reference, desk or full
    #[arg(short, long, default_value = "full")]
    preset: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<ReportConfig> {
    if let Some(path) = &cli.config {
        debug!(path = %path, "loading report config");
        return ReportConfig::from_file(path);
    }
    default_configs::by_name(&cli.preset)
        .ok_or_else(|| anyhow!("Unknown preset '{}' (expected reference, desk or full)", cli.preset))
}

fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    let params = MarketParams::new(cli.spot, cli.strike, cli.time, cli.rate, cli.vol)?;
    let result = price_and_greeks(&params)?;

    match cli.format {
        OutputFormat::Text => Ok(report::render(&result, &config)),
        OutputFormat::Toml => report::render_toml(&result, &config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(pricing_err) = e.downcast_ref::<PricingError>() {
                error!(field = %pricing_err.field(), "rejected market input");
                eprintln!("Error: {}", pricing_err);
                return ExitCode::from(EXIT_INVALID_INPUT);
            }
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
