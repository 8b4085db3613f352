//! Volgrid CLI - Command Line Operations for Black-Scholes Pricing
//!
//! Operational entry point for the volgrid pricing library.
//!
//! # Commands
//!
//! - `volgrid price` - Price a single European call or put
//! - `volgrid heatmap` - Evaluate call/put price grids over spot and
//!   volatility ranges
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate is a thin shell: it
//! collects scalar parameters and range bounds from flags, invokes the
//! pricing layer, and renders the returned price or grid. All numeric
//! policy lives in `volgrid_models`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Days per year used to convert the `--days` flag to a year fraction.
const DAYS_PER_YEAR: f64 = 365.0;

/// Volgrid Black-Scholes Pricing CLI
#[derive(Parser)]
#[command(name = "volgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option
    Price {
        /// Risk-free interest rate (annualised)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Spot price of the underlying
        #[arg(long, default_value = "100.0")]
        spot: f64,

        /// Strike price
        #[arg(long, default_value = "100.0")]
        strike: f64,

        /// Days to expiry (converted to years as days / 365)
        #[arg(long, default_value = "365.0")]
        days: f64,

        /// Annualised volatility
        #[arg(long, default_value = "0.20")]
        vol: f64,

        /// Option type (call or put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Evaluate call/put price grids over spot and volatility ranges
    Heatmap {
        /// Strike price shared by every grid cell
        #[arg(long, default_value = "100.0")]
        strike: f64,

        /// Risk-free interest rate (annualised)
        #[arg(long, default_value = "0.05")]
        rate: f64,

        /// Days to expiry (converted to years as days / 365)
        #[arg(long, default_value = "365.0")]
        days: f64,

        /// Lower bound of the spot axis
        #[arg(long, default_value = "80.0")]
        spot_min: f64,

        /// Upper bound of the spot axis
        #[arg(long, default_value = "120.0")]
        spot_max: f64,

        /// Lower bound of the volatility axis
        #[arg(long, default_value = "0.10")]
        vol_min: f64,

        /// Upper bound of the volatility axis
        #[arg(long, default_value = "0.30")]
        vol_max: f64,

        /// Number of points per axis
        #[arg(long, default_value = "10")]
        points: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> ExitCode {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Price {
            rate,
            spot,
            strike,
            days,
            vol,
            option_type,
            format,
        } => commands::price::run(
            rate,
            spot,
            strike,
            days / DAYS_PER_YEAR,
            vol,
            &option_type,
            &format,
        ),
        Commands::Heatmap {
            strike,
            rate,
            days,
            spot_min,
            spot_max,
            vol_min,
            vol_max,
            points,
            format,
        } => commands::heatmap::run(
            strike,
            rate,
            days / DAYS_PER_YEAR,
            (spot_min, spot_max),
            (vol_min, vol_max),
            points,
            &format,
        ),
    }
}

/// Prints the error and its full cause chain to stderr.
///
/// A grid failure reads as the cell coordinates followed by the
/// offending parameter and value, never a bare NaN or a generic message.
fn report(err: &CliError) {
    eprintln!("error: {err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
