//! Command-line interface for the commodity option FDM pricer.
//!
//! Prices European commodity options by solving the Black-Scholes PDE
//! with an explicit finite-difference scheme, estimating spot and
//! volatility from a trailing window of daily closes.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{GridArgs, MarketArgs};
use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "comfdm")]
#[command(about = "Explicit finite-difference pricer for European commodity options")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "comfdm.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an option at the observed spot
    Price {
        #[command(flatten)]
        market: MarketArgs,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Emit the full price curve over the spatial grid
    Curve {
        #[command(flatten)]
        market: MarketArgs,
        #[command(flatten)]
        grid: GridArgs,
        /// Output format: table, csv, or json
        #[arg(long, default_value = "table")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate parameters and report the stability limit
    Check {
        #[command(flatten)]
        market: MarketArgs,
        #[command(flatten)]
        grid: GridArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = AppConfig::load(&cli.config).and_then(|config| match &cli.command {
        Commands::Price { market, grid } => commands::price::run(&config, market, grid),
        Commands::Curve {
            market,
            grid,
            format,
            output,
        } => commands::curve::run(&config, market, grid, format, output.as_deref()),
        Commands::Check { market, grid } => commands::check::run(&config, market, grid),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
