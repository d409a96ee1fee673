//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; the shared pipeline
//! plumbing (market snapshot resolution, grid construction) lives here.

pub mod check;
pub mod curve;
pub mod price;

use std::path::PathBuf;

use adapter_feeds::{CsvSource, HistoricalSource, MarketSnapshot, SyntheticSource};
use pricer_core::types::{MarketParams, OptionType};
use pricer_fdm::GridSpec;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Market-side flags shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct MarketArgs {
    /// Symbol used to label the close history
    #[arg(long, default_value = "CL=F")]
    pub symbol: String,

    /// CSV file of daily closes (header column `close`)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Spot price override; requires --vol
    #[arg(long)]
    pub spot: Option<f64>,

    /// Annualized volatility override; requires --spot
    #[arg(long)]
    pub vol: Option<f64>,

    /// Seed for the synthetic feed used when neither --history nor
    /// --spot/--vol is given
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Strike price; defaults to the spot (at-the-money)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Option type: call or put
    #[arg(long, default_value = "call")]
    pub option_type: String,
}

/// Grid-side flags; unset values fall back to the config file.
#[derive(clap::Args, Debug)]
pub struct GridArgs {
    /// Time to maturity in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Risk-free rate, annualised
    #[arg(long)]
    pub rate: Option<f64>,

    /// Convenience yield / carry rate
    #[arg(long = "convenience-yield")]
    pub convenience_yield: Option<f64>,

    /// Number of spatial intervals M
    #[arg(long)]
    pub space_steps: Option<usize>,

    /// Number of time steps N
    #[arg(long)]
    pub time_steps: Option<usize>,

    /// Upper grid bound as a multiple of the spot
    #[arg(long)]
    pub grid_multiplier: Option<f64>,
}

/// Fully resolved pricing problem.
pub struct Pipeline {
    /// Spot and volatility fed to the solver
    pub snapshot: MarketSnapshot,
    /// Validated market parameters
    pub market: MarketParams,
    /// Validated grid specification
    pub grid: GridSpec,
}

/// Resolves the market snapshot: explicit overrides win, then a CSV
/// history, then the seeded synthetic feed.
pub fn resolve_snapshot(config: &AppConfig, args: &MarketArgs) -> Result<MarketSnapshot> {
    match (args.spot, args.vol) {
        (Some(spot), Some(volatility)) => {
            debug!(spot, volatility, "using snapshot overrides");
            Ok(MarketSnapshot { spot, volatility })
        }
        (Some(_), None) | (None, Some(_)) => Err(CliError::InvalidArgument(
            "--spot and --vol must be given together".to_string(),
        )),
        (None, None) => {
            let history = match &args.history {
                Some(path) => {
                    if !path.exists() {
                        return Err(CliError::FileNotFound(path.clone()));
                    }
                    CsvSource::new(path).fetch(&args.symbol)?
                }
                None => SyntheticSource::new(78.0, 0.35)
                    .with_seed(args.seed)
                    .fetch(&args.symbol)?,
            };
            info!(symbol = %args.symbol, closes = history.len(), "fetched close history");
            Ok(history.snapshot(config.trading_days)?)
        }
    }
}

/// Assembles snapshot, market parameters, and grid for a command run.
pub fn build_pipeline(
    config: &AppConfig,
    market_args: &MarketArgs,
    grid_args: &GridArgs,
) -> Result<Pipeline> {
    let snapshot = resolve_snapshot(config, market_args)?;

    let option_type: OptionType = market_args.option_type.parse()?;
    let strike = market_args.strike.unwrap_or(snapshot.spot);
    let market = MarketParams::new(
        strike,
        grid_args.rate.unwrap_or(config.rate),
        snapshot.volatility,
        grid_args.convenience_yield.unwrap_or(config.convenience_yield),
        option_type,
    )?;

    let multiplier = grid_args.grid_multiplier.unwrap_or(config.grid_multiplier);
    let grid = GridSpec::new(
        multiplier * snapshot.spot,
        grid_args.maturity.unwrap_or(config.maturity),
        grid_args.space_steps.unwrap_or(config.space_steps),
        grid_args.time_steps.unwrap_or(config.time_steps),
    )?;

    Ok(Pipeline {
        snapshot,
        market,
        grid,
    })
}
