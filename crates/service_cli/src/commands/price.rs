//! `price` command: single option value at the observed spot.

use pricer_fdm::{check_stability, solve};
use tracing::{info, warn};

use crate::commands::{build_pipeline, GridArgs, MarketArgs};
use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Runs the pricing pipeline and prints a summary with the option value
/// at the observed spot.
pub fn run(config: &AppConfig, market_args: &MarketArgs, grid_args: &GridArgs) -> Result<()> {
    let pipeline = build_pipeline(config, market_args, grid_args)?;
    let (snapshot, market, grid) = (&pipeline.snapshot, &pipeline.market, &pipeline.grid);

    if let Err(err) = check_stability(grid, market) {
        warn!(%err, "results may diverge; increase --time-steps");
    }

    let curve = solve(grid, market);
    let value = curve
        .value_at(snapshot.spot)
        .ok_or_else(|| CliError::InvalidArgument("spot lies outside the grid domain".to_string()))?;
    info!(spot = snapshot.spot, value, "pricing complete");

    println!("Commodity {} option ({})", market.option_type, market_args.symbol);
    println!("  Spot:              {:>10.4}", snapshot.spot);
    println!("  Strike:            {:>10.4}", market.strike);
    println!("  Volatility:        {:>9.2}%", snapshot.volatility * 100.0);
    println!("  Rate:              {:>9.2}%", market.rate * 100.0);
    println!("  Convenience yield: {:>9.2}%", market.convenience_yield * 100.0);
    println!("  Maturity:          {:>10.4} years", grid.maturity());
    println!(
        "  Grid:              M = {}, N = {}, S_max = {:.4}",
        grid.num_space_steps(),
        grid.num_time_steps(),
        grid.s_max()
    );
    println!();
    println!("  Option value:      {:>10.4}", value);

    Ok(())
}
