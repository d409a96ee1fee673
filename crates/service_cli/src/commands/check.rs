//! `check` command: parameter validation and stability report.

use pricer_fdm::check_stability;

use crate::commands::{build_pipeline, GridArgs, MarketArgs};
use crate::config::AppConfig;
use crate::error::Result;

/// Validates the resolved parameters and reports the explicit-scheme
/// stability limit. Exits with an error if the time step exceeds it.
pub fn run(config: &AppConfig, market_args: &MarketArgs, grid_args: &GridArgs) -> Result<()> {
    let pipeline = build_pipeline(config, market_args, grid_args)?;
    let (market, grid) = (&pipeline.market, &pipeline.grid);

    let limit = grid.stability_limit(market.volatility, market.rate);
    println!("Grid:");
    println!("  S_max:           {:>12.4}", grid.s_max());
    println!("  Maturity:        {:>12.4} years", grid.maturity());
    println!("  Space steps (M): {:>12}", grid.num_space_steps());
    println!("  Time steps (N):  {:>12}", grid.num_time_steps());
    println!("  dS:              {:>12.6}", grid.ds());
    println!("  dt:              {:>12.6e}", grid.dt());
    println!("Stability:");
    println!("  dt limit:        {:>12.6e}", limit);

    check_stability(grid, market)?;
    println!("  status:          stable");
    Ok(())
}
