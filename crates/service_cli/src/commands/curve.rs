//! `curve` command: full price curve over the spatial grid.

use std::path::Path;

use pricer_fdm::{check_stability, solve, PriceCurve};
use tracing::warn;

use crate::commands::{build_pipeline, GridArgs, MarketArgs};
use crate::config::AppConfig;
use crate::error::{CliError, Result};

/// Solves the grid and renders the curve as a table, CSV, or JSON.
pub fn run(
    config: &AppConfig,
    market_args: &MarketArgs,
    grid_args: &GridArgs,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let pipeline = build_pipeline(config, market_args, grid_args)?;

    if let Err(err) = check_stability(&pipeline.grid, &pipeline.market) {
        warn!(%err, "results may diverge; increase --time-steps");
    }

    let curve = solve(&pipeline.grid, &pipeline.market);
    let rendered = match format {
        "table" => render_table(&curve),
        "csv" => render_csv(&curve)?,
        "json" => render_json(&market_args.symbol, &curve)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "unknown format '{other}', expected table, csv, or json"
            )))
        }
    };

    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_table(curve: &PriceCurve) -> String {
    let mut out = String::from("       spot        value\n");
    for (spot, value) in curve.spots().iter().zip(curve.values()) {
        out.push_str(&format!("{spot:>11.4}  {value:>11.4}\n"));
    }
    out
}

fn render_csv(curve: &PriceCurve) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["spot", "value"])?;
    for (spot, value) in curve.spots().iter().zip(curve.values()) {
        writer.serialize((spot, value))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CliError::Io(std::io::Error::other(err)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_json(symbol: &str, curve: &PriceCurve) -> Result<String> {
    let value = serde_json::json!({
        "symbol": symbol,
        "spots": curve.spots(),
        "values": curve.values(),
    });
    let mut text = serde_json::to_string_pretty(&value)
        .map_err(|err| CliError::Io(std::io::Error::other(err)))?;
    text.push('\n');
    Ok(text)
}
