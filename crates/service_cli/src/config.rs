//! CLI configuration file.
//!
//! Optional TOML file supplying defaults for the pricing pipeline;
//! command-line flags always win over config values. A missing file is
//! not an error (the built-in defaults mirror the reference scenario for
//! a 6-month at-the-money WTI call).

use std::path::Path;

use serde::Deserialize;

use crate::error::{CliError, Result};

/// Defaults for parameters not given on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Time to maturity in years
    pub maturity: f64,
    /// Risk-free rate, annualised
    pub rate: f64,
    /// Convenience yield / carry rate
    pub convenience_yield: f64,
    /// Number of spatial intervals M
    pub space_steps: usize,
    /// Number of time steps N
    pub time_steps: usize,
    /// Upper grid bound as a multiple of the spot (S_max = mult * spot)
    pub grid_multiplier: f64,
    /// Annualization factor for the volatility estimate
    pub trading_days: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maturity: 0.5,
            rate: 0.05,
            convenience_yield: 0.02,
            space_steps: 100,
            time_steps: 1000,
            grid_multiplier: 1.1,
            trading_days: adapter_feeds::TRADING_DAYS_PER_YEAR,
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults when it does not
    /// exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
