//! Shared domain types.
//!
//! This module provides:
//! - `OptionType`: Call/Put variant with terminal payoff evaluation
//! - `MarketParams`: validated market-side solver inputs
//! - `ParamError`: structured parameter-validation errors

mod error;
mod market;
mod payoff;

pub use error::ParamError;
pub use market::MarketParams;
pub use payoff::OptionType;
