//! # pricer_core: Domain Types for the Commodity Option FDM Pricer
//!
//! ## Layer Role
//!
//! pricer_core is the foundation layer shared by the solver and service
//! crates, providing:
//! - Option type and terminal payoff evaluation (`types::payoff`)
//! - Validated market parameters (`types::market`)
//! - Error types: `ParamError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{MarketParams, OptionType};
//!
//! let market = MarketParams::new(100.0, 0.05, 0.3, 0.02, OptionType::Call).unwrap();
//! assert_eq!(market.option_type.terminal_payoff(110.0, market.strike), 10.0);
//!
//! // Unknown option-type variants are rejected, never defaulted
//! assert!("straddle".parse::<OptionType>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `MarketParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
