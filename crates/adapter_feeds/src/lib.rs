//! # adapter_feeds: Market Data Provider
//!
//! Supplies the two scalars the solver needs from the outside world: the
//! latest close price and a trailing annualized volatility estimate.
//!
//! ## Sources
//!
//! - [`CsvSource`]: close series from a CSV file with a `close` column
//! - [`SyntheticSource`]: seeded GBM-generated daily closes for testing
//!   and demonstration
//!
//! Both implement [`HistoricalSource`]; downstream code only ever sees a
//! [`PriceHistory`] and the [`MarketSnapshot`] derived from it. An empty
//! history is a fatal precondition failure for the whole pipeline: no spot
//! means no grid parameters.
//!
//! ## Usage Examples
//!
//! ```rust
//! use adapter_feeds::{HistoricalSource, SyntheticSource, TRADING_DAYS_PER_YEAR};
//!
//! let source = SyntheticSource::new(78.0, 0.35).with_seed(7);
//! let history = source.fetch("CL=F").unwrap();
//! let snapshot = history.snapshot(TRADING_DAYS_PER_YEAR).unwrap();
//! assert!(snapshot.spot > 0.0);
//! assert!(snapshot.volatility >= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod csv_source;
mod error;
mod history;
mod synthetic;

pub use csv_source::CsvSource;
pub use error::FeedError;
pub use history::{MarketSnapshot, PriceHistory, TRADING_DAYS_PER_YEAR};
pub use synthetic::SyntheticSource;

/// Trait for historical market data sources.
///
/// The seam between the pricing pipeline and whatever supplies close
/// prices; implementations are synchronous and return the full trailing
/// window in one call.
pub trait HistoricalSource {
    /// Fetch the trailing close series for a symbol.
    ///
    /// # Errors
    /// [`FeedError::NoData`] when the source has nothing for the symbol;
    /// source-specific I/O and parse failures otherwise.
    fn fetch(&self, symbol: &str) -> Result<PriceHistory, FeedError>;
}
