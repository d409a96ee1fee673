//! Feed error types.

use thiserror::Error;

/// Categorised market data feed errors.
///
/// All variants are fatal for the pricing pipeline; there are no retry
/// semantics at this layer.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The source had no historical data for the requested symbol.
    #[error("no historical data found for `{symbol}`; check the symbol")]
    NoData {
        /// The requested symbol
        symbol: String,
    },

    /// Too few closes to estimate returns and volatility.
    #[error("insufficient history: got {got} closes, need at least {need}")]
    InsufficientHistory {
        /// Number of closes available
        got: usize,
        /// Minimum required
        need: usize,
    },

    /// A close price was non-positive or non-finite.
    #[error("invalid close {value} at row {index}")]
    InvalidClose {
        /// Zero-based row index
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Underlying I/O failure.
    #[error("feed I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse failure.
    #[error("feed CSV error: {0}")]
    Csv(#[from] csv::Error),
}
