//! Trailing close series and volatility estimation.

use crate::error::FeedError;

/// Annualization factor used by the trailing volatility estimate.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// The two scalars the solver consumes from market data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    /// Latest close price
    pub spot: f64,
    /// Trailing annualized volatility estimate
    pub volatility: f64,
}

/// A trailing window of daily close prices for one symbol.
///
/// Construction validates every close (positive, finite); downstream
/// estimators never see a corrupt series.
///
/// # Examples
/// ```
/// use adapter_feeds::PriceHistory;
///
/// let history = PriceHistory::new("CL=F", vec![100.0, 101.0, 99.5, 102.0]).unwrap();
/// assert_eq!(history.latest_close().unwrap(), 102.0);
/// assert_eq!(history.simple_returns().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    symbol: String,
    closes: Vec<f64>,
}

impl PriceHistory {
    /// Creates a validated close series.
    ///
    /// # Errors
    /// - `FeedError::NoData` when `closes` is empty
    /// - `FeedError::InvalidClose` for a non-positive or non-finite close
    pub fn new(symbol: impl Into<String>, closes: Vec<f64>) -> Result<Self, FeedError> {
        let symbol = symbol.into();
        if closes.is_empty() {
            return Err(FeedError::NoData { symbol });
        }
        for (index, &value) in closes.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(FeedError::InvalidClose { index, value });
            }
        }
        Ok(Self { symbol, closes })
    }

    /// The symbol this history belongs to.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The close series, oldest first.
    #[inline]
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Number of closes in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns true if the window holds no closes.
    ///
    /// Never true for a constructed history.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Latest close, the pipeline's spot price.
    pub fn latest_close(&self) -> Result<f64, FeedError> {
        self.closes.last().copied().ok_or_else(|| FeedError::NoData {
            symbol: self.symbol.clone(),
        })
    }

    /// Day-over-day simple (percentage) returns.
    pub fn simple_returns(&self) -> Vec<f64> {
        self.closes
            .windows(2)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }

    /// Trailing annualized volatility estimate.
    ///
    /// Sample standard deviation (n-1 denominator) of the simple daily
    /// returns, scaled by the square root of the trading-day count.
    ///
    /// # Errors
    /// `FeedError::InsufficientHistory` with fewer than 3 closes (two
    /// returns are the minimum for a sample deviation).
    pub fn annualized_volatility(&self, trading_days: f64) -> Result<f64, FeedError> {
        if self.closes.len() < 3 {
            return Err(FeedError::InsufficientHistory {
                got: self.closes.len(),
                need: 3,
            });
        }

        let returns = self.simple_returns();
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

        Ok(variance.sqrt() * trading_days.sqrt())
    }

    /// Spot and volatility in one call.
    pub fn snapshot(&self, trading_days: f64) -> Result<MarketSnapshot, FeedError> {
        Ok(MarketSnapshot {
            spot: self.latest_close()?,
            volatility: self.annualized_volatility(trading_days)?,
        })
    }
}
