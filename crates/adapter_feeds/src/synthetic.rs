//! Synthetic close-series generator.
//!
//! Generates a trailing window of daily closes under geometric Brownian
//! motion for testing and demonstration, so the pipeline runs without a
//! live data connection.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::FeedError;
use crate::history::PriceHistory;
use crate::HistoricalSource;

/// Seeded GBM daily-close generator.
///
/// Discretisation: `S(t+dt) = S(t) * exp((mu - sigma^2/2)*dt + sigma*sqrt(dt)*Z)`
/// with `dt` of one trading day. The same seed always produces the same
/// series.
///
/// # Examples
/// ```
/// use adapter_feeds::{HistoricalSource, SyntheticSource};
///
/// let source = SyntheticSource::new(78.0, 0.35).with_seed(7).with_num_days(30);
/// let a = source.fetch("CL=F").unwrap();
/// let b = source.fetch("CL=F").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    initial_price: f64,
    drift: f64,
    volatility: f64,
    num_days: usize,
    seed: u64,
}

impl SyntheticSource {
    /// Creates a generator with zero drift and a 30-day window.
    pub fn new(initial_price: f64, volatility: f64) -> Self {
        Self {
            initial_price,
            drift: 0.0,
            volatility,
            num_days: 30,
            seed: 0,
        }
    }

    /// Set the annual drift rate.
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Set the window length in trading days.
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl HistoricalSource for SyntheticSource {
    fn fetch(&self, symbol: &str) -> Result<PriceHistory, FeedError> {
        if self.num_days == 0 || self.initial_price <= 0.0 {
            return Err(FeedError::NoData {
                symbol: symbol.to_string(),
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let normal = Normal::new(0.0, 1.0).expect("unit normal is well formed");
        let dt = 1.0 / 252.0;
        let drift_term = (self.drift - 0.5 * self.volatility * self.volatility) * dt;

        let mut closes = Vec::with_capacity(self.num_days);
        let mut price = self.initial_price;
        closes.push(price);
        for _ in 1..self.num_days {
            let z: f64 = normal.sample(&mut rng);
            let diffusion_term = self.volatility * dt.sqrt() * z;
            price = (price * (drift_term + diffusion_term).exp()).max(0.0001);
            closes.push(price);
        }

        PriceHistory::new(symbol, closes)
    }
}
