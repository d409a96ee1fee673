//! CSV-backed close series.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::FeedError;
use crate::history::PriceHistory;
use crate::HistoricalSource;

/// One row of the close-series file.
#[derive(Debug, Deserialize)]
struct CloseRow {
    close: f64,
}

/// Historical source reading daily closes from a CSV file.
///
/// The file needs a header with a `close` column; other columns (dates,
/// volume) are ignored. Rows are taken in file order, oldest first.
///
/// # Examples
/// ```no_run
/// use adapter_feeds::{CsvSource, HistoricalSource};
///
/// let source = CsvSource::new("closes.csv");
/// let history = source.fetch("CL=F").unwrap();
/// println!("{} closes", history.len());
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Creates a source for the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoricalSource for CsvSource {
    fn fetch(&self, symbol: &str) -> Result<PriceHistory, FeedError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut closes = Vec::new();
        for row in reader.deserialize::<CloseRow>() {
            closes.push(row?.close);
        }
        debug!(path = %self.path.display(), rows = closes.len(), "loaded close series");
        PriceHistory::new(symbol, closes)
    }
}
