//! Dated close-price series.
//!
//! The market-data surface of the workspace: a symbol plus a table of close
//! prices indexed by date, loaded from CSV. The simulation engine never sees
//! this type directly; callers derive a log-return series from it and pass
//! mean/volatility onwards.
//!
//! Expected CSV layout (header required):
//! ```text
//! date,close
//! 2024-01-02,185.64
//! 2024-01-03,184.25
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DataError;
use crate::returns::{log_returns, ReturnStatistics};

#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: NaiveDate,
    close: f64,
}

/// A symbol's close prices indexed by date, in ascending date order as read.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Builds a series from parallel date/close vectors.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different lengths.
    pub fn new(symbol: impl Into<String>, dates: Vec<NaiveDate>, closes: Vec<f64>) -> Self {
        assert_eq!(dates.len(), closes.len(), "dates/closes length mismatch");
        Self {
            symbol: symbol.into(),
            dates,
            closes,
        }
    }

    /// Loads a `date,close` CSV file.
    ///
    /// # Errors
    ///
    /// [`DataError::Csv`] if the file cannot be read or a record is
    /// malformed.
    pub fn from_csv_path(symbol: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, DataError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut dates = Vec::new();
        let mut closes = Vec::new();

        for record in reader.deserialize() {
            let record: PriceRecord = record?;
            dates.push(record.date);
            closes.push(record.close);
        }

        Ok(Self {
            symbol: symbol.into(),
            dates,
            closes,
        })
    }

    /// Returns the symbol this series belongs to.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the observation dates.
    #[inline]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the close prices.
    #[inline]
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Returns the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns `true` if the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Derives the log-return series `ln(close_t / close_{t-1})`.
    ///
    /// # Errors
    ///
    /// [`DataError::InsufficientData`] with fewer than 2 observations,
    /// [`DataError::InvalidPrice`] on a non-positive close.
    pub fn log_returns(&self) -> Result<Vec<f64>, DataError> {
        log_returns(&self.closes)
    }

    /// Mean and standard deviation of the log-return series.
    pub fn return_statistics(&self) -> Result<ReturnStatistics, DataError> {
        ReturnStatistics::from_returns(&self.log_returns()?)
    }
}
