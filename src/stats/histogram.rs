//! Response-time histogram using HdrHistogram
//!
//! Records response times at microsecond resolution so the report can carry
//! percentiles alongside the exact mean/min/max/stddev computed from the raw
//! samples.
//!
//! # Example
//!
//! ```
//! use disksim::stats::histogram::ResponseHistogram;
//!
//! let mut hist = ResponseHistogram::new();
//! hist.record_ms(12.5);
//! hist.record_ms(40.0);
//!
//! let p50 = hist.percentile_ms(50.0).unwrap();
//! assert!(p50 >= 12.0 && p50 <= 13.0);
//! ```

use hdrhistogram::Histogram;

/// Upper bound of the histogram: one day in microseconds
const MAX_MICROS: u64 = 86_400_000_000;

/// Response-time histogram wrapper
///
/// Tracks values from 1 microsecond to one day with 3 significant digits, so
/// percentiles are accurate to within 0.1%.
#[derive(Debug, Clone)]
pub struct ResponseHistogram {
    histogram: Histogram<u64>,
}

impl ResponseHistogram {
    pub fn new() -> Self {
        // Bounds are constant and valid, creation cannot fail
        let histogram = Histogram::new_with_bounds(1, MAX_MICROS, 3)
            .expect("histogram bounds are valid");

        Self { histogram }
    }

    /// Record a response time given in milliseconds
    ///
    /// Values outside the tracked range are clamped.
    #[inline]
    pub fn record_ms(&mut self, response_ms: f64) {
        let micros = (response_ms * 1000.0).round();
        let value = if micros.is_finite() { micros as u64 } else { MAX_MICROS };
        let _ = self.histogram.record(value.clamp(1, MAX_MICROS));
    }

    /// Value at `percentile` (0.0 - 100.0) in milliseconds, `None` if empty
    pub fn percentile_ms(&self, percentile: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.histogram.value_at_percentile(percentile) as f64 / 1000.0)
    }

    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }
}

impl Default for ResponseHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a f64> for ResponseHistogram {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        let mut hist = Self::new();
        for &value in iter {
            hist.record_ms(value);
        }
        hist
    }
}
