//! Response-time statistics
//!
//! Turns the per-request response times and total busy time of one run into
//! the summary report:
//!
//! - **Throughput**: `requests * 1000 / elapsed_ms`, in requests per second
//! - **Mean / min / max** response time
//! - **Standard deviation**: population form, `sqrt(sum((rt - mean)^2) / R)`
//! - **Percentiles** (p50 / p90 / p99) from an HdrHistogram
//!
//! Inputs are in milliseconds; response-time fields of the [`Report`] are in
//! seconds.
//!
//! # Example
//!
//! ```
//! use disksim::stats::summarize;
//!
//! let report = summarize(&[1000.0, 2000.0, 3000.0], 6000.0).unwrap();
//! assert_eq!(report.throughput, 0.5);
//! assert_eq!(report.mean_response_s, 2.0);
//! ```

pub mod histogram;

use histogram::ResponseHistogram;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Degenerate inputs that have no meaningful summary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    #[error("no response times recorded")]
    Empty,

    #[error("total service time is {0} ms; throughput is undefined")]
    NoServiceTime(f64),
}

/// Summary statistics of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Number of requests serviced
    pub requests: usize,
    /// Total simulated busy time, seconds
    pub elapsed_s: f64,
    /// Requests per second
    pub throughput: f64,
    pub mean_response_s: f64,
    pub min_response_s: f64,
    pub max_response_s: f64,
    pub stddev_response_s: f64,
    pub p50_response_s: f64,
    pub p90_response_s: f64,
    pub p99_response_s: f64,
}

/// Summarize response times (ms) and total busy time (ms)
///
/// # Errors
///
/// Returns [`StatsError::Empty`] for an empty slice and
/// [`StatsError::NoServiceTime`] when `elapsed_ms` is not positive and finite,
/// rather than reporting an infinite or NaN throughput.
pub fn summarize(response_times: &[f64], elapsed_ms: f64) -> Result<Report, StatsError> {
    if response_times.is_empty() {
        return Err(StatsError::Empty);
    }
    if !(elapsed_ms > 0.0 && elapsed_ms.is_finite()) {
        return Err(StatsError::NoServiceTime(elapsed_ms));
    }

    let count = response_times.len() as f64;

    let total: f64 = response_times.iter().sum();
    let min = response_times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = response_times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = total / count;

    let sq_diff: f64 = response_times.iter().map(|rt| (rt - mean) * (rt - mean)).sum();
    let stddev = (sq_diff / count).sqrt();

    let throughput = count * 1000.0 / elapsed_ms;

    let hist: ResponseHistogram = response_times.iter().collect();
    let percentile_s = |p: f64| hist.percentile_ms(p).unwrap_or(0.0) / 1000.0;

    Ok(Report {
        requests: response_times.len(),
        elapsed_s: elapsed_ms / 1000.0,
        throughput,
        mean_response_s: mean / 1000.0,
        min_response_s: min / 1000.0,
        max_response_s: max / 1000.0,
        stddev_response_s: stddev / 1000.0,
        p50_response_s: percentile_s(50.0),
        p90_response_s: percentile_s(90.0),
        p99_response_s: percentile_s(99.0),
    })
}
