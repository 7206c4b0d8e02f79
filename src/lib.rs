//! disksim - Disk scheduling simulator
//!
//! disksim replays a synthetic workload of disk requests against a mechanical
//! drive model and reports how a scheduling policy performs: throughput and
//! the distribution of response times.
//!
//! # Architecture
//!
//! - **Cost model**: seek + rotational delay + transfer per request
//! - **Workload generator**: seedable, uniformly random requests
//! - **Policies**: Random, FIFO, SSTF, SCAN, C-SCAN
//! - **Statistics**: throughput, mean/min/max/stddev, percentiles
//! - **Driver**: single-policy runs or a side-by-side comparison

pub mod config;
pub mod disk;
pub mod output;
pub mod scheduler;
pub mod simulation;
pub mod stats;
pub mod workload;

// Re-export commonly used types
pub use config::Config;
pub use scheduler::Algorithm;
pub use simulation::Simulation;

/// Result type used throughout disksim
pub type Result<T> = anyhow::Result<T>;
