//! Drive geometry and the physical cost model
//!
//! This module describes the simulated disk: how many platters, cylinders and
//! sectors it has, and how long it takes to move the read/write head assembly
//! between cylinders and to rotate a sector under it.
//!
//! # Timing model
//!
//! Two per-unit costs are derived once from the run parameters and stay fixed
//! for the whole run:
//!
//! - **Rotation time per sector**: `60000 / (rpm * sectors_per_track)` ms
//! - **Seek time per track**: `3 * average_seek_ms / (cylinders - 1)` ms
//!
//! The factor of 3 converts the drive's published *average* seek time (roughly
//! one third of a full stroke) into the cost of a full stroke, which is then
//! spread evenly across the cylinder gaps.
//!
//! # Example
//!
//! ```
//! use disksim::disk::{DriveGeometry, GeometryConfig};
//!
//! let geometry = DriveGeometry::new(GeometryConfig::default(), 300, 10).unwrap();
//! assert_eq!(geometry.rotation_time_per_sector(), 10.0);
//! assert_eq!(geometry.seek_time_per_track(), 1.25);
//! ```

pub mod cost;
pub mod head;

pub use cost::service_time;
pub use head::HeadState;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of requests generated per run
pub const DEFAULT_REQUESTS: usize = 1000;
/// Default number of platters
pub const DEFAULT_PLATTERS: u32 = 4;
/// Default number of cylinders
pub const DEFAULT_CYLINDERS: u32 = 25;
/// Default number of sectors per track
pub const DEFAULT_SECTORS_PER_TRACK: u32 = 20;

/// Errors raised when the drive description cannot produce finite timings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("cylinder count must be greater than 1, got {0}")]
    TooFewCylinders(u32),

    #[error("rotational speed must be positive")]
    ZeroRpm,

    #[error("sectors per track must be positive")]
    ZeroSectors,

    #[error("platter count must be positive")]
    ZeroPlatters,
}

/// Static shape of the simulated drive
///
/// These are the fixed constants of the workload and the disk. They default to
/// 1000 requests over 4 platters, 25 cylinders and 20 sectors per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    /// Total number of requests in the workload
    #[serde(default = "default_requests")]
    pub requests: usize,
    /// Number of platters
    #[serde(default = "default_platters")]
    pub platters: u32,
    /// Number of cylinders (radial tracks)
    #[serde(default = "default_cylinders")]
    pub cylinders: u32,
    /// Number of sectors on every track
    #[serde(default = "default_sectors_per_track")]
    pub sectors_per_track: u32,
}

fn default_requests() -> usize {
    DEFAULT_REQUESTS
}

fn default_platters() -> u32 {
    DEFAULT_PLATTERS
}

fn default_cylinders() -> u32 {
    DEFAULT_CYLINDERS
}

fn default_sectors_per_track() -> u32 {
    DEFAULT_SECTORS_PER_TRACK
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            requests: DEFAULT_REQUESTS,
            platters: DEFAULT_PLATTERS,
            cylinders: DEFAULT_CYLINDERS,
            sectors_per_track: DEFAULT_SECTORS_PER_TRACK,
        }
    }
}

/// Drive geometry with derived timing constants
///
/// Read-only for the duration of a run. Construction fails instead of
/// producing NaN or infinite per-unit costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveGeometry {
    config: GeometryConfig,
    rotation_time_per_sector: f64,
    seek_time_per_track: f64,
}

impl DriveGeometry {
    /// Derive timing constants from the drive shape and run parameters
    ///
    /// # Arguments
    ///
    /// * `config` - Drive shape
    /// * `rpm` - Rotational speed in revolutions per minute
    /// * `average_seek_ms` - Published average seek time in milliseconds
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if `rpm` is zero, the drive has fewer than two
    /// cylinders, or a track has no sectors.
    pub fn new(config: GeometryConfig, rpm: u32, average_seek_ms: u32) -> Result<Self, GeometryError> {
        if config.cylinders <= 1 {
            return Err(GeometryError::TooFewCylinders(config.cylinders));
        }
        if rpm == 0 {
            return Err(GeometryError::ZeroRpm);
        }
        if config.sectors_per_track == 0 {
            return Err(GeometryError::ZeroSectors);
        }
        if config.platters == 0 {
            return Err(GeometryError::ZeroPlatters);
        }

        let rotation_time_per_sector =
            60_000.0 / (f64::from(rpm) * f64::from(config.sectors_per_track));
        let seek_time_per_track = 3.0 * f64::from(average_seek_ms) / f64::from(config.cylinders - 1);

        Ok(Self {
            config,
            rotation_time_per_sector,
            seek_time_per_track,
        })
    }

    /// Drive shape this geometry was built from
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    pub fn cylinders(&self) -> u32 {
        self.config.cylinders
    }

    pub fn sectors_per_track(&self) -> u32 {
        self.config.sectors_per_track
    }

    /// Milliseconds for one sector to pass under the head
    #[inline]
    pub fn rotation_time_per_sector(&self) -> f64 {
        self.rotation_time_per_sector
    }

    /// Milliseconds to move the head by one cylinder
    #[inline]
    pub fn seek_time_per_track(&self) -> f64 {
        self.seek_time_per_track
    }
}
