//! Read/write head state
//!
//! The head assembly has one position (cylinder, sector) shared by every
//! platter, and a running clock of how long the drive has been busy since the
//! start of the run. Both change exactly once per serviced request.

use super::{cost, DriveGeometry};
use crate::workload::Request;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current head position plus cumulative busy time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadState {
    pub cylinder: u32,
    pub sector: u32,
    /// Busy time since run start, in milliseconds
    pub elapsed_ms: f64,
}

/// Timing of one serviced request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceTiming {
    /// Cost of this request alone (seek + rotation + transfer)
    pub service_ms: f64,
    /// Completion time measured from run start (queueing + own cost)
    pub response_ms: f64,
}

impl HeadState {
    /// Head parked at a known position with a zeroed clock
    pub fn new(cylinder: u32, sector: u32) -> Self {
        Self {
            cylinder,
            sector,
            elapsed_ms: 0.0,
        }
    }

    /// Head at a uniformly random position with a zeroed clock
    pub fn random<R: Rng + ?Sized>(geometry: &DriveGeometry, rng: &mut R) -> Self {
        let cylinder = rng.gen_range(0..geometry.cylinders());
        let sector = rng.gen_range(0..geometry.sectors_per_track());
        Self::new(cylinder, sector)
    }

    /// Cost of servicing `request` from the current position, without moving
    pub fn service_time(&self, geometry: &DriveGeometry, request: &Request) -> f64 {
        cost::service_time(geometry, self.cylinder, self.sector, request)
    }

    /// Service `request`: charge its cost, advance the clock, move the head
    ///
    /// The cost is computed against the position *before* the move, and the
    /// response time includes all busy time accrued by earlier requests.
    pub fn service(&mut self, geometry: &DriveGeometry, request: &Request) -> ServiceTiming {
        let service_ms = self.service_time(geometry, request);
        let response_ms = service_ms + self.elapsed_ms;

        self.elapsed_ms += service_ms;
        self.cylinder = request.cylinder;
        self.sector = request.sector;

        ServiceTiming {
            service_ms,
            response_ms,
        }
    }
}
