//! Disk scheduling policies
//!
//! A scheduling policy decides the order in which the requests of a workload
//! are serviced. All policies share the same mechanics: the drive services one
//! request at a time, each service moves the head and advances the clock (see
//! [`HeadState::service`]). Policies differ only in *which* request they pick
//! next.
//!
//! # Policies
//!
//! - **Random**: uniformly random among the requests not yet serviced
//! - **FIFO**: arrival (index) order
//! - **SSTF**: nearest cylinder first, first index wins ties
//! - **SCAN**: sweep up from the start cylinder, then sweep back down
//! - **C-SCAN**: sweep up from the start cylinder, jump to the low end, sweep up again
//!
//! # Coverage
//!
//! Every policy must service every request exactly once. [`ServiceRun`]
//! enforces this: servicing a request twice, or finishing with a request
//! never serviced, is a bug in the policy and panics.
//!
//! # Example
//!
//! ```
//! use disksim::disk::{DriveGeometry, GeometryConfig, HeadState};
//! use disksim::scheduler::Algorithm;
//! use disksim::workload::Workload;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let geometry = DriveGeometry::new(GeometryConfig::default(), 7200, 8).unwrap();
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
//! let workload = Workload::generate(geometry.config(), &mut rng);
//!
//! let outcome = Algorithm::Sstf.run(&workload, &geometry, HeadState::new(12, 0), 1);
//! assert_eq!(outcome.response_times.len(), workload.len());
//! ```

pub mod fifo;
pub mod random;
pub mod scan;
pub mod sstf;

use crate::disk::{DriveGeometry, HeadState};
use crate::workload::Workload;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use fifo::FifoScheduler;
pub use random::RandomScheduler;
pub use scan::{CScanScheduler, ScanScheduler};
pub use sstf::SstfScheduler;

/// Scheduling policy interface
///
/// Implementations call [`ServiceRun::service`] once for every request index,
/// in the order the policy dictates.
pub trait Scheduler: Send {
    /// Display name of the policy
    fn name(&self) -> &'static str;

    /// Service every request of `run.workload()` exactly once
    fn schedule(&mut self, run: &mut ServiceRun<'_>);
}

/// Selector value outside the known policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("algorithm selector must be between 1 and 5, got {0}")]
pub struct AlgorithmError(pub u8);

/// Available scheduling policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Random,
    Fifo,
    Sstf,
    Scan,
    CScan,
}

impl Algorithm {
    /// All policies, in selector order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Random,
        Algorithm::Fifo,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
    ];

    /// Numeric selector used on the command line (1..=5)
    pub fn selector(self) -> u8 {
        match self {
            Algorithm::Random => 1,
            Algorithm::Fifo => 2,
            Algorithm::Sstf => 3,
            Algorithm::Scan => 4,
            Algorithm::CScan => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Random => "Random",
            Algorithm::Fifo => "FIFO",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        }
    }

    /// Build the scheduler for this policy
    ///
    /// `seed` only matters for [`Algorithm::Random`].
    pub fn scheduler(self, seed: u64) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Random => Box::new(RandomScheduler::with_seed(seed)),
            Algorithm::Fifo => Box::new(FifoScheduler),
            Algorithm::Sstf => Box::new(SstfScheduler),
            Algorithm::Scan => Box::new(ScanScheduler),
            Algorithm::CScan => Box::new(CScanScheduler),
        }
    }

    /// Run this policy over `workload` from the given starting head state
    pub fn run(self, workload: &Workload, geometry: &DriveGeometry, head: HeadState, seed: u64) -> ScheduleOutcome {
        let mut scheduler = self.scheduler(seed);
        let mut run = ServiceRun::new(workload, geometry, head);
        log::trace!("{}: scheduling {} requests", scheduler.name(), run.pending());
        scheduler.schedule(&mut run);
        run.finish()
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = AlgorithmError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.selector() == selector)
            .ok_or(AlgorithmError(selector))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the service trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceRecord {
    /// Position in the service order (0-based)
    pub step: usize,
    /// Request index in the workload
    pub index: usize,
    /// Head cylinder before servicing
    pub from_cylinder: u32,
    /// Head sector before servicing
    pub from_sector: u32,
    pub service_ms: f64,
    pub response_ms: f64,
}

/// In-progress execution of one policy over one workload
///
/// Owns the head state and the response-time slots for the duration of the
/// run. Policies only see the workload, the current head position and which
/// requests are still pending.
pub struct ServiceRun<'a> {
    workload: &'a Workload,
    geometry: &'a DriveGeometry,
    head: HeadState,
    start: HeadState,
    response_times: Vec<Option<f64>>,
    trace: Vec<ServiceRecord>,
}

impl<'a> ServiceRun<'a> {
    pub fn new(workload: &'a Workload, geometry: &'a DriveGeometry, head: HeadState) -> Self {
        Self {
            workload,
            geometry,
            head,
            start: head,
            response_times: vec![None; workload.len()],
            trace: Vec::with_capacity(workload.len()),
        }
    }

    pub fn workload(&self) -> &'a Workload {
        self.workload
    }

    /// Current head state
    pub fn head(&self) -> &HeadState {
        &self.head
    }

    /// Head state at the start of the run
    pub fn start(&self) -> &HeadState {
        &self.start
    }

    pub fn is_serviced(&self, index: usize) -> bool {
        self.response_times[index].is_some()
    }

    /// Number of requests not yet serviced
    pub fn pending(&self) -> usize {
        self.workload.len() - self.trace.len()
    }

    /// Service request `index` from the current head position
    ///
    /// # Panics
    ///
    /// Panics if the request was already serviced.
    pub fn service(&mut self, index: usize) {
        assert!(
            !self.is_serviced(index),
            "request {} serviced twice",
            index
        );

        let workload = self.workload;
        let request = &workload[index];
        let from = self.head;
        let timing = self.head.service(self.geometry, request);
        self.response_times[index] = Some(timing.response_ms);

        log::trace!(
            "request {}: head ({}, {}) -> ({}, {}), service {:.3} ms, response {:.3} ms",
            index,
            from.cylinder,
            from.sector,
            request.cylinder,
            request.sector,
            timing.service_ms,
            timing.response_ms
        );

        self.trace.push(ServiceRecord {
            step: self.trace.len(),
            index,
            from_cylinder: from.cylinder,
            from_sector: from.sector,
            service_ms: timing.service_ms,
            response_ms: timing.response_ms,
        });
    }

    /// Close the run and hand back the filled response times
    ///
    /// # Panics
    ///
    /// Panics if any request was never serviced.
    pub fn finish(self) -> ScheduleOutcome {
        let response_times = self
            .response_times
            .into_iter()
            .enumerate()
            .map(|(index, rt)| rt.unwrap_or_else(|| panic!("request {} was never serviced", index)))
            .collect();

        ScheduleOutcome {
            response_times,
            elapsed_ms: self.head.elapsed_ms,
            final_head: self.head,
            trace: self.trace,
        }
    }
}

/// Result of running one policy to completion
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Response time per request index, in milliseconds
    pub response_times: Vec<f64>,
    /// Total busy time, in milliseconds
    pub elapsed_ms: f64,
    pub final_head: HeadState,
    /// Requests in service order
    pub trace: Vec<ServiceRecord>,
}

impl ScheduleOutcome {
    /// Request indices in the order they were serviced
    pub fn service_order(&self) -> Vec<usize> {
        self.trace.iter().map(|r| r.index).collect()
    }
}
