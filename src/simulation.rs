//! Simulation driver
//!
//! Composes one run end to end:
//!
//! 1. Derive the drive timings from the configuration
//! 2. Place the head at a random position
//! 3. Generate the workload
//! 4. Execute the selected policy (or all five in comparison mode)
//! 5. Summarize the response times
//!
//! Every random draw comes from one seeded xoshiro256++ stream, so a seed fully
//! determines the run. In comparison mode each policy starts from the same head
//! position with the same workload, and owns its own head state and response
//! times; the policies run in parallel.

use crate::config::Config;
use crate::disk::{DriveGeometry, HeadState};
use crate::scheduler::{Algorithm, ScheduleOutcome};
use crate::stats::{self, Report};
use crate::workload::Workload;
use crate::Result;
use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Configured simulation, ready to run
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    geometry: DriveGeometry,
    seed: u64,
}

/// Outcome of one policy
#[derive(Debug, Clone)]
pub struct PolicyRun {
    pub algorithm: Algorithm,
    pub outcome: ScheduleOutcome,
    pub report: Report,
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub seed: u64,
    pub initial_head: HeadState,
    pub workload: Workload,
    /// One entry per executed policy, in selector order
    pub runs: Vec<PolicyRun>,
}

impl Simulation {
    /// Prepare a simulation; fails if the drive timings cannot be derived
    pub fn new(config: Config) -> Result<Self> {
        let geometry = DriveGeometry::new(config.drive, config.run.rpm, config.run.average_seek_ms)
            .context("Invalid drive geometry")?;

        let seed = match config.run.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::thread_rng().gen();
                log::info!("No seed given, using {}", seed);
                seed
            }
        };

        Ok(Self {
            config,
            geometry,
            seed,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn geometry(&self) -> &DriveGeometry {
        &self.geometry
    }

    /// Seed driving every random draw of the run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Execute the configured policies
    pub fn run(&self) -> Result<SimulationResult> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);

        let initial_head = HeadState::random(&self.geometry, &mut rng);
        let workload = Workload::generate(self.geometry.config(), &mut rng);
        let policy_seed: u64 = rng.gen();

        log::debug!(
            "Generated {} requests, head starts at cylinder {} sector {}",
            workload.len(),
            initial_head.cylinder,
            initial_head.sector
        );

        let algorithms = self.config.run.mode.algorithms();
        let runs = if algorithms.len() > 1 {
            algorithms
                .par_iter()
                .map(|&algorithm| self.run_policy(algorithm, &workload, initial_head, policy_seed))
                .collect::<Result<Vec<_>>>()?
        } else {
            algorithms
                .iter()
                .map(|&algorithm| self.run_policy(algorithm, &workload, initial_head, policy_seed))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(SimulationResult {
            seed: self.seed,
            initial_head,
            workload,
            runs,
        })
    }

    /// Run one policy over `workload` and summarize it
    pub fn run_policy(
        &self,
        algorithm: Algorithm,
        workload: &Workload,
        head: HeadState,
        policy_seed: u64,
    ) -> Result<PolicyRun> {
        log::debug!("Running {} scheduling", algorithm);

        let outcome = algorithm.run(workload, &self.geometry, head, policy_seed);
        let report = stats::summarize(&outcome.response_times, outcome.elapsed_ms)
            .with_context(|| format!("Failed to summarize {} run", algorithm))?;

        log::debug!(
            "{} finished: {:.3} s busy, {:.3} req/s, head parked at cylinder {} sector {}",
            algorithm,
            report.elapsed_s,
            report.throughput,
            outcome.final_head.cylinder,
            outcome.final_head.sector
        );

        Ok(PolicyRun {
            algorithm,
            outcome,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, RunConfig, RunMode};
    use crate::disk::GeometryConfig;

    fn config(mode: RunMode, seed: Option<u64>) -> Config {
        Config {
            drive: GeometryConfig::default(),
            run: RunConfig {
                rpm: 7200,
                sector_size: 512,
                average_seek_ms: 8,
                mode,
                seed,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_single_run() {
        let sim = Simulation::new(config(RunMode::Single(Algorithm::Sstf), Some(1))).unwrap();
        let result = sim.run().unwrap();

        assert_eq!(result.seed, 1);
        assert_eq!(result.workload.len(), 1000);
        assert_eq!(result.runs.len(), 1);
        assert_eq!(result.runs[0].algorithm, Algorithm::Sstf);
        assert_eq!(result.runs[0].report.requests, 1000);
        assert!(result.runs[0].report.throughput > 0.0);
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let a = Simulation::new(config(RunMode::Single(Algorithm::Random), Some(42)))
            .unwrap()
            .run()
            .unwrap();
        let b = Simulation::new(config(RunMode::Single(Algorithm::Random), Some(42)))
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(a.workload, b.workload);
        assert_eq!(a.initial_head, b.initial_head);
        assert_eq!(a.runs[0].report, b.runs[0].report);
        assert_eq!(a.runs[0].outcome.service_order(), b.runs[0].outcome.service_order());
    }

    #[test]
    fn test_compare_runs_all_on_same_workload() {
        let sim = Simulation::new(config(RunMode::Compare, Some(7))).unwrap();
        let result = sim.run().unwrap();

        let algorithms: Vec<Algorithm> = result.runs.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());

        // A single-policy run with the same seed sees the same workload and head
        let single = Simulation::new(config(RunMode::Single(Algorithm::Scan), Some(7)))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(single.workload, result.workload);
        assert_eq!(single.runs[0].report, result.runs[3].report);
    }

    #[test]
    fn test_sstf_beats_fifo_on_seek_bound_drive() {
        let sim = Simulation::new(config(RunMode::Compare, Some(3))).unwrap();
        let result = sim.run().unwrap();

        let fifo = &result.runs[1].report;
        let sstf = &result.runs[2].report;
        assert!(sstf.throughput > fifo.throughput);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut config = config(RunMode::Single(Algorithm::Fifo), Some(1));
        config.drive.cylinders = 1;
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_unseeded_simulation_picks_seed() {
        let sim = Simulation::new(config(RunMode::Single(Algorithm::Fifo), None)).unwrap();
        let result = sim.run().unwrap();
        assert_eq!(result.seed, sim.seed());
    }
}
