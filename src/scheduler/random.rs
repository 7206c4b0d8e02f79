//! Random scheduling
//!
//! At every step one of the pending requests is chosen uniformly at random.
//! The pending list is kept in index order, so drawing position `k` picks the
//! `k`-th not-yet-serviced request.

use super::{Scheduler, ServiceRun};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random policy
///
/// Owns its random source; seed it for reproducible service orders.
pub struct RandomScheduler {
    rng: Xoshiro256PlusPlus,
}

impl RandomScheduler {
    /// Create a random scheduler with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Scheduler for RandomScheduler {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn schedule(&mut self, run: &mut ServiceRun<'_>) {
        let mut pending: Vec<usize> = (0..run.workload().len()).collect();

        while !pending.is_empty() {
            let pick = self.rng.gen_range(0..pending.len());
            let index = pending.remove(pick);
            run.service(index);
        }
    }
}
