//! First-in, first-out scheduling
//!
//! Requests are serviced in arrival order, which is generation order. The head
//! position plays no part in the choice.

use super::{Scheduler, ServiceRun};

/// FIFO policy
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn schedule(&mut self, run: &mut ServiceRun<'_>) {
        for index in 0..run.workload().len() {
            run.service(index);
        }
    }
}
