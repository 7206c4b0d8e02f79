//! Shortest-seek-time-first scheduling
//!
//! At every step the pending request with the smallest cylinder distance from
//! the head is serviced. Sector and length do not influence the choice. Ties go
//! to the lowest request index: the scan keeps the first strict minimum it
//! finds.
//!
//! Each step rescans the whole workload, so a run is O(R²).

use super::{Scheduler, ServiceRun};

/// SSTF policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SstfScheduler;

/// Index of the nearest pending request, or `None` when all are serviced
pub(crate) fn nearest_pending(run: &ServiceRun<'_>) -> Option<usize> {
    let head_cylinder = run.head().cylinder;
    let mut best: Option<(usize, u32)> = None;

    for (index, request) in run.workload().iter().enumerate() {
        if run.is_serviced(index) {
            continue;
        }
        let distance = request.cylinder.abs_diff(head_cylinder);
        match best {
            Some((_, min)) if min <= distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

impl Scheduler for SstfScheduler {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&mut self, run: &mut ServiceRun<'_>) {
        while let Some(index) = nearest_pending(run) {
            run.service(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::disk::HeadState;
    use crate::scheduler::tests::{geometry, random_workload, workload_of};
    use crate::scheduler::Algorithm;

    #[test]
    fn test_sstf_picks_nearest() {
        let geometry = geometry();
        let workload = workload_of(&[20, 9, 14, 2]);
        let outcome = Algorithm::Sstf.run(&workload, &geometry, HeadState::new(10, 0), 0);

        // 10 -> 9 -> 14 -> 20 -> 2
        assert_eq!(outcome.service_order(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_sstf_tie_breaks_on_first_index() {
        let geometry = geometry();
        // 8 and 12 are both 2 away from 10; index 1 (cylinder 12) comes first
        let workload = workload_of(&[3, 12, 8, 12]);
        let outcome = Algorithm::Sstf.run(&workload, &geometry, HeadState::new(10, 0), 0);

        // 10 -> 12 (idx 1) -> 12 (idx 3) -> 8 -> 3
        assert_eq!(outcome.service_order(), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_sstf_greedy_property() {
        let geometry = geometry();
        let workload = random_workload(41, 250);
        let start = HeadState::new(13, 0);
        let outcome = Algorithm::Sstf.run(&workload, &geometry, start, 0);

        let mut serviced = vec![false; workload.len()];
        let mut head_cylinder = start.cylinder;
        for record in &outcome.trace {
            let chosen = workload[record.index].cylinder.abs_diff(head_cylinder);
            for (index, request) in workload.iter().enumerate() {
                if serviced[index] {
                    continue;
                }
                let distance = request.cylinder.abs_diff(head_cylinder);
                assert!(chosen <= distance);
                if distance == chosen {
                    assert!(record.index <= index, "tie must go to the first index");
                }
            }
            serviced[record.index] = true;
            head_cylinder = workload[record.index].cylinder;
        }
    }
}
