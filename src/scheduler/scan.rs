//! Elevator scheduling: SCAN and C-SCAN
//!
//! Both policies split the workload by cylinder relative to where the head
//! starts: requests below the start cylinder ("lower") and requests at or above
//! it ("upper"). Each set is sorted ascending by cylinder only. The upper set
//! is swept first, ascending.
//!
//! - **SCAN** then reverses and sweeps the lower set downward.
//! - **C-SCAN** returns to the low end and sweeps the lower set upward.
//!
//! The sort is stable, so requests on the same cylinder keep index order
//! within a set (and reverse index order on SCAN's downward sweep).

use super::{Scheduler, ServiceRun};

/// Requests split around the start cylinder, each half sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sweep {
    pub lower: Vec<usize>,
    pub upper: Vec<usize>,
}

impl Sweep {
    pub(crate) fn partition(run: &ServiceRun<'_>) -> Self {
        let workload = run.workload();
        let start_cylinder = run.start().cylinder;

        let (mut lower, mut upper): (Vec<usize>, Vec<usize>) =
            (0..workload.len()).partition(|&index| workload[index].cylinder < start_cylinder);

        lower.sort_by_key(|&index| workload[index].cylinder);
        upper.sort_by_key(|&index| workload[index].cylinder);

        Self { lower, upper }
    }
}

/// SCAN (elevator) policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanScheduler;

impl Scheduler for ScanScheduler {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&mut self, run: &mut ServiceRun<'_>) {
        let sweep = Sweep::partition(run);

        for &index in &sweep.upper {
            run.service(index);
        }
        for &index in sweep.lower.iter().rev() {
            run.service(index);
        }
    }
}

/// Circular SCAN policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CScanScheduler;

impl Scheduler for CScanScheduler {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&mut self, run: &mut ServiceRun<'_>) {
        let sweep = Sweep::partition(run);

        for &index in sweep.upper.iter().chain(&sweep.lower) {
            run.service(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::HeadState;
    use crate::scheduler::tests::{geometry, random_workload, workload_of};
    use crate::scheduler::Algorithm;

    #[test]
    fn test_partition_sorted_by_cylinder() {
        let geometry = geometry();
        let workload = workload_of(&[5, 15, 10, 3, 20, 10]);
        let run = ServiceRun::new(&workload, &geometry, HeadState::new(10, 0));
        let sweep = Sweep::partition(&run);

        assert_eq!(sweep.lower, vec![3, 0]);
        assert_eq!(sweep.upper, vec![2, 5, 1, 4]);
    }

    #[test]
    fn test_scan_order() {
        let geometry = geometry();
        let workload = workload_of(&[5, 15, 10, 3, 20]);
        let outcome = Algorithm::Scan.run(&workload, &geometry, HeadState::new(10, 0), 0);

        // Up: 10, 15, 20; back down: 5, 3
        assert_eq!(outcome.service_order(), vec![2, 1, 4, 0, 3]);
    }

    #[test]
    fn test_cscan_order() {
        let geometry = geometry();
        let workload = workload_of(&[5, 15, 10, 3, 20]);
        let outcome = Algorithm::CScan.run(&workload, &geometry, HeadState::new(10, 0), 0);

        // Up: 10, 15, 20; wrap: 3, 5
        assert_eq!(outcome.service_order(), vec![2, 1, 4, 3, 0]);
    }

    #[test]
    fn test_scan_and_cscan_share_upper_sweep() {
        let geometry = geometry();
        let workload = random_workload(51, 300);
        let head = HeadState::new(11, 6);

        let scan = Algorithm::Scan.run(&workload, &geometry, head, 0).service_order();
        let cscan = Algorithm::CScan.run(&workload, &geometry, head, 0).service_order();

        let upper = workload.iter().filter(|r| r.cylinder >= head.cylinder).count();
        assert_eq!(scan[..upper], cscan[..upper]);

        // Lower halves hold the same requests in opposite cylinder order
        let scan_lower: Vec<u32> = scan[upper..].iter().map(|&i| workload[i].cylinder).collect();
        let cscan_lower: Vec<u32> = cscan[upper..].iter().map(|&i| workload[i].cylinder).collect();
        assert!(scan_lower.windows(2).all(|w| w[0] >= w[1]));
        assert!(cscan_lower.windows(2).all(|w| w[0] <= w[1]));
        assert!(scan_lower.iter().all(|&c| c < head.cylinder));

        let mut a = scan[upper..].to_vec();
        let mut b = cscan[upper..].to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }

    #[test]
    fn test_head_at_zero_is_single_sweep() {
        let geometry = geometry();
        let workload = workload_of(&[7, 0, 3]);
        let scan = Algorithm::Scan.run(&workload, &geometry, HeadState::new(0, 0), 0);
        let cscan = Algorithm::CScan.run(&workload, &geometry, HeadState::new(0, 0), 0);

        assert_eq!(scan.service_order(), vec![1, 2, 0]);
        assert_eq!(scan.service_order(), cscan.service_order());
    }
}
