use std::num::NonZeroUsize;

use crate::simulation::ProcessTable;
use crate::Scheduler;
use crate::SchedulingDecision::{self, Done, Idle, Run};

/// Round robin that walks the process list in index order.
///
/// There is no ready queue: every cycle rescans all processes from the
/// first index, so a process arriving mid-cycle only runs once the scan
/// reaches its position. This differs from textbook round robin, see
/// [`crate::schedulers::QueuedRoundRobin`] for the queue based variant.
///
/// A full scan that finds nothing ready advances the clock by one unit.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: NonZeroUsize,
    cursor: usize,
    dispatched: bool,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin {
            quantum,
            cursor: 0,
            dispatched: false,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision {
        if table.is_empty() || table.all_finished() {
            return Done;
        }

        loop {
            if self.cursor == table.len() {
                self.cursor = 0;
                let idle = !self.dispatched;
                self.dispatched = false;
                if idle {
                    return Idle(NonZeroUsize::MIN);
                }
            }

            let index = self.cursor;
            self.cursor += 1;
            if let Some(entry) = table.get(index) {
                if entry.is_ready(table.time()) {
                    self.dispatched = true;
                    return Run {
                        pid: entry.pid(),
                        timeslice: entry.remaining().min(self.quantum.get()),
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::{simulate, ProcessRecord, Slice};
    use pretty_assertions::assert_eq;

    use super::RoundRobin;

    fn quantum(amount: usize) -> NonZeroUsize {
        NonZeroUsize::new(amount).unwrap()
    }

    #[test]
    fn total_time_equals_sum_of_bursts() {
        let report = simulate(
            RoundRobin::new(quantum(3)),
            &[
                ProcessRecord::new(10, 0, 0),
                ProcessRecord::new(5, 0, 0),
                ProcessRecord::new(8, 0, 0),
            ],
        );

        assert_eq!(report.makespan(), 23);
        assert_eq!(report.completion_order, vec![2usize, 3, 1]);
        let turnaround: Vec<usize> = report.timings.iter().map(|t| t.turnaround).collect();
        let waiting: Vec<usize> = report.timings.iter().map(|t| t.waiting).collect();
        assert_eq!(turnaround, vec![23, 14, 22]);
        assert_eq!(waiting, vec![13, 9, 14]);
        assert_eq!(report.average_waiting().to_string(), "12.00");
        assert_eq!(report.average_turnaround().to_string(), "19.67");

        let run: usize = report.slices.iter().map(|s| s.end - s.start).sum();
        assert_eq!(run, 23);
    }

    #[test]
    fn each_process_completes_exactly_once() {
        let report = simulate(
            RoundRobin::new(quantum(3)),
            &[
                ProcessRecord::new(10, 0, 0),
                ProcessRecord::new(5, 0, 0),
                ProcessRecord::new(8, 0, 0),
            ],
        );

        let mut order = report.completion_order.clone();
        order.sort();
        assert_eq!(order, vec![1usize, 2, 3]);
    }

    // Known deviation from textbook round robin: the late arrival at index 0
    // runs before the processes already waiting, because the scan restarts
    // from the first index.
    #[test]
    fn late_arrival_is_picked_up_in_scan_order() {
        let report = simulate(
            RoundRobin::new(quantum(2)),
            &[
                ProcessRecord::new(2, 3, 0),
                ProcessRecord::new(4, 0, 0),
                ProcessRecord::new(4, 0, 0),
            ],
        );

        assert_eq!(report.completion_order, vec![1usize, 2, 3]);
        assert_eq!(report.timings[0].completion, 6);
        assert_eq!(report.timings[0].waiting, 1);
        assert_eq!(
            report.slices.first().copied(),
            Some(Slice {
                pid: crate::Pid::from_index(1),
                start: 0,
                end: 2
            })
        );
    }

    #[test]
    fn idles_when_nothing_has_arrived() {
        let report = simulate(RoundRobin::new(quantum(2)), &[ProcessRecord::new(3, 2, 0)]);

        assert_eq!(report.timings[0].completion, 5);
        assert_eq!(report.timings[0].waiting, 0);
        assert_eq!(report.slices.len(), 2);
    }

    #[test]
    fn zero_burst_process_terminates() {
        let report = simulate(
            RoundRobin::new(quantum(2)),
            &[ProcessRecord::new(0, 0, 0), ProcessRecord::new(1, 0, 0)],
        );

        assert_eq!(report.completion_order, vec![1usize, 2]);
        assert_eq!(report.timings[0].turnaround, 0);
        assert_eq!(report.makespan(), 1);
    }
}
