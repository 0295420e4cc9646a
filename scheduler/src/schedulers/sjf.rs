use std::num::NonZeroUsize;

use crate::schedulers::select_ready;
use crate::simulation::ProcessTable;
use crate::Scheduler;
use crate::SchedulingDecision::{self, Done, Idle, Run};

/// Non-preemptive shortest job first.
///
/// Picks the arrived process with the smallest burst. If nothing has
/// arrived, the clock moves forward one unit at a time.
#[derive(Debug, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision {
        if table.all_finished() {
            return Done;
        }
        match select_ready(table, |entry| entry.burst()) {
            Some(entry) => Run {
                pid: entry.pid(),
                timeslice: entry.remaining(),
            },
            None => Idle(NonZeroUsize::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{simulate, ProcessRecord};
    use pretty_assertions::assert_eq;

    use super::Sjf;

    #[test]
    fn picks_shortest_arrived_job() {
        let report = simulate(
            Sjf,
            &[
                ProcessRecord::new(6, 2, 0),
                ProcessRecord::new(2, 5, 0),
                ProcessRecord::new(8, 1, 0),
                ProcessRecord::new(3, 0, 0),
            ],
        );

        assert_eq!(report.completion_order, vec![4usize, 1, 2, 3]);
        assert_eq!(report.timings[3].waiting, 0);
        let waiting: Vec<usize> = report.timings.iter().map(|t| t.waiting).collect();
        assert_eq!(waiting, vec![1, 4, 10, 0]);
        assert_eq!(report.average_waiting().to_string(), "3.75");
        assert_eq!(report.average_turnaround().to_string(), "8.50");
    }

    #[test]
    fn equal_bursts_go_to_lowest_index() {
        let report = simulate(
            Sjf,
            &[
                ProcessRecord::new(4, 0, 0),
                ProcessRecord::new(2, 1, 0),
                ProcessRecord::new(2, 1, 0),
            ],
        );

        assert_eq!(report.completion_order, vec![1usize, 2, 3]);
    }

    #[test]
    fn idles_until_first_arrival() {
        let report = simulate(Sjf, &[ProcessRecord::new(2, 3, 0)]);

        assert_eq!(report.timings[0].completion, 5);
        assert_eq!(report.timings[0].waiting, 0);
    }
}
