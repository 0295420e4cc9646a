use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::simulation::ProcessTable;
use crate::Scheduler;
use crate::SchedulingDecision::{self, Done, Idle, Run};

/// Textbook round robin with a FIFO ready queue.
///
/// Processes join the queue in arrival order (ties by index). A preempted
/// process goes to the back of the queue after the processes that arrived
/// while it was running.
#[derive(Debug)]
pub struct QueuedRoundRobin {
    quantum: NonZeroUsize,
    ready_queue: VecDeque<usize>,
    admitted: Vec<bool>,
    current: Option<usize>,
}

impl QueuedRoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        QueuedRoundRobin {
            quantum,
            ready_queue: VecDeque::new(),
            admitted: Vec::new(),
            current: None,
        }
    }

    fn admit_arrivals(&mut self, table: &ProcessTable) {
        if self.admitted.len() != table.len() {
            self.admitted = vec![false; table.len()];
        }

        let mut arrivals: Vec<(usize, usize)> = table
            .entries()
            .enumerate()
            .filter(|(index, entry)| !self.admitted[*index] && entry.arrival() <= table.time())
            .map(|(index, entry)| (entry.arrival(), index))
            .collect();
        arrivals.sort();

        for (_, index) in arrivals {
            self.admitted[index] = true;
            self.ready_queue.push_back(index);
        }
    }

    fn next_arrival(&self, table: &ProcessTable) -> Option<usize> {
        table
            .entries()
            .enumerate()
            .filter(|(index, _)| !self.admitted[*index])
            .map(|(_, entry)| entry.arrival())
            .min()
    }
}

impl Scheduler for QueuedRoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin (ready queue)"
    }

    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision {
        self.admit_arrivals(table);

        if let Some(index) = self.current.take() {
            if table.get(index).is_some_and(|entry| !entry.is_finished()) {
                self.ready_queue.push_back(index);
            }
        }

        if let Some(index) = self.ready_queue.pop_front() {
            if let Some(entry) = table.get(index) {
                self.current = Some(index);
                return Run {
                    pid: entry.pid(),
                    timeslice: entry.remaining().min(self.quantum.get()),
                };
            }
        }

        match self
            .next_arrival(table)
            .and_then(|arrival| NonZeroUsize::new(arrival.saturating_sub(table.time())))
        {
            Some(gap) => Idle(gap),
            None => Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::schedulers::RoundRobin;
    use crate::{simulate, ProcessRecord};
    use pretty_assertions::assert_eq;

    use super::QueuedRoundRobin;

    fn quantum(amount: usize) -> NonZeroUsize {
        NonZeroUsize::new(amount).unwrap()
    }

    #[test]
    fn matches_scan_order_when_everything_arrives_at_once() {
        let processes = [
            ProcessRecord::new(10, 0, 0),
            ProcessRecord::new(5, 0, 0),
            ProcessRecord::new(8, 0, 0),
        ];

        let queued = simulate(QueuedRoundRobin::new(quantum(3)), &processes);
        let scanned = simulate(RoundRobin::new(quantum(3)), &processes);

        assert_eq!(queued.timings, scanned.timings);
        assert_eq!(queued.slices, scanned.slices);
    }

    #[test]
    fn late_arrival_waits_behind_queued_processes() {
        let report = simulate(
            QueuedRoundRobin::new(quantum(2)),
            &[
                ProcessRecord::new(2, 3, 0),
                ProcessRecord::new(4, 0, 0),
                ProcessRecord::new(4, 0, 0),
            ],
        );

        assert_eq!(report.completion_order, vec![2usize, 1, 3]);
        assert_eq!(report.timings[0].completion, 8);
        assert_eq!(report.timings[0].waiting, 3);
        assert_eq!(report.makespan(), 10);
    }

    #[test]
    fn jumps_over_idle_gaps() {
        let report = simulate(
            QueuedRoundRobin::new(quantum(2)),
            &[ProcessRecord::new(1, 0, 0), ProcessRecord::new(3, 5, 0)],
        );

        assert_eq!(report.timings[1].completion, 8);
        assert_eq!(report.timings[1].waiting, 0);
    }
}
