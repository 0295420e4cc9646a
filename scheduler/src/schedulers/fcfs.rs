use std::num::NonZeroUsize;

use crate::simulation::ProcessTable;
use crate::Scheduler;
use crate::SchedulingDecision::{self, Done, Idle, Run};

/// First come, first served.
///
/// Processes run to completion in input order. When the next process has
/// not arrived yet, the clock jumps straight to its arrival.
#[derive(Debug, Default)]
pub struct Fcfs {
    next: usize,
}

impl Fcfs {
    pub fn new() -> Self {
        Fcfs { next: 0 }
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision {
        while let Some(entry) = table.get(self.next) {
            if entry.is_finished() {
                self.next += 1;
                continue;
            }
            if let Some(gap) = NonZeroUsize::new(entry.arrival().saturating_sub(table.time())) {
                return Idle(gap);
            }
            return Run {
                pid: entry.pid(),
                timeslice: entry.remaining(),
            };
        }
        Done
    }
}
