use std::num::NonZeroUsize;

use crate::schedulers::select_ready;
use crate::simulation::ProcessTable;
use crate::Scheduler;
use crate::SchedulingDecision::{self, Done, Idle, Run};

/// Non-preemptive priority scheduling, lower values first.
#[derive(Debug, Default)]
pub struct Priority;

impl Scheduler for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision {
        if table.all_finished() {
            return Done;
        }
        match select_ready(table, |entry| entry.priority()) {
            Some(entry) => Run {
                pid: entry.pid(),
                timeslice: entry.remaining(),
            },
            None => Idle(NonZeroUsize::MIN),
        }
    }
}
