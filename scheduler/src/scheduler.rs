use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use crate::simulation::ProcessTable;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1. The process at index `i`
/// of the input sequence has the PID `i + 1`.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    pub fn new(pid: usize) -> Option<Pid> {
        NonZeroUsize::new(pid).map(Pid)
    }

    /// Returns the PID of the process stored at `index`.
    pub fn from_index(index: usize) -> Pid {
        Pid(NonZeroUsize::MIN.saturating_add(index))
    }

    /// Returns the position of the process in the input sequence.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input data of a single process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ProcessRecord {
    /// Total CPU time the process needs.
    pub burst: usize,

    /// Clock time at which the process becomes eligible to run.
    pub arrival: usize,

    /// Lower values are more urgent. Only the priority policy reads it.
    pub priority: i32,
}

impl ProcessRecord {
    pub fn new(burst: usize, arrival: usize, priority: i32) -> ProcessRecord {
        ProcessRecord {
            burst,
            arrival,
            priority,
        }
    }
}

/// Selects the scheduling policy used by [`crate::run_schedule`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// First come, first served.
    Fcfs,

    /// Non-preemptive shortest job first.
    Sjf,

    /// Round robin that rescans the process list in index order every cycle.
    RoundRobin { quantum: NonZeroUsize },

    /// Round robin with a FIFO ready queue ordered by arrival.
    QueuedRoundRobin { quantum: NonZeroUsize },

    /// Non-preemptive priority, lowest value first.
    Priority,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::RoundRobin { quantum } => write!(f, "Round Robin (quantum {quantum})"),
            Algorithm::QueuedRoundRobin { quantum } => {
                write!(f, "Round Robin, ready queue (quantum {quantum})")
            }
            Algorithm::Priority => write!(f, "Priority"),
        }
    }
}

/// The action that the scheduler asks the simulation to take.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SchedulingDecision {
    /// Run the process with PID `pid` for a maximum of `timeslice` time units.
    ///
    /// A timeslice of 0 is valid for processes with a zero burst; they
    /// complete at the current time.
    Run { pid: Pid, timeslice: usize },

    /// No process is ready, advance the clock by the specified time units.
    Idle(NonZeroUsize),

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingDecision::Run { pid, timeslice } => {
                write!(f, "Run {} for {} units", pid, timeslice)
            }
            SchedulingDecision::Idle(amount) => {
                write!(f, "Idle for {} units", amount)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The trait that any scheduler has to implement.
///
/// The simulation calls [`Scheduler::next`] repeatedly, applying every
/// decision to the [`ProcessTable`] before asking again, until the
/// scheduler answers [`SchedulingDecision::Done`].
pub trait Scheduler {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Returns the action that the simulation has to perform next.
    fn next(&mut self, table: &ProcessTable) -> SchedulingDecision;
}
