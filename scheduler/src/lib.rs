//! A CPU scheduling simulator library.
//!
//! This library provides the traits and structures necessary
//! to simulate a process scheduler over a fixed set of processes
//! and to report the waiting and turnaround time of each of them.
//!

use std::num::NonZeroUsize;

mod scheduler;
mod simulation;

pub mod schedulers;

use schedulers::{Fcfs, Priority, QueuedRoundRobin, RoundRobin, Sjf};

pub use crate::scheduler::{Algorithm, Pid, ProcessRecord, Scheduler, SchedulingDecision};
pub use crate::simulation::{
    simulate, Average, Entry, ProcessTable, ProcessTiming, ScheduleReport, Slice,
};

/// Returns a structure that implements the `Scheduler` trait with a first come first served policy
pub fn fcfs() -> impl Scheduler {
    Fcfs::new()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive
/// shortest job first policy
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `quantum` - the time units that a process can run before it yields the CPU.
///
/// Processes are visited in index order on every cycle, see [`schedulers::RoundRobin`].
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(quantum)
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
/// that keeps a FIFO ready queue
///
/// * `quantum` - the time units that a process can run before it yields the CPU.
pub fn queued_round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    QueuedRoundRobin::new(quantum)
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive priority policy
pub fn priority() -> impl Scheduler {
    Priority
}

/// Simulates `processes` under `algorithm`.
///
/// The input is not validated; times and the quantum are the caller's
/// responsibility.
pub fn run_schedule(processes: &[ProcessRecord], algorithm: Algorithm) -> ScheduleReport {
    log::debug!("scheduling {} processes with {}", processes.len(), algorithm);
    match algorithm {
        Algorithm::Fcfs => simulate(fcfs(), processes),
        Algorithm::Sjf => simulate(sjf(), processes),
        Algorithm::RoundRobin { quantum } => simulate(round_robin(quantum), processes),
        Algorithm::QueuedRoundRobin { quantum } => {
            simulate(queued_round_robin(quantum), processes)
        }
        Algorithm::Priority => simulate(priority(), processes),
    }
}
