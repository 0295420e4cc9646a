//! Drives a [`Scheduler`] over a set of processes and records what happened.

use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::{Pid, ProcessRecord, Scheduler, SchedulingDecision};

/// A process as seen by the schedulers while a simulation runs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Entry {
    pid: Pid,
    record: ProcessRecord,
    remaining: usize,
    completion: Option<usize>,
}

impl Entry {
    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn burst(&self) -> usize {
        self.record.burst
    }

    pub fn arrival(&self) -> usize {
        self.record.arrival
    }

    pub fn priority(&self) -> i32 {
        self.record.priority
    }

    /// Time units the process still has to run.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process has arrived by `time` and still needs the CPU.
    pub fn is_ready(&self, time: usize) -> bool {
        self.arrival() <= time && !self.is_finished()
    }
}

/// The clock and the state of every process in a simulation.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    time: usize,
    entries: Vec<Entry>,
}

impl ProcessTable {
    pub fn new(processes: &[ProcessRecord]) -> ProcessTable {
        let entries = processes
            .iter()
            .enumerate()
            .map(|(index, record)| Entry {
                pid: Pid::from_index(index),
                record: *record,
                remaining: record.burst,
                completion: None,
            })
            .collect();
        ProcessTable { time: 0, entries }
    }

    /// The current simulated clock.
    pub fn time(&self) -> usize {
        self.time
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the process stored at `index`, in input order.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Processes that arrived by the current time and are not finished, in index order.
    pub fn ready(&self) -> impl Iterator<Item = &Entry> {
        let time = self.time;
        self.entries.iter().filter(move |entry| entry.is_ready(time))
    }

    pub fn all_finished(&self) -> bool {
        self.entries.iter().all(Entry::is_finished)
    }

    /// Runs `pid` for at most `timeslice` units and advances the clock.
    ///
    /// Returns `true` if the process completed during this run.
    fn run(&mut self, pid: Pid, timeslice: usize) -> bool {
        let time = self.time;
        let Some(entry) = self.entries.get_mut(pid.index()) else {
            return false;
        };
        if entry.is_finished() {
            return false;
        }
        let ran = timeslice.min(entry.remaining);
        entry.remaining -= ran;
        let now = time.saturating_add(ran);
        let completed = entry.remaining == 0;
        if completed {
            entry.completion = Some(now);
        }
        self.time = now;
        completed
    }

    fn idle(&mut self, amount: NonZeroUsize) {
        self.time = self.time.saturating_add(amount.get());
    }
}

/// A contiguous stretch of CPU time given to one process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub start: usize,
    pub end: usize,
}

/// Timings computed for one process.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessTiming {
    pub pid: Pid,
    pub burst: usize,
    pub arrival: usize,
    pub priority: i32,

    /// Clock time at which the process finished.
    pub completion: usize,

    /// Time spent ready but not running. Always `turnaround - burst`.
    pub waiting: usize,

    /// Time between arrival and completion.
    pub turnaround: usize,
}

/// The mean of integer time values, `total / count`.
///
/// Displayed with 2 decimals, rounding exact halves up. The rounding is done
/// on integers so the text never depends on floating point representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Average {
    pub total: usize,
    pub count: usize,
}

impl Average {
    pub fn as_f64(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total as f64 / self.count as f64
    }

    /// The average in hundredths, rounded half up.
    pub fn hundredths(&self) -> u128 {
        if self.count == 0 {
            return 0;
        }
        let (total, count) = (self.total as u128, self.count as u128);
        (total * 200 + count) / (count * 2)
    }
}

impl Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.hundredths();
        write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
    }
}

/// The outcome of a scheduling simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    /// Name of the policy that produced the report.
    pub algorithm: &'static str,

    /// Per process timings, indexed by `pid.index()`.
    pub timings: Vec<ProcessTiming>,

    /// PIDs in the order the processes completed.
    pub completion_order: Vec<Pid>,

    /// Every run decision with a non-zero length, in time order.
    pub slices: Vec<Slice>,
}

impl ScheduleReport {
    fn new(
        algorithm: &'static str,
        table: &ProcessTable,
        completion_order: Vec<Pid>,
        slices: Vec<Slice>,
    ) -> ScheduleReport {
        let timings = table
            .entries()
            .map(|entry| {
                let completion = entry.completion.unwrap_or(table.time());
                let turnaround = completion.saturating_sub(entry.arrival());
                ProcessTiming {
                    pid: entry.pid(),
                    burst: entry.burst(),
                    arrival: entry.arrival(),
                    priority: entry.priority(),
                    completion,
                    waiting: turnaround.saturating_sub(entry.burst()),
                    turnaround,
                }
            })
            .collect();
        ScheduleReport {
            algorithm,
            timings,
            completion_order,
            slices,
        }
    }

    pub fn timing(&self, pid: Pid) -> Option<&ProcessTiming> {
        self.timings.get(pid.index())
    }

    pub fn average_waiting(&self) -> Average {
        Average {
            total: self.timings.iter().map(|timing| timing.waiting).sum(),
            count: self.timings.len(),
        }
    }

    pub fn average_turnaround(&self) -> Average {
        Average {
            total: self.timings.iter().map(|timing| timing.turnaround).sum(),
            count: self.timings.len(),
        }
    }

    /// Clock time at which the last process completed.
    pub fn makespan(&self) -> usize {
        self.timings
            .iter()
            .map(|timing| timing.completion)
            .max()
            .unwrap_or(0)
    }
}

impl Display for ScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== {} =====", self.algorithm)?;
        writeln!(f, "PID\tBURST\tARRIVAL\tPRI\tWAITING\tTURNAROUND")?;
        for pid in &self.completion_order {
            if let Some(timing) = self.timing(*pid) {
                writeln!(
                    f,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    timing.pid,
                    timing.burst,
                    timing.arrival,
                    timing.priority,
                    timing.waiting,
                    timing.turnaround
                )?;
            }
        }
        if !self.slices.is_empty() {
            write!(f, "Gantt:")?;
            for slice in &self.slices {
                write!(f, " [{}-{} P{}]", slice.start, slice.end, slice.pid)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Average Waiting Time: {}", self.average_waiting())?;
        write!(f, "Average Turnaround Time: {}", self.average_turnaround())
    }
}

/// Runs `scheduler` over `processes` until it reports [`SchedulingDecision::Done`].
///
/// ## Example
///
/// ```rust
/// use scheduler::{simulate, ProcessRecord};
///
/// let report = simulate(
///     scheduler::fcfs(),
///     &[ProcessRecord::new(5, 0, 0), ProcessRecord::new(3, 1, 0)],
/// );
/// assert_eq!(report.timings[1].waiting, 4);
/// ```
pub fn simulate<S: Scheduler>(mut scheduler: S, processes: &[ProcessRecord]) -> ScheduleReport {
    let mut table = ProcessTable::new(processes);
    let mut completion_order = Vec::with_capacity(table.len());
    let mut slices = Vec::new();

    loop {
        let decision = scheduler.next(&table);
        trace!("{} at t={}: {}", scheduler.name(), table.time(), decision);
        match decision {
            SchedulingDecision::Run { pid, timeslice } => {
                let start = table.time();
                if table.run(pid, timeslice) {
                    debug!("{}: process {} completed at t={}", scheduler.name(), pid, table.time());
                    completion_order.push(pid);
                }
                if table.time() > start {
                    slices.push(Slice {
                        pid,
                        start,
                        end: table.time(),
                    });
                }
            }
            SchedulingDecision::Idle(amount) => table.idle(amount),
            SchedulingDecision::Done => break,
        }
    }

    ScheduleReport::new(scheduler.name(), &table, completion_order, slices)
}
