//! The scheduling policies.
//!
//! Each policy lives in its own file and is exported here.

use crate::simulation::{Entry, ProcessTable};

mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod priority;
pub use priority::Priority;

mod round_robin;
pub use round_robin::RoundRobin;

mod queued_round_robin;
pub use queued_round_robin::QueuedRoundRobin;

/// Returns the ready process with the smallest `key`.
///
/// Ties go to the lowest index, the first one found when scanning.
fn select_ready<K, F>(table: &ProcessTable, key: F) -> Option<&Entry>
where
    K: Ord,
    F: Fn(&Entry) -> K,
{
    table.ready().min_by_key(|entry| key(entry))
}
