//! A contiguous memory allocation simulator library.
//!
//! Processes request memory in input order and a placement strategy
//! decides which block each request lands in. Nothing here touches real
//! memory; blocks are plain sizes.
//!

use std::fmt::{self, Display};

mod allocation;
mod block;

pub mod fits;

use fits::{BestFit, FirstFit, WorstFit};

pub use crate::allocation::{allocate_with, AllocationReport, Placement};
pub use crate::block::{Block, BlockId};
pub use crate::fits::Fit;

/// Selects the placement strategy used by [`allocate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FirstFit => write!(f, "First Fit"),
            Strategy::BestFit => write!(f, "Best Fit"),
            Strategy::WorstFit => write!(f, "Worst Fit"),
        }
    }
}

/// Places `process_sizes` into `block_sizes` using `strategy`.
///
/// A process that fits nowhere is reported as not allocated and the run
/// continues with the next one.
///
/// ## Example
///
/// ```rust
/// use memory::{allocate, Strategy};
///
/// let report = allocate(&[100, 500], &[212, 600], Strategy::FirstFit);
/// assert_eq!(report.block_of(1).map(|block| block.index()), Some(1));
/// assert_eq!(report.unallocated(), vec![2]);
/// ```
pub fn allocate(block_sizes: &[usize], process_sizes: &[usize], strategy: Strategy) -> AllocationReport {
    log::debug!(
        "placing {} processes into {} blocks with {}",
        process_sizes.len(),
        block_sizes.len(),
        strategy
    );
    match strategy {
        Strategy::FirstFit => allocate_with(&FirstFit, block_sizes, process_sizes),
        Strategy::BestFit => allocate_with(&BestFit, block_sizes, process_sizes),
        Strategy::WorstFit => allocate_with(&WorstFit, block_sizes, process_sizes),
    }
}
