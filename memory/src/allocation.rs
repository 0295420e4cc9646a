//! Runs a placement strategy over a set of blocks and processes.

use std::fmt::{self, Display};

use log::debug;

use crate::fits::Fit;
use crate::{Block, BlockId};

/// Where one process ended up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    /// 1-based process number.
    pub process: usize,

    /// Requested size.
    pub size: usize,

    /// The receiving block, [`None`] when no block was eligible.
    pub block: Option<BlockId>,

    /// Size of the receiving block as supplied by the caller.
    pub block_size: Option<usize>,

    /// Capacity left in the receiving block right after this placement.
    /// Only reported by strategies that split blocks.
    pub residual: Option<usize>,
}

impl Placement {
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }
}

/// The outcome of one allocation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationReport {
    /// Name of the strategy that produced the report.
    pub strategy: &'static str,

    /// One entry per process, in input order.
    pub placements: Vec<Placement>,

    /// Final state of every block, in input order.
    pub blocks: Vec<Block>,

    splits_blocks: bool,
}

impl AllocationReport {
    /// Returns the block that received the 1-based `process`.
    pub fn block_of(&self, process: usize) -> Option<BlockId> {
        process
            .checked_sub(1)
            .and_then(|index| self.placements.get(index))
            .and_then(|placement| placement.block)
    }

    /// Processes for which no block was eligible.
    pub fn unallocated(&self) -> Vec<usize> {
        self.placements
            .iter()
            .filter(|placement| !placement.is_allocated())
            .map(|placement| placement.process)
            .collect()
    }

    /// Capacity left over in blocks that received at least one process.
    ///
    /// Only meaningful for strategies that split blocks; whole block
    /// strategies report 0.
    pub fn total_fragmentation(&self) -> usize {
        if !self.splits_blocks {
            return 0;
        }
        self.blocks
            .iter()
            .filter(|block| block.remaining < block.size)
            .map(|block| block.remaining)
            .sum()
    }
}

impl Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== {} =====", self.strategy)?;
        let last_column = if self.splits_blocks {
            "Wastage Memory"
        } else {
            "Block Size"
        };
        write!(f, "Process No.\tProcess Size\tBlock no.\t{}", last_column)?;
        for placement in &self.placements {
            write!(f, "\n{}\t\t{}\t\t", placement.process, placement.size)?;
            match placement.block {
                Some(block) => {
                    let value = placement.residual.or(placement.block_size).unwrap_or(0);
                    write!(f, "{}\t\t{}", block, value)?;
                }
                None => write!(f, "Not Allocated")?,
            }
        }
        Ok(())
    }
}

/// Places every process, in input order, into the blocks chosen by `fit`.
///
/// Block state lives only for this call: every run starts from the sizes
/// in `block_sizes`.
pub fn allocate_with<F: Fit + ?Sized>(
    fit: &F,
    block_sizes: &[usize],
    process_sizes: &[usize],
) -> AllocationReport {
    let mut blocks: Vec<Block> = block_sizes
        .iter()
        .enumerate()
        .map(|(index, size)| Block::new(index, *size))
        .collect();

    let placements = process_sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let process = index + 1;
            let mut placement = Placement {
                process,
                size: *size,
                block: None,
                block_size: None,
                residual: None,
            };
            match fit.select(&blocks, *size).and_then(|chosen| blocks.get_mut(chosen)) {
                Some(block) => {
                    fit.commit(block, *size);
                    debug!("{}: process {} ({}) -> block {}", fit.name(), process, size, block.id);
                    placement.block = Some(block.id);
                    placement.block_size = Some(block.size);
                    if fit.splits_blocks() {
                        placement.residual = Some(block.remaining);
                    }
                }
                None => debug!("{}: process {} ({}) not allocated", fit.name(), process, size),
            }
            placement
        })
        .collect();

    AllocationReport {
        strategy: fit.name(),
        placements,
        blocks,
        splits_blocks: fit.splits_blocks(),
    }
}
