//! The placement strategies.
//!
//! Each strategy lives in its own file and is exported here.

use crate::Block;

mod first_fit;
pub use first_fit::FirstFit;

mod best_fit;
pub use best_fit::BestFit;

mod worst_fit;
pub use worst_fit::WorstFit;

/// The trait that any placement strategy has to implement.
pub trait Fit {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Returns the index of the block that should receive a request of
    /// `request` units, or [`None`] if no block is eligible.
    fn select(&self, blocks: &[Block], request: usize) -> Option<usize>;

    /// Records that `request` units were placed into `block`.
    ///
    /// By default the whole block is handed out.
    fn commit(&self, block: &mut Block, _request: usize) {
        block.occupied = true;
    }

    /// Whether the block keeps accepting requests after a commit, in which
    /// case the report carries its residual capacity.
    fn splits_blocks(&self) -> bool {
        false
    }
}
