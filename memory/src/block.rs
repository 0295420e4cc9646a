use std::fmt::{self, Display};
use std::num::NonZeroUsize;

/// The number of a memory block.
///
/// Block numbers start from 1. The block at index `j` of the input
/// sequence has the number `j + 1`.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct BlockId(NonZeroUsize);

impl BlockId {
    pub fn new(id: usize) -> Option<BlockId> {
        NonZeroUsize::new(id).map(BlockId)
    }

    pub fn from_index(index: usize) -> BlockId {
        BlockId(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn index(self) -> usize {
        self.0.get() - 1
    }
}

impl PartialEq<usize> for BlockId {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous memory block during one allocation run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,

    /// Capacity supplied by the caller.
    pub size: usize,

    /// Capacity left after the allocations committed so far.
    pub remaining: usize,

    /// Set by strategies that hand out whole blocks.
    pub occupied: bool,
}

impl Block {
    pub fn new(index: usize, size: usize) -> Block {
        Block {
            id: BlockId::from_index(index),
            size,
            remaining: size,
            occupied: false,
        }
    }
}
