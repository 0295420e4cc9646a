use std::cmp::Reverse;

use crate::fits::Fit;
use crate::Block;

/// Takes the block with the most remaining capacity.
///
/// The block is not handed out as a whole: its remaining capacity shrinks
/// by the request and it stays eligible for later, smaller requests.
/// Among blocks of equal capacity the lowest index wins.
#[derive(Debug, Default)]
pub struct WorstFit;

impl Fit for WorstFit {
    fn name(&self) -> &'static str {
        "Worst Fit"
    }

    fn select(&self, blocks: &[Block], request: usize) -> Option<usize> {
        blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.remaining >= request)
            .min_by_key(|(_, block)| Reverse(block.remaining))
            .map(|(index, _)| index)
    }

    fn commit(&self, block: &mut Block, request: usize) {
        block.remaining -= request;
    }

    fn splits_blocks(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::WorstFit;
    use crate::fits::Fit;
    use crate::Block;

    #[test]
    fn equal_capacity_keeps_the_earlier_block() {
        let blocks = vec![Block::new(0, 100), Block::new(1, 600), Block::new(2, 600)];

        assert_eq!(WorstFit.select(&blocks, 10), Some(1));
    }

    #[test]
    fn commit_shrinks_the_block() {
        let mut block = Block::new(0, 600);
        WorstFit.commit(&mut block, 212);

        assert_eq!(block.remaining, 388);
        assert!(!block.occupied);
        assert_eq!(WorstFit.select(&[block], 388), Some(0));
        assert_eq!(WorstFit.select(&[block], 389), None);
    }
}
