use crate::fits::Fit;
use crate::Block;

/// Takes the smallest free block that is large enough.
///
/// Among blocks of equal size the lowest index wins.
#[derive(Debug, Default)]
pub struct BestFit;

impl Fit for BestFit {
    fn name(&self) -> &'static str {
        "Best Fit"
    }

    fn select(&self, blocks: &[Block], request: usize) -> Option<usize> {
        blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| !block.occupied && block.size >= request)
            .min_by_key(|(_, block)| block.size)
            .map(|(index, _)| index)
    }
}
