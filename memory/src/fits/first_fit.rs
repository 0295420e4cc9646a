use crate::fits::Fit;
use crate::Block;

/// Takes the first free block that is large enough.
#[derive(Debug, Default)]
pub struct FirstFit;

impl Fit for FirstFit {
    fn name(&self) -> &'static str {
        "First Fit"
    }

    fn select(&self, blocks: &[Block], request: usize) -> Option<usize> {
        blocks
            .iter()
            .position(|block| !block.occupied && block.size >= request)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::FirstFit;
    use crate::fits::Fit;
    use crate::Block;

    #[test]
    fn skips_occupied_and_small_blocks() {
        let mut blocks = vec![Block::new(0, 50), Block::new(1, 300), Block::new(2, 400)];
        blocks[1].occupied = true;

        assert_eq!(FirstFit.select(&blocks, 100), Some(2));
        assert_eq!(FirstFit.select(&blocks, 500), None);
    }
}
