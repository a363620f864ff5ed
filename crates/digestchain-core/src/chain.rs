//! Chain: the ordered, contiguous sequence of blocks from genesis to tail.
//!
//! A chain is never edited element-by-element. Growth is modeled as
//! whole-sequence replacement: [`Chain::extended`] produces a new chain of
//! the old blocks plus one more, and [`Chain::resolve`] arbitrates between
//! two competing chains by length.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// An ordered sequence of hash-linked blocks, genesis first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// A fresh chain holding exactly the genesis block.
    pub fn bootstrap() -> Self {
        Self {
            blocks: vec![Block::genesis()],
        }
    }

    /// Adopt an existing sequence of blocks as-is.
    ///
    /// No validation is performed; the caller vouches for the sequence
    /// (typically because it was built through `bootstrap` + `extended`).
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True only for a chain constructed from an empty block vector.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The last block (highest index), if any.
    pub fn tail(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// The block at position `index`.
    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Iterate blocks from genesis to tail.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// The full sequence as a slice.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// A new chain consisting of this sequence plus `block` at the end.
    ///
    /// This is the append primitive: the existing chain is left untouched.
    pub fn extended(&self, block: Block) -> Self {
        let mut blocks = Vec::with_capacity(self.blocks.len() + 1);
        blocks.extend_from_slice(&self.blocks);
        blocks.push(block);
        Self { blocks }
    }

    /// Longest-chain arbitration between `current` and `candidate`.
    ///
    /// The candidate wins iff it is strictly longer; ties keep the current
    /// chain. This is a pure length comparison: the candidate's blocks are
    /// not re-validated here, that is the responsibility of whoever built
    /// it. Equal-length forks are deliberately tolerated without any other
    /// tie-break criterion.
    pub fn resolve(current: Chain, candidate: Chain) -> Chain {
        if candidate.len() > current.len() {
            candidate
        } else {
            current
        }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid;

    fn chain_of(appends: &[&str]) -> Chain {
        let mut chain = Chain::bootstrap();
        for digest in appends {
            let next = Block::next(chain.tail().unwrap(), *digest);
            chain = chain.extended(next);
        }
        chain
    }

    #[test]
    fn test_bootstrap_holds_only_genesis() {
        let chain = Chain::bootstrap();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert!(chain.tail().unwrap().is_genesis());
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let chain = Chain::bootstrap();
        let block = Block::next(chain.tail().unwrap(), "abc123");
        let longer = chain.extended(block);

        assert_eq!(chain.len(), 1);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.get(0), chain.get(0));
    }

    #[test]
    fn test_grown_chain_is_contiguous_and_linked() {
        let chain = chain_of(&["a", "b", "c"]);
        for (i, block) in chain.iter().enumerate() {
            assert_eq!(block.index(), i as u64);
            if i > 0 {
                assert!(is_valid(block, chain.get(i - 1).unwrap()));
            }
        }
    }

    #[test]
    fn test_resolve_prefers_strictly_longer() {
        let short = chain_of(&["a"]);
        let long = chain_of(&["a", "b"]);

        let resolved = Chain::resolve(short.clone(), long.clone());
        assert_eq!(resolved, long);

        let resolved = Chain::resolve(long.clone(), short);
        assert_eq!(resolved, long);
    }

    #[test]
    fn test_resolve_ties_keep_current() {
        let current = chain_of(&["a"]);
        let rival = chain_of(&["different"]);
        assert_eq!(current.len(), rival.len());

        let resolved = Chain::resolve(current.clone(), rival);
        assert_eq!(resolved, current);
    }

    #[test]
    fn test_resolve_does_not_revalidate() {
        // A longer chain of unlinked junk still wins: arbitration is length
        // only, validity belongs to the construction pipeline.
        let current = Chain::bootstrap();
        let junk = Chain::from_blocks(vec![
            Block::genesis(),
            Block::genesis(),
        ]);

        let resolved = Chain::resolve(current, junk.clone());
        assert_eq!(resolved, junk);
    }
}
