//! Block: one immutable record in the ledger.
//!
//! A block is never edited after construction. Its hash is computed once,
//! from its own fields, and binds it to its predecessor through `prev_hash`.

use serde::{Deserialize, Serialize};

use crate::hash::{block_hash, BlockHash};

/// An immutable ledger record, hash-linked to its predecessor.
///
/// Fields are private; the only ways to obtain a `Block` are the genesis
/// constructor, [`Block::next`], and [`Block::from_parts`] for data that has
/// not been validated yet. Serde field order is the stable external order:
/// index, content_digest, hash, prev_hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the ledger, counted from genesis.
    index: u64,

    /// Opaque digest supplied by the content-retrieval collaborator.
    content_digest: String,

    /// SHA-256 over this block's own (index, content_digest, prev_hash).
    hash: BlockHash,

    /// The predecessor's hash; empty only for genesis.
    prev_hash: BlockHash,
}

impl Block {
    /// The genesis block: index 0, empty content digest, empty predecessor.
    ///
    /// Its hash is computed the same way as any other block's; only the
    /// predecessor fields are special.
    pub fn genesis() -> Self {
        let prev_hash = BlockHash::empty();
        let hash = block_hash(0, "", &prev_hash);
        Self {
            index: 0,
            content_digest: String::new(),
            hash,
            prev_hash,
        }
    }

    /// Build the successor of `predecessor` carrying `content_digest`.
    ///
    /// Pure construction; it cannot fail. Whether the result is acceptable
    /// is decided separately by [`crate::validation::validate`].
    pub fn next(predecessor: &Block, content_digest: impl Into<String>) -> Self {
        let content_digest = content_digest.into();
        let index = predecessor.index + 1;
        let prev_hash = predecessor.hash.clone();
        let hash = block_hash(index, &content_digest, &prev_hash);
        Self {
            index,
            content_digest,
            hash,
            prev_hash,
        }
    }

    /// Assemble a block from stored or received parts, without verification.
    pub fn from_parts(
        index: u64,
        content_digest: impl Into<String>,
        hash: BlockHash,
        prev_hash: BlockHash,
    ) -> Self {
        Self {
            index,
            content_digest: content_digest.into(),
            hash,
            prev_hash,
        }
    }

    /// Position in the ledger.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The embedded content digest.
    pub fn content_digest(&self) -> &str {
        &self.content_digest
    }

    /// This block's own hash.
    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    /// The predecessor's hash.
    pub fn prev_hash(&self) -> &BlockHash {
        &self.prev_hash
    }

    /// Whether this block has the genesis shape (index 0, no predecessor).
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.prev_hash.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_shape() {
        let g = Block::genesis();
        assert_eq!(g.index(), 0);
        assert_eq!(g.content_digest(), "");
        assert!(g.prev_hash().is_empty());
        assert!(g.is_genesis());
        assert_eq!(g.hash(), &block_hash(0, "", &BlockHash::empty()));
    }

    #[test]
    fn test_next_links_to_predecessor() {
        let g = Block::genesis();
        let b = Block::next(&g, "abc123");

        assert_eq!(b.index(), 1);
        assert_eq!(b.content_digest(), "abc123");
        assert_eq!(b.prev_hash(), g.hash());
        assert_eq!(b.hash(), &block_hash(1, "abc123", g.hash()));
        assert!(!b.is_genesis());
    }

    #[test]
    fn test_next_is_deterministic() {
        let g = Block::genesis();
        assert_eq!(Block::next(&g, "x"), Block::next(&g, "x"));
        assert_ne!(Block::next(&g, "x"), Block::next(&g, "y"));
    }

    #[test]
    fn test_serde_field_order() {
        let g = Block::genesis();
        let json = serde_json::to_string(&g).unwrap();
        let idx_pos = json.find("\"index\"").unwrap();
        let digest_pos = json.find("\"content_digest\"").unwrap();
        let hash_pos = json.find("\"hash\"").unwrap();
        let prev_pos = json.find("\"prev_hash\"").unwrap();
        assert!(idx_pos < digest_pos && digest_pos < hash_pos && hash_pos < prev_pos);
    }

    #[test]
    fn test_serde_roundtrip() {
        let b = Block::next(&Block::genesis(), "abc123");
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
