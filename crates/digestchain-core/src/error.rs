//! Error types for digestchain-core.

use thiserror::Error;

use crate::hash::BlockHash;

/// Why a candidate block was rejected against its claimed predecessor.
///
/// Each variant carries enough context to report the failure structurally;
/// the checks detect accidental or structural corruption, not a forging
/// adversary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate does not sit exactly one position after its predecessor.
    #[error("index mismatch: expected {expected}, got {got}")]
    IndexMismatch { expected: u64, got: u64 },

    /// The candidate's prev_hash does not point at the predecessor.
    #[error("link mismatch: predecessor hash is {expected}, candidate links to {got}")]
    LinkMismatch { expected: BlockHash, got: BlockHash },

    /// The candidate's stored hash does not match its own fields.
    #[error("hash mismatch: recomputed {expected}, block claims {got}")]
    HashMismatch { expected: BlockHash, got: BlockHash },
}
