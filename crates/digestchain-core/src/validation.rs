//! Block validation: structural and cryptographic consistency checks.

use crate::block::Block;
use crate::error::ValidationError;
use crate::hash::block_hash;

/// Validate that `candidate` is a correct immediate successor of
/// `predecessor`.
///
/// Order matters: the candidate must follow the predecessor. Checks
/// short-circuit on the first failure, in this order:
///
/// 1. Index continuity (catches missing or duplicated positions)
/// 2. Predecessor link (catches a broken or retargeted chain link)
/// 3. Hash integrity (catches a block whose stored hash does not match
///    its own declared fields)
///
/// Pure predicate: never mutates, never panics.
pub fn validate(candidate: &Block, predecessor: &Block) -> Result<(), ValidationError> {
    // 1. Index continuity
    let expected_index = predecessor.index() + 1;
    if candidate.index() != expected_index {
        return Err(ValidationError::IndexMismatch {
            expected: expected_index,
            got: candidate.index(),
        });
    }

    // 2. Predecessor link
    if candidate.prev_hash() != predecessor.hash() {
        return Err(ValidationError::LinkMismatch {
            expected: predecessor.hash().clone(),
            got: candidate.prev_hash().clone(),
        });
    }

    // 3. Hash integrity
    let recomputed = block_hash(candidate.index(), candidate.content_digest(), candidate.prev_hash());
    if &recomputed != candidate.hash() {
        return Err(ValidationError::HashMismatch {
            expected: recomputed,
            got: candidate.hash().clone(),
        });
    }

    Ok(())
}

/// Boolean convenience over [`validate`].
pub fn is_valid(candidate: &Block, predecessor: &Block) -> bool {
    validate(candidate, predecessor).is_ok()
}
