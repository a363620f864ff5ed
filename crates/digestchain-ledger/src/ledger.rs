//! The Ledger handle: shared, concurrency-safe access to the chain.
//!
//! The chain itself is immutable; the handle swaps whole chains. Readers
//! take an `Arc` snapshot and can never observe a partially-replaced
//! sequence. Writers serialize the entire append pipeline (read tail,
//! build, validate, extend, arbitrate, swap) under one lock.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use digestchain_core::{validate, Block, Chain};

use crate::error::{AppendError, Result};

/// Owned, lifecycle-scoped handle to the chain.
///
/// Created once at process start with a genesis block; disappears with the
/// process. There is no persistence.
pub struct Ledger {
    chain: RwLock<Arc<Chain>>,
}

impl Ledger {
    /// Create a ledger holding exactly the genesis block.
    pub fn bootstrap() -> Self {
        Self {
            chain: RwLock::new(Arc::new(Chain::bootstrap())),
        }
    }

    /// Adopt an existing chain (tests, externally synchronized state).
    pub fn from_chain(chain: Chain) -> Self {
        Self {
            chain: RwLock::new(Arc::new(chain)),
        }
    }

    /// An immutable snapshot of the current chain, handed out atomically.
    pub fn snapshot(&self) -> Arc<Chain> {
        Arc::clone(&self.chain.read().expect("ledger lock poisoned"))
    }

    /// Number of blocks currently in the ledger.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Append one block carrying `content_digest`.
    ///
    /// Runs the whole pipeline as one serialized critical section: build a
    /// candidate from the current tail, validate it, extend the sequence,
    /// and let length arbitration decide whether the extended chain
    /// replaces the current one. A failed append leaves the ledger
    /// completely unchanged.
    pub fn append(&self, content_digest: &str) -> Result<Block> {
        let mut guard = self.chain.write().expect("ledger lock poisoned");

        let tail = guard.tail().ok_or(AppendError::EmptyLedger)?;
        let candidate = Block::next(tail, content_digest);

        if let Err(e) = validate(&candidate, tail) {
            warn!(index = candidate.index(), error = %e, "rejected candidate block");
            return Err(e.into());
        }

        // The extended chain is strictly longer, so arbitration always
        // accepts it here; going through resolve keeps append and external
        // chain replacement on the same primitive.
        let extended = guard.extended(candidate.clone());
        let resolved = Chain::resolve((**guard).clone(), extended);
        *guard = Arc::new(resolved);

        debug!(
            index = candidate.index(),
            hash = %candidate.hash(),
            len = guard.len(),
            "appended block"
        );
        Ok(candidate)
    }

    /// Offer a competing chain to the arbitrator.
    ///
    /// Replaces the current chain iff the candidate is strictly longer;
    /// ties and shorter candidates keep the current chain. Returns whether
    /// the replacement happened. Validation of the candidate's blocks is
    /// the proposer's responsibility.
    pub fn propose(&self, candidate: Chain) -> bool {
        let mut guard = self.chain.write().expect("ledger lock poisoned");

        if candidate.len() > guard.len() {
            debug!(
                old_len = guard.len(),
                new_len = candidate.len(),
                "replacing chain with longer candidate"
            );
            *guard = Arc::new(candidate);
            true
        } else {
            warn!(
                current_len = guard.len(),
                candidate_len = candidate.len(),
                "keeping current chain"
            );
            false
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::bootstrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestchain_core::is_valid;

    #[test]
    fn test_bootstrap_genesis_invariant() {
        let ledger = Ledger::bootstrap();
        let snap = ledger.snapshot();

        assert_eq!(snap.len(), 1);
        let tail = snap.tail().unwrap();
        assert_eq!(tail.index(), 0);
        assert!(tail.prev_hash().is_empty());
    }

    #[test]
    fn test_append_grows_by_one() {
        let ledger = Ledger::bootstrap();
        let block = ledger.append("abc123").unwrap();

        assert_eq!(block.index(), 1);
        assert_eq!(block.content_digest(), "abc123");
        assert_eq!(ledger.len(), 2);

        let snap = ledger.snapshot();
        assert!(is_valid(snap.get(1).unwrap(), snap.get(0).unwrap()));
    }

    #[test]
    fn test_append_monotonic_indices() {
        let ledger = Ledger::bootstrap();
        for digest in ["a", "b", "c", "d"] {
            ledger.append(digest).unwrap();
        }

        let snap = ledger.snapshot();
        for (i, block) in snap.iter().enumerate() {
            assert_eq!(block.index(), i as u64);
        }
    }

    #[test]
    fn test_empty_ledger_is_an_error_not_a_panic() {
        let ledger = Ledger::from_chain(Chain::from_blocks(vec![]));
        assert_eq!(ledger.append("abc"), Err(AppendError::EmptyLedger));
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_appends() {
        let ledger = Ledger::bootstrap();
        let before = ledger.snapshot();
        ledger.append("abc123").unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(ledger.snapshot().len(), 2);
    }

    #[test]
    fn test_propose_longer_replaces() {
        let ledger = Ledger::bootstrap();

        let mut rival = Chain::bootstrap();
        for digest in ["x", "y"] {
            let next = Block::next(rival.tail().unwrap(), digest);
            rival = rival.extended(next);
        }

        assert!(ledger.propose(rival.clone()));
        assert_eq!(*ledger.snapshot(), rival);
    }

    #[test]
    fn test_propose_tie_keeps_current() {
        let ledger = Ledger::bootstrap();
        ledger.append("ours").unwrap();
        let ours = ledger.snapshot();

        let mut rival = Chain::bootstrap();
        let next = Block::next(rival.tail().unwrap(), "theirs");
        rival = rival.extended(next);
        assert_eq!(rival.len(), ours.len());

        assert!(!ledger.propose(rival));
        assert_eq!(*ledger.snapshot(), *ours);
    }

    #[test]
    fn test_propose_shorter_keeps_current() {
        let ledger = Ledger::bootstrap();
        ledger.append("a").unwrap();

        assert!(!ledger.propose(Chain::bootstrap()));
        assert_eq!(ledger.len(), 2);
    }
}
