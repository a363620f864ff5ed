//! # digestchain Ledger
//!
//! The process-owned ledger: a concurrency-safe handle around the pure
//! [`Chain`](digestchain_core::Chain) from digestchain-core.
//!
//! - **Bootstrap**: exactly one genesis block before any append.
//! - **Append**: build, validate and arbitrate as one serialized unit.
//! - **Snapshot**: atomic, immutable view for serialization outward.
//! - **Propose**: longest-chain replacement for externally built chains.

pub mod error;
pub mod ledger;

pub use error::{AppendError, Result};
pub use ledger::Ledger;

// Re-export commonly used core types
pub use digestchain_core::{Block, BlockHash, Chain, ValidationError};
