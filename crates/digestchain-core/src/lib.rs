//! # digestchain Core
//!
//! Pure primitives for the digestchain ledger: blocks, hashing, validation
//! and chain arbitration.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over a hash-linked sequence of records.
//!
//! ## Key Types
//!
//! - [`Block`] - One immutable record, hash-linked to its predecessor
//! - [`BlockHash`] - Lowercase-hex SHA-256 digest of a block
//! - [`Chain`] - The ordered sequence of blocks from genesis to tail
//!
//! ## Hashing
//!
//! A block's hash covers `{index as decimal}{content_digest}{prev_hash}`
//! with no separators. See [`hash`].

pub mod block;
pub mod chain;
pub mod error;
pub mod hash;
pub mod validation;

pub use block::Block;
pub use chain::Chain;
pub use error::ValidationError;
pub use hash::{block_hash, content_digest_for, BlockHash};
pub use validation::{is_valid, validate};
