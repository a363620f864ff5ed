//! Block hashing.
//!
//! Wraps SHA-256 with a strong type for block hashes. The digest of a block
//! is SHA-256 over the exact byte concatenation of the decimal index, the
//! content digest and the previous hash, with no separators, rendered as
//! lowercase hex. Any two implementations of this scheme must be bit-exact.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// The lowercase-hex SHA-256 digest of a block.
///
/// Stored in string form because that is also its hash-input form: a block's
/// `prev_hash` is fed into its successor's digest verbatim, and the genesis
/// predecessor is the empty string rather than a zeroed digest.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(String);

impl BlockHash {
    /// The empty sentinel: the `prev_hash` of the genesis block.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Compute the hash of raw bytes.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap an already-encoded hex string without recomputing anything.
    ///
    /// No format check is performed; validity is established by the
    /// validator, not by construction.
    pub fn from_hex(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The hex string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "BlockHash(empty)")
        } else {
            write!(f, "BlockHash({})", &self.0[..self.0.len().min(16)])
        }
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlockHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute a block's hash from its own fields.
///
/// Input layout: `{index as decimal}{content_digest}{prev_hash}`.
pub fn block_hash(index: u64, content_digest: &str, prev_hash: &BlockHash) -> BlockHash {
    let mut hasher = Sha256::new();
    hasher.update(index.to_string().as_bytes());
    hasher.update(content_digest.as_bytes());
    hasher.update(prev_hash.as_str().as_bytes());
    BlockHash(hex::encode(hasher.finalize()))
}

/// Digest a caller-supplied identifier into an opaque content digest.
///
/// The ledger core only ever sees the result, never the raw identifier.
pub fn content_digest_for(identifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identifier.as_bytes());
    hex::encode(hasher.finalize())
}
