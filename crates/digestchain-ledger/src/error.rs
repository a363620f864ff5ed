//! Error types for ledger operations.

use digestchain_core::ValidationError;
use thiserror::Error;

/// Errors that can abort a single append attempt.
///
/// All variants are recoverable at the operation boundary: they abort the
/// one attempt, leave the ledger unchanged and are reported to the caller.
/// The ledger itself never crashes the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppendError {
    /// The candidate block failed validation against the current tail.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ledger holds no blocks, so there is no tail to build on.
    /// Cannot occur after bootstrap; handled defensively anyway.
    #[error("ledger is empty: no tail to append to")]
    EmptyLedger,
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, AppendError>;
