//! Remote transport boundary used by generated client code.

use crate::errors::{CommitStatusError, RemoteCallError};

/// Final commit verdict for a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStatus {
    /// Ledger transaction id.
    pub transaction_id: String,
    /// Whether the transaction was committed successfully.
    pub successful: bool,
    /// Block the transaction was recorded in.
    pub block_number: u64,
}

/// Handle to a submitted, not-yet-resolved write transaction.
///
/// Both queries may block until the ledger reaches a verdict. Generated
/// deferred-result wrappers guarantee each is invoked at most once per
/// instance; implementations need not cache.
pub trait PendingCommit: Send + Sync {
    /// Blocks until the commit status is known.
    fn status(&self) -> Result<CommitStatus, CommitStatusError>;

    /// Returns the raw endorsed transaction result bytes.
    fn result(&self) -> Result<Vec<u8>, RemoteCallError>;
}

/// Submits and evaluates remote transactions against one deployed contract.
///
/// Arguments are positional strings; parameter-to-argument conversion is the
/// generated caller's responsibility. Implementations wrap whatever gateway
/// client the application uses and are injected into the generated
/// aggregator at construction time.
pub trait Transport: Send + Sync {
    /// Executes a read-only transaction and returns its raw result bytes.
    fn evaluate(&self, method: &str, args: &[String]) -> Result<Vec<u8>, RemoteCallError>;

    /// Proposes, endorses and asynchronously submits a write transaction.
    fn submit(&self, method: &str, args: &[String])
    -> Result<Box<dyn PendingCommit>, RemoteCallError>;
}
