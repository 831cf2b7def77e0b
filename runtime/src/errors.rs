//! Error types surfaced by generated client code.

use thiserror::Error;

/// A remote call was rejected or could not reach the gateway.
///
/// Propagated undecoded to the caller of a generated client method; the
/// generator defines no retry policy.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// The gateway rejected the transaction proposal.
    #[error("remote call '{method}' rejected by the gateway: {reason}")]
    Rejected {
        /// Remote method name that was dispatched.
        method: String,
        /// Gateway-supplied rejection detail.
        reason: String,
    },

    /// The gateway connection failed before a verdict was reached.
    #[error("connection to the gateway failed: {0}")]
    Connection(String),
}

/// Querying the commit status of a submitted transaction failed.
///
/// A generated `blockingGetStatus()` call that hits this error leaves its
/// cache unpopulated, so the next call retries the query.
#[derive(Debug, Error)]
#[error("commit status unavailable for transaction '{transaction_id}': {reason}")]
pub struct CommitStatusError {
    /// Transaction whose status could not be determined.
    pub transaction_id: String,
    /// Underlying failure detail.
    pub reason: String,
}

/// Payload (de)serialization failed.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value could not be encoded for the wire.
    #[error("failed to encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// A raw transaction result could not be decoded.
    #[error("failed to decode JSON response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Aggregated failure type returned by generated client methods.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Remote(#[from] RemoteCallError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    CommitStatus(#[from] CommitStatusError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_wraps_each_boundary_failure() {
        let remote: ClientError = RemoteCallError::Connection("refused".into()).into();
        assert!(matches!(remote, ClientError::Remote(_)));

        let status: ClientError = CommitStatusError {
            transaction_id: "tx1".into(),
            reason: "timeout".into(),
        }
        .into();
        assert!(status.to_string().contains("tx1"));
    }
}
