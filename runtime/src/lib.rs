//! Chainapi Runtime Boundary
//!
//! The collaborator surface that generated code links against. The generator
//! itself never performs a remote call; the code it emits does, through the
//! traits defined here:
//!
//! - [`Transport`] - submits and evaluates remote transactions against the
//!   ledger gateway
//! - [`PendingCommit`] - handle to a submitted-but-not-yet-committed write,
//!   with blocking status/result queries
//! - [`JsonCodec`] - encodes and decodes transaction payloads
//! - [`ContractContext`] - opaque execution context threaded through every
//!   generated contract handler, exposing ambient key-value state access
//!
//! Identity loading, channel setup and the actual gateway wiring are the
//! hosting application's concern; this crate only fixes the call shapes the
//! generated code depends on.

pub mod codec;
pub mod context;
pub mod errors;
pub mod transport;

pub use codec::JsonCodec;
pub use context::ContractContext;
pub use errors::{ClientError, CodecError, CommitStatusError, RemoteCallError};
pub use transport::{CommitStatus, PendingCommit, Transport};
