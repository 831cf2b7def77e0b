//! Execution context threaded through generated contract handlers.

/// Opaque ledger execution context.
///
/// Every generated contract-side method takes a context as its implicit
/// leading parameter. Hand-written handler bodies use it for ambient
/// key-value state access and transaction metadata; the generator itself
/// never calls any of these.
pub trait ContractContext {
    /// Reads the state bytes stored under `key`, if any.
    fn get_state(&self, key: &str) -> Option<Vec<u8>>;

    /// Writes `value` under `key`.
    fn put_state(&mut self, key: &str, value: Vec<u8>);

    /// Deletes the state entry under `key`.
    fn delete_state(&mut self, key: &str);

    /// Identity of the client that invoked the transaction.
    fn client_id(&self) -> String;

    /// Transaction timestamp in milliseconds since the epoch.
    fn tx_timestamp_millis(&self) -> i64;
}
