//! Emitted `LOGn` records.

use alloy::primitives::{Address, U256};

/// One emitted log entry. Logs are produced during dispatch but are only
/// observed by the caller after successful termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub address: Address,
    pub data: Vec<u8>,
    pub topics: Vec<U256>,
}
