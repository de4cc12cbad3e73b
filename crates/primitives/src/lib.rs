//! Value types and per-execution state shared by the EVM interpreter:
//! the 256-bit arithmetic domain, the operand stack, linear memory,
//! key/value storage, the read-only environment view, and log records.

pub mod environment;
pub mod error;
pub mod log;
pub mod memory;
pub mod stack;
pub mod storage;
pub mod u256_ops;

pub use environment::{Account, BlockEnv, Environment, Transaction};
pub use error::StackError;
pub use log::LogRecord;
pub use memory::Memory;
pub use stack::Stack;
pub use storage::Storage;
