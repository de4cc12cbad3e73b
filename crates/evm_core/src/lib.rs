//! The EVM bytecode interpreter: JUMPDEST analysis, the per-execution
//! [`Context`], the opcode dispatch table, and the [`engine::execute`]
//! loop that drives them.

pub mod context;
pub mod dispatch;
pub mod engine;
pub mod jumpdest;
pub mod opcodes;
pub mod operations;

pub use context::Context;
pub use dispatch::OpOutcome;
pub use engine::{execute, ExecutionResult};
