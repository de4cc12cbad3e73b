//! Error types for the `primitives` crate.

use thiserror::Error;

/// Errors produced by the [`crate::stack::Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack underflow")]
    Underflow,
    #[error("stack overflow: depth would exceed 1024")]
    Overflow,
    #[error("stack index {index} out of range for depth {depth}")]
    OutOfRange { index: usize, depth: usize },
}
