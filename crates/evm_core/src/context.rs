//! The per-execution mutable state threaded through every opcode handler.

use std::collections::HashSet;

use alloy::primitives::{Address, U256};
use primitives::{Memory, Stack, Storage};

use crate::jumpdest;

/// Converts a stack value used as a byte offset/length into a `usize`,
/// refusing anything that could not possibly address real memory. This is
/// the engine's only guard against the "unbounded memory expansion" the
/// spec leaves to the host (§7, `MemoryExpansion`).
pub fn u256_to_usize(value: U256) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Addresses travel the stack as U256 and live in the environment as
/// 160-bit `Address`; mask to the low 20 bytes at the boundary (§9's note
/// on address representation).
pub fn u256_to_address(value: U256) -> Address {
    Address::from_slice(&value.to_be_bytes::<32>()[12..])
}

/// Widen a 160-bit address back to U256 for `ADDRESS`/`ORIGIN`/`CALLER`.
pub fn address_to_u256(address: Address) -> U256 {
    let mut bytes = [0u8; 32];
    bytes[12..].copy_from_slice(address.as_slice());
    U256::from_be_bytes(bytes)
}

/// `{ code, pc, stack, memory, storage, jump_destinations, calldata }`.
#[derive(Debug)]
pub struct Context {
    pub code: Vec<u8>,
    pub pc: usize,
    pub stack: Stack,
    pub memory: Memory,
    pub storage: Storage,
    pub jump_destinations: HashSet<usize>,
    pub calldata: Vec<u8>,
}

impl Context {
    /// Build a fresh context for one invocation: JUMPDEST analysis runs
    /// exactly once, here.
    pub fn new(code: Vec<u8>, calldata: Vec<u8>) -> Self {
        let jump_destinations = jumpdest::analyze(&code);
        Self {
            code,
            pc: 0,
            stack: Stack::new(),
            memory: Memory::new(),
            storage: Storage::new(),
            jump_destinations,
            calldata,
        }
    }

    pub fn is_valid_jump_target(&self, target: usize) -> bool {
        self.jump_destinations.contains(&target)
    }

    /// Read the `n` bytes of code starting at `offset` as a big-endian
    /// `U256`, right-padding with zero where code runs out (used by PUSH).
    pub fn code_word(&self, offset: usize, n: usize) -> U256 {
        let mut bytes = [0u8; 32];
        for i in 0..n {
            if let Some(b) = self.code.get(offset + i) {
                bytes[32 - n + i] = *b;
            }
        }
        U256::from_be_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_word_right_pads_missing_bytes() {
        let ctx = Context::new(vec![0x60, 0xff], Vec::new());
        // PUSH1 at offset 0 has one immediate byte at offset 1: 0xff.
        assert_eq!(ctx.code_word(1, 1), U256::from(0xffu64));
    }

    #[test]
    fn code_word_pads_when_code_runs_out() {
        let ctx = Context::new(vec![0x7f], Vec::new());
        // PUSH32 with no immediate bytes present at all.
        assert_eq!(ctx.code_word(1, 32), U256::ZERO);
    }

    #[test]
    fn u256_to_usize_rejects_oversized_values() {
        assert_eq!(u256_to_usize(U256::from(1u64) << 200), None);
        assert_eq!(u256_to_usize(U256::from(42u64)), Some(42));
    }
}
