//! The opcode dispatch table: a dense array of function pointers indexed by
//! opcode byte, and the tagged outcome every handler returns.

use primitives::{Environment, LogRecord};

use crate::context::Context;
use crate::operations;

/// What a single opcode handler did. Replaces the source's dynamic
/// "success/stop/data" record (spec §9) with an unambiguous variant the
/// dispatch loop matches exhaustively.
#[derive(Debug, Clone)]
pub enum OpOutcome {
    /// Keep dispatching from the (possibly opcode-updated) `pc`.
    Continue,
    /// Halt with the given success flag and no return data (`STOP`, or
    /// falling off the end of code).
    Halt(bool),
    /// Halt successfully, carrying `RETURN`'s byte payload.
    Return(Vec<u8>),
    /// A `LOGn` fired; record it and keep dispatching.
    Log(LogRecord),
    /// An opcode byte with no handler fired. The source's `evm()` never
    /// reassigns `success` away from its initial `True` and returns `(True,
    /// [])` the moment it can't find an entry for the byte — preserved here
    /// literally: `success=true`, stack forced empty (spec §9's rule that
    /// the source is ground truth for this exact ambiguity).
    Unmapped,
    /// A hard failure: stack underflow, bad jump target, or `INVALID`.
    /// Halts with `success=false`.
    Fail,
}

pub type OpcodeHandler = fn(&mut Context, &Environment, u8) -> OpOutcome;

fn unknown_opcode(_ctx: &mut Context, _env: &Environment, op: u8) -> OpOutcome {
    tracing::warn!(opcode = format!("{op:#04x}"), "unmapped opcode, reporting fake success");
    OpOutcome::Unmapped
}

/// Build the 256-entry dispatch table once per process (cheap — the table
/// is a flat array of function pointers, not a per-execution allocation
/// beyond the array itself).
pub fn build_table() -> [OpcodeHandler; 256] {
    use crate::opcodes::*;

    let mut table: [OpcodeHandler; 256] = [unknown_opcode; 256];

    table[STOP as usize] = operations::control::stop;
    table[RETURN as usize] = operations::control::op_return;
    table[INVALID as usize] = operations::control::invalid;
    table[JUMP as usize] = operations::control::jump;
    table[JUMPI as usize] = operations::control::jumpi;
    table[JUMPDEST as usize] = operations::control::jumpdest;
    table[PC as usize] = operations::control::pc;
    table[GAS as usize] = operations::control::gas;

    table[ADD as usize] = operations::arith::add;
    table[MUL as usize] = operations::arith::mul;
    table[SUB as usize] = operations::arith::sub;
    table[DIV as usize] = operations::arith::div;
    table[SDIV as usize] = operations::arith::sdiv;
    table[MOD as usize] = operations::arith::modulo;
    table[SMOD as usize] = operations::arith::smod;
    table[ADDMOD as usize] = operations::arith::addmod;
    table[MULMOD as usize] = operations::arith::mulmod;
    table[EXP as usize] = operations::arith::exp;
    table[SIGNEXTEND as usize] = operations::arith::signextend;

    table[LT as usize] = operations::compare::lt;
    table[GT as usize] = operations::compare::gt;
    table[SLT as usize] = operations::compare::slt;
    table[SGT as usize] = operations::compare::sgt;
    table[EQ as usize] = operations::compare::eq;
    table[ISZERO as usize] = operations::compare::iszero;
    table[AND as usize] = operations::compare::and;
    table[OR as usize] = operations::compare::or;
    table[XOR as usize] = operations::compare::xor;
    table[NOT as usize] = operations::compare::not;
    table[BYTE as usize] = operations::compare::byte;
    table[SHL as usize] = operations::compare::shl;
    table[SHR as usize] = operations::compare::shr;
    table[SAR as usize] = operations::compare::sar;

    table[SHA3 as usize] = operations::memory_ops::sha3;
    table[MLOAD as usize] = operations::memory_ops::mload;
    table[MSTORE as usize] = operations::memory_ops::mstore;
    table[MSTORE8 as usize] = operations::memory_ops::mstore8;
    table[MSIZE as usize] = operations::memory_ops::msize;

    table[SLOAD as usize] = operations::storage_ops::sload;
    table[SSTORE as usize] = operations::storage_ops::sstore;

    table[ADDRESS as usize] = operations::env_ops::address;
    table[BALANCE as usize] = operations::env_ops::balance;
    table[ORIGIN as usize] = operations::env_ops::origin;
    table[CALLER as usize] = operations::env_ops::caller;
    table[CALLVALUE as usize] = operations::env_ops::callvalue;
    table[CALLDATALOAD as usize] = operations::env_ops::calldataload;
    table[CALLDATASIZE as usize] = operations::env_ops::calldatasize;
    table[CALLDATACOPY as usize] = operations::env_ops::calldatacopy;
    table[CODESIZE as usize] = operations::env_ops::codesize;
    table[CODECOPY as usize] = operations::env_ops::codecopy;
    table[GASPRICE as usize] = operations::env_ops::gasprice;
    table[EXTCODESIZE as usize] = operations::env_ops::extcodesize;
    table[EXTCODECOPY as usize] = operations::env_ops::extcodecopy;
    table[EXTCODEHASH as usize] = operations::env_ops::extcodehash;
    table[BLOCKHASH as usize] = operations::env_ops::blockhash;
    table[COINBASE as usize] = operations::env_ops::coinbase;
    table[TIMESTAMP as usize] = operations::env_ops::timestamp;
    table[NUMBER as usize] = operations::env_ops::number;
    table[DIFFICULTY as usize] = operations::env_ops::difficulty;
    table[GASLIMIT as usize] = operations::env_ops::gaslimit;
    table[CHAINID as usize] = operations::env_ops::chainid;
    table[SELFBALANCE as usize] = operations::env_ops::selfbalance;
    table[BASEFEE as usize] = operations::env_ops::basefee;

    table[POP as usize] = operations::stack_ops::pop;
    for op in PUSH0..=PUSH32 {
        table[op as usize] = operations::stack_ops::push;
    }
    for op in DUP1..=DUP16 {
        table[op as usize] = operations::stack_ops::dup;
    }
    for op in SWAP1..=SWAP16 {
        table[op as usize] = operations::stack_ops::swap;
    }
    for op in LOG0..=LOG4 {
        table[op as usize] = operations::log_ops::log;
    }

    table
}
