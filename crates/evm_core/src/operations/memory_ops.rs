//! `SHA3`, `MLOAD`, `MSTORE`, `MSTORE8`, `MSIZE`.

use alloy::primitives::{keccak256, U256};
use primitives::Environment;

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::operations::{as_usize, pop, push};

pub fn sha3(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let length = pop!(ctx);
    let offset = as_usize!(offset);
    let length = as_usize!(length);
    let bytes = ctx.memory.load_range(offset, length);
    push!(ctx, U256::from_be_bytes(*keccak256(bytes)));
    OpOutcome::Continue
}

pub fn mload(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let offset = as_usize!(offset);
    push!(ctx, ctx.memory.load(offset));
    OpOutcome::Continue
}

pub fn mstore(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let value = pop!(ctx);
    let offset = as_usize!(offset);
    ctx.memory.store(offset, value);
    OpOutcome::Continue
}

pub fn mstore8(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let value = pop!(ctx);
    let offset = as_usize!(offset);
    let low_byte = value.to_be_bytes::<32>()[31];
    ctx.memory.store8(offset, low_byte);
    OpOutcome::Continue
}

pub fn msize(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, ctx.memory.size());
    OpOutcome::Continue
}
