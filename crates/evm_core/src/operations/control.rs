//! `STOP`, `RETURN`, `INVALID`, jumps, `PC`, `GAS`: the handlers that don't
//! touch the 256-bit value domain at all but instead drive the dispatch
//! loop itself.

use alloy::primitives::U256;
use primitives::Environment;

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::operations::{as_usize, pop, push};

pub fn stop(_ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    OpOutcome::Halt(true)
}

pub fn op_return(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let length = pop!(ctx);
    let offset = as_usize!(offset);
    let length = as_usize!(length);
    let bytes = ctx.memory.load_range(offset, length);
    OpOutcome::Return(bytes)
}

pub fn invalid(_ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    OpOutcome::Fail
}

pub fn jump(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let target = pop!(ctx);
    let target = as_usize!(target);
    if !ctx.is_valid_jump_target(target) {
        return OpOutcome::Fail;
    }
    ctx.pc = target;
    OpOutcome::Continue
}

pub fn jumpi(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let target = pop!(ctx);
    let condition = pop!(ctx);
    if condition.is_zero() {
        return OpOutcome::Continue;
    }
    let target = as_usize!(target);
    if !ctx.is_valid_jump_target(target) {
        return OpOutcome::Fail;
    }
    ctx.pc = target;
    OpOutcome::Continue
}

pub fn jumpdest(_ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    OpOutcome::Continue
}

/// `pc` has already been advanced past this opcode's own byte by the
/// dispatch loop; push the byte offset of the `PC` opcode itself.
pub fn pc(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, U256::from(ctx.pc - 1));
    OpOutcome::Continue
}

pub fn gas(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, U256::MAX);
    OpOutcome::Continue
}
