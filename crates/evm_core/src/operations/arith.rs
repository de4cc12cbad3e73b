//! `ADD`..`SIGNEXTEND`: the 256-bit value-domain opcodes. Each handler just
//! pops its operands, calls into `primitives::u256_ops`, and pushes the
//! result — the arithmetic itself lives in `primitives` so it can be
//! property-tested independently of the dispatch loop.

use primitives::{u256_ops, Environment};

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::operations::{pop, push};

pub fn add(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::add(a, b));
    OpOutcome::Continue
}

pub fn mul(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::mul(a, b));
    OpOutcome::Continue
}

pub fn sub(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::sub(a, b));
    OpOutcome::Continue
}

pub fn div(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::div(a, b));
    OpOutcome::Continue
}

pub fn sdiv(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::sdiv(a, b));
    OpOutcome::Continue
}

pub fn modulo(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::modulo(a, b));
    OpOutcome::Continue
}

pub fn smod(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::smod(a, b));
    OpOutcome::Continue
}

pub fn addmod(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    let n = pop!(ctx);
    push!(ctx, u256_ops::addmod(a, b, n));
    OpOutcome::Continue
}

pub fn mulmod(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    let n = pop!(ctx);
    push!(ctx, u256_ops::mulmod(a, b, n));
    OpOutcome::Continue
}

pub fn exp(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let base = pop!(ctx);
    let exponent = pop!(ctx);
    push!(ctx, u256_ops::exp(base, exponent));
    OpOutcome::Continue
}

pub fn signextend(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let k = pop!(ctx);
    let x = pop!(ctx);
    push!(ctx, u256_ops::signextend(k, x));
    OpOutcome::Continue
}
