//! `LT`..`SAR`: comparisons, bitwise ops, and shifts. Boolean results are
//! encoded as `U256` 0/1 per spec §4.1.

use primitives::{u256_ops, Environment};

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::operations::{pop, push};

pub fn lt(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::lt(a, b)));
    OpOutcome::Continue
}

pub fn gt(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::gt(a, b)));
    OpOutcome::Continue
}

pub fn slt(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::slt(a, b)));
    OpOutcome::Continue
}

pub fn sgt(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::sgt(a, b)));
    OpOutcome::Continue
}

pub fn eq(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::eq(a, b)));
    OpOutcome::Continue
}

pub fn iszero(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    push!(ctx, u256_ops::bool_to_u256(u256_ops::iszero(a)));
    OpOutcome::Continue
}

pub fn and(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::and(a, b));
    OpOutcome::Continue
}

pub fn or(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::or(a, b));
    OpOutcome::Continue
}

pub fn xor(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    let b = pop!(ctx);
    push!(ctx, u256_ops::xor(a, b));
    OpOutcome::Continue
}

pub fn not(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let a = pop!(ctx);
    push!(ctx, u256_ops::not(a));
    OpOutcome::Continue
}

pub fn byte(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let i = pop!(ctx);
    let x = pop!(ctx);
    push!(ctx, u256_ops::byte(i, x));
    OpOutcome::Continue
}

pub fn shl(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let shift = pop!(ctx);
    let value = pop!(ctx);
    push!(ctx, u256_ops::shl(shift, value));
    OpOutcome::Continue
}

pub fn shr(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let shift = pop!(ctx);
    let value = pop!(ctx);
    push!(ctx, u256_ops::shr(shift, value));
    OpOutcome::Continue
}

pub fn sar(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let shift = pop!(ctx);
    let value = pop!(ctx);
    push!(ctx, u256_ops::sar(shift, value));
    OpOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn lt_pushes_boolean_result() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        ctx.stack.push(U256::from(5u64)).unwrap();
        ctx.stack.push(U256::from(3u64)).unwrap();
        lt(&mut ctx, &env, 0x10);
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(1));
    }

    #[test]
    fn iszero_underflow_is_fail() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        assert!(matches!(iszero(&mut ctx, &env, 0x15), OpOutcome::Fail));
    }
}
