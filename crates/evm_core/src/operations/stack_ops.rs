//! `POP`, the `PUSHn`/`DUPn`/`SWAPn` families — arity derived from the
//! opcode byte itself rather than from one handler per opcode (spec §9's
//! design note on collapsing these families).

use primitives::Environment;

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::opcodes;
use crate::operations::{pop, push};

pub fn pop(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let _ = pop!(ctx);
    OpOutcome::Continue
}

/// `PUSHn` reads its `n` immediate bytes from `code` starting right after
/// the opcode byte and advances `pc` past them; `PUSH0` pushes zero.
pub fn push(ctx: &mut Context, _env: &Environment, op: u8) -> OpOutcome {
    let n = opcodes::push_immediate_size(op).expect("dispatch only routes PUSH opcodes here");
    let value = ctx.code_word(ctx.pc, n);
    ctx.pc += n;
    push!(ctx, value);
    OpOutcome::Continue
}

pub fn dup(ctx: &mut Context, _env: &Environment, op: u8) -> OpOutcome {
    let i = opcodes::dup_index(op).expect("dispatch only routes DUP opcodes here");
    let value = match ctx.stack.peek(i - 1) {
        Ok(v) => v,
        Err(_) => return OpOutcome::Fail,
    };
    push!(ctx, value);
    OpOutcome::Continue
}

pub fn swap(ctx: &mut Context, _env: &Environment, op: u8) -> OpOutcome {
    let i = opcodes::swap_index(op).expect("dispatch only routes SWAP opcodes here");
    let top = match ctx.stack.peek(0) {
        Ok(v) => v,
        Err(_) => return OpOutcome::Fail,
    };
    let other = match ctx.stack.peek(i) {
        Ok(v) => v,
        Err(_) => return OpOutcome::Fail,
    };
    if ctx.stack.replace(0, other).is_err() || ctx.stack.replace(i, top).is_err() {
        return OpOutcome::Fail;
    }
    OpOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn push1_reads_immediate_and_advances_pc() {
        let mut ctx = Context::new(vec![0x60, 0x2a], Vec::new());
        ctx.pc = 1;
        let env = Environment::default();
        push(&mut ctx, &env, 0x60);
        assert_eq!(ctx.pc, 2);
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(0x2au64));
    }

    #[test]
    fn push0_pushes_zero_without_advancing() {
        let mut ctx = Context::new(vec![0x5f], Vec::new());
        ctx.pc = 1;
        let env = Environment::default();
        push(&mut ctx, &env, 0x5f);
        assert_eq!(ctx.pc, 1);
        assert_eq!(ctx.stack.pop().unwrap(), U256::ZERO);
    }

    #[test]
    fn dup1_copies_top_without_consuming_it() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        ctx.stack.push(U256::from(7u64)).unwrap();
        dup(&mut ctx, &env, 0x80);
        assert_eq!(ctx.stack.len(), 2);
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(7u64));
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(7u64));
    }

    #[test]
    fn swap1_exchanges_top_two() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        ctx.stack.push(U256::from(1u64)).unwrap();
        ctx.stack.push(U256::from(2u64)).unwrap();
        swap(&mut ctx, &env, 0x90);
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(1u64));
        assert_eq!(ctx.stack.pop().unwrap(), U256::from(2u64));
    }

    #[test]
    fn dup_below_stack_depth_fails() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        assert!(matches!(dup(&mut ctx, &env, 0x80), OpOutcome::Fail));
    }
}
