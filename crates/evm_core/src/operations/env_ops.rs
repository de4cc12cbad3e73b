//! Reads of ambient transaction/block/account data. None of these mutate
//! the `Context`; they only ever push derived `U256`/bytes onto the stack
//! or into memory.

use alloy::primitives::{keccak256, U256};
use primitives::Environment;

use crate::context::{address_to_u256, u256_to_address, Context};
use crate::dispatch::OpOutcome;
use crate::operations::{as_usize, pop, push};

pub fn address(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, address_to_u256(env.tx.to));
    OpOutcome::Continue
}

pub fn balance(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    let addr = pop!(ctx);
    let addr = u256_to_address(addr);
    push!(ctx, env.balance_of(addr));
    OpOutcome::Continue
}

pub fn origin(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, address_to_u256(env.tx.origin));
    OpOutcome::Continue
}

pub fn caller(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, address_to_u256(env.tx.from));
    OpOutcome::Continue
}

pub fn callvalue(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.tx.value);
    OpOutcome::Continue
}

pub fn calldataload(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let offset = pop!(ctx);
    let offset = as_usize!(offset);
    let word = read_word_zero_padded(&ctx.calldata, offset);
    push!(ctx, word);
    OpOutcome::Continue
}

pub fn calldatasize(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, U256::from(ctx.calldata.len()));
    OpOutcome::Continue
}

pub fn calldatacopy(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let dest_offset = pop!(ctx);
    let data_offset = pop!(ctx);
    let length = pop!(ctx);
    let dest_offset = as_usize!(dest_offset);
    let data_offset = as_usize!(data_offset);
    let length = as_usize!(length);
    let calldata = ctx.calldata.clone();
    ctx.memory.store_bytes(dest_offset, &calldata, data_offset, length);
    OpOutcome::Continue
}

pub fn codesize(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, U256::from(ctx.code.len()));
    OpOutcome::Continue
}

pub fn codecopy(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let dest_offset = pop!(ctx);
    let code_offset = pop!(ctx);
    let length = pop!(ctx);
    let dest_offset = as_usize!(dest_offset);
    let code_offset = as_usize!(code_offset);
    let length = as_usize!(length);
    let code = ctx.code.clone();
    ctx.memory.store_bytes(dest_offset, &code, code_offset, length);
    OpOutcome::Continue
}

pub fn gasprice(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.tx.gasprice);
    OpOutcome::Continue
}

pub fn extcodesize(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    let addr = pop!(ctx);
    let addr = u256_to_address(addr);
    push!(ctx, U256::from(env.code_of(addr).len()));
    OpOutcome::Continue
}

pub fn extcodecopy(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    let addr = pop!(ctx);
    let dest_offset = pop!(ctx);
    let code_offset = pop!(ctx);
    let length = pop!(ctx);
    let addr = u256_to_address(addr);
    let dest_offset = as_usize!(dest_offset);
    let code_offset = as_usize!(code_offset);
    let length = as_usize!(length);
    let code = env.code_of(addr).to_vec();
    ctx.memory.store_bytes(dest_offset, &code, code_offset, length);
    OpOutcome::Continue
}

pub fn extcodehash(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    let addr = pop!(ctx);
    let addr = u256_to_address(addr);
    let hash = match env.account(addr) {
        Some(account) => U256::from_be_bytes(*keccak256(&account.code)),
        None => U256::ZERO,
    };
    push!(ctx, hash);
    OpOutcome::Continue
}

/// Not modeled (spec §4.6): always pushes zero, regardless of the block
/// number an on-chain caller would have supplied.
pub fn blockhash(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, U256::ZERO);
    OpOutcome::Continue
}

pub fn coinbase(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, address_to_u256(env.block.coinbase));
    OpOutcome::Continue
}

pub fn timestamp(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.timestamp);
    OpOutcome::Continue
}

pub fn number(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.number);
    OpOutcome::Continue
}

pub fn difficulty(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.difficulty);
    OpOutcome::Continue
}

pub fn gaslimit(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.gaslimit);
    OpOutcome::Continue
}

pub fn chainid(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.chainid);
    OpOutcome::Continue
}

pub fn selfbalance(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.balance_of(env.tx.to));
    OpOutcome::Continue
}

pub fn basefee(ctx: &mut Context, env: &Environment, _op: u8) -> OpOutcome {
    push!(ctx, env.block.basefee);
    OpOutcome::Continue
}

/// Read 32 bytes of `source` starting at `offset`, zero-padding where it
/// runs out, as `CALLDATALOAD` requires.
fn read_word_zero_padded(source: &[u8], offset: usize) -> U256 {
    let mut bytes = [0u8; 32];
    for i in 0..32 {
        if let Some(b) = offset.checked_add(i).and_then(|idx| source.get(idx)) {
            bytes[i] = *b;
        }
    }
    U256::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives::{Account, Transaction};

    #[test]
    fn calldataload_zero_pads_short_tail() {
        let result = read_word_zero_padded(&[0xaa, 0xbb], 0);
        let mut expected = [0u8; 32];
        expected[0] = 0xaa;
        expected[1] = 0xbb;
        assert_eq!(result, U256::from_be_bytes(expected));
    }

    #[test]
    fn balance_of_absent_account_is_zero() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        ctx.stack.push(U256::from(0xdeadu64)).unwrap();
        balance(&mut ctx, &env, 0x31);
        assert_eq!(ctx.stack.pop().unwrap(), U256::ZERO);
    }

    #[test]
    fn address_pushes_tx_to() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let mut env = Environment::default();
        let addr = alloy::primitives::Address::from([7u8; 20]);
        env.tx = Transaction { to: addr, ..Default::default() };
        address(&mut ctx, &env, 0x30);
        assert_eq!(ctx.stack.pop().unwrap(), address_to_u256(addr));
    }

    #[test]
    fn extcodehash_of_present_account() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let mut env = Environment::default();
        let addr = alloy::primitives::Address::from([9u8; 20]);
        env.state.insert(addr, Account { balance: U256::ZERO, code: vec![0x00] });
        ctx.stack.push(address_to_u256(addr)).unwrap();
        extcodehash(&mut ctx, &env, 0x3f);
        assert_eq!(ctx.stack.pop().unwrap(), U256::from_be_bytes(*keccak256([0x00])));
    }
}
