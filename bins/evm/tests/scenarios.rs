//! The seven concrete scenarios from spec.md §8, encoded as literal
//! bytecode and run directly against `evm_core::execute` — no JSON
//! fixture involved.

use alloy::primitives::{keccak256, Address, U256};
use evm_core::execute;
use primitives::{Environment, Transaction};

#[test]
fn push_add_stop() {
    // PUSH1 1; PUSH1 1; ADD; STOP
    let code = vec![0x60, 0x01, 0x60, 0x01, 0x01, 0x00];
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::from(2)]);
}

#[test]
fn div_by_zero_is_zero() {
    // PUSH1 0; PUSH1 4; DIV
    let code = vec![0x60, 0x00, 0x60, 0x04, 0x04];
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::ZERO]);
}

#[test]
fn signed_div_of_negative_two() {
    // PUSH1 2; PUSH32 (-2 as two's complement); SDIV
    let mut code = vec![0x60, 0x02, 0x7f];
    code.extend_from_slice(&(U256::MAX - U256::from(1u64)).to_be_bytes::<32>());
    code.push(0x05);
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::MAX]); // -1
}

#[test]
fn jump_to_valid_jumpdest() {
    // PUSH1 4; JUMP; STOP; JUMPDEST; PUSH1 1; STOP
    let code = vec![0x60, 0x04, 0x56, 0x00, 0x5b, 0x60, 0x01, 0x00];
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::from(1)]);
}

#[test]
fn jump_into_push_immediate_is_invalid() {
    // PUSH1 3; JUMP; PUSH1 <jumpdest-byte>; STOP -- offset 3 sits inside
    // the PUSH1 immediate, not on a real JUMPDEST.
    let code = vec![0x60, 0x03, 0x56, 0x60, 0x5b, 0x00];
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(!result.success);
    assert!(result.stack.is_empty());
}

#[test]
fn memory_store_then_keccak() {
    // PUSH32 (32 bytes of 0xff); PUSH1 0; MSTORE; PUSH1 0x20; PUSH1 0; SHA3; STOP
    let mut code = vec![0x7f];
    code.extend_from_slice(&[0xffu8; 32]);
    code.extend_from_slice(&[0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0x20, 0x00]);
    let env = Environment::default();
    let result = execute(&code, &[], &env);
    assert!(result.success);
    let expected = U256::from_be_bytes(*keccak256([0xffu8; 32]));
    assert_eq!(result.stack, vec![expected]);
}

#[test]
fn log1_emits_one_entry() {
    // PUSH1 0xaa; PUSH1 0; MSTORE; PUSH1 0x20; PUSH1 0x20; PUSH1 0; LOG1; STOP
    let code = vec![
        0x60, 0xaa, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x20, 0x60, 0x00, 0xa1, 0x00,
    ];
    let mut env = Environment::default();
    env.tx = Transaction { to: Address::from([1u8; 20]), ..Default::default() };
    let result = execute(&code, &[], &env);
    assert!(result.success);
    assert_eq!(result.logs.len(), 1);
    assert_eq!(result.logs[0].topics, vec![U256::from(0x20u64)]);
}
