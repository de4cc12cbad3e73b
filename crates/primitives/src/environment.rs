//! Read-only ambient data the engine is allowed to observe: transaction,
//! block, and world-state account views.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};

/// Transaction-level fields visible to opcodes such as `ORIGIN`, `CALLER`,
/// `CALLVALUE`, `CALLDATA*`.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    pub from: Address,
    pub to: Address,
    pub origin: Address,
    pub gasprice: U256,
    pub value: U256,
    pub data: Vec<u8>,
}

/// Block-level fields visible to `TIMESTAMP`, `NUMBER`, `COINBASE`, etc.
#[derive(Debug, Clone, Default)]
pub struct BlockEnv {
    pub basefee: U256,
    pub coinbase: Address,
    pub timestamp: U256,
    pub number: U256,
    pub difficulty: U256,
    pub gaslimit: U256,
    pub chainid: U256,
}

/// A single entry of the read-only world state.
#[derive(Debug, Clone, Default)]
pub struct Account {
    pub balance: U256,
    pub code: Vec<u8>,
}

/// The full read-only input to one execution.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub tx: Transaction,
    pub block: BlockEnv,
    pub state: HashMap<Address, Account>,
}

impl Environment {
    pub fn account(&self, address: Address) -> Option<&Account> {
        self.state.get(&address)
    }

    pub fn balance_of(&self, address: Address) -> U256 {
        self.account(address).map(|a| a.balance).unwrap_or(U256::ZERO)
    }

    pub fn code_of(&self, address: Address) -> &[u8] {
        self.account(address).map(|a| a.code.as_slice()).unwrap_or(&[])
    }
}
