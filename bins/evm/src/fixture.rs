//! JSON fixture format (spec §6): an array of test cases, each carrying
//! bytecode plus optional tx/block/state context and an expectation.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use primitives::{Account, BlockEnv, Environment, Transaction};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("reading fixture file {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("parsing fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("decoding hex field {field}: {source}")]
    Hex { field: &'static str, #[source] source: hex::FromHexError },
}

#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub hint: String,
    pub code: CodeField,
    #[serde(default)]
    pub tx: Option<TxField>,
    #[serde(default)]
    pub block: Option<BlockField>,
    #[serde(default)]
    pub state: Option<HashMap<String, AccountField>>,
    pub expect: ExpectField,
}

#[derive(Debug, Deserialize)]
pub struct CodeField {
    #[allow(dead_code)]
    pub asm: String,
    pub bin: String,
}

#[derive(Debug, Deserialize)]
pub struct TxField {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub gasprice: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlockField {
    #[serde(default)]
    pub basefee: Option<String>,
    #[serde(default)]
    pub coinbase: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub gaslimit: Option<String>,
    #[serde(default)]
    pub chainid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AccountField {
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub code: Option<CodeField>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectField {
    pub success: bool,
    #[serde(default)]
    pub stack: Option<Vec<String>>,
    #[serde(default)]
    pub logs: Option<Vec<ExpectLog>>,
    #[serde(rename = "return", default)]
    pub return_data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectLog {
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
}

fn decode_hex_u256(field: &'static str, value: &str) -> Result<U256, FixtureError> {
    let trimmed = value.trim_start_matches("0x");
    let padded = if trimmed.len() % 2 == 1 { format!("0{trimmed}") } else { trimmed.to_string() };
    let bytes = hex::decode(padded).map_err(|source| FixtureError::Hex { field, source })?;
    Ok(U256::from_be_slice(&bytes))
}

fn decode_hex_address(field: &'static str, value: &str) -> Result<Address, FixtureError> {
    let trimmed = value.trim_start_matches("0x");
    let bytes = hex::decode(trimmed).map_err(|source| FixtureError::Hex { field, source })?;
    let mut padded = [0u8; 20];
    let start = 20usize.saturating_sub(bytes.len());
    let take = bytes.len().min(20);
    padded[start..].copy_from_slice(&bytes[bytes.len() - take..]);
    Ok(Address::from(padded))
}

fn decode_hex_bytes(field: &'static str, value: &str) -> Result<Vec<u8>, FixtureError> {
    let trimmed = value.trim_start_matches("0x");
    hex::decode(trimmed).map_err(|source| FixtureError::Hex { field, source })
}

impl Fixture {
    /// Decode this fixture's bytecode from its `code.bin` hex string.
    pub fn code_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        decode_hex_bytes("code.bin", &self.code.bin)
    }

    /// Build the read-only [`Environment`] this fixture describes, absent
    /// fields reading as the type's zero value (spec §7's
    /// `EnvironmentMissing` clause for fields that *are* present but
    /// partially specified; wholesale-absent `tx`/`block`/`state` sections
    /// are simply empty environments).
    pub fn environment(&self) -> Result<Environment, FixtureError> {
        let mut env = Environment::default();

        if let Some(tx) = &self.tx {
            let mut transaction = Transaction::default();
            if let Some(v) = &tx.to {
                transaction.to = decode_hex_address("tx.to", v)?;
            }
            if let Some(v) = &tx.from {
                transaction.from = decode_hex_address("tx.from", v)?;
            }
            if let Some(v) = &tx.origin {
                transaction.origin = decode_hex_address("tx.origin", v)?;
            }
            if let Some(v) = &tx.gasprice {
                transaction.gasprice = decode_hex_u256("tx.gasprice", v)?;
            }
            if let Some(v) = &tx.value {
                transaction.value = decode_hex_u256("tx.value", v)?;
            }
            if let Some(v) = &tx.data {
                transaction.data = decode_hex_bytes("tx.data", v)?;
            }
            env.tx = transaction;
        }

        if let Some(block) = &self.block {
            let mut block_env = BlockEnv::default();
            if let Some(v) = &block.basefee {
                block_env.basefee = decode_hex_u256("block.basefee", v)?;
            }
            if let Some(v) = &block.coinbase {
                block_env.coinbase = decode_hex_address("block.coinbase", v)?;
            }
            if let Some(v) = &block.timestamp {
                block_env.timestamp = decode_hex_u256("block.timestamp", v)?;
            }
            if let Some(v) = &block.number {
                block_env.number = decode_hex_u256("block.number", v)?;
            }
            if let Some(v) = &block.difficulty {
                block_env.difficulty = decode_hex_u256("block.difficulty", v)?;
            }
            if let Some(v) = &block.gaslimit {
                block_env.gaslimit = decode_hex_u256("block.gaslimit", v)?;
            }
            if let Some(v) = &block.chainid {
                block_env.chainid = decode_hex_u256("block.chainid", v)?;
            }
            env.block = block_env;
        }

        if let Some(state) = &self.state {
            for (address_hex, account) in state {
                let address = decode_hex_address("state key", address_hex)?;
                let balance = match &account.balance {
                    Some(v) => decode_hex_u256("state.balance", v)?,
                    None => U256::ZERO,
                };
                let code = match &account.code {
                    Some(c) => decode_hex_bytes("state.code.bin", &c.bin)?,
                    None => Vec::new(),
                };
                env.state.insert(address, Account { balance, code });
            }
        }

        Ok(env)
    }

    /// Parse the expected stack, if the fixture specifies one (top-of-stack
    /// first, per spec §6).
    pub fn expected_stack(&self) -> Result<Option<Vec<U256>>, FixtureError> {
        let Some(values) = &self.expect.stack else { return Ok(None) };
        values
            .iter()
            .map(|v| decode_hex_u256("expect.stack[]", v))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

/// Load and parse the fixture array at `path`.
pub fn load(path: &str) -> Result<Vec<Fixture>, FixtureError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| FixtureError::Io { path: path.to_string(), source })?;
    Ok(serde_json::from_str(&raw)?)
}
