//! Per-execution key/value storage, total map with default zero.

use std::collections::HashMap;

use alloy::primitives::U256;

/// `SSTORE`/`SLOAD` backing store for a single execution. Not persisted
/// across invocations.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    data: HashMap<U256, U256>,
}

impl Storage {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }

    pub fn load(&self, key: U256) -> U256 {
        self.data.get(&key).copied().unwrap_or(U256::ZERO)
    }

    pub fn store(&mut self, key: U256, value: U256) {
        self.data.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_zero() {
        let storage = Storage::new();
        assert_eq!(storage.load(U256::from(7)), U256::ZERO);
    }

    #[test]
    fn store_then_load_round_trips() {
        let mut storage = Storage::new();
        storage.store(U256::from(1), U256::from(42));
        assert_eq!(storage.load(U256::from(1)), U256::from(42));
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut storage = Storage::new();
        storage.store(U256::from(1), U256::from(42));
        storage.store(U256::from(1), U256::from(7));
        assert_eq!(storage.load(U256::from(1)), U256::from(7));
    }
}
