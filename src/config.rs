//! Network and contract configuration for the strategy wallet tools

use crate::constants::{BASE_CHAIN_ID, DEFAULT_RPC_URL, DEFAULT_STRATEGY_ADDRESS};
use alloy::primitives::Address;

/// Configuration handed to the client at construction time (Base mainnet)
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    /// Chain id (8453 for Base)
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// AerodromeStrategy proxy address
    pub strategy: Address,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyConfig {
    /// Create Base mainnet configuration (default)
    pub fn new() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            strategy: DEFAULT_STRATEGY_ADDRESS.parse().unwrap(),
        }
    }

    /// Create custom configuration with specific RPC URL
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Set the strategy proxy address
    pub fn with_strategy(mut self, strategy: Address) -> Self {
        self.strategy = strategy;
        self
    }
}
