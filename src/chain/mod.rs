//! JSON-RPC boundary for the strategy wallet tools
//!
//! Everything the tools need from a node is behind the `ChainClient` trait,
//! so tests can substitute a recording double for the HTTP provider.

mod http;

pub use http::HttpChain;

use alloy::primitives::{Address, Bytes, TxHash};
use eyre::Result;

/// The node operations the tools perform
pub trait ChainClient: Send + Sync {
    /// Returns the chain id reported by the node
    fn chain_id(&self) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Returns the current transaction count (nonce) of an account
    fn transaction_count(
        &self,
        address: Address,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Returns the node's suggested gas price in wei
    fn gas_price(&self) -> impl std::future::Future<Output = Result<u128>> + Send;

    /// Executes a read-only contract call and returns the raw return data
    fn call(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl std::future::Future<Output = Result<Bytes>> + Send;

    /// Submits raw signed transaction bytes, returning the transaction hash
    fn send_raw_transaction(
        &self,
        raw: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<TxHash>> + Send;
}
