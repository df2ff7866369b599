//! HTTP JSON-RPC implementation of `ChainClient`

use super::ChainClient;
use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::transports::http::reqwest::Url;
use eyre::{Context, Result};
use std::sync::Arc;

/// Chain client backed by a single HTTP JSON-RPC endpoint
pub struct HttpChain {
    /// Read-only provider without fillers; nonce and gas are set explicitly
    provider: Arc<RootProvider<Ethereum>>,
}

impl HttpChain {
    /// Create a client for the given RPC endpoint
    pub fn connect(rpc_url: impl AsRef<str>) -> Result<Self> {
        let url: Url = rpc_url.as_ref().parse().context("Invalid RPC URL")?;
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url);

        Ok(Self {
            provider: Arc::new(provider),
        })
    }
}

impl ChainClient for HttpChain {
    async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("Failed to fetch chain id")
    }

    async fn transaction_count(&self, address: Address) -> Result<u64> {
        self.provider
            .get_transaction_count(address)
            .await
            .context("Failed to fetch transaction count")
    }

    async fn gas_price(&self) -> Result<u128> {
        self.provider
            .get_gas_price()
            .await
            .context("Failed to fetch gas price")
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        self.provider
            .call(
                alloy::rpc::types::TransactionRequest::default()
                    .with_to(to)
                    .with_input(data),
            )
            .await
            .context("Contract call failed")
    }

    async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash> {
        let pending = self
            .provider
            .send_raw_transaction(&raw)
            .await
            .context("Failed to send raw transaction")?;

        Ok(*pending.tx_hash())
    }
}
