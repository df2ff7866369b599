//! StrategyClient - typed access to the strategy wallet and its tokens

use crate::chain::ChainClient;
use crate::config::StrategyConfig;
use crate::constants::{surcharge_gas_price, WITHDRAW_GAS_LIMIT};
use crate::contracts::{IAeroStrategy, IERC20};
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use eyre::{ensure, Context, Result};
use tracing::debug;

/// Client for the strategy wallet, generic over the node transport
pub struct StrategyClient<C: ChainClient> {
    chain: C,
    config: StrategyConfig,
}

impl<C: ChainClient> StrategyClient<C> {
    /// Create a new client
    pub fn new(chain: C, config: StrategyConfig) -> Self {
        Self { chain, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Get the underlying chain client
    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Check that the endpoint answers and serves the configured chain
    pub async fn ensure_connected(&self) -> Result<()> {
        let chain_id = self
            .chain
            .chain_id()
            .await
            .with_context(|| format!("Failed to connect to {}", self.config.rpc_url))?;
        ensure!(
            chain_id == self.config.chain_id,
            "RPC endpoint serves chain id {chain_id}, expected {}",
            self.config.chain_id
        );
        debug!(chain_id, "connected");
        Ok(())
    }

    /// Encode a call, execute it read-only, decode the return value
    async fn read<T: SolCall>(&self, to: Address, call: T) -> Result<T::Return> {
        let data = Bytes::from(call.abi_encode());
        let ret = self
            .chain
            .call(to, data)
            .await
            .with_context(|| format!("Failed to call {}", T::SIGNATURE))?;
        T::abi_decode_returns(&ret)
            .with_context(|| format!("Failed to decode {} return data", T::SIGNATURE))
    }

    // ========== Token reads ==========

    /// Token decimal count, queried live; never cached or defaulted
    pub async fn token_decimals(&self, token: Address) -> Result<u8> {
        self.read(token, IERC20::decimalsCall {}).await
    }

    /// Token symbol
    pub async fn token_symbol(&self, token: Address) -> Result<String> {
        self.read(token, IERC20::symbolCall {}).await
    }

    /// Token balance of an account, in base units
    pub async fn token_balance(&self, token: Address, account: Address) -> Result<U256> {
        self.read(token, IERC20::balanceOfCall { account }).await
    }

    // ========== Strategy reads ==========

    /// Admin wallet
    pub async fn admin(&self) -> Result<Address> {
        self.read(self.config.strategy, IAeroStrategy::adminCall {})
            .await
    }

    /// Trader wallet
    pub async fn trader(&self) -> Result<Address> {
        self.read(self.config.strategy, IAeroStrategy::traderCall {})
            .await
    }

    /// Backup trader wallet
    pub async fn backup_trader(&self) -> Result<Address> {
        self.read(self.config.strategy, IAeroStrategy::backupTraderCall {})
            .await
    }

    /// First registered withdrawal destination
    pub async fn withdraw_address1(&self) -> Result<Address> {
        self.read(self.config.strategy, IAeroStrategy::withdrawAddress1Call {})
            .await
    }

    /// Second registered withdrawal destination
    pub async fn withdraw_address2(&self) -> Result<Address> {
        self.read(self.config.strategy, IAeroStrategy::withdrawAddress2Call {})
            .await
    }

    /// Whether the trader may withdraw to the approved addresses
    pub async fn allow_trader(&self) -> Result<bool> {
        self.read(self.config.strategy, IAeroStrategy::allowTraderCall {})
            .await
    }

    /// Daily gas allowance in wei
    pub async fn daily_gas_amount(&self) -> Result<U256> {
        self.read(self.config.strategy, IAeroStrategy::dailyGasAmountCall {})
            .await
    }

    /// Pools whitelisted for trading
    pub async fn whitelisted_pools(&self) -> Result<Vec<Address>> {
        self.read(
            self.config.strategy,
            IAeroStrategy::getWhitelistedPoolsCall {},
        )
        .await
    }

    /// Tokens whitelisted for trading
    pub async fn whitelisted_tokens(&self) -> Result<Vec<Address>> {
        self.read(
            self.config.strategy,
            IAeroStrategy::getWhitelistedTokensCall {},
        )
        .await
    }

    // ========== Withdrawal assembly ==========

    /// Assemble the unsigned withdrawal transaction.
    ///
    /// Nonce and gas price are queried here, once, so the request reflects
    /// chain state at the moment of assembly. The gas limit is the fixed
    /// ceiling and the gas price carries the fixed surcharge. No chain
    /// mutation happens in this step.
    pub async fn build_withdrawal(
        &self,
        sender: Address,
        token: Address,
        amount: U256,
        to_address2: bool,
    ) -> Result<TransactionRequest> {
        let nonce = self
            .chain
            .transaction_count(sender)
            .await
            .context("Failed to fetch nonce")?;
        let gas_price = self
            .chain
            .gas_price()
            .await
            .context("Failed to fetch gas price")?;

        let data = if to_address2 {
            IAeroStrategy::withdrawToAddress2Call { token, amount }.abi_encode()
        } else {
            IAeroStrategy::withdrawToAddress1Call { token, amount }.abi_encode()
        };

        Ok(TransactionRequest::default()
            .with_from(sender)
            .with_to(self.config.strategy)
            .with_chain_id(self.config.chain_id)
            .with_nonce(nonce)
            .with_gas_limit(WITHDRAW_GAS_LIMIT)
            .with_gas_price(surcharge_gas_price(gas_price))
            .with_input(Bytes::from(data)))
    }
}
