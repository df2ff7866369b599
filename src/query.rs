//! Read-only strategy wallet queries
//!
//! One enumerated command per getter; each prints its result and has no
//! side effects.

use crate::chain::ChainClient;
use crate::client::StrategyClient;
use crate::constants::{unscale_from_decimals, ETH_DECIMALS};
use alloy::primitives::Address;
use clap::Subcommand;
use eyre::Result;

/// The getter calls the info tool can dispatch
#[derive(Debug, Clone, Subcommand)]
pub enum QueryCommand {
    /// Daily gas allowance of the strategy wallet
    DailyGasAmount,
    /// Pools whitelisted for trading
    WhitelistedPools,
    /// Tokens whitelisted for trading
    WhitelistedTokens,
    /// Admin, trader and backup trader wallets
    Callers,
    /// The two registered withdrawal destinations
    WithdrawAddresses,
    /// Whether the trader may withdraw to the approved addresses
    AllowTrader,
    /// Strategy wallet balance of a token
    TokenBalance {
        /// Token contract address
        token: Address,
    },
}

/// Execute one query and print its result
pub async fn run<C: ChainClient>(client: &StrategyClient<C>, command: QueryCommand) -> Result<()> {
    match command {
        QueryCommand::DailyGasAmount => {
            let wei = client.daily_gas_amount().await?;
            println!(
                "Daily gas limit for strategy wallet is {} ETH",
                unscale_from_decimals(wei, ETH_DECIMALS)
            );
        }
        QueryCommand::WhitelistedPools => {
            let pools = client.whitelisted_pools().await?;
            println!("Whitelisted pools: {pools:?}");
        }
        QueryCommand::WhitelistedTokens => {
            let tokens = client.whitelisted_tokens().await?;
            println!("Whitelisted tokens: {tokens:?}");
        }
        QueryCommand::Callers => {
            println!("admin wallet: {}", client.admin().await?);
            println!("trader wallet: {}", client.trader().await?);
            println!("backup_trader wallet: {}", client.backup_trader().await?);
        }
        QueryCommand::WithdrawAddresses => {
            println!(
                "withdraw addresses: {} {}",
                client.withdraw_address1().await?,
                client.withdraw_address2().await?
            );
        }
        QueryCommand::AllowTrader => {
            println!(
                "allow trader withdraw to approved addresses: {}",
                client.allow_trader().await?
            );
        }
        QueryCommand::TokenBalance { token } => {
            let strategy = client.config().strategy;
            let decimals = client.token_decimals(token).await?;
            let symbol = client.token_symbol(token).await?;
            let balance = client.token_balance(token, strategy).await?;
            println!(
                "strategy balance: {} {} ({} base units)",
                unscale_from_decimals(balance, decimals),
                symbol,
                balance
            );
        }
    }

    Ok(())
}
