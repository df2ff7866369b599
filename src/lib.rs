//! Admin tools for the Aerodrome strategy wallet on Base
//!
//! Two stateless command-line utilities over one deployed strategy proxy:
//!
//! - `strategy-info`: read-only getters (whitelists, caller wallets,
//!   withdrawal destinations, gas allowance, token balances)
//! - `withdraw-token`: admin token withdrawal with identity verification,
//!   live decimal scaling, and a manual double-confirmation gate
//!
//! # Example
//!
//! ```rust,ignore
//! use aero_admin::{
//!     withdraw, HttpChain, OperatorKey, StdinConfirmer, StrategyClient, StrategyConfig,
//!     WithdrawRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let config = StrategyConfig::default();
//!     let chain = HttpChain::connect(&config.rpc_url)?;
//!     let client = StrategyClient::new(chain, config);
//!     let key = OperatorKey::from_file("~/web3/admin.txt")?;
//!
//!     let request = WithdrawRequest {
//!         admin: key.address(),
//!         token: "0x4200000000000000000000000000000000000006".parse()?,
//!         amount: "1.5".to_string(),
//!         to_address2: false,
//!     };
//!     let outcome = withdraw::run(&client, &key, &request, &StdinConfirmer).await?;
//!     println!("{outcome:?}");
//!
//!     Ok(())
//! }
//! ```

pub mod chain;
pub mod client;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod contracts;
pub mod error;
pub mod query;
pub mod signer;
pub mod withdraw;

// Re-export main types for convenience
pub use chain::{ChainClient, HttpChain};
pub use client::StrategyClient;
pub use config::StrategyConfig;
pub use confirm::{Confirm, StdinConfirmer};
pub use error::{eyre, Context, Report, Result};
pub use query::QueryCommand;
pub use signer::OperatorKey;
pub use withdraw::{WithdrawOutcome, WithdrawRequest};
