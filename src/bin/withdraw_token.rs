//! Admin token withdrawal from the strategy wallet
//!
//! Run with: cargo run --bin withdraw-token -- --amount 1.5
//!
//! Requires the admin key file; every run asks for confirmation twice
//! before anything is signed or broadcast.

use aero_admin::constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_KEY_PATH, DEFAULT_RPC_URL, DEFAULT_STRATEGY_ADDRESS,
    DEFAULT_TOKEN_ADDRESS,
};
use aero_admin::{
    withdraw, HttpChain, OperatorKey, StdinConfirmer, StrategyClient, StrategyConfig,
    WithdrawOutcome, WithdrawRequest,
};
use alloy::primitives::Address;
use clap::Parser;

#[derive(Parser)]
#[command(name = "withdraw-token")]
#[command(about = "Withdraw a token from the strategy wallet", long_about = None)]
struct Cli {
    /// Strategy proxy address
    #[arg(long, default_value = DEFAULT_STRATEGY_ADDRESS)]
    strategy_address: Address,

    /// Operator address the key file must match
    #[arg(long, default_value = DEFAULT_ADMIN_ADDRESS)]
    admin_address: Address,

    /// Path to the admin key file
    #[arg(long, default_value = DEFAULT_KEY_PATH)]
    key_path: String,

    /// Token to withdraw
    #[arg(long, default_value = DEFAULT_TOKEN_ADDRESS)]
    token_address: Address,

    /// Amount in human units, as a decimal number
    #[arg(long, default_value = "0")]
    amount: String,

    /// Withdraw via withdrawAddress2 instead of withdrawAddress1
    #[arg(long)]
    to_address2: bool,

    /// RPC endpoint
    #[arg(long, env = "STRATEGY_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = StrategyConfig::default()
        .with_rpc_url(&cli.rpc_url)
        .with_strategy(cli.strategy_address);
    let chain = HttpChain::connect(&config.rpc_url)?;
    let client = StrategyClient::new(chain, config);
    let key = OperatorKey::from_file(&cli.key_path)?;

    let request = WithdrawRequest {
        admin: cli.admin_address,
        token: cli.token_address,
        amount: cli.amount,
        to_address2: cli.to_address2,
    };

    match withdraw::run(&client, &key, &request, &StdinConfirmer).await? {
        WithdrawOutcome::Submitted(hash) => {
            println!("txid: {hash}");
            Ok(())
        }
        WithdrawOutcome::Cancelled => {
            // operator declined; exit status 2 is distinct from failure
            std::process::exit(2);
        }
    }
}
