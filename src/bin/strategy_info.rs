//! Read-only queries against the strategy wallet
//!
//! Run with: cargo run --bin strategy-info -- callers

use aero_admin::constants::{DEFAULT_RPC_URL, DEFAULT_STRATEGY_ADDRESS};
use aero_admin::{query, HttpChain, QueryCommand, StrategyClient, StrategyConfig};
use alloy::primitives::Address;
use clap::Parser;

#[derive(Parser)]
#[command(name = "strategy-info")]
#[command(about = "Read-only queries against the strategy wallet", long_about = None)]
struct Cli {
    /// Strategy proxy address
    #[arg(long, default_value = DEFAULT_STRATEGY_ADDRESS)]
    strategy_address: Address,

    /// RPC endpoint
    #[arg(long, env = "STRATEGY_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    #[command(subcommand)]
    command: QueryCommand,
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
    client.ensure_connected().await?;

    query::run(&client, cli.command).await
}
