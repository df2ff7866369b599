//! Baked-in defaults and precision/gas policy for the strategy wallet tools

use alloy::primitives::U256;
use eyre::{ensure, eyre, Result};

/// Base mainnet chain id
pub const BASE_CHAIN_ID: u64 = 8453;

/// Default public Base RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://base-rpc.publicnode.com";

/// Deployed AerodromeStrategy proxy
pub const DEFAULT_STRATEGY_ADDRESS: &str = "0x5eE13f849CD16eE3180196C1AD61323CC60D6932";

/// Admin wallet allowed to call the withdrawal methods
pub const DEFAULT_ADMIN_ADDRESS: &str = "0x4a5A093D9f08B8436ced92C0E9BBaa80b78F5688";

/// WETH on Base
pub const DEFAULT_TOKEN_ADDRESS: &str = "0x4200000000000000000000000000000000000006";

/// Default location of the admin key file
pub const DEFAULT_KEY_PATH: &str = "~/web3/admin.txt";

/// ETH has 18 decimals
pub const ETH_DECIMALS: u8 = 18;

/// Fixed gas ceiling for a withdrawal call; never estimated
pub const WITHDRAW_GAS_LIMIT: u64 = 2_000_000;

/// Gas price surcharge of 20% over the node's suggestion, as a ratio
pub const GAS_SURCHARGE_NUM: u128 = 6;
pub const GAS_SURCHARGE_DEN: u128 = 5;

/// Apply the fixed surcharge to a suggested gas price
pub fn surcharge_gas_price(gas_price: u128) -> u128 {
    gas_price * GAS_SURCHARGE_NUM / GAS_SURCHARGE_DEN
}

/// Scale a human-unit decimal amount to the token's smallest unit.
///
/// The arithmetic is exact decimal-string parsing, never floating point.
/// Fractional digits beyond `decimals` are truncated toward zero. Rejects
/// empty, negative, or non-numeric input; overflow is an error, not a wrap.
pub fn scale_amount(amount: &str, decimals: u8) -> Result<U256> {
    let s = amount.trim();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    ensure!(
        int_part.bytes().all(|b| b.is_ascii_digit())
            && frac_part.bytes().all(|b| b.is_ascii_digit())
            && !(int_part.is_empty() && frac_part.is_empty()),
        "invalid amount {s:?}: expected a non-negative decimal number"
    );

    let unit = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or_else(|| eyre!("10^{decimals} does not fit in a uint256"))?;

    let mut scaled = U256::ZERO;
    if !int_part.is_empty() {
        scaled = U256::from_str_radix(int_part, 10)?
            .checked_mul(unit)
            .ok_or_else(|| eyre!("amount {s:?} overflows at {decimals} decimals"))?;
    }

    let frac_kept = &frac_part[..frac_part.len().min(decimals as usize)];
    if !frac_kept.is_empty() {
        let shift = U256::from(10u64).pow(U256::from(decimals as usize - frac_kept.len()));
        scaled = scaled
            .checked_add(U256::from_str_radix(frac_kept, 10)? * shift)
            .ok_or_else(|| eyre!("amount {s:?} overflows at {decimals} decimals"))?;
    }

    Ok(scaled)
}

/// Unscale a U256 value to floating point with specified decimals, for display only
pub fn unscale_from_decimals(value: U256, decimals: u8) -> f64 {
    let divisor = 10f64.powi(decimals as i32);
    let value_u128: u128 = value.try_into().unwrap_or(u128::MAX);
    value_u128 as f64 / divisor
}
