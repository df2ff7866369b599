//! AerodromeStrategy contract bindings
//!
//! The strategy wallet sits behind a UUPS proxy; all calls go to the proxy
//! address. Only the admin surface used by the tools is bound here, not the
//! trading/liquidity methods.

use alloy::sol;

sol! {
    /// Admin surface of the AerodromeStrategy proxy
    #[sol(rpc)]
    interface IAeroStrategy {
        /// Admin wallet
        function admin() external view returns (address);

        /// Trader wallet
        function trader() external view returns (address);

        /// Backup trader wallet
        function backupTrader() external view returns (address);

        /// First pre-registered withdrawal destination
        function withdrawAddress1() external view returns (address);

        /// Second pre-registered withdrawal destination
        function withdrawAddress2() external view returns (address);

        /// Whether the trader may withdraw to the approved addresses
        function allowTrader() external view returns (bool);

        /// Daily gas allowance of the strategy wallet, in wei
        function dailyGasAmount() external view returns (uint256);

        /// Pools whitelisted for trading
        function getWhitelistedPools() external view returns (address[] memory);

        /// Tokens whitelisted for trading
        function getWhitelistedTokens() external view returns (address[] memory);

        /// Withdraw `amount` of `token` to the first registered address
        function withdrawToAddress1(address token, uint256 amount) external;

        /// Withdraw `amount` of `token` to the second registered address
        function withdrawToAddress2(address token, uint256 amount) external;
    }
}
