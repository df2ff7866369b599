//! ERC20 token bindings

use alloy::sol;

sol! {
    /// The slice of ERC20 the tools read
    #[sol(rpc)]
    interface IERC20 {
        /// Returns the symbol of the token
        function symbol() external view returns (string memory);

        /// Returns the decimals of the token
        function decimals() external view returns (uint8);

        /// Returns the balance of an account
        function balanceOf(address account) external view returns (uint256);
    }
}
