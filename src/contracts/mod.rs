//! Contract bindings for the strategy wallet and its tokens

pub mod erc20;
pub mod strategy;

pub use erc20::*;
pub use strategy::*;
