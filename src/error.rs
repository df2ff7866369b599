//! Error types for the strategy wallet tools
//!
//! Uses `eyre` for ergonomic error handling with context.

pub use eyre::{eyre, Context, Report, Result};
