//! Operator key handling: loading, identity verification, signing
//!
//! The key is read once from a local file, held only in memory, and leaves
//! the process only inside the signed transaction bytes. `OperatorKey`
//! deliberately does not implement `Debug`.

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use eyre::{ensure, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The operator's secret key and the address it controls
pub struct OperatorKey {
    signer: PrivateKeySigner,
}

impl OperatorKey {
    /// Load a hex-encoded key from a plain-text file.
    ///
    /// A leading `~/` is expanded against `$HOME`; surrounding whitespace
    /// in the file is trimmed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_home(path.as_ref());
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read key file {}", path.display()))?;
        Self::from_hex(raw.trim())
    }

    /// Parse a hex-encoded key (with or without 0x prefix)
    pub fn from_hex(key: &str) -> Result<Self> {
        let key = key.strip_prefix("0x").unwrap_or(key);
        let signer: PrivateKeySigner = key.parse().context("Failed to parse private key")?;
        Ok(Self { signer })
    }

    /// The address derived from the key
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Check that the key controls the claimed operator address.
    ///
    /// A mismatch aborts the run before any chain interaction, so a wrong
    /// key file can never sign a withdrawal for an unintended account.
    pub fn verify_claimed(&self, claimed: Address) -> Result<Address> {
        let derived = self.signer.address();
        ensure!(
            derived == claimed,
            "private key does not match the operator address: derived {derived} != claimed {claimed}"
        );
        Ok(derived)
    }

    /// Sign a fully specified transaction request into raw EIP-2718 bytes
    pub async fn sign(&self, tx: TransactionRequest) -> Result<Vec<u8>> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = tx
            .build(&wallet)
            .await
            .context("Failed to sign transaction")?;
        Ok(envelope.encoded_2718())
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}
