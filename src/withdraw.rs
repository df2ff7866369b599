//! Withdrawal orchestration
//!
//! The flow is strictly linear: identity check, connectivity check, live
//! decimals, amount scaling, first confirmation on the withdrawal
//! parameters, transaction assembly, second confirmation on the assembled
//! transaction, signing, broadcast. Declining either gate stops the run
//! without touching the chain further; nothing is retried.

use crate::chain::ChainClient;
use crate::client::StrategyClient;
use crate::confirm::Confirm;
use crate::constants::scale_amount;
use crate::signer::OperatorKey;
use alloy::primitives::{Address, TxHash};
use eyre::{Context, Result};
use tracing::info;

/// What the operator asked for, in human units
#[derive(Debug, Clone)]
pub struct WithdrawRequest {
    /// Claimed operator address; must match the loaded key
    pub admin: Address,
    /// Token to withdraw
    pub token: Address,
    /// Amount in human units, as a decimal string
    pub amount: String,
    /// Withdraw via `withdrawToAddress2` instead of `withdrawToAddress1`
    pub to_address2: bool,
}

/// How a withdrawal run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    /// The signed transaction was accepted by the node
    Submitted(TxHash),
    /// The operator declined one of the confirmation gates
    Cancelled,
}

/// Run the full withdrawal flow
pub async fn run<C: ChainClient, P: Confirm>(
    client: &StrategyClient<C>,
    key: &OperatorKey,
    request: &WithdrawRequest,
    confirm: &P,
) -> Result<WithdrawOutcome> {
    // fatal before any chain interaction
    let sender = key.verify_claimed(request.admin)?;

    client.ensure_connected().await?;

    let decimals = client.token_decimals(request.token).await?;
    let amount = scale_amount(&request.amount, decimals)?;

    let method = if request.to_address2 {
        "withdrawToAddress2"
    } else {
        "withdrawToAddress1"
    };
    println!(
        "withdraw {} of token {} ({} base units at {} decimals) via {}",
        request.amount.trim(),
        request.token,
        amount,
        decimals,
        method
    );
    if !confirm.confirm("continue (y)?")? {
        info!("withdrawal cancelled by operator");
        return Ok(WithdrawOutcome::Cancelled);
    }

    let tx = client
        .build_withdrawal(sender, request.token, amount, request.to_address2)
        .await?;
    println!("{tx:#?}");
    if !confirm.confirm("continue (y)?")? {
        info!("withdrawal cancelled by operator");
        return Ok(WithdrawOutcome::Cancelled);
    }

    let raw = key.sign(tx).await?;
    let hash = client
        .chain()
        .send_raw_transaction(raw)
        .await
        .context("Failed to broadcast withdrawal")?;
    info!(%hash, "withdrawal submitted");

    Ok(WithdrawOutcome::Submitted(hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyConfig;
    use crate::constants::{surcharge_gas_price, BASE_CHAIN_ID, WITHDRAW_GAS_LIMIT};
    use crate::contracts::IAeroStrategy;
    use alloy::primitives::{Bytes, TxKind, B256, U256};
    use alloy::sol_types::SolCall;
    use eyre::Result;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
    const KEY_ONE_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";
    const TOKEN: &str = "0x4200000000000000000000000000000000000006";

    #[derive(Default)]
    struct CallCounts {
        chain_id: usize,
        transaction_count: usize,
        gas_price: usize,
        call: usize,
        send: usize,
    }

    /// Chain double that serves canned values and counts every invocation
    struct MockChain {
        chain_id: u64,
        nonce: u64,
        gas_price: u128,
        decimals: u8,
        counts: Mutex<CallCounts>,
        sent: Mutex<Vec<Vec<u8>>>,
    }

    impl MockChain {
        fn new() -> Self {
            Self {
                chain_id: BASE_CHAIN_ID,
                nonce: 7,
                gas_price: 1_000_000_000,
                decimals: 18,
                counts: Mutex::new(CallCounts::default()),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChainClient for MockChain {
        async fn chain_id(&self) -> Result<u64> {
            self.counts.lock().unwrap().chain_id += 1;
            Ok(self.chain_id)
        }

        async fn transaction_count(&self, _address: Address) -> Result<u64> {
            self.counts.lock().unwrap().transaction_count += 1;
            Ok(self.nonce)
        }

        async fn gas_price(&self) -> Result<u128> {
            self.counts.lock().unwrap().gas_price += 1;
            Ok(self.gas_price)
        }

        async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes> {
            self.counts.lock().unwrap().call += 1;
            // every read in the flow is decimals(); answer with one word
            let word = U256::from(self.decimals).to_be_bytes::<32>();
            Ok(Bytes::copy_from_slice(&word))
        }

        async fn send_raw_transaction(&self, raw: Vec<u8>) -> Result<TxHash> {
            self.counts.lock().unwrap().send += 1;
            self.sent.lock().unwrap().push(raw);
            Ok(B256::repeat_byte(0x11))
        }
    }

    /// Confirmation double; panics if prompted more often than scripted
    struct ScriptedConfirm {
        answers: Mutex<VecDeque<bool>>,
    }

    impl ScriptedConfirm {
        fn new(answers: &[bool]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
            }
        }
    }

    impl Confirm for ScriptedConfirm {
        fn confirm(&self, _prompt: &str) -> Result<bool> {
            Ok(self
                .answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("prompted more often than scripted"))
        }
    }

    fn client() -> StrategyClient<MockChain> {
        StrategyClient::new(MockChain::new(), StrategyConfig::new())
    }

    fn request(amount: &str, to_address2: bool) -> WithdrawRequest {
        WithdrawRequest {
            admin: KEY_ONE_ADDRESS.parse().unwrap(),
            token: TOKEN.parse().unwrap(),
            amount: amount.to_string(),
            to_address2,
        }
    }

    fn key() -> OperatorKey {
        OperatorKey::from_hex(KEY_ONE).unwrap()
    }

    #[tokio::test]
    async fn identity_mismatch_aborts_before_any_chain_call() {
        let client = client();
        let mut request = request("1.5", false);
        request.admin = "0x4a5A093D9f08B8436ced92C0E9BBaa80b78F5688".parse().unwrap();

        let err = run(&client, &key(), &request, &ScriptedConfirm::new(&[]))
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains(KEY_ONE_ADDRESS));
        assert!(err.contains("0x4a5A093D9f08B8436ced92C0E9BBaa80b78F5688"));
        let counts = client.chain().counts.lock().unwrap();
        assert_eq!(counts.chain_id, 0);
        assert_eq!(counts.call, 0);
        assert_eq!(counts.transaction_count, 0);
        assert_eq!(counts.gas_price, 0);
        assert_eq!(counts.send, 0);
    }

    #[tokio::test]
    async fn wrong_chain_id_aborts_before_reads() {
        let mut chain = MockChain::new();
        chain.chain_id = 1;
        let client = StrategyClient::new(chain, StrategyConfig::new());

        let err = run(&client, &key(), &request("1", false), &ScriptedConfirm::new(&[]))
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("chain id 1"));
        let counts = client.chain().counts.lock().unwrap();
        assert_eq!(counts.call, 0);
        assert_eq!(counts.send, 0);
    }

    #[tokio::test]
    async fn successful_run_queries_nonce_and_gas_exactly_once() {
        let client = client();
        let outcome = run(
            &client,
            &key(),
            &request("1.5", false),
            &ScriptedConfirm::new(&[true, true]),
        )
        .await
        .unwrap();

        assert_eq!(outcome, WithdrawOutcome::Submitted(B256::repeat_byte(0x11)));
        let counts = client.chain().counts.lock().unwrap();
        assert_eq!(counts.transaction_count, 1);
        assert_eq!(counts.gas_price, 1);
        assert_eq!(counts.send, 1);
    }

    #[tokio::test]
    async fn declining_first_gate_stops_before_assembly() {
        let client = client();
        // a single scripted answer also proves the second gate is never reached
        let outcome = run(
            &client,
            &key(),
            &request("1.5", false),
            &ScriptedConfirm::new(&[false]),
        )
        .await
        .unwrap();

        assert_eq!(outcome, WithdrawOutcome::Cancelled);
        let counts = client.chain().counts.lock().unwrap();
        assert_eq!(counts.transaction_count, 0);
        assert_eq!(counts.gas_price, 0);
        assert_eq!(counts.send, 0);
    }

    #[tokio::test]
    async fn declining_second_gate_stops_after_assembly() {
        let client = client();
        let outcome = run(
            &client,
            &key(),
            &request("1.5", false),
            &ScriptedConfirm::new(&[true, false]),
        )
        .await
        .unwrap();

        assert_eq!(outcome, WithdrawOutcome::Cancelled);
        let counts = client.chain().counts.lock().unwrap();
        assert_eq!(counts.transaction_count, 1);
        assert_eq!(counts.gas_price, 1);
        assert_eq!(counts.send, 0);
    }

    #[tokio::test]
    async fn assembled_call_targets_first_address_with_scaled_amount() {
        let client = client();
        let sender: Address = KEY_ONE_ADDRESS.parse().unwrap();
        let token: Address = TOKEN.parse().unwrap();
        let amount = U256::from(1_500_000_000_000_000_000u128);

        let tx = client
            .build_withdrawal(sender, token, amount, false)
            .await
            .unwrap();

        assert_eq!(tx.from, Some(sender));
        assert_eq!(tx.to, Some(TxKind::Call(client.config().strategy)));
        assert_eq!(tx.nonce, Some(7));
        assert_eq!(tx.chain_id, Some(BASE_CHAIN_ID));
        assert_eq!(tx.gas, Some(WITHDRAW_GAS_LIMIT));
        assert_eq!(tx.gas_price, Some(surcharge_gas_price(1_000_000_000)));

        let input = tx.input.input.as_ref().unwrap();
        let call = IAeroStrategy::withdrawToAddress1Call::abi_decode(input).unwrap();
        assert_eq!(call.token, token);
        assert_eq!(call.amount, amount);
    }

    #[tokio::test]
    async fn destination_flag_selects_second_address() {
        let client = client();
        let sender: Address = KEY_ONE_ADDRESS.parse().unwrap();
        let token: Address = TOKEN.parse().unwrap();

        let tx = client
            .build_withdrawal(sender, token, U256::from(5u64), true)
            .await
            .unwrap();

        let input = tx.input.input.as_ref().unwrap();
        let call = IAeroStrategy::withdrawToAddress2Call::abi_decode(input).unwrap();
        assert_eq!(call.amount, U256::from(5u64));
    }

    #[tokio::test]
    async fn zero_amount_is_submitted_not_rejected() {
        let client = client();
        let outcome = run(
            &client,
            &key(),
            &request("0", false),
            &ScriptedConfirm::new(&[true, true]),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, WithdrawOutcome::Submitted(_)));
        assert_eq!(client.chain().sent.lock().unwrap().len(), 1);
    }
}
