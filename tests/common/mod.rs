//! Deterministic in-memory ledger standing in for the devnet RPC endpoint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use devnet_transfer::{BlockhashWindow, DevnetRpc, Error, Result};
use solana_program::pubkey::Pubkey;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

pub const FEE_LAMPORTS: u64 = 5_000;

// bincode tag of SystemInstruction::Transfer
const TRANSFER_TAG: u32 = 2;

// System program id: all zero bytes ("11111111111111111111111111111111").
const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0u8; 32]);

#[derive(Default)]
struct LedgerState {
    balances: HashMap<Pubkey, u64>,
    airdrops: Vec<(Pubkey, u64)>,
    submitted: Vec<Transaction>,
    calls: usize,
    next_signature: u64,
}

impl LedgerState {
    fn signature(&mut self) -> Signature {
        self.next_signature += 1;
        let mut bytes = [0u8; 64];
        bytes[..8].copy_from_slice(&self.next_signature.to_le_bytes());
        Signature::from(bytes)
    }
}

/// Airdrops credit immediately; transfers are applied with a flat fee.
pub struct FakeLedger {
    state: Mutex<LedgerState>,
    reject_airdrops: bool,
    confirm_airdrops: bool,
    fail_airdrop_status: bool,
    balance_outage_after_transfer: bool,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            reject_airdrops: false,
            confirm_airdrops: true,
            fail_airdrop_status: false,
            balance_outage_after_transfer: false,
        }
    }

    /// Airdrop lands on chain but its status reports an execution failure.
    pub fn failing_airdrop_status() -> Self {
        Self {
            confirm_airdrops: false,
            fail_airdrop_status: true,
            ..Self::new()
        }
    }

    /// Balance queries fail once a transfer has been confirmed.
    pub fn balance_outage_after_transfer() -> Self {
        Self {
            balance_outage_after_transfer: true,
            ..Self::new()
        }
    }

    /// Faucet answers every request with an error (rate limited).
    pub fn rate_limited() -> Self {
        Self {
            reject_airdrops: true,
            ..Self::new()
        }
    }

    /// Faucet accepts requests but they never confirm within the blockhash window.
    pub fn stalled_faucet() -> Self {
        Self {
            confirm_airdrops: false,
            ..Self::new()
        }
    }

    pub fn set_balance(&self, pubkey: &Pubkey, lamports: u64) {
        self.state.lock().unwrap().balances.insert(*pubkey, lamports);
    }

    pub fn balance(&self, pubkey: &Pubkey) -> u64 {
        self.state
            .lock()
            .unwrap()
            .balances
            .get(pubkey)
            .copied()
            .unwrap_or(0)
    }

    pub fn airdrops(&self) -> Vec<(Pubkey, u64)> {
        self.state.lock().unwrap().airdrops.clone()
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Total number of RPC calls made against the ledger.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn window() -> BlockhashWindow {
        BlockhashWindow {
            blockhash: Hash::new_from_array([7u8; 32]),
            last_valid_block_height: 150,
        }
    }
}

fn decode_transfer(transaction: &Transaction) -> Result<(Pubkey, Pubkey, u64)> {
    let message = &transaction.message;
    let [ix] = message.instructions.as_slice() else {
        return Err(Error::submission("expected exactly one instruction"));
    };
    let program_id = message.account_keys[ix.program_id_index as usize];
    if program_id != SYSTEM_PROGRAM_ID || ix.data.len() != 12 || ix.accounts.len() != 2 {
        return Err(Error::submission("not a system transfer"));
    }
    let mut tag = [0u8; 4];
    tag.copy_from_slice(&ix.data[..4]);
    if u32::from_le_bytes(tag) != TRANSFER_TAG {
        return Err(Error::submission("not a system transfer"));
    }
    let mut lamports = [0u8; 8];
    lamports.copy_from_slice(&ix.data[4..12]);

    let from = message.account_keys[ix.accounts[0] as usize];
    let to = message.account_keys[ix.accounts[1] as usize];
    Ok((from, to, u64::from_le_bytes(lamports)))
}

#[async_trait]
impl DevnetRpc for FakeLedger {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if self.balance_outage_after_transfer && !state.submitted.is_empty() {
            return Err(Error::connection("node hiccup"));
        }
        Ok(state.balances.get(pubkey).copied().unwrap_or(0))
    }

    async fn get_account_lamports(&self, pubkey: &Pubkey) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        Ok(state.balances.get(pubkey).copied().unwrap_or(0))
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if self.reject_airdrops {
            return Err(Error::faucet("429 Too Many Requests"));
        }
        state.airdrops.push((*pubkey, lamports));
        if self.confirm_airdrops {
            *state.balances.entry(*pubkey).or_insert(0) += lamports;
        }
        Ok(state.signature())
    }

    async fn latest_blockhash(&self) -> Result<BlockhashWindow> {
        self.state.lock().unwrap().calls += 1;
        Ok(Self::window())
    }

    async fn confirm_signature(
        &self,
        signature: &Signature,
        _window: &BlockhashWindow,
    ) -> Result<bool> {
        self.state.lock().unwrap().calls += 1;
        if self.fail_airdrop_status {
            return Err(Error::submission(format!(
                "{} failed: Error processing Instruction 0: custom program error: 0x1",
                signature
            )));
        }
        Ok(self.confirm_airdrops)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;

        transaction
            .verify()
            .map_err(|e| Error::submission(format!("signature verification failed: {}", e)))?;
        if transaction.message.recent_blockhash != Self::window().blockhash {
            return Err(Error::submission("blockhash not found"));
        }
        let (from, to, lamports) = decode_transfer(transaction)?;

        let available = state.balances.get(&from).copied().unwrap_or(0);
        let debit = lamports + FEE_LAMPORTS;
        if debit > available {
            return Err(Error::submission("insufficient funds for fee"));
        }
        state.balances.insert(from, available - debit);
        *state.balances.entry(to).or_insert(0) += lamports;
        state.submitted.push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}
