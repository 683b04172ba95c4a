//! Capability interface over the devnet RPC endpoint.
//!
//! Every network-facing step of the flow goes through this trait so it can run against a
//! deterministic in-memory ledger in tests.

use async_trait::async_trait;
use solana_program::pubkey::Pubkey;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

use crate::domain::Result;

/// Recent blockhash together with the last block height at which it is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockhashWindow {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

#[async_trait]
pub trait DevnetRpc: Send + Sync {
    /// Balance in lamports.
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64>;

    /// Lamports held by the account, `0` when the account does not exist yet.
    async fn get_account_lamports(&self, pubkey: &Pubkey) -> Result<u64>;

    /// Asks the faucet to credit `lamports` to `pubkey`.
    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature>;

    async fn latest_blockhash(&self) -> Result<BlockhashWindow>;

    /// Blocks until `signature` is confirmed.
    ///
    /// Returns `Ok(false)` once the block height passes `window` without confirmation.
    async fn confirm_signature(&self, signature: &Signature, window: &BlockhashWindow)
        -> Result<bool>;

    /// Submits a signed transaction and waits for confirmation.
    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature>;
}
