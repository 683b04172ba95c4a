// Responsible for all communication with the Solana devnet.

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use solana_sdk::{
    commitment_config::CommitmentConfig, signature::Signature, transaction::Transaction,
};
use tokio::time::{sleep, Duration};

use crate::domain::{Error, Result};
use crate::infra::solana::rpc::{BlockhashWindow, DevnetRpc};

const CONFIRM_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Connection handle backed by the nonblocking `RpcClient`.
pub struct SolanaRpc {
    client: RpcClient,
}

impl SolanaRpc {
    /// Builds the client and probes the endpoint once so an unreachable node fails here.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        let client =
            RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());

        let version = client
            .get_version()
            .await
            .map_err(|e| Error::connection(format!("{}: {}", rpc_url, e)))?;
        println!("> Connected to {} (solana-core {})", rpc_url, version.solana_core);

        Ok(Self { client })
    }
}

#[async_trait]
impl DevnetRpc for SolanaRpc {
    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        self.client
            .get_balance(pubkey)
            .await
            .map_err(|e| Error::connection(format!("get_balance({}): {}", pubkey, e)))
    }

    async fn get_account_lamports(&self, pubkey: &Pubkey) -> Result<u64> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.client.commitment())
            .await
            .map_err(|e| Error::connection(format!("get_account({}): {}", pubkey, e)))?;
        Ok(response.value.map(|account| account.lamports).unwrap_or(0))
    }

    async fn request_airdrop(&self, pubkey: &Pubkey, lamports: u64) -> Result<Signature> {
        self.client
            .request_airdrop(pubkey, lamports)
            .await
            .map_err(|e| Error::faucet(format!("airdrop request rejected: {}", e)))
    }

    async fn latest_blockhash(&self) -> Result<BlockhashWindow> {
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(self.client.commitment())
            .await
            .map_err(|e| Error::connection(format!("get_latest_blockhash: {}", e)))?;
        Ok(BlockhashWindow {
            blockhash,
            last_valid_block_height,
        })
    }

    async fn confirm_signature(
        &self,
        signature: &Signature,
        window: &BlockhashWindow,
    ) -> Result<bool> {
        loop {
            let status = self
                .client
                .get_signature_status_with_commitment(signature, self.client.commitment())
                .await
                .map_err(|e| Error::connection(format!("get_signature_status: {}", e)))?;

            match status {
                Some(Ok(())) => return Ok(true),
                Some(Err(e)) => {
                    return Err(Error::submission(format!("{} failed: {}", signature, e)))
                }
                None => {}
            }

            let block_height = self
                .client
                .get_block_height()
                .await
                .map_err(|e| Error::connection(format!("get_block_height: {}", e)))?;
            if block_height > window.last_valid_block_height {
                return Ok(false);
            }

            sleep(CONFIRM_POLL_INTERVAL).await;
        }
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> Result<Signature> {
        self.client
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| Error::submission(e.to_string()))
    }
}
