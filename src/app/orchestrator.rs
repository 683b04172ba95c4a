//! End-to-end flow: connect, provision + fund, pick a recipient, transfer.

use solana_program::pubkey::Pubkey;
use solana_sdk::{signature::Signature, signer::Signer};

use crate::app::{key_provisioner, recipient, transfer_executor};
use crate::domain::transfer::display_sol;
use crate::domain::Result;
use crate::infra::config::{self, KeyConfig};
use crate::infra::solana::{DevnetRpc, SolanaRpc};
use crate::storage::{EnvFileSecretStore, SecretStore};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub payer: Pubkey,
    pub recipient: Pubkey,
    pub signature: Signature,
    /// Payer balance re-queried after the transfer confirmed, `None` if that query failed.
    pub payer_balance: Option<u64>,
}

/// Runs the flow against an already-connected endpoint.
pub async fn run(rpc: &dyn DevnetRpc, store: &dyn SecretStore) -> Result<TransferOutcome> {
    let payer = key_provisioner::provision_signer(rpc, store).await?;
    let recipient = recipient::generate_recipient();
    println!("> Recipient: {}", recipient);

    let signature =
        transfer_executor::send_sol(rpc, &payer, &recipient, config::TRANSFER_AMOUNT_SOL).await?;

    // The transfer is already confirmed; a failed re-query only loses the report.
    let payer_balance = match rpc.get_balance(&payer.pubkey()).await {
        Ok(balance) => {
            println!("> Balance after transfer: {} SOL", display_sol(balance));
            Some(balance)
        }
        Err(e) => {
            eprintln!("> Warning: could not re-query payer balance: {}", e);
            None
        }
    };

    Ok(TransferOutcome {
        payer: payer.pubkey(),
        recipient,
        signature,
        payer_balance,
    })
}

/// Connects to public devnet and runs the flow with `.env`-backed key storage.
pub async fn run_on_devnet(key_config: KeyConfig) -> Result<TransferOutcome> {
    let rpc = SolanaRpc::connect(config::DEVNET_RPC_URL).await?;
    let store = EnvFileSecretStore::new(key_config);
    run(&rpc, &store).await
}
