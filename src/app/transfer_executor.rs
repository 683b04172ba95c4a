//! Builds, signs, submits and confirms a single SOL transfer.

use solana_program::pubkey::Pubkey;
use solana_sdk::{
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::domain::transfer::explorer_url;
use crate::domain::{Error, Result, TransferRequest};
use crate::infra::solana::DevnetRpc;

/// Sends `amount_sol` from `payer` to `recipient`.
///
/// The payer's on-chain lamports are checked first; an over-sized request fails with
/// `InsufficientFunds` and nothing is submitted.
pub async fn send_sol(
    rpc: &dyn DevnetRpc,
    payer: &Keypair,
    recipient: &Pubkey,
    amount_sol: f64,
) -> Result<Signature> {
    let request = TransferRequest::from_sol(payer.pubkey(), *recipient, amount_sol);

    let available = rpc.get_account_lamports(&request.payer).await?;
    if request.lamports > available {
        return Err(Error::InsufficientFunds {
            requested: request.lamports,
            available,
        });
    }

    let window = rpc.latest_blockhash().await?;
    let transaction = Transaction::new_signed_with_payer(
        &[request.instruction()],
        Some(&request.payer),
        &[payer],
        window.blockhash,
    );
    let signature = rpc.send_and_confirm(&transaction).await?;

    println!("> Transaction {}", explorer_url(&signature));
    Ok(signature)
}
