//! Tops the signer up from the devnet faucet when its balance is low.

use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::domain::transfer::display_sol;
use crate::domain::{Error, Result};
use crate::infra::config::{FAUCET_THRESHOLD_LAMPORTS, FAUCET_TOP_UP_LAMPORTS};
use crate::infra::solana::DevnetRpc;

/// Requests one SOL when the balance is under one SOL and waits for it to confirm.
///
/// Returns the airdrop signature, or `None` when the balance was already sufficient.
/// A rejected request (devnet rate limits are common) or an expired confirmation window is
/// fatal; there is no retry.
pub async fn airdrop_if_needed(rpc: &dyn DevnetRpc, signer: &Pubkey) -> Result<Option<Signature>> {
    let balance = rpc.get_balance(signer).await?;
    println!("> Current balance: {} SOL", display_sol(balance));

    if balance >= FAUCET_THRESHOLD_LAMPORTS {
        return Ok(None);
    }

    println!("> Airdropping {} SOL", display_sol(FAUCET_TOP_UP_LAMPORTS));
    let signature = rpc.request_airdrop(signer, FAUCET_TOP_UP_LAMPORTS).await?;
    let window = rpc.latest_blockhash().await?;

    let confirmed = rpc
        .confirm_signature(&signature, &window)
        .await
        .map_err(|e| match e {
            Error::Submission(msg) => Error::faucet(msg),
            other => other,
        })?;
    if !confirmed {
        return Err(Error::faucet(format!(
            "airdrop {} not confirmed before block height {}",
            signature, window.last_valid_block_height
        )));
    }

    let new_balance = rpc.get_balance(signer).await?;
    println!("> New balance is {} SOL", display_sol(new_balance));
    Ok(Some(signature))
}
