//! Loads the signing identity from storage, or generates and persists a new one.

use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

use crate::app::faucet;
use crate::domain::secret::{decode_secret, encode_secret};
use crate::domain::Result;
use crate::infra::solana::DevnetRpc;
use crate::storage::SecretStore;

/// Returns a funded signer.
///
/// The stored record is decoded before any network call, so a malformed secret fails fast.
/// A freshly generated keypair is persisted exactly once, before funding.
pub async fn provision_signer(rpc: &dyn DevnetRpc, store: &dyn SecretStore) -> Result<Keypair> {
    let signer = match store.load()? {
        Some(raw) => decode_secret(&raw)?,
        None => {
            println!("> Generating new keypair... 🗝️");
            let signer = Keypair::new();
            println!("> Persisting keypair to configuration storage");
            store.persist(&encode_secret(&signer))?;
            signer
        }
    };
    println!("> Signer: {}", signer.pubkey());

    faucet::airdrop_if_needed(rpc, &signer.pubkey()).await?;
    Ok(signer)
}
