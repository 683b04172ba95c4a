//! Persisted secret record: a keypair's 64 bytes as a JSON numeric array.

use solana_sdk::signature::Keypair;
use solana_sdk::signer::keypair::keypair_from_seed;
use solana_sdk::signer::Signer;

use crate::domain::error::{Error, Result};

/// Keypair bytes: 32-byte seed followed by the 32-byte public key.
pub const KEYPAIR_LEN: usize = 64;
const SEED_LEN: usize = 32;

/// Decodes a `[b0,b1,...,b63]` array into a keypair.
///
/// The public half must match the key derived from the seed, otherwise the record is rejected.
pub fn decode_secret(raw: &str) -> Result<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(raw.trim())
        .map_err(|e| Error::deserialization(format!("expected a JSON array of bytes: {}", e)))?;
    if bytes.len() != KEYPAIR_LEN {
        return Err(Error::deserialization(format!(
            "expected {} bytes, got {}",
            KEYPAIR_LEN,
            bytes.len()
        )));
    }

    let keypair = keypair_from_seed(&bytes[..SEED_LEN])
        .map_err(|e| Error::deserialization(e.to_string()))?;
    if keypair.pubkey().to_bytes()[..] != bytes[SEED_LEN..] {
        return Err(Error::deserialization(
            "public key does not match the secret seed",
        ));
    }
    Ok(keypair)
}

/// Renders a keypair as the numeric array stored in configuration.
pub fn encode_secret(keypair: &Keypair) -> String {
    let bytes = keypair.to_bytes();
    let rendered: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", rendered.join(","))
}
