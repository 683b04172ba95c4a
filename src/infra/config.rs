//! Centralized configuration (environment variables + fixed constants).

use solana_sdk::native_token::LAMPORTS_PER_SOL;
use std::path::PathBuf;

/// Public devnet RPC endpoint (no override).
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Environment variable holding the persisted keypair as a JSON numeric array.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// Local configuration file the generated keypair is written to.
pub const ENV_FILE: &str = ".env";

/// Balance below which the faucet is asked for funds.
pub const FAUCET_THRESHOLD_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Faucet top-up per request.
pub const FAUCET_TOP_UP_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Amount sent to the throwaway recipient, in SOL.
pub const TRANSFER_AMOUNT_SOL: f64 = 0.4;

/// Where the signing identity is read from and persisted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    pub var_name: String,
    pub env_file: PathBuf,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            var_name: PRIVATE_KEY_VAR.to_string(),
            env_file: PathBuf::from(ENV_FILE),
        }
    }
}

/// Persisted secret from the environment, if any.
///
/// Empty values count as absent.
pub fn private_key(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}
