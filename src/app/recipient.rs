use solana_program::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

/// A throwaway destination address; the secret is dropped immediately.
pub fn generate_recipient() -> Pubkey {
    Keypair::new().pubkey()
}
