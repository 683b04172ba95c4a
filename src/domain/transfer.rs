//! Transfer request value object and display helpers.

use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::Signature;

/// One SOL -> lamports transfer from `payer` to `recipient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub payer: Pubkey,
    pub recipient: Pubkey,
    pub lamports: u64,
}

impl TransferRequest {
    /// Builds a request from a decimal SOL amount (truncated to whole lamports).
    pub fn from_sol(payer: Pubkey, recipient: Pubkey, amount_sol: f64) -> Self {
        Self {
            payer,
            recipient,
            lamports: (amount_sol * LAMPORTS_PER_SOL as f64) as u64,
        }
    }

    /// The single system-program transfer instruction for this request.
    #[allow(deprecated)]
    pub fn instruction(&self) -> Instruction {
        solana_program::system_instruction::transfer(&self.payer, &self.recipient, self.lamports)
    }
}

/// Lamports rendered in SOL for console output.
pub fn display_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Explorer link for a devnet transaction.
pub fn explorer_url(signature: &Signature) -> String {
    format!(
        "https://explorer.solana.com/tx/{}?cluster=devnet",
        signature
    )
}
