//! Error taxonomy for the devnet transfer flow.
//!
//! Nothing here is retried: every variant surfaces to the binary, which prints it and exits
//! non-zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid persisted secret: {0}")]
    Deserialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Faucet error: {0}")]
    Faucet(String),

    #[error("Not enough funds: requested {requested} lamports, available {available} lamports")]
    InsufficientFunds { requested: u64, available: u64 },

    #[error("Transaction submission failed: {0}")]
    Submission(String),
}

impl Error {
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    pub fn faucet(msg: impl Into<String>) -> Self {
        Self::Faucet(msg.into())
    }

    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
