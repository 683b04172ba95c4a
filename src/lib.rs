pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;

// Convenience re-exports (keeps call-sites clean)
pub use app::{run, run_on_devnet, TransferOutcome};
pub use domain::{Error, Result, TransferRequest};
pub use infra::solana::{BlockhashWindow, DevnetRpc, SolanaRpc};
pub use storage::{EnvFileSecretStore, MemorySecretStore, SecretStore};
