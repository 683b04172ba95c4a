pub mod faucet;
pub mod key_provisioner;
pub mod orchestrator;
pub mod recipient;
pub mod transfer_executor;

pub use orchestrator::{run, run_on_devnet, TransferOutcome};
