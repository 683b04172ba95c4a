//! Domain types: errors, the persisted secret record and transfer requests.

pub mod error;
pub mod secret;
pub mod transfer;

pub use error::{Error, Result};
pub use transfer::TransferRequest;
