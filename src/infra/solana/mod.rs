pub mod client;
pub mod rpc;

pub use client::SolanaRpc;
pub use rpc::{BlockhashWindow, DevnetRpc};
