pub mod config;
pub mod solana;
