use anyhow::Context;

use devnet_transfer::infra::config::KeyConfig;

#[tokio::main]
async fn main() {
    // A previously generated keypair lives in .env as PRIVATE_KEY.
    dotenv::dotenv().ok();

    let result = devnet_transfer::run_on_devnet(KeyConfig::default())
        .await
        .context("devnet transfer failed");

    match result {
        Ok(outcome) => {
            println!("> Sent from {} to {}", outcome.payer, outcome.recipient);
            println!("Finished successfully");
        }
        Err(e) => {
            eprintln!("> Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
