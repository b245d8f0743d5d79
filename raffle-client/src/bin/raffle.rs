// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end for the raffle lottery dapp.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raffle_client::{
    app::RaffleApp,
    config::{AppConfig, ChainRegistry},
};
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "raffle", about = "Enter the raffle lottery from the terminal")]
struct Options {
    /// The HTTP endpoint of the JSON-RPC node.
    #[arg(long, env = "RAFFLE_RPC_URL", default_value = "http://localhost:8545")]
    rpc_url: String,

    /// The hex-encoded private key used to sign entry transactions.
    #[arg(long, env = "RAFFLE_SIGNER_KEY", hide_env_values = true)]
    signer_key: String,

    /// Path to a JSON file overriding the bundled contract addresses.
    #[arg(long)]
    addresses: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let options = Options::parse();

    let addresses = match &options.addresses {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ChainRegistry::bundled(),
    };
    let config = AppConfig {
        rpc_url: options.rpc_url,
        signer_key: options.signer_key,
        addresses,
    };
    let page = RaffleApp::new(config).mount().await?;

    println!("{}", page.render().await);
    println!("commands: connect | enter | show | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "connect" => {
                if let Err(error) = page.enable_web3().await {
                    eprintln!("connection failed: {error}");
                }
            }
            "enter" => page.enter_raffle().await,
            "show" | "" => {}
            "quit" | "exit" => break,
            other => {
                eprintln!("unknown command: {other}");
                continue;
            }
        }
        println!("{}", page.render().await);
    }
    Ok(())
}
