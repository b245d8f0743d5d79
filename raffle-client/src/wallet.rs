// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use async_lock::Mutex;
use tracing::info;
use url::Url;

use crate::{config::ChainId, Error};

struct Connection {
    provider: DynProvider,
    chain_id: ChainId,
}

/// A deferred wallet connection.
///
/// Construction performs no I/O; the connection to the node is only
/// established when [`Self::enable_web3`] is called, and is kept for the
/// rest of the session.
pub struct WalletSession {
    url: Url,
    signer: PrivateKeySigner,
    connection: Mutex<Option<Connection>>,
}

impl WalletSession {
    pub fn new(rpc_url: &str, signer_key: &str) -> Result<Self, Error> {
        let url = Url::parse(rpc_url)?;
        let signer = PrivateKeySigner::from_str(signer_key)?;
        Ok(WalletSession {
            url,
            signer,
            connection: Mutex::new(None),
        })
    }

    /// Connects the wallet to the node and records the reported chain.
    /// Idempotent: an already-enabled session is left untouched.
    pub async fn enable_web3(&self) -> Result<(), Error> {
        let mut connection = self.connection.lock().await;
        if connection.is_some() {
            return Ok(());
        }
        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.url.clone())
            .erased();
        let chain_id = ChainId(provider.get_chain_id().await?);
        info!(%chain_id, url = %self.url, "wallet connected");
        *connection = Some(Connection { provider, chain_id });
        Ok(())
    }

    pub async fn is_web3_enabled(&self) -> bool {
        self.connection.lock().await.is_some()
    }

    /// The chain the wallet is connected to, if it is connected at all.
    pub async fn chain_id(&self) -> Option<ChainId> {
        self.connection
            .lock()
            .await
            .as_ref()
            .map(|connection| connection.chain_id)
    }

    /// The connected provider, if any.
    pub async fn provider(&self) -> Option<DynProvider> {
        self.connection
            .lock()
            .await
            .as_ref()
            .map(|connection| connection.provider.clone())
    }
}
