// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! The application shell: wires the wallet session and the notification
//! sink, and mounts the raffle view inside them. Pure composition, no state
//! of its own.

use std::sync::Arc;

use tracing::debug;

use crate::{
    config::{AppConfig, ChainRegistry},
    contract::OnChainRaffle,
    notification::TracingSink,
    view::{RaffleView, Screen},
    wallet::WalletSession,
    Error,
};

/// The application root. Constructing it opens no connection; the wallet is
/// only enabled when the user asks for it.
pub struct RaffleApp {
    config: AppConfig,
}

impl RaffleApp {
    pub fn new(config: AppConfig) -> Self {
        RaffleApp { config }
    }

    /// Builds the wallet session and the view and mounts the page.
    pub async fn mount(self) -> Result<RafflePage, Error> {
        let session = WalletSession::new(&self.config.rpc_url, &self.config.signer_key)?;
        let view = RaffleView::new(Arc::new(TracingSink));
        view.mount().await;
        Ok(RafflePage {
            session,
            registry: self.config.addresses,
            view,
        })
    }
}

/// The mounted raffle page: the wallet session, the chain registry, and the
/// view bound to whatever contract the connected chain carries.
pub struct RafflePage {
    session: WalletSession,
    registry: ChainRegistry,
    view: RaffleView<OnChainRaffle>,
}

impl RafflePage {
    /// Enables the wallet, resolves the contract deployed on the reported
    /// chain, and forwards the connectivity transition to the view.
    pub async fn enable_web3(&self) -> Result<(), Error> {
        self.session.enable_web3().await?;
        self.resolve_contract().await;
        self.view
            .handle_connectivity(self.session.is_web3_enabled().await)
            .await;
        Ok(())
    }

    async fn resolve_contract(&self) {
        let provider = self.session.provider().await;
        let chain_id = self.session.chain_id().await;
        let contract = match (provider, chain_id) {
            (Some(provider), Some(chain_id)) => {
                let address = self.registry.contract_for(chain_id);
                if address.is_none() {
                    debug!(%chain_id, "no raffle deployed on this chain");
                }
                address.map(|address| Arc::new(OnChainRaffle::new(provider, address)))
            }
            _ => None,
        };
        self.view.bind_contract(contract).await;
    }

    pub async fn enter_raffle(&self) {
        self.view.enter_raffle().await;
    }

    pub async fn render(&self) -> Screen {
        self.view.render().await
    }

    pub fn view(&self) -> &RaffleView<OnChainRaffle> {
        &self.view
    }
}
