// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! Typed access to the raffle contract.
//!
//! [`RaffleContract`] and [`EntryTicket`] are the seams the view is written
//! against; [`OnChainRaffle`] is the alloy-backed implementation used by the
//! application shell.

use alloy::{
    network::Ethereum,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder},
    sol,
};
use async_trait::async_trait;

use crate::Error;

sol! {
    #[sol(rpc)]
    contract Raffle {
        function getEntranceFee() external view returns (uint256);
        function getNumberOfPlayers() external view returns (uint256);
        function getRecentWinner() external view returns (address);
        function enterRaffle() external payable;
    }
}

/// The remote-call surface of a deployed raffle contract.
#[async_trait]
pub trait RaffleContract: Send + Sync {
    /// The pending-transaction handle returned by [`Self::enter`].
    type Ticket: EntryTicket;

    /// Reads the entrance fee, in wei.
    async fn entrance_fee(&self) -> Result<U256, Error>;

    /// Reads the current number of players.
    async fn number_of_players(&self) -> Result<U256, Error>;

    /// Reads the most recent winner.
    async fn recent_winner(&self) -> Result<Address, Error>;

    /// Submits an entry transaction carrying `value` wei.
    async fn enter(&self, value: U256) -> Result<Self::Ticket, Error>;
}

/// A submitted but not yet confirmed entry transaction.
#[async_trait]
pub trait EntryTicket: Send {
    /// Suspends until the transaction has the requested number of
    /// confirmations, returning its hash.
    async fn confirmed(self, confirmations: u64) -> Result<TxHash, Error>;
}

/// A raffle contract deployed on an Ethereum-compatible chain, reached
/// through an alloy provider.
pub struct OnChainRaffle {
    instance: Raffle::RaffleInstance<DynProvider>,
}

impl OnChainRaffle {
    /// Binds the contract at `address` to the given provider.
    pub fn new(provider: DynProvider, address: Address) -> Self {
        Self {
            instance: Raffle::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl RaffleContract for OnChainRaffle {
    type Ticket = PendingEntry;

    async fn entrance_fee(&self) -> Result<U256, Error> {
        Ok(self.instance.getEntranceFee().call().await?)
    }

    async fn number_of_players(&self) -> Result<U256, Error> {
        Ok(self.instance.getNumberOfPlayers().call().await?)
    }

    async fn recent_winner(&self) -> Result<Address, Error> {
        Ok(self.instance.getRecentWinner().call().await?)
    }

    async fn enter(&self, value: U256) -> Result<PendingEntry, Error> {
        let pending = self.instance.enterRaffle().value(value).send().await?;
        Ok(PendingEntry(pending))
    }
}

/// [`EntryTicket`] implementation backed by the provider's transaction
/// watcher.
pub struct PendingEntry(PendingTransactionBuilder<Ethereum>);

#[async_trait]
impl EntryTicket for PendingEntry {
    async fn confirmed(self, confirmations: u64) -> Result<TxHash, Error> {
        Ok(self
            .0
            .with_required_confirmations(confirmations)
            .watch()
            .await?)
    }
}
