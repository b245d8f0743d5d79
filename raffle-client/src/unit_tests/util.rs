// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! Scripted stand-ins for the contract and the notification widget.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{
    contract::{EntryTicket, RaffleContract},
    notification::{Notification, NotificationSink},
    view::RaffleView,
    Error,
};

/// Shared journal of observable events, in the order they happened.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn record(journal: &Journal, event: impl Into<String>) {
    journal.lock().unwrap().push(event.into());
}

pub fn events(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

pub fn count(journal: &Journal, event: &str) -> usize {
    journal
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| *entry == event)
        .count()
}

/// One scripted reply, optionally gated on a oneshot so a test can control
/// in which order overlapping calls resolve.
pub struct Reply<T> {
    value: Result<T, Error>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> Reply<T> {
    pub fn now(value: T) -> Self {
        Reply {
            value: Ok(value),
            gate: None,
        }
    }

    pub fn gated(value: T) -> (Self, oneshot::Sender<()>) {
        let (sender, receiver) = oneshot::channel();
        let reply = Reply {
            value: Ok(value),
            gate: Some(receiver),
        };
        (reply, sender)
    }

    pub fn failing(message: &str) -> Self {
        Reply {
            value: Err(Error::Rejected(message.to_string())),
            gate: None,
        }
    }
}

async fn scripted<T: Send>(
    queue: &Mutex<VecDeque<Reply<T>>>,
    default: T,
) -> Result<T, Error> {
    let reply = queue.lock().unwrap().pop_front();
    match reply {
        None => Ok(default),
        Some(Reply { value, gate }) => {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            value
        }
    }
}

/// A raffle contract whose replies are scripted per call. Unscripted calls
/// resolve immediately with the defaults.
pub struct MockRaffle {
    journal: Journal,
    pub default_fee: U256,
    pub default_players: U256,
    pub default_winner: Address,
    fee: Mutex<VecDeque<Reply<U256>>>,
    winner: Mutex<VecDeque<Reply<Address>>>,
    players: Mutex<VecDeque<Reply<U256>>>,
    entries: Mutex<VecDeque<Reply<MockTicket>>>,
}

impl MockRaffle {
    pub fn new(journal: Journal) -> Self {
        MockRaffle {
            journal,
            default_fee: U256::from(100_000_000_000_000_000_u64),
            default_players: U256::from(3),
            default_winner: Address::repeat_byte(0xAB),
            fee: Mutex::new(VecDeque::new()),
            winner: Mutex::new(VecDeque::new()),
            players: Mutex::new(VecDeque::new()),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_fee(&self, reply: Reply<U256>) {
        self.fee.lock().unwrap().push_back(reply);
    }

    pub fn push_players(&self, reply: Reply<U256>) {
        self.players.lock().unwrap().push_back(reply);
    }

    pub fn push_entry(&self, reply: Reply<MockTicket>) {
        self.entries.lock().unwrap().push_back(reply);
    }

    pub fn ticket(&self) -> MockTicket {
        MockTicket {
            journal: self.journal.clone(),
            result: Ok(TxHash::ZERO),
            gate: None,
        }
    }
}

#[async_trait]
impl RaffleContract for MockRaffle {
    type Ticket = MockTicket;

    async fn entrance_fee(&self) -> Result<U256, Error> {
        record(&self.journal, "fee");
        scripted(&self.fee, self.default_fee).await
    }

    async fn number_of_players(&self) -> Result<U256, Error> {
        record(&self.journal, "players");
        scripted(&self.players, self.default_players).await
    }

    async fn recent_winner(&self) -> Result<Address, Error> {
        record(&self.journal, "winner");
        scripted(&self.winner, self.default_winner).await
    }

    async fn enter(&self, value: U256) -> Result<MockTicket, Error> {
        record(&self.journal, format!("enter({value})"));
        scripted(&self.entries, self.ticket()).await
    }
}

/// A submitted mock entry.
pub struct MockTicket {
    journal: Journal,
    result: Result<TxHash, Error>,
    gate: Option<oneshot::Receiver<()>>,
}

#[async_trait]
impl EntryTicket for MockTicket {
    async fn confirmed(self, confirmations: u64) -> Result<TxHash, Error> {
        if let Some(gate) = self.gate {
            let _ = gate.await;
        }
        record(&self.journal, format!("confirmed({confirmations})"));
        self.result
    }
}

/// Records dispatched notifications instead of displaying them.
pub struct RecordingSink {
    journal: Journal,
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new(journal: Journal) -> Self {
        RecordingSink {
            journal,
            notifications: Mutex::new(Vec::new()),
        }
    }
}

impl NotificationSink for RecordingSink {
    fn dispatch(&self, notification: Notification) {
        record(&self.journal, "notify");
        self.notifications.lock().unwrap().push(notification);
    }
}

/// A mounted view wired to the given mocks.
pub async fn mounted_view(
    contract: Option<Arc<MockRaffle>>,
    sink: Arc<RecordingSink>,
) -> RaffleView<MockRaffle> {
    let view = RaffleView::new(sink);
    view.mount().await;
    view.bind_contract(contract).await;
    view
}
