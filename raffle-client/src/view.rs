// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! The raffle entrance view.
//!
//! The view keeps three display fields synchronized with on-chain state and
//! submits entry transactions. Remote calls go through the
//! [`RaffleContract`] seam, notifications through [`NotificationSink`], so
//! the whole flow runs without a provider in tests.

use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use alloy::primitives::{utils::format_ether, U256};
use async_lock::Mutex;
use tracing::{debug, warn};

use crate::{
    contract::{EntryTicket, RaffleContract},
    notification::{Notification, NotificationSink},
};

/// The three fields the view renders.
///
/// Each field is assigned independently as its read resolves. Overlapping
/// refresh cycles therefore interleave field by field, last write wins; the
/// view never guarantees a consistent snapshot across the three.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Entrance fee in wei, as a decimal string.
    pub entrance_fee: String,
    /// Number of players, as a decimal string.
    pub player_count: String,
    /// Address of the most recent winner.
    pub recent_winner: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState {
            entrance_fee: "0".to_string(),
            player_count: "0".to_string(),
            recent_winner: "0".to_string(),
        }
    }
}

/// Lifecycle of a view instance. The view is long-lived for the session;
/// there is no terminal phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    AwaitingConnectivity,
    Synced,
    Submitting,
    AwaitingConfirmation,
}

/// Whether the entry button accepts clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Ready,
    /// A read or a submission is in flight; the button is disabled and
    /// shows a progress affordance.
    Busy,
}

/// What the view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// No contract is deployed on the connected chain.
    MissingAddress,
    /// The interactive entrance form.
    Entrance {
        button: ButtonState,
        /// Entrance fee scaled to ether (18 decimals, trailing zeros
        /// trimmed).
        entrance_fee_eth: String,
        player_count: String,
        recent_winner: String,
    },
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::MissingAddress => write!(f, "No Raffle Address Detected"),
            Screen::Entrance {
                button,
                entrance_fee_eth,
                player_count,
                recent_winner,
            } => {
                let label = match button {
                    ButtonState::Ready => "[ Enter Raffle ]",
                    ButtonState::Busy => "[ ... ]",
                };
                writeln!(f, "{label}")?;
                writeln!(f, "Entrance Fee: {entrance_fee_eth} ETH")?;
                writeln!(f, "Players: {player_count}")?;
                write!(f, "Recent Winner: {recent_winner}")
            }
        }
    }
}

/// Formats a wei amount as ether, trimming trailing fractional zeros but
/// keeping at least one fractional digit: `100000000000000000` renders as
/// `0.1`, `0` as `0.0`.
pub fn display_ether(wei: U256) -> String {
    let raw = format_ether(wei);
    match raw.split_once('.') {
        None => raw,
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
    }
}

/// Decrements the in-flight counter when a call settles, whichever way it
/// settles.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        InFlightGuard(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// The raffle entrance view.
pub struct RaffleView<C> {
    contract: Mutex<Option<Arc<C>>>,
    notifier: Arc<dyn NotificationSink>,
    display: Mutex<DisplayState>,
    phase: Mutex<Phase>,
    in_flight: AtomicUsize,
    web3_seen_enabled: AtomicBool,
}

impl<C: RaffleContract> RaffleView<C> {
    /// Creates an unmounted view with zeroed display state and no contract
    /// bound.
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        RaffleView {
            contract: Mutex::new(None),
            notifier,
            display: Mutex::new(DisplayState::default()),
            phase: Mutex::new(Phase::Uninitialized),
            in_flight: AtomicUsize::new(0),
            web3_seen_enabled: AtomicBool::new(false),
        }
    }

    /// Mounts the view: it now awaits a connectivity transition.
    pub async fn mount(&self) {
        *self.phase.lock().await = Phase::AwaitingConnectivity;
    }

    /// Binds the contract resolved for the connected chain, or `None` when
    /// the chain has no deployment.
    pub async fn bind_contract(&self, contract: Option<Arc<C>>) {
        *self.contract.lock().await = contract;
    }

    /// Reports the current connectivity level.
    ///
    /// Edge-triggered: a refresh fires once per disabled-to-enabled
    /// transition, not on every report while enabled.
    pub async fn handle_connectivity(&self, is_enabled: bool) {
        let was_enabled = self.web3_seen_enabled.swap(is_enabled, Ordering::AcqRel);
        if is_enabled && !was_enabled {
            self.update_ui().await;
        }
    }

    /// Refreshes the three display fields from the contract.
    ///
    /// Each field is assigned as soon as its read resolves. A failed read
    /// is logged and aborts the remainder of the cycle without touching
    /// further fields; nothing is surfaced to the user. Overlapping cycles
    /// are neither deduplicated nor cancelled.
    pub async fn update_ui(&self) {
        let Some(contract) = self.contract.lock().await.clone() else {
            return;
        };
        let _guard = InFlightGuard::enter(&self.in_flight);
        match contract.entrance_fee().await {
            Ok(fee) => self.display.lock().await.entrance_fee = fee.to_string(),
            Err(error) => {
                warn!(%error, "failed to read entrance fee");
                return;
            }
        }
        match contract.recent_winner().await {
            Ok(winner) => self.display.lock().await.recent_winner = winner.to_string(),
            Err(error) => {
                warn!(%error, "failed to read recent winner");
                return;
            }
        }
        match contract.number_of_players().await {
            Ok(players) => self.display.lock().await.player_count = players.to_string(),
            Err(error) => {
                warn!(%error, "failed to read number of players");
                return;
            }
        }
        *self.phase.lock().await = Phase::Synced;
    }

    /// Handles a click on the entry button.
    ///
    /// A no-op while no contract is bound or any call is in flight (the
    /// button is disabled in that state). On acceptance the view awaits one
    /// confirmation, dispatches the completion toast, and refreshes. On
    /// rejection the view logs, changes nothing, and the button becomes
    /// interactive again.
    pub async fn enter_raffle(&self) {
        let Some(contract) = self.contract.lock().await.clone() else {
            return;
        };
        if self.in_flight.load(Ordering::Acquire) > 0 {
            debug!("entry ignored: a call is already in flight");
            return;
        }
        let _guard = InFlightGuard::enter(&self.in_flight);
        *self.phase.lock().await = Phase::Submitting;
        let fee = self.display.lock().await.entrance_fee.clone();
        let value = match U256::from_str(&fee) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, %fee, "displayed entrance fee is not an amount");
                *self.phase.lock().await = Phase::Synced;
                return;
            }
        };
        match contract.enter(value).await {
            Ok(ticket) => {
                *self.phase.lock().await = Phase::AwaitingConfirmation;
                match ticket.confirmed(1).await {
                    Ok(tx_hash) => {
                        debug!(%tx_hash, "entry confirmed");
                        self.notifier
                            .dispatch(Notification::transaction_complete());
                        self.update_ui().await;
                    }
                    Err(error) => {
                        warn!(%error, "confirmation wait failed");
                    }
                }
                *self.phase.lock().await = Phase::Synced;
            }
            Err(error) => {
                warn!(%error, "entry submission rejected");
                *self.phase.lock().await = Phase::Synced;
            }
        }
    }

    /// Renders the current screen.
    pub async fn render(&self) -> Screen {
        if self.contract.lock().await.is_none() {
            return Screen::MissingAddress;
        }
        let display = self.display.lock().await.clone();
        let button = if self.in_flight.load(Ordering::Acquire) > 0 {
            ButtonState::Busy
        } else {
            ButtonState::Ready
        };
        let fee_wei = U256::from_str(&display.entrance_fee).unwrap_or(U256::ZERO);
        Screen::Entrance {
            button,
            entrance_fee_eth: display_ether(fee_wei),
            player_count: display.player_count,
            recent_winner: display.recent_winner,
        }
    }

    /// A copy of the display fields.
    pub async fn display(&self) -> DisplayState {
        self.display.lock().await.clone()
    }

    pub async fn phase(&self) -> Phase {
        *self.phase.lock().await
    }

    /// Whether a read or submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }
}
